#![forbid(unsafe_code)]
//! Trial harness for `best_candidate`: PNG persistence, spectrum analysis, CLI and
//! console reporting.

pub mod cli;
mod compose;
mod rendering;
mod report;
mod spectrum;

pub use compose::{image_row, write_image_row, ROW_BACKGROUND, ROW_PADDING};
pub use rendering::{init_tracing, pixel_index, rasterize_points, PngPointSink};
pub use report::ConsoleReport;
pub use spectrum::{magnitude_spectrum, CommandAnalysis, ExpectedSpectrum};
