//! best-candidate-trials
//!
//! Generates repeated best-candidate and early-exit point sets, reports their
//! distance-evaluation cost and writes averaged spectra.
//!
//! ```bash
//! best-candidate-trials --points 1000 --trials 100 --out-dir out
//! RUST_LOG=info best-candidate-trials --seed 7 --analyzer none
//! ```
use std::process::ExitCode;

use anyhow::Context;
use best_candidate::prelude::{summary_path, FnSink, TrialRunner};
use best_candidate_trials::cli::Cli;
use best_candidate_trials::{init_tracing, write_image_row, ConsoleReport, PngPointSink};
use clap::Parser;
use tracing::warn;

const ROW_FILE_NAME: &str = "BC.png";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runner = TrialRunner::try_new(cli.trial_config()).context("invalid trial configuration")?;
    let out_dir = &runner.config.output_dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory '{}'", out_dir.display()))?;

    let mut analysis = cli
        .analyzer()
        .context("--analyzer-command must name a program")?;
    let mut sink = PngPointSink::new(runner.config.image_size);

    let report = ConsoleReport::new(analysis.is_enabled());
    let quiet = cli.quiet;
    let mut events = FnSink::new(|event| {
        if quiet {
            return;
        }
        if let Err(e) = report.emit(&event, &mut std::io::stdout().lock()) {
            warn!("Writing progress to stdout failed: {}", e);
        }
    });

    let comparison = runner.run_comparison(&mut sink, analysis.as_mut(), &mut events)?;

    if analysis.is_enabled() {
        let inputs = [
            summary_path(out_dir, &comparison.baseline.label),
            summary_path(out_dir, &comparison.early_exit.label),
        ];
        let output = out_dir.join(ROW_FILE_NAME);
        write_image_row(&[inputs[0].as_path(), inputs[1].as_path()], &output)
            .with_context(|| format!("writing '{}'", output.display()))?;
        if !quiet {
            println!("side by side: {}", output.display());
        }
    }
    Ok(())
}
