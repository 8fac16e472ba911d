//! Frequency-domain post-processing of persisted point set images.
//!
//! [`ExpectedSpectrum`] averages the DFT magnitude of every trial image of a variant
//! into one normalized grayscale image with DC in the centre. [`CommandAnalysis`]
//! hands the same job to an external program instead.
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};
use std::path::Path;
use std::process::Command;

use best_candidate::prelude::{lerp, numbered_path, Error, Result, SpectrumAnalysis};
use image::{GrayImage, Luma};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    fn from_angle(angle: f64) -> Self {
        Self {
            re: angle.cos(),
            im: angle.sin(),
        }
    }

    fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

/// In-place iterative radix-2 FFT. `buf.len()` must be a power of two.
fn fft_in_place(buf: &mut [Complex]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            buf.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let step = Complex::from_angle(-2.0 * PI / len as f64);
        let half = len / 2;
        for start in (0..n).step_by(len) {
            let mut w = Complex::ONE;
            for k in 0..half {
                let u = buf[start + k];
                let v = buf[start + k + half] * w;
                buf[start + k] = u + v;
                buf[start + k + half] = u - v;
                w = w * step;
            }
        }
        len <<= 1;
    }
}

/// Direct O(n^2) DFT for lengths that are not a power of two.
fn dft(input: &[Complex]) -> Vec<Complex> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Complex::ZERO, |acc, (t, &x)| {
                    let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
                    acc + x * Complex::from_angle(angle)
                })
        })
        .collect()
}

fn transform(buf: &mut [Complex]) {
    if buf.len().is_power_of_two() {
        fft_in_place(buf);
    } else {
        let out = dft(buf);
        buf.copy_from_slice(&out);
    }
}

/// 2D DFT of a row-major `width x height` grid.
fn dft_2d(values: &[f64], width: usize, height: usize) -> Vec<Complex> {
    let mut grid: Vec<Complex> = values.iter().map(|&v| Complex::real(v)).collect();

    for row in grid.chunks_mut(width) {
        transform(row);
    }

    let mut column = vec![Complex::ZERO; height];
    for x in 0..width {
        for (y, c) in column.iter_mut().enumerate() {
            *c = grid[y * width + x];
        }
        transform(&mut column);
        for (y, c) in column.iter().enumerate() {
            grid[y * width + x] = *c;
        }
    }

    grid
}

/// DFT magnitude of an image scaled to `[0, 1]`, DC zeroed and shifted to the centre.
pub fn magnitude_spectrum(img: &GrayImage) -> Vec<f64> {
    let (w, h) = img.dimensions();
    let (width, height) = (w as usize, h as usize);
    let values: Vec<f64> = img.pixels().map(|p| p.0[0] as f64 / 255.0).collect();

    let mut magnitude: Vec<f64> = dft_2d(&values, width, height)
        .into_iter()
        .map(Complex::norm)
        .collect();
    if let Some(dc) = magnitude.first_mut() {
        *dc = 0.0;
    }

    let mut shifted = vec![0.0; magnitude.len()];
    for y in 0..height {
        for x in 0..width {
            let sy = (y + height / 2) % height;
            let sx = (x + width / 2) % width;
            shifted[sy * width + sx] = magnitude[y * width + x];
        }
    }
    shifted
}

/// Stretches values to `[0, 1]`; flat input is left untouched.
fn normalize(values: &mut [f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return;
    }
    for v in values.iter_mut() {
        *v = (*v - min) / (max - min);
    }
}

/// Averages the magnitude spectra of all trial images of a variant.
#[derive(Debug, Clone, Default)]
pub struct ExpectedSpectrum;

impl ExpectedSpectrum {
    pub fn new() -> Self {
        Self
    }
}

impl SpectrumAnalysis for ExpectedSpectrum {
    fn analyze(&mut self, input_prefix: &Path, trial_count: usize, output: &Path) -> Result<()> {
        if trial_count == 0 {
            return Err(Error::Analysis("no input images".into()));
        }

        let mut average: Vec<f64> = Vec::new();
        let mut dimensions = (0u32, 0u32);

        for index in 0..trial_count {
            let path = numbered_path(input_prefix, index);
            let img = image::open(&path)
                .map_err(|e| Error::Analysis(format!("reading '{}': {e}", path.display())))?
                .into_luma8();

            let spectrum = magnitude_spectrum(&img);
            if index == 0 {
                dimensions = img.dimensions();
                average = spectrum;
                continue;
            }
            if img.dimensions() != dimensions {
                return Err(Error::Analysis(format!(
                    "'{}' is {:?}, expected {:?}",
                    path.display(),
                    img.dimensions(),
                    dimensions
                )));
            }

            let alpha = 1.0 / (index + 1) as f64;
            for (avg, value) in average.iter_mut().zip(spectrum) {
                *avg = lerp(*avg, value, alpha);
            }
            debug!(image = %path.display(), "accumulated spectrum");
        }

        normalize(&mut average);

        let (w, h) = dimensions;
        let out = GrayImage::from_fn(w, h, |x, y| {
            let v = average[(y * w + x) as usize].clamp(0.0, 1.0);
            Luma([(v * 255.0) as u8])
        });
        out.save(output)
            .map_err(|e| Error::Analysis(format!("writing '{}': {e}", output.display())))
    }
}

/// Runs `<program> <args..> <input_prefix> <trial_count> <output>`.
#[derive(Debug, Clone)]
pub struct CommandAnalysis {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandAnalysis {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }
}

impl SpectrumAnalysis for CommandAnalysis {
    fn analyze(&mut self, input_prefix: &Path, trial_count: usize, output: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(input_prefix)
            .arg(trial_count.to_string())
            .arg(output)
            .status()?;

        if !status.success() {
            return Err(Error::Analysis(format!(
                "'{}' exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}
