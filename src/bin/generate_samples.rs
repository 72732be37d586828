//! Writes a demo filter-response stream to stdout, one value per line:
//! a noisy unit step passed through a single-pole DC removal filter.
//!
//! `generate_samples | filter-plot - "DC filter" 50`

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "generate_samples")]
#[command(about = "Emit a demo DC-filter step response, one sample per line", long_about = None)]
struct Cli {
    /// Number of samples to write
    #[arg(long, default_value_t = 400)]
    count: usize,

    /// Filter pole; closer to 1.0 moves the cutoff closer to DC
    #[arg(long, default_value_t = 0.95)]
    alpha: f64,

    /// Standard deviation of the noise added to the input
    #[arg(long, default_value_t = 0.01)]
    noise: f64,

    /// Sample index where the input steps from 0 to 1
    #[arg(long, default_value_t = 40)]
    step_at: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Single-pole IIR DC blocker: `y[n] = x[n] - x[n-1] + alpha * y[n-1]`.
struct DcFilter {
    alpha: f64,
    prev_input: f64,
    prev_output: f64,
}

impl DcFilter {
    fn new(alpha: f64) -> Self {
        Self {
            alpha,
            prev_input: 0.0,
            prev_output: 0.0,
        }
    }

    fn process(&mut self, input: f64) -> f64 {
        let output = (input - self.prev_input) + self.alpha * self.prev_output;
        self.prev_input = input;
        self.prev_output = output;
        output
    }
}

/// Gaussian noise from a SplitMix64 stream, deterministic per seed.
struct Noise {
    state: u64,
    std_dev: f64,
}

impl Noise {
    fn new(seed: u64, std_dev: f64) -> Self {
        Self {
            state: seed,
            std_dev,
        }
    }

    /// Uniform value in `(0, 1]`.
    fn unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        ((z >> 11) + 1) as f64 / (1u64 << 53) as f64
    }

    /// One Box-Muller draw scaled by `std_dev`.
    fn sample(&mut self) -> f64 {
        if self.std_dev == 0.0 {
            return 0.0;
        }
        let radius = (-2.0 * self.unit().ln()).sqrt();
        let angle = std::f64::consts::TAU * self.unit();
        self.std_dev * radius * angle.cos()
    }
}

fn step_response(cli: &Cli) -> Vec<f64> {
    let mut noise = Noise::new(cli.seed, cli.noise);
    let mut filter = DcFilter::new(cli.alpha);
    (0..cli.count)
        .map(|n| {
            let step = if n >= cli.step_at { 1.0 } else { 0.0 };
            filter.process(step + noise.sample())
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for value in step_response(&cli) {
        writeln!(out, "{value}").context("writing sample")?;
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("generate_samples").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn dc_filter_passes_a_step_then_decays() {
        let mut filter = DcFilter::new(0.5);
        assert_eq!(filter.process(1.0), 1.0);
        assert_eq!(filter.process(1.0), 0.5);
        assert_eq!(filter.process(1.0), 0.25);
    }

    #[test]
    fn noiseless_response_is_zero_before_the_step() {
        let out = step_response(&cli(&["--count", "10", "--noise", "0", "--step-at", "5"]));
        assert_eq!(out.len(), 10);
        assert!(out[..5].iter().all(|&v| v == 0.0));
        assert_eq!(out[5], 1.0);
        assert!(out[6] < out[5] && out[6] > 0.0);
    }

    #[test]
    fn noise_stays_finite_and_centred() {
        let mut noise = Noise::new(1, 1.0);
        let draws: Vec<f64> = (0..2000).map(|_| noise.sample()).collect();
        assert!(draws.iter().all(|v| v.is_finite()));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.1, "mean {mean}");
    }

    #[test]
    fn same_seed_gives_the_same_stream() {
        let a = step_response(&cli(&["--count", "50"]));
        let b = step_response(&cli(&["--count", "50"]));
        let c = step_response(&cli(&["--count", "50", "--seed", "7"]));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
