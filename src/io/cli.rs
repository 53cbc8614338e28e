//! Command-line interface for sampling phantom property sets

use crate::engine::PropertyEngine;
use crate::io::configuration::{DEFAULT_INSTANCES, DEFAULT_SEED, DEFAULT_WAVELENGTHS_NM};
use crate::io::error::{PropertyError, Result, invalid_argument};
use crate::io::progress::ProgressManager;
use crate::io::report::{write_header, write_instance};
use crate::tissue::category::{BreastDensity, ShapeMode};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "nbp-params")]
#[command(
    author,
    version,
    about = "Sample tissue and shape parameters for stochastic breast phantoms"
)]
/// Command-line arguments for the parameter sampler
pub struct Cli {
    /// Breast density category (A, B, C or D)
    #[arg(short = 't', long, default_value = "A")]
    pub breast_type: BreastDensity,

    /// Breast shape model (natural or hemisphere)
    #[arg(short = 's', long = "shape", default_value = "natural")]
    pub shape: ShapeMode,

    /// Random seed for reproducible sampling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of phantom instances to sample
    #[arg(short = 'n', long, default_value_t = DEFAULT_INSTANCES)]
    pub instances: usize,

    /// Wavelengths in nm at which scattering is reported, comma separated
    #[arg(short = 'w', long, value_delimiter = ',')]
    pub wavelengths: Vec<f64>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Requested wavelengths, or the defaults when none were given
    pub fn wavelengths_nm(&self) -> Vec<f64> {
        if self.wavelengths.is_empty() {
            DEFAULT_WAVELENGTHS_NM.to_vec()
        } else {
            self.wavelengths.clone()
        }
    }

    /// Seed of instance `index`
    ///
    /// Each instance has its own stream, so instance `i` is identical whether
    /// it is sampled alone or as part of a larger batch.
    pub const fn instance_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Samples the requested instances and writes the report
pub struct BatchSampler {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchSampler {
    /// Create a sampler for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.instances))
            .filter(ProgressManager::is_visible);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Sample every instance and write the report
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written, a wavelength is
    /// invalid, or sampling fails
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let wavelengths = self.cli.wavelengths_nm();
        if let Some(&bad) = wavelengths.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(invalid_argument(
                "wavelengths",
                &bad,
                &"must be positive and finite",
            ));
        }

        let engine = PropertyEngine::new()?;
        let mut writer = self.open_writer()?;
        write_header(&mut writer)?;

        log::info!(
            "sampling {} instance(s): breast type {}, {} shape, seed {}",
            self.cli.instances,
            self.cli.breast_type,
            self.cli.shape,
            self.cli.seed
        );

        for index in 0..self.cli.instances {
            let mut rng = StdRng::seed_from_u64(self.cli.instance_seed(index));
            let sample = engine.sample_instance(self.cli.breast_type, self.cli.shape, &mut rng)?;
            write_instance(&mut writer, index, &sample, &wavelengths)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_instance();
            }
        }

        writer.flush()?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "sampled {} instance(s) in {:.2?}",
            self.cli.instances,
            start_time.elapsed()
        );
        Ok(())
    }

    fn open_writer(&self) -> Result<Box<dyn Write>> {
        match self.cli.output {
            Some(ref path) => {
                let file = File::create(path).map_err(|source| PropertyError::Io {
                    operation: "create output file",
                    source,
                })?;
                log::debug!("writing report to {}", path.display());
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
        }
    }
}
