//! Run configuration for the digits classifier.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Hyperparameters for one training-and-evaluation run.
///
/// The defaults mirror the classic run: one hidden layer of 20 nodes,
/// learning rate 0.005, 20000 iterations, 80% of the samples used for
/// training. Every field can come from a JSON config file, and the
/// command line can override each one individually.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Hidden layer widths, input side first.
    pub hidden: Vec<usize>,
    /// Gradient descent learning rate.
    pub learning_rate: f64,
    /// Number of full-batch training iterations.
    pub iterations: usize,
    /// Fraction of samples used for training; the rest is held out for
    /// evaluation.
    pub train_ratio: f64,
    /// Seed for weight initialization; random when absent.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            hidden: vec![20],
            learning_rate: 0.005,
            iterations: 20_000,
            train_ratio: 0.8,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<RunConfig> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the value ranges. Layer widths themselves are validated
    /// later, when the topology is built.
    pub fn validate(&self) -> io::Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(invalid_value("learning_rate must be finite and non-negative"));
        }
        if self.iterations == 0 {
            return Err(invalid_value("iterations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(invalid_value("train_ratio must lie in [0, 1]"));
        }
        Ok(())
    }
}

fn invalid_value(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
