//! Trains a multi-layer perceptron on a hand-drawn digits dataset and
//! reports its classification accuracy on a held-out split.
//!
//! Usage: digit-nn <data-file> [--hidden 20] [--eta 0.005] [--iterations 20000]

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use digit_nn::data::digits::SAMPLE_WIDTH;
use digit_nn::{
    accuracy, flatten_outputs, load_digits, train_network, train_network_with_costs, write_costs,
    Network, RunConfig, Sgd, Topology,
};

#[derive(Parser, Debug)]
#[command(version, about = "Train a neural network on hand-drawn digits")]
struct Args {
    /// Path to the digits data file
    data: PathBuf,

    /// JSON config file; individual flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hidden layer widths, comma separated
    #[arg(long, value_delimiter = ',')]
    hidden: Option<Vec<usize>>,

    /// Learning rate
    #[arg(long)]
    eta: Option<f64>,

    /// Number of full-batch training iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Fraction of samples used for training; the rest is held out
    #[arg(long)]
    train_ratio: Option<f64>,

    /// Seed for reproducible weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Write per-iteration training costs to this .dat file
    #[arg(long)]
    costs: Option<PathBuf>,
}

impl Args {
    /// Resolves the run parameters: defaults, overridden by the config
    /// file, overridden by individual flags.
    fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("could not load config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(hidden) = &self.hidden {
            config.hidden = hidden.clone();
        }
        if let Some(eta) = self.eta {
            config.learning_rate = eta;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(train_ratio) = self.train_ratio {
            config.train_ratio = train_ratio;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate().context("invalid run parameters")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.resolve_config()?;

    println!("\n*** NEURAL NETWORK training DIGITS ***\n");
    println!("Configuration:");
    println!(" - Hidden layers           : {:?}", config.hidden);
    println!(" - Number of iterations    : {}", config.iterations);
    println!(" - Learning rate           : {}", config.learning_rate);
    println!(" - Train / test ratio      : {}", config.train_ratio);
    match config.seed {
        Some(seed) => println!(" - Seed                    : {}", seed),
        None => println!(" - Seed                    : (from entropy)"),
    }
    println!();

    println!("Loading digit dataset \"{}\"...", args.data.display());
    let file = File::open(&args.data)
        .with_context(|| format!("could not open file {}", args.data.display()))?;
    let dataset = load_digits(BufReader::new(file))
        .with_context(|| format!("could not parse {}", args.data.display()))?;
    println!("Done loading (loaded {} samples)\n", dataset.len());

    println!("Training network...");
    println!("  Splitting test and train sets...");
    let (train, test) = dataset.split(config.train_ratio);
    println!(
        "    {} training samples, {} testing samples",
        train.len(),
        test.len()
    );
    if train.is_empty() {
        bail!("the training split is empty; raise --train-ratio or provide more samples");
    }

    println!("  Initializing Neural Network...");
    let topology = Topology::new(SAMPLE_WIDTH, config.hidden.clone(), dataset.n_classes)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network = Network::new(&topology, &mut rng);

    println!("  Training...");
    let optimizer = Sgd::new(config.learning_rate);
    let start = Instant::now();
    match &args.costs {
        Some(path) => {
            let costs = train_network_with_costs(
                &mut network,
                train.inputs,
                train.targets,
                &optimizer,
                config.iterations,
            )?;
            println!("  Time taken: {:.6} seconds", start.elapsed().as_secs_f64());
            println!("  Writing costs...");
            write_costs(path, &costs)
                .with_context(|| format!("could not write costs to {}", path.display()))?;
        }
        None => {
            train_network(
                &mut network,
                train.inputs,
                train.targets,
                &optimizer,
                config.iterations,
            )?;
            println!("  Time taken: {:.6} seconds", start.elapsed().as_secs_f64());
        }
    }
    println!();

    if test.is_empty() {
        warn!("no testing samples held out; skipping validation");
        println!("Done.\n");
        return Ok(());
    }

    println!("Validating network...");
    let mut outputs = network.forward_batch(test.inputs)?;
    flatten_outputs(&mut outputs);
    let acc = accuracy(&outputs, test.targets);
    println!("  Network accuracy: {:.6}\n", acc);

    println!("Done.\n");
    Ok(())
}
