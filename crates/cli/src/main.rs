//! # consideration
//!
//! Command-line interface for training and querying the Consideration
//! nearest-neighbor model offline.

use classifier::prelude::*;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "consideration")]
#[command(about = "Train and query the Consideration classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a model on a CSV dataset and save the artifact
    Train {
        /// Dataset CSV with x, y, z and Consideration columns
        #[arg(short, long)]
        input: PathBuf,

        /// Artifact file to write
        #[arg(short, long, default_value = "data/model.json")]
        output: PathBuf,

        /// Number of neighbors that vote
        #[arg(short, long, default_value = "1")]
        k: usize,
    },

    /// Label one sample with a saved model
    Predict {
        /// Artifact file to load
        #[arg(short, long, default_value = "data/model.json")]
        model: PathBuf,

        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,

        #[arg(short, long, allow_hyphen_values = true)]
        y: f64,

        #[arg(short, long, allow_hyphen_values = true)]
        z: f64,

        /// Print the API response body instead of the bare label
        #[arg(long)]
        json: bool,
    },

    /// Summarize a saved model
    Inspect {
        /// Artifact file to load
        #[arg(short, long, default_value = "data/model.json")]
        model: PathBuf,
    },
}

fn train_model(input: &Path, output: &Path, k: usize) -> CliResult<NearestNeighbors> {
    let training = load_training_set(input).map_err(|e| e.to_string())?;

    let mut model = NearestNeighbors::new(k).map_err(|e| e.to_string())?;
    model.fit(&training).map_err(|e| e.to_string())?;

    ModelArtifact::from_model(&model)
        .and_then(|artifact| artifact.save(output))
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    Ok(model)
}

fn run_train(input: PathBuf, output: PathBuf, k: usize) -> CliResult<()> {
    let model = train_model(&input, &output, k)?;

    println!("Loaded {} samples from {}", model.n_samples(), input.display());
    if let Some(label) = model.labels().first() {
        println!("Example label: {}", label);
    }
    println!("Model trained (k={}) and saved as {}", model.k(), output.display());
    Ok(())
}

fn load_store(path: &Path) -> CliResult<ModelStore> {
    ModelStore::load(path).map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

fn run_predict(model: PathBuf, x: f64, y: f64, z: f64, json: bool) -> CliResult<()> {
    let store = load_store(&model)?;
    let label = store
        .classify(&Sample::new(x, y, z))
        .map_err(|e| e.to_string())?;

    if json {
        println!("{}", serde_json::json!({ "consideration": [label] }));
    } else {
        println!("{}", label);
    }
    Ok(())
}

fn run_inspect(model: PathBuf) -> CliResult<()> {
    let store = load_store(&model)?;

    println!("Model:   {}", model.display());
    println!("k:       {}", store.k());
    println!("Samples: {}", store.n_samples());
    println!("Labels ({}):", store.labels().len());
    for label in store.labels() {
        println!("  {}", label);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train { input, output, k } => run_train(input, output, k),
        Commands::Predict {
            model,
            x,
            y,
            z,
            json,
        } => run_predict(model, x, y, z, json),
        Commands::Inspect { model } => run_inspect(model),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
