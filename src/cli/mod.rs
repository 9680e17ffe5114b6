//! CLI module for the segmentation service
//!
//! - `serve`: train on the configured dataset, then serve HTTP (default)
//! - `predict`: train, classify one customer and print the result

pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Credit card customer segmentation with K-Means
#[derive(Parser)]
#[command(name = "cc-segmentation")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Train the model and serve the HTTP API (default)
    Serve,

    /// Train the model and classify a single customer
    Predict(predict::PredictArgs),
}
