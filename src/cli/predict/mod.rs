//! Predict command - classify a single customer from the command line

use std::sync::Arc;

use clap::Args;

use crate::api::types::PredictClusterResponse;
use crate::config::{AppConfig, LoggingConfig};
use crate::domain::CustomerRecord;
use crate::infrastructure::dataset::CsvDatasetSource;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Account balance
    #[arg(long)]
    pub balance: f64,

    /// Purchases amount
    #[arg(long)]
    pub purchases: f64,

    /// Credit limit
    #[arg(long)]
    pub credit_limit: f64,

    /// Training CSV, overriding the configured model.data_path
    #[arg(long)]
    pub data: Option<String>,
}

impl From<&PredictArgs> for CustomerRecord {
    fn from(args: &PredictArgs) -> Self {
        Self::new(args.balance, args.purchases, args.credit_limit)
    }
}

/// Train on the dataset and print the prediction as JSON
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();

    // Keep stdout readable for the JSON result
    logging::init_logging(&LoggingConfig {
        level: "warn".to_string(),
        format: config.logging.format.clone(),
    });

    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.model.data_path.clone());

    let store = crate::train_model(Arc::new(CsvDatasetSource::new(data_path))).await?;
    let prediction = store.predict(&CustomerRecord::from(&args))?;

    let response = PredictClusterResponse::from(prediction);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
