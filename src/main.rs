// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::io;
use std::path::PathBuf;

use pdf_digest::config::{load_and_validate_config, load_dataset, Config, RuntimeBuilder};
use pdf_digest::errors::PipelineError;
use pdf_digest::observability::init_tracing;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.yaml|config.toml] [dataset.json]", program);
    eprintln!();
    eprintln!("Without a config file the built-in defaults are used and the");
    eprintln!("dataset is read from ./dataset.json. A dataset argument overrides");
    eprintln!("the config's `dataset` path. Set RUST_LOG to adjust logging.");
    eprintln!();
    eprintln!("Text extraction defaults to `extractor: simulated`, which stands in");
    eprintln!("fixed sample text for every fetched document. Set `extractor: plain_text`");
    eprintln!("in the config to decode fetched bodies as UTF-8 text instead.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pdf-digest");

    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        print_usage(program);
        return Ok(());
    }
    if args.len() > 3 {
        print_usage(program);
        anyhow::bail!("expected at most two arguments, got {}", args.len() - 1);
    }

    let mut config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => Config::default(),
    };
    if let Some(dataset) = args.get(2) {
        config.dataset = PathBuf::from(dataset);
    }

    // Store initialization failure aborts before any work is dispatched.
    let coordinator = RuntimeBuilder::from_config(&config).await?;

    let dataset = load_dataset(&config.dataset);
    let run = coordinator.run(&dataset).await;

    // The report goes out even when the read-back failed.
    run.write_report(&mut io::stdout().lock())?;
    run.records.map_err(PipelineError::Store)?;
    Ok(())
}
