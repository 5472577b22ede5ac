//! Track Harness CLI
//!
//! Composes a provider chain from a file and fires events through it.

mod cli;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use serde_json::json;

use cli::{Cli, Commands};
use track_core::{FieldMap, OptionMap, ProviderChain};
use track_harness::{EventButton, HarnessError, Result, delivery, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(verbose = cli.verbose, "Logging initialised");

    match cli.command {
        Commands::Fire {
            chain,
            events,
            fields,
            options,
        } => cmd_fire(&chain, &events, fields.into_iter().collect(), options.into_iter().collect()),
        Commands::Show { chain, all } => cmd_show(&chain, all),
    }
}

fn load_chain(path: &Path) -> Result<ProviderChain> {
    if !path.is_file() {
        return Err(HarnessError::user(format!(
            "chain file not found: {}",
            path.display()
        )));
    }
    Ok(ProviderChain::load(path)?)
}

fn cmd_fire(path: &Path, events: &[String], fields: FieldMap, options: OptionMap) -> Result<()> {
    let chain = load_chain(path)?;
    let context = chain.compose(Some(delivery::stdout_trigger()));
    tracing::info!(providers = chain.len(), events = events.len(), "Firing events");

    for event in events {
        EventButton::new(event.as_str())
            .with_fields(fields.clone())
            .with_options(options.clone())
            .click(&context)?;
    }
    Ok(())
}

fn cmd_show(path: &Path, all: bool) -> Result<()> {
    let chain = load_chain(path)?;
    let contexts = chain.contexts(None);
    let levels: Vec<_> = contexts
        .iter()
        .map(|ctx| json!({ "has_provider": ctx.has_provider, "data": &*ctx.data }))
        .collect();

    let output = if all {
        serde_json::Value::Array(levels)
    } else {
        match levels.into_iter().last() {
            Some(level) => level,
            None => {
                let root = chain.compose(None);
                json!({ "has_provider": root.has_provider, "data": &*root.data })
            }
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
