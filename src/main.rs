#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod settings;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*, settings::SettingsStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut store = SettingsStore::open(args.settings_path)?;
    args.command.run(&mut store).await?;

    info!("done!");
    Ok(())
}
