// SPDX-License-Identifier: AGPL-3.0-or-later

mod config;
mod utils;

use std::convert::TryInto;

use anyhow::Context;
use log::warn;
use tagtree::{Configuration, Node};

use crate::config::{load_config, print_config};
use crate::utils::log_filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from command line arguments, environment variables and .toml file
    let (config_file_path, config_file) = load_config().context("Could not load configuration")?;

    // Set log verbosity based on config. By default scope it always to the "tagtree" module.
    env_logger::Builder::new()
        .parse_filters(&log_filter(&config_file.log_level))
        .init();

    // Convert configuration into the format tagtree accepts
    let config: Configuration = config_file
        .try_into()
        .context("Could not convert configuration")?;

    // Start node in async runtime
    let node = Node::start(config.clone())
        .await
        .context("Could not start node")?;

    // Show configuration info to the user
    println!("{}", print_config(config_file_path, &config));

    // Run this until [CTRL] + [C] got pressed or something went wrong
    tokio::select! {
        _ = tokio::signal::ctrl_c() => (),
        _ = node.on_exit() => {
            warn!("HTTP service stopped unexpectedly");
        },
    }

    // Wait until all tasks are gracefully shut down and exit
    node.shutdown().await;

    Ok(())
}
