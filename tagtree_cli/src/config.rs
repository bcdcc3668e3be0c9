// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{crate_version, Parser};
use colored::Colorize;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::Serialize;
use tagtree::{ConfigFile, Configuration};

use crate::utils::absolute_path;

const CONFIG_FILE_NAME: &str = "config.toml";

type ConfigFilePath = Option<PathBuf>;

/// Get configuration from 1. .toml file, 2. environment variables and 3. command line arguments
/// (in that order, meaning that later configuration sources take precedence over the earlier
/// ones).
///
/// Returns a partly unchecked configuration object which results from all of these sources. It
/// still needs to be converted for tagtree as it might still contain invalid values.
pub fn load_config() -> Result<(ConfigFilePath, ConfigFile)> {
    // Parse command line arguments first to get optional config file path
    let cli = Cli::parse();

    // Determine if a config file path was provided or if we should look for it in common locations
    let config_file_path: ConfigFilePath = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }

            Some(path.clone())
        }
        None => try_determine_config_file_path(),
    };

    let config = figment(config_file_path.as_ref(), cli).extract()?;

    Ok((config_file_path, config))
}

/// Merges all configuration sources, later ones taking precedence.
fn figment(config_file_path: Option<&PathBuf>, cli: Cli) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(ConfigFile::default()));
    if let Some(path) = config_file_path {
        figment = figment.merge(Toml::file(path));
    }

    figment.merge(Env::raw()).merge(Serialized::defaults(cli))
}

/// Configuration derived from command line arguments.
///
/// All arguments are optional and don't get serialized to Figment when they're None. This is to
/// assure that default values do not overwrite all previous settings, especially when they haven't
/// been set.
#[derive(Parser, Serialize, Debug)]
#[command(
    name = "tagtree",
    about = "GraphQL node serving a curated tag taxonomy",
    long_about = None,
    version
)]
struct Cli {
    /// Path to an optional "config.toml" file for further configuration.
    ///
    /// When not set the program will try to find a `config.toml` file in the same folder the
    /// program is executed in and otherwise in the regarding operation systems XDG config
    /// directory ("$HOME/.config/tagtree/config.toml" on Linux).
    #[arg(short = 'c', long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<PathBuf>,

    /// HTTP port for client-node communication, serving the GraphQL API. Defaults to 2020.
    #[arg(short = 'p', long, value_name = "PORT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    http_port: Option<u16>,

    /// List of main tags, exposed in the given order. Separate multiple values with a
    /// whitespace.
    ///
    /// Every node of the tag tree is rooted in one of these tags. Sub tags can only be configured
    /// in the config file.
    #[arg(short = 'm', long, value_name = "TAG", num_args = 0..)]
    #[serde(skip_serializing_if = "Option::is_none")]
    main_tags: Option<Vec<String>>,

    /// List of recommended tags. Defaults to the main tags.
    #[arg(short = 'r', long, value_name = "TAG", num_args = 0..)]
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended_tags: Option<Vec<String>>,

    /// Set log verbosity. Use this for learning more about how your node behaves or for debugging.
    ///
    /// Possible log levels are: ERROR, WARN, INFO, DEBUG, TRACE. They are scoped to "tagtree" by
    /// default.
    ///
    /// If you want to adjust the scope for deeper inspection use a filter value, for example
    /// "=TRACE" for logging _everything_ or "tagtree=INFO,hyper=DEBUG" etc.
    #[arg(short = 'l', long, value_name = "LEVEL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

fn try_determine_config_file_path() -> Option<PathBuf> {
    // Find config file in current folder
    let mut current_dir = std::env::current_dir().ok()?;
    current_dir.push(CONFIG_FILE_NAME);

    let mut candidates = vec![current_dir];

    // Find config file in XDG config folder
    if let Some(project_dirs) = ProjectDirs::from("", "", "tagtree") {
        let mut xdg_config_dir = project_dirs.config_dir().to_path_buf();
        xdg_config_dir.push(CONFIG_FILE_NAME);
        candidates.push(xdg_config_dir);
    }

    candidates.into_iter().find(|path| path.exists())
}

fn list(tags: &[String]) -> String {
    if tags.is_empty() {
        "none".to_string()
    } else {
        tags.join(", ")
    }
}

pub fn print_config(config_file_path: ConfigFilePath, config: &Configuration) -> String {
    println!("{} v{}\n", "tagtree".underline(), crate_version!());

    match config_file_path {
        Some(path) => {
            println!(
                "Loading config file from {}",
                absolute_path(path).display().to_string().blue()
            );
        }
        None => {
            println!("No config file provided");
        }
    }

    println!();
    println!("{}\n", "Configuration".underline());

    let recommended_tags = if config.recommended_tags.is_empty() {
        "main tags".to_string()
    } else {
        list(&config.recommended_tags)
    };

    let sub_tags: usize = config.tag_tree.iter().map(|node| node.sub_tags.len()).sum();

    format!(
        r"HTTP port: {}
Main tags: {}
Recommended tags: {}
Sub tags: {}

Node is ready!
",
        config.http_port.to_string().blue(),
        list(&config.main_tags).blue(),
        recommended_tags.blue(),
        sub_tags.to_string().blue(),
    )
}
