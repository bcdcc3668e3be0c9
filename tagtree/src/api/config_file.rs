// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_HTTP_PORT;
use crate::tags::{TagStore, TagTreeNode};
use crate::Configuration;

const DEFAULT_LOG_LEVEL: &str = "off";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}

/// Node configuration which can be de/serialized from a config file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Set log verbosity. Use this for learning more about how your node behaves or for debugging.
    ///
    /// Possible log levels are: ERROR, WARN, INFO, DEBUG, TRACE. They are scoped to "tagtree" by
    /// default.
    ///
    /// If you want to adjust the scope for deeper inspection use a filter value, for example
    /// "=TRACE" for logging _everything_ or "tagtree=INFO,hyper=DEBUG" etc.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP port for client-node communication, serving the GraphQL API. Defaults to 2020.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Main tags are predefined manually. Every tag tree node is rooted in one of them.
    #[serde(default)]
    pub main_tags: Vec<String>,

    /// Recommended tags are picked manually. Defaults to the main tags when empty.
    #[serde(default)]
    pub recommended_tags: Vec<String>,

    /// Sub tags known when the node starts, grouped by their main tag.
    #[serde(default)]
    pub tag_tree: Vec<TagTreeNode>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            http_port: default_http_port(),
            main_tags: Vec::new(),
            recommended_tags: Vec::new(),
            tag_tree: Vec::new(),
        }
    }
}

impl TryFrom<ConfigFile> for Configuration {
    type Error = anyhow::Error;

    fn try_from(value: ConfigFile) -> Result<Self, Self::Error> {
        // Build a throwaway store to run the same checks the node applies on start
        TagStore::new(
            value.main_tags.clone(),
            value.recommended_tags.clone(),
            value.tag_tree.clone(),
        )
        .map_err(|err| anyhow!("Invalid tag configuration: {}", err))?;

        Ok(Configuration {
            http_port: value.http_port,
            main_tags: value.main_tags,
            recommended_tags: value.recommended_tags,
            tag_tree: value.tag_tree,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryInto;

    use crate::tags::TagTreeNode;
    use crate::Configuration;

    use super::ConfigFile;

    #[test]
    fn defaults() {
        let config: Configuration = ConfigFile::default().try_into().unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn convert_tags() {
        let config_file = ConfigFile {
            main_tags: vec!["Music".into(), "Games".into()],
            recommended_tags: vec!["Games".into()],
            tag_tree: vec![TagTreeNode::new("Music", &["Jazz"])],
            ..ConfigFile::default()
        };

        let config: Configuration = config_file.try_into().unwrap();
        assert_eq!(config.main_tags, vec!["Music", "Games"]);
        assert_eq!(config.recommended_tags, vec!["Games"]);
        assert_eq!(config.tag_tree, vec![TagTreeNode::new("Music", &["Jazz"])]);
    }

    #[test]
    fn reject_tree_with_unknown_main_tag() {
        let config_file = ConfigFile {
            main_tags: vec!["Music".into()],
            tag_tree: vec![TagTreeNode::new("Games", &["Puzzle"])],
            ..ConfigFile::default()
        };

        let result: Result<Configuration, _> = config_file.try_into();
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid tag configuration: 'Games' is not a main tag"
        );
    }
}
