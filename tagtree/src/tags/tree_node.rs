// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// One level of the tag hierarchy: a main tag and all sub tags used together with it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTreeNode {
    /// One of the configured main tags.
    pub main_tag: String,

    /// Sub tags in lexicographical order.
    #[serde(default)]
    pub sub_tags: Vec<String>,
}

impl TagTreeNode {
    pub fn new(main_tag: &str, sub_tags: &[&str]) -> Self {
        Self {
            main_tag: main_tag.to_owned(),
            sub_tags: sub_tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    /// Returns true if the main tag contains the lowercased query.
    pub(crate) fn main_tag_matches(&self, query: &str) -> bool {
        self.main_tag.to_lowercase().contains(query)
    }

    /// Reduces the node to sub tags containing the lowercased query.
    pub(crate) fn retain_matching(&mut self, query: &str) {
        self.sub_tags
            .retain(|sub_tag| sub_tag.to_lowercase().contains(query));
    }
}
