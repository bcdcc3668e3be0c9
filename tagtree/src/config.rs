// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::tags::TagTreeNode;

/// Default HTTP port serving the GraphQL API.
pub const DEFAULT_HTTP_PORT: u16 = 2020;

/// Configuration object holding all important variables throughout the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// HTTP port, serving the GraphQL API (for example hosted under
    /// http://localhost:2020/graphql). Defaults to 2020.
    pub http_port: u16,

    /// Manually curated main tags, exposed in this order.
    ///
    /// Every node of the tag tree is rooted in one of these tags.
    pub main_tags: Vec<String>,

    /// Manually picked recommended tags. The main tags are recommended when this is empty.
    pub recommended_tags: Vec<String>,

    /// Sub tags known when the node starts.
    pub tag_tree: Vec<TagTreeNode>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            main_tags: Vec::new(),
            recommended_tags: Vec::new(),
            tag_tree: Vec::new(),
        }
    }
}
