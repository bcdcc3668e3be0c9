// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{Context, Object, Result, SimpleObject};
use log::debug;

use crate::tags::{TagStore, TagTreeNode};

/// Tags offered to clients for categorizing content.
#[derive(Default, Debug, Copy, Clone)]
pub struct Tags;

#[Object]
impl Tags {
    /// Main tags are predefined manually.
    async fn main_tags(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let store = ctx.data::<TagStore>()?;
        Ok(store.main_tags())
    }

    /// Recommended tags are picked manually.
    async fn recommended(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let store = ctx.data::<TagStore>()?;
        Ok(store.recommended())
    }

    /// Tag tree, optionally filtered by a query string. Null when nothing matches.
    async fn tree(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> Result<Option<Vec<TagTreeNodeResponse>>> {
        let store = ctx.data::<TagStore>()?;
        let query = query.unwrap_or_default();

        let nodes = store.tree(&query).await;
        debug!("Found {} tag tree nodes for query '{}'", nodes.len(), query);

        if nodes.is_empty() {
            return Ok(None);
        }

        Ok(Some(nodes.into_iter().map(Into::into).collect()))
    }
}

/// A main tag and the sub tags used together with it.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "TagTreeNode")]
pub struct TagTreeNodeResponse {
    pub main_tag: String,

    /// Null when no sub tags were used with this main tag yet.
    pub sub_tags: Option<Vec<String>>,
}

impl From<TagTreeNode> for TagTreeNodeResponse {
    fn from(node: TagTreeNode) -> Self {
        let sub_tags = if node.sub_tags.is_empty() {
            None
        } else {
            Some(node.sub_tags)
        };

        Self {
            main_tag: node.main_tag,
            sub_tags,
        }
    }
}
