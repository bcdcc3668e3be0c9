// SPDX-License-Identifier: AGPL-3.0-or-later

//! Curated tag taxonomy: main tags, recommended tags and the tree of sub tags used with them.
mod store;
mod tree_node;

pub use store::TagStore;
pub use tree_node::TagTreeNode;
