// SPDX-License-Identifier: AGPL-3.0-or-later

//! GraphQL API to browse the tag taxonomy.
mod query;
mod response;

pub use query::TagsRoot;
pub use response::{Tags, TagTreeNodeResponse};
