// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::Object;

use crate::graphql::tags::Tags;

#[derive(Default, Debug, Copy, Clone)]
pub struct TagsRoot;

#[Object]
impl TagsRoot {
    /// Containing mainTags and tagTree.
    async fn tags(&self) -> Tags {
        Tags
    }
}
