// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::graphql::pagination::{SliceInfo, SliceQuery};
use crate::graphql::scalars::Time;
use crate::graphql::tags::TagsRoot;
use crate::tags::TagStore;

/// All of the graphql query sub modules merged into one top level root.
#[derive(MergedObject, Debug, Default, Copy, Clone)]
#[graphql(name = "Query")]
pub struct QueryRoot(pub TagsRoot);

/// GraphQL schema for the tag taxonomy.
pub type RootSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the root graphql schema that can handle graphql requests.
///
/// Pagination types and the `Time` scalar are not referenced by any query yet, they get
/// registered explicitly so the exported SDL contains every shared type.
pub fn build_root_schema(store: TagStore) -> RootSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .register_output_type::<SliceInfo>()
        .register_input_type::<SliceQuery>()
        .register_output_type::<Time>()
        .data(store)
        .finish()
}
