// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::graphql::RootSchema;

#[derive(Clone)]
pub struct HttpServiceContext {
    /// GraphQL schema executing incoming queries.
    pub schema: RootSchema,
}

impl HttpServiceContext {
    pub fn new(schema: RootSchema) -> Self {
        Self { schema }
    }
}
