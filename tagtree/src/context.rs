// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ops::Deref;
use std::sync::Arc;

use crate::config::Configuration;
use crate::tags::TagStore;

/// Inner data shared across all services.
#[derive(Debug)]
pub struct Data {
    /// Node configuration.
    pub config: Configuration,

    /// Tag taxonomy.
    pub store: TagStore,
}

/// Data shared across all services.
#[derive(Debug, Clone)]
pub struct Context(pub Arc<Data>);

impl Context {
    /// Returns a new instance of `Context`.
    pub fn new(store: TagStore, config: Configuration) -> Self {
        Self(Arc::new(Data { config, store }))
    }
}

impl Deref for Context {
    type Target = Data;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
