// SPDX-License-Identifier: AGPL-3.0-or-later

//! # tagtree
//!
//! GraphQL node exposing a manually curated tag taxonomy together with generic, cursor-based
//! pagination types. The static SDL fragments describing the API live in
//! [`graphql::fragments`], the executable schema serving them is built by
//! [`graphql::build_root_schema`].
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod api;
mod config;
mod context;
pub mod errors;
pub mod graphql;
mod http;
mod node;
pub mod tags;

#[cfg(test)]
mod test_helpers;

pub use crate::api::ConfigFile;
pub use crate::config::Configuration;
pub use node::Node;
