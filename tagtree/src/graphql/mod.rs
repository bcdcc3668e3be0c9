// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod fragments;
pub mod pagination;
pub mod scalars;
mod schema;
pub mod tags;

pub use schema::{build_root_schema, QueryRoot, RootSchema};
