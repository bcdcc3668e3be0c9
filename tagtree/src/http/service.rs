// SPDX-License-Identifier: AGPL-3.0-or-later

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use axum::extract::Extension;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use http::header::CONTENT_TYPE;
use log::debug;
use tower_http::cors::{Any, CorsLayer};
use triggered::Listener;

use crate::context::Context;
use crate::graphql::build_root_schema;
use crate::http::api::{handle_graphql_playground, handle_graphql_query, handle_schema_fragments};
use crate::http::context::HttpServiceContext;

/// Route to the GraphQL playground
const GRAPHQL_ROUTE: &str = "/graphql";

/// Route to the assembled SDL fragments
const SCHEMA_ROUTE: &str = "/schema.graphql";

/// Build HTTP server with GraphQL API.
pub fn build_server(http_context: HttpServiceContext) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(false)
        .allow_origin(Any);

    Router::new()
        // Add GraphQL routes
        .route(
            GRAPHQL_ROUTE,
            get(|| handle_graphql_playground(GRAPHQL_ROUTE)).post(handle_graphql_query),
        )
        .route(SCHEMA_ROUTE, get(handle_schema_fragments))
        // Add middlewares
        .layer(cors)
        // Add shared context
        .layer(Extension(http_context))
}

/// Start HTTP server, serving until the shutdown signal fires.
pub async fn http_service(context: Context, signal: Listener) -> Result<()> {
    let http_port = context.config.http_port;
    let http_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), http_port);

    // Introduce a new context for all HTTP routes
    let http_context = HttpServiceContext::new(build_root_schema(context.store.clone()));

    axum::Server::try_bind(&http_address)?
        .serve(build_server(http_context).into_make_service())
        .with_graceful_shutdown(async {
            debug!("HTTP service is ready on port {}", http_port);
            signal.await;
        })
        .await?;

    Ok(())
}
