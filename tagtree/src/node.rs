// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Result;
use log::{error, info, warn};
use tokio::task::{self, JoinHandle};
use triggered::{Listener, Trigger};

use crate::config::Configuration;
use crate::context::Context;
use crate::http::http_service;
use crate::tags::TagStore;

/// Wrapper around `Trigger` which sends a signal as soon as `Signal` gets dropped.
struct Signal(Trigger);

impl Drop for Signal {
    fn drop(&mut self) {
        // Fires also when the service task panicked
        self.0.trigger();
    }
}

/// Main runtime managing the node process.
#[allow(missing_debug_implementations)]
pub struct Node {
    shutdown_signal: Trigger,
    exit_handle: Listener,
    handle: JoinHandle<()>,
}

impl Node {
    /// Start node with your configuration. This method can be used to run the node within other
    /// applications.
    pub async fn start(config: Configuration) -> Result<Self> {
        let store = TagStore::new(
            config.main_tags.clone(),
            config.recommended_tags.clone(),
            config.tag_tree.clone(),
        )?;

        let context = Context::new(store, config);

        let (shutdown_signal, shutdown_handle) = triggered::trigger();
        let (exit_signal, exit_handle) = triggered::trigger();

        // Start HTTP server with GraphQL API
        let handle = task::spawn(async move {
            let _exit_signal = Signal(exit_signal);
            info!("Start http service");

            if let Err(err) = http_service(context, shutdown_handle).await {
                error!("Error in http service: {}", err);
            }
        });

        Ok(Self {
            shutdown_signal,
            exit_handle,
            handle,
        })
    }

    /// This future resolves when the HTTP service stopped.
    ///
    /// It can be used to exit the application as a stopped service usually means that something
    /// went wrong.
    pub async fn on_exit(&self) {
        self.exit_handle.clone().await;
    }

    /// Close the HTTP service and wait until it is fully shut down.
    pub async fn shutdown(self) {
        info!("Received shutdown signal");
        self.shutdown_signal.trigger();

        if self.handle.await.is_err() {
            warn!("HTTP service did not shut down cleanly");
        }
    }
}
