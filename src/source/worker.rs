//! Fetch worker
//!
//! Runs suggestion fetches off the UI thread. Requests arrive over a channel
//! and each one becomes its own blocking task, so responses come back in
//! completion order, not request order. The UI side polls with `try_recv`.

use std::sync::Arc;
use std::thread;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tokio_util::sync::CancellationToken;

use super::{SourceError, SuggestionSource};
use crate::autocomplete::{FetchRequest, FetchResponse};
use crate::error::AutotextError;

pub struct FetchWorker {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: UnboundedReceiver<FetchResponse>,
    shutdown: CancellationToken,
}

impl FetchWorker {
    /// Spawn the worker thread for `source`
    pub fn spawn(source: Arc<dyn SuggestionSource>) -> Result<Self, AutotextError> {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let token = shutdown.clone();
        thread::Builder::new()
            .name("autotext-fetch".to_string())
            .spawn(move || {
                runtime.block_on(worker_loop(source, request_rx, response_tx, token));
            })?;

        Ok(Self {
            request_tx,
            response_rx,
            shutdown,
        })
    }

    pub fn dispatch(&self, request: FetchRequest) -> Result<(), AutotextError> {
        self.request_tx
            .send(request)
            .map_err(|_| AutotextError::WorkerUnavailable)
    }

    /// Next finished fetch, if one is waiting
    pub fn try_recv(&mut self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Fetch worker disconnected");
                None
            }
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Main worker loop - spawns one task per request until shutdown or channel close
async fn worker_loop(
    source: Arc<dyn SuggestionSource>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: UnboundedSender<FetchResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else { break };
                tokio::spawn(handle_request(
                    Arc::clone(&source),
                    request,
                    response_tx.clone(),
                ));
            }
        }
    }

    log::debug!("Fetch worker shutting down");
}

async fn handle_request(
    source: Arc<dyn SuggestionSource>,
    request: FetchRequest,
    response_tx: UnboundedSender<FetchResponse>,
) {
    let FetchRequest { query, generation } = request;
    let result = match tokio::task::spawn_blocking(move || source.fetch(&query)).await {
        Ok(result) => result,
        Err(e) => Err(SourceError::Failed(e.to_string())),
    };

    // UI side gone: nothing to deliver to
    let _ = response_tx.send(FetchResponse { generation, result });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
