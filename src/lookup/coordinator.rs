//! Fetch coordination
//!
//! Each search gets a fresh epoch and `CancellationToken`. Starting a new
//! search cancels the previous token, so at most one request is ever live.
//! The spawned task races the lookup against its token and checks it again
//! before delivering; the coordinator only applies an outcome whose epoch
//! matches the live request.

use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::LookupService;
use super::normalize::normalize_payload;
use crate::candidate::Candidate;
use crate::error::LookupError;

/// Result of a lookup task, tagged with the epoch that issued it
#[derive(Debug)]
struct FetchOutcome {
    epoch: u64,
    result: Result<Value, LookupError>,
}

/// A live request
#[derive(Debug)]
struct InFlight {
    epoch: u64,
    query: String,
    token: CancellationToken,
}

/// What the live request produced, ready to apply to the suggestion list
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// Normalized candidates, possibly empty
    Loaded(Vec<Candidate>),
    /// Any failure other than cancellation
    Failed(LookupError),
}

pub struct FetchCoordinator {
    service: Arc<dyn LookupService>,
    runtime: Handle,
    results_field: String,
    /// Epoch of the most recently issued request
    epoch: u64,
    in_flight: Option<InFlight>,
    loading: bool,
    requests_issued: u64,
    outcome_tx: UnboundedSender<FetchOutcome>,
    outcome_rx: UnboundedReceiver<FetchOutcome>,
}

impl FetchCoordinator {
    pub fn new(
        service: Arc<dyn LookupService>,
        runtime: Handle,
        results_field: impl Into<String>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            service,
            runtime,
            results_field: results_field.into(),
            epoch: 0,
            in_flight: None,
            loading: false,
            requests_issued: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Start a lookup for `query`, superseding any live request
    ///
    /// Returns the epoch of the new request.
    pub fn search(&mut self, query: &str) -> u64 {
        if let Some(previous) = self.in_flight.take() {
            previous.token.cancel();
            log::debug!(
                "Superseded lookup {} ({:?}) with {:?}",
                previous.epoch,
                previous.query,
                query
            );
        }

        self.epoch = self.epoch.wrapping_add(1);
        self.requests_issued += 1;
        self.loading = true;

        let epoch = self.epoch;
        let token = CancellationToken::new();
        let lookup = self.service.lookup(query);
        let tx = self.outcome_tx.clone();
        let task_token = token.clone();

        self.runtime.spawn(async move {
            let result = tokio::select! {
                biased;
                _ = task_token.cancelled() => Err(LookupError::Cancelled),
                result = lookup => result,
            };

            if task_token.is_cancelled() {
                log::debug!("Lookup {} cancelled, dropping its result", epoch);
                return;
            }

            // Receiver only goes away with the coordinator itself
            let _ = tx.send(FetchOutcome { epoch, result });
        });

        self.in_flight = Some(InFlight {
            epoch,
            query: query.to_string(),
            token,
        });

        log::debug!("Started lookup {} for {:?}", epoch, query);
        epoch
    }

    /// Invalidate the live request without starting another
    ///
    /// Loading is cleared since no successor takes it over. Returns true if a
    /// request was live.
    pub fn cancel(&mut self) -> bool {
        self.loading = false;
        match self.in_flight.take() {
            Some(live) => {
                live.token.cancel();
                log::debug!("Cancelled lookup {} ({:?})", live.epoch, live.query);
                true
            }
            None => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Query of the live request, if any
    pub fn in_flight_query(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|live| live.query.as_str())
    }

    pub fn current_epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of lookups issued since creation
    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    /// Take the live request's outcome if it has arrived, without waiting
    pub fn try_next_event(&mut self) -> Option<FetchEvent> {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if let Some(event) = self.resolve(outcome) {
                return Some(event);
            }
        }
        None
    }

    /// Wait for the live request's outcome
    ///
    /// Returns None immediately when nothing is in flight, or when the live
    /// request ends without anything to apply. Never returns for a request
    /// that hangs; hosts race this against their own events.
    pub async fn next_event(&mut self) -> Option<FetchEvent> {
        while self.in_flight.is_some() {
            let outcome = self.outcome_rx.recv().await?;
            if let Some(event) = self.resolve(outcome) {
                return Some(event);
            }
        }
        None
    }

    fn resolve(&mut self, outcome: FetchOutcome) -> Option<FetchEvent> {
        let live = match &self.in_flight {
            Some(live) if live.epoch == outcome.epoch && !live.token.is_cancelled() => live,
            _ => {
                log::debug!("Discarding stale lookup {}", outcome.epoch);
                return None;
            }
        };
        let query = live.query.clone();
        self.in_flight = None;
        self.loading = false;

        match outcome.result {
            Ok(payload) => {
                let candidates = normalize_payload(&payload, &self.results_field);
                log::debug!(
                    "Lookup {} for {:?} returned {} candidates",
                    outcome.epoch,
                    query,
                    candidates.len()
                );
                Some(FetchEvent::Loaded(candidates))
            }
            Err(e) if e.is_cancelled() => {
                log::debug!("Lookup {} for {:?} was cancelled by the service", outcome.epoch, query);
                None
            }
            Err(e) => Some(FetchEvent::Failed(e)),
        }
    }
}

impl Drop for FetchCoordinator {
    fn drop(&mut self) {
        if let Some(live) = self.in_flight.take() {
            live.token.cancel();
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
