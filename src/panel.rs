//! The async resource panel — one request lifecycle, four views.
//!
//! DESIGN
//! ======
//! Each panel owns exactly one request lifecycle. State lives in a
//! `tokio::sync::watch` channel so observers see every transition, and
//! every load is stamped with a mount-epoch token: starting a new load
//! (or unmounting) bumps the epoch, so a stale task's result is
//! discarded before it can touch state. At most one in-flight request's
//! result ever wins. Epoch bumps and settle publishes both happen under
//! the channel lock, so the two can never interleave.
//!
//! ERROR HANDLING
//! ==============
//! A load settles into `RequestState::Error` carrying the typed
//! [`crate::PanelError`]; nothing escapes the panel boundary. Unmounting
//! during Loading freezes the state — zero mutations are observable
//! afterward.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use uuid::Uuid;

use crate::fetch::{Endpoint, Fetcher};
use crate::state::RequestState;

/// One of the four mutually exclusive rendered views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<V> {
    /// Nothing requested yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Payload rendered through the caller's render function.
    Ready(V),
    /// Human-readable failure message for inline display.
    Failed(String),
}

/// Fetches one resource from one endpoint and deterministically renders
/// loading, error, or populated states.
pub struct AsyncResourcePanel<T, V> {
    id: Uuid,
    fetcher: Fetcher,
    endpoint: Mutex<Endpoint>,
    render_fn: Arc<dyn Fn(&T) -> V + Send + Sync>,
    /// Mount-epoch token; only the task holding the current epoch may
    /// publish its result.
    epoch: Arc<AtomicU64>,
    state_tx: watch::Sender<RequestState<T>>,
    state_rx: watch::Receiver<RequestState<T>>,
}

impl<T, V> AsyncResourcePanel<T, V>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Create an idle panel. Nothing is fetched until [`Self::mount`].
    pub fn new(
        fetcher: Fetcher,
        endpoint: Endpoint,
        render_fn: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(RequestState::Idle);
        Self {
            id: Uuid::new_v4(),
            fetcher,
            endpoint: Mutex::new(endpoint),
            render_fn: Arc::new(render_fn),
            epoch: Arc::new(AtomicU64::new(0)),
            state_tx,
            state_rx,
        }
    }

    /// Transition Idle → Loading and issue the request.
    pub fn mount(&self) {
        self.start_load();
    }

    /// Dependency change: supersede any in-flight request and fetch the
    /// new endpoint.
    pub fn set_endpoint(&self, endpoint: Endpoint) {
        *self
            .endpoint
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = endpoint;
        self.start_load();
    }

    /// Manual retry: re-enter Loading for the current endpoint.
    pub fn retry(&self) {
        self.start_load();
    }

    /// Invalidate the current epoch. Any in-flight result is discarded;
    /// no state mutation is observable after this call returns.
    pub fn unmount(&self) {
        let epoch = Arc::clone(&self.epoch);
        self.state_tx.send_if_modified(|_| {
            epoch.fetch_add(1, Ordering::SeqCst);
            false
        });
        tracing::debug!(panel = %self.id, "unmounted");
    }

    /// Snapshot of the current request state.
    #[must_use]
    pub fn state(&self) -> RequestState<T> {
        self.state_rx.borrow().clone()
    }

    /// Watch receiver observing every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state_rx.clone()
    }

    /// Wait until the current load settles (Success or Error).
    pub async fn settled(&self) {
        let mut rx = self.state_rx.clone();
        let _ = rx.wait_for(RequestState::is_settled).await;
    }

    /// Map the current state to one of the four views. The payload view
    /// is produced by the render function supplied at construction.
    #[must_use]
    pub fn render(&self) -> PanelView<V> {
        match &*self.state_rx.borrow() {
            RequestState::Idle => PanelView::Idle,
            RequestState::Loading => PanelView::Loading,
            RequestState::Success(payload) => PanelView::Ready((self.render_fn)(payload)),
            RequestState::Error(err) => PanelView::Failed(err.to_string()),
        }
    }

    fn start_load(&self) {
        // Claim a fresh epoch and enter Loading in one locked step so a
        // stale settle cannot slip in between.
        let mut my_epoch = 0;
        self.state_tx.send_modify(|state| {
            my_epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            *state = RequestState::Loading;
        });

        let endpoint = self
            .endpoint
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        let fetcher = self.fetcher.clone();
        let epoch = Arc::clone(&self.epoch);
        let state_tx = self.state_tx.clone();
        let id = self.id;

        tracing::debug!(panel = %id, url = %endpoint.url, epoch = my_epoch, "load started");
        tokio::spawn(async move {
            let result = fetcher.fetch_json::<T>(&endpoint).await;
            if let Err(err) = &result {
                tracing::warn!(panel = %id, error = %err, "load failed");
            }
            let mut settled = Some(match result {
                Ok(payload) => RequestState::Success(payload),
                Err(err) => RequestState::Error(err),
            });
            let published = state_tx.send_if_modified(|state| {
                if epoch.load(Ordering::SeqCst) != my_epoch {
                    return false;
                }
                match settled.take() {
                    Some(next) => {
                        *state = next;
                        true
                    }
                    None => false,
                }
            });
            if published {
                tracing::debug!(panel = %id, epoch = my_epoch, "load settled");
            } else {
                tracing::debug!(panel = %id, epoch = my_epoch, "stale result discarded");
            }
        });
    }
}

impl<T, V> Drop for AsyncResourcePanel<T, V> {
    fn drop(&mut self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
