//! Entity data hooks.
//!
//! A mounted [`Resource`] owns a background task that fetches its collection
//! immediately, again on every refresh-bus change and on every
//! [`Resource::refetch`]. Each fetch replaces the whole collection. Unmounting
//! cancels the task; a fetch in flight at that moment is dropped and its
//! result is never published.

use crate::RefreshBus;

use am_store::StoreErrorResult;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::{Notify, watch};
use tokio_util::sync::CancellationToken;

/// Fetches one remote collection
#[async_trait]
pub trait EntityLoader: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn load(&self) -> StoreErrorResult<Vec<Self::Item>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bus tick observed when the most recently finished fetch started
    pub tick: Option<u64>,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            tick: None,
        }
    }
}

pub struct Resource<T> {
    name: &'static str,
    state: watch::Receiver<LoadState<T>>,
    refetch: Arc<Notify>,
    cancel: CancellationToken,
}

impl<T: Clone + Send + Sync + 'static> Resource<T> {
    /// Spawn the hook task and start the first fetch
    pub fn mount<L>(loader: L, bus: &RefreshBus) -> Self
    where
        L: EntityLoader<Item = T>,
    {
        let name = loader.name();
        let (tx, rx) = watch::channel(LoadState::default());
        let refetch = Arc::new(Notify::new());
        let cancel = CancellationToken::new();

        tokio::spawn(run_hook(
            loader,
            bus.subscribe(),
            tx,
            refetch.clone(),
            cancel.clone(),
        ));
        debug!("Mounted {name} resource");

        Self {
            name,
            state: rx,
            refetch,
            cancel,
        }
    }

    /// Fetch again without a bus change
    pub fn refetch(&self) {
        self.refetch.notify_one();
    }

    pub fn snapshot(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// Wait until a fetch that started at or after `tick` has finished.
    ///
    /// Returns the current state immediately once the resource is unmounted.
    pub async fn settled_after(&self, tick: u64) -> LoadState<T> {
        let mut rx = self.state.clone();
        let settled = rx
            .wait_for(|s| s.tick.is_some_and(|t| t >= tick))
            .await
            .map(|s| s.clone());

        match settled {
            Ok(state) => state,
            Err(_) => rx.borrow().clone(),
        }
    }

    pub fn unmount(&self) {
        if !self.cancel.is_cancelled() {
            debug!("Unmounting {} resource", self.name);
            self.cancel.cancel();
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

impl<T> Drop for Resource<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_hook<L: EntityLoader>(
    loader: L,
    mut bus: watch::Receiver<u64>,
    state: watch::Sender<LoadState<L::Item>>,
    refetch: Arc<Notify>,
    cancel: CancellationToken,
) {
    let mut bus_open = true;

    loop {
        let tick = *bus.borrow_and_update();
        state.send_modify(|s| s.loading = true);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            result = loader.load() => result,
        };

        if cancel.is_cancelled() {
            break;
        }

        state.send_modify(|s| {
            match result {
                Ok(items) => {
                    s.items = items;
                    s.error = None;
                }
                Err(e) => {
                    warn!("Loading {} failed: {e}", loader.name());
                    s.items.clear();
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
            s.tick = Some(s.tick.map_or(tick, |t| t.max(tick)));
        });

        // Park until the next reason to fetch
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                _ = refetch.notified() => break,
                changed = bus.changed(), if bus_open => match changed {
                    Ok(()) => break,
                    Err(_) => bus_open = false,
                },
            }
        }
    }

    debug!("{} resource task stopped", loader.name());
}
