//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::counter::CounterStore;
use crate::domain::token::TokenCodec;

/// Handles shared by every request.
///
/// Built once at startup and passed by axum state injection; there are no
/// ambient globals. The codec is immutable and the store handle is
/// thread-safe, so no further synchronization is needed across requests.
#[derive(Clone)]
pub struct AppState {
    pub codec: Arc<TokenCodec>,
    pub store: Arc<dyn CounterStore>,
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires the services around the codec and store handles.
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn CounterStore>) -> Self {
        let link_service = Arc::new(LinkService::new(codec.clone()));
        let stats_service = Arc::new(StatsService::new(store.clone()));

        Self {
            codec,
            store,
            link_service,
            stats_service,
        }
    }
}
