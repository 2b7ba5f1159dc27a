#![allow(dead_code)]

use std::sync::Arc;

use eventlink::domain::token::TokenCodec;
use eventlink::infrastructure::store::MemoryCounterStore;
use eventlink::state::AppState;

pub const TEST_SIGNING_KEY: &str = "test-signing-key";

/// Builds an `AppState` backed by an in-memory counter store.
///
/// Returns the store handle alongside so tests can seed and inspect counts.
pub fn create_test_state() -> (AppState, Arc<MemoryCounterStore>) {
    let codec = Arc::new(TokenCodec::new(TEST_SIGNING_KEY));
    let store = Arc::new(MemoryCounterStore::new());
    let state = AppState::new(codec, store.clone());

    (state, store)
}

/// Codec matching the state built by [`create_test_state`].
pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TEST_SIGNING_KEY)
}

/// Extracts the token from a produced redirect link.
pub fn token_of(link: &str) -> &str {
    link.split("?event=").nth(1).unwrap()
}
