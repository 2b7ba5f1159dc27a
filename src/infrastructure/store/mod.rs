//! Counter store implementations.
//!
//! Provides the [`crate::domain::counter::CounterStore`] implementations:
//! - [`RedisCounterStore`] - Production Redis-backed store
//! - [`MemoryCounterStore`] - In-process store for tests/development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryCounterStore;
pub use redis_store::RedisCounterStore;
