//! Domain layer containing the core contracts of the service.
//!
//! # Architecture
//!
//! - [`token`] - Signed link token codec (JWT, HS256)
//! - [`counter`] - Counter store trait and error types
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation layers
//! - The [`counter::CounterStore`] trait defines the contract implemented by
//!   the infrastructure layer
//! - The codec and the store know nothing about each other; they are composed
//!   by the application services and handlers

pub mod counter;
pub mod token;
