//! Progress state management.
//!
//! This module provides:
//! - The `ProgressState` record and its shallow-merge rule
//! - Lenient coercion of update values into typed fields
//! - `ProgressStore`, the handle the runtime passes around

pub mod coerce;
pub mod progress;
pub mod store;

pub use progress::{ProgressState, Status};
pub use store::ProgressStore;
