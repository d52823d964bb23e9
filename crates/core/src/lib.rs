//! # pc-core
//!
//! Progress state store for progress-canvas.
//!
//! This crate provides:
//! - Decoding of input chunks into updates
//! - The progress state and its shallow-merge rule
//! - Clock abstraction and elapsed-time computation
//! - Panel configuration and validation
//!
//! ## Modules
//!
//! - [`config`]: Panel settings
//! - [`state`]: Progress state and store
//! - [`update`]: Input chunk decoding
//! - [`clock`]: Time sources and elapsed time
//! - [`error`]: Update decoding errors

pub mod clock;
pub mod config;
pub mod error;
pub mod state;
pub mod update;

pub use clock::{Clock, Elapsed, ManualClock, SystemClock};
pub use error::UpdateError;
pub use state::{ProgressState, ProgressStore, Status};
pub use update::StateUpdate;
