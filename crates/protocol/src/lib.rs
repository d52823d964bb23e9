//! # pc-protocol
//!
//! Data model for progress-canvas updates.
//!
//! This crate defines the shapes exchanged between a running pipeline and the
//! panel that displays it:
//! - Milestone, step and status values
//! - The recognised top-level update keys
//! - A typed update document for producers
//!
//! ## Modules
//!
//! - [`progress_models`]: Milestone, step and status types
//! - [`update_models`]: Update keys and the typed update document
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, chrono and ts-rs
//! - TypeScript generation: All wire types derive `TS` so a TypeScript
//!   pipeline can share the schema
//! - Independent compilation: No dependencies on other progress-canvas crates

pub mod progress_models;
pub mod update_models;

// Re-export all public types for convenience
pub use progress_models::*;
pub use update_models::*;
