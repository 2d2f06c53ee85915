//! Task lifecycle management for foreman.
//!
//! This module owns task records and enforces the lifecycle
//! `pending -> in-progress -> completed -> verified`: tasks are assigned to
//! an explicit user set or a role, workers claim completion through a
//! verification request, and an admin approval is the only path to the
//! `verified` state. Every transition emits notification drafts as a side
//! effect. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
