//! User directory for foreman.
//!
//! This module owns accounts, roles, and approval status: registration
//! lands in a pending queue, an admin approves or rejects each account,
//! and only approved users may authenticate or be resolved into role
//! assignments. The module follows hexagonal architecture:
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
