//! Notification inbox for foreman.
//!
//! This module owns the append-only store of per-user messages written by
//! the directory and task lifecycle services. State-changing operations
//! produce pure [`domain::NotificationDraft`] effects; the
//! [`services::NotificationDispatcher`] materialises drafts into inbox
//! records so transition logic stays testable without a sink. The module
//! follows hexagonal architecture:
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
