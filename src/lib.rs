//! Foreman: task assignment and verification core.
//!
//! This crate provides the core functionality for assigning work items to
//! individuals or roles, tracking their progress through a fixed lifecycle,
//! and gating completion behind an admin-reviewed verification step, with
//! notifications fired at each transition.
//!
//! # Architecture
//!
//! Foreman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`directory`]: User accounts, roles, and admin-gated onboarding
//! - [`task`]: Task lifecycle, assignment resolution, and verification
//! - [`notification`]: Per-user notification inbox and dispatch

pub mod directory;
pub mod notification;
pub mod task;
