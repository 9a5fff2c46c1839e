//! Data-access core of an anonymous whistleblower reporting portal.
//!
//! Reporters submit free-text reports and receive a generated
//! (identifier, password) pair which is the only way to retrieve the
//! report later. Administrators, managed by a single super-admin, respond
//! through threaded comments and move reports between statuses; their
//! actions are recorded in an append-only activity log. All state lives
//! in three JSON collections behind the [`store::Store`] capability.

pub mod config;
pub mod db;
pub mod store;
pub mod token;

pub use config::Config;
