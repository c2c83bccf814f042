#![forbid(unsafe_code)]

//! Core domain model and business logic for the FitPlan system.
//!
//! This crate provides:
//! - Domain types (fitness plans, levels, user profiles)
//! - Plan catalog
//! - Registration validation
//! - Plan matching and weekly-time scheduling
//! - User registry persistence

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod security;
pub mod validate;
pub mod registry;
pub mod matcher;
pub mod schedule;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use security::hash_password;
pub use registry::UserRegistry;
pub use matcher::match_plans;
pub use schedule::weekly_exercise_time;
