//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - session: Interactive pricing session
//! - quote: One-shot quote from flags
//! - catalog: List fields and multipliers
//! - config: Configuration display and validation

pub mod catalog;
pub mod config;
pub mod quote;
pub mod session;
