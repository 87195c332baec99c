//! Use-case services.
//!
//! # Responsibility
//! - Provide stable page-level APIs that rendering surfaces call directly.

pub mod portfolio_service;
