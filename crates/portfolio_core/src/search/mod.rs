//! Filter engine entry points.
//!
//! # Responsibility
//! - Expose the pure category/query filter used by every view.
//! - Keep matching rules inside core so all rendering surfaces agree.

pub mod filter;
