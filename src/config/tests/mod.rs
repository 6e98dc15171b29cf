//! Unit tests for input loading and resolution.
//!
//! - `helpers`: shared layer composition utilities
//! - `precedence`: layer precedence and environment loading
//! - `resolution`: trigger, reaction, prefix and credential resolution

mod helpers;
