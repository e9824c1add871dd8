//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and operations
//! - Tolerance-based numeric comparison
//! - Logging utilities

pub mod compare;
pub mod logging;
pub mod math;
