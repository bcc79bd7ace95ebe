//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types used by cameras and collaborators
//! - Typed arena keys for owned scene entities
//! - Frame timing
//! - Logging and the warning sink

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
