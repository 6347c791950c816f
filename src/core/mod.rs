//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Outline tree and output record model
//! - Structural error type
//! - Output path derivation
//! - Tab-separated rendering

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
