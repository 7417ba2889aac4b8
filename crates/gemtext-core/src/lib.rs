//! Gemtext Core
//!
//! This crate provides the shared vocabulary for the gemtext scanner
//! and renderers.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`LineKind`] - The closed set of text/gemini line kinds
//! - [`ScanError`] - Terminal failures reported by the line scanner
//! - [`GemtextError`] - Error type for rendering and configuration

pub mod enums;
pub mod error;

pub use enums::LineKind;
pub use error::{GemtextError, Result, ScanError};
