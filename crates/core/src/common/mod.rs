//! Common outcome and error types shared across the interpreter.
//!
//! This module provides the vocabulary the execution engine reports with:
//! 1. **Step Outcomes:** The per-instruction result returned by the engine.
//! 2. **Halt Reasons:** Terminal conditions ending a run, with decode context.
//! 3. **Image Errors:** Failures constructing a program image from raw bytes.

/// Step outcome, halt reason, and image error definitions.
pub mod error;

pub use error::{HaltReason, ImageError, StepResult};
