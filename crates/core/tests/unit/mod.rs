//! # Unit Components
//!
//! This module serves as the central hub for the interpreter unit tests,
//! organized along the crate's own module boundaries: the ISA decoding
//! layer, the machine core, and the host-facing configuration and
//! statistics surfaces.
