//! Configuration system for the interpreter.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline run settings used when a field is not
//!    explicitly overridden.
//! 2. **Structures:** The root [`Config`] and its general settings section.
//!
//! Configuration is supplied via JSON (the CLI's `--config` flag) or built
//! with `Config::default()` and adjusted in code.

use serde::Deserialize;

/// Default configuration constants for the interpreter.
///
/// These values define the baseline behavior when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Per-instruction trace events are off unless requested; tracing each
    /// retired instruction costs a disassembly per step.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// No step budget: a run continues until the machine halts on its own.
    pub const STEP_LIMIT: Option<u64> = None;
}

/// Root configuration structure containing all run settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rv32vm_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.step_limit, None);
/// ```
///
/// Deserializing from JSON (typical `--config` usage):
///
/// ```
/// use rv32vm_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "step_limit": 10000
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.step_limit, Some(10000));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
        }
    }
}

/// General run settings and options.
///
/// Contains high-level execution configuration such as instruction tracing
/// and the optional step budget.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every retired instruction.
    #[serde(default = "GeneralConfig::default_trace_instructions")]
    pub trace_instructions: bool,

    /// Maximum number of steps before a run gives up, or `None` to run
    /// until the machine halts.
    #[serde(default = "GeneralConfig::default_step_limit")]
    pub step_limit: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default instruction-tracing setting.
    fn default_trace_instructions() -> bool {
        defaults::TRACE_INSTRUCTIONS
    }

    /// Returns the default step budget.
    fn default_step_limit() -> Option<u64> {
        defaults::STEP_LIMIT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            step_limit: defaults::STEP_LIMIT,
        }
    }
}
