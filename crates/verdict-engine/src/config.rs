//! Engine configuration and its validation errors.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

// ── EngineConfig ───────────────────────────────────────────────────

/// Configuration for a [`PropagationEngine`](crate::PropagationEngine).
///
/// Defaults leave the decay/floor mechanism inert (`confidence_decay`
/// 1.0, `min_confidence` 0.0) so the reference rule arithmetic holds
/// exactly; deployments that want per-layer attenuation opt in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum full passes per `run` and maximum node expansions per
    /// `update_node`. Default: 100. Must be positive.
    pub max_iterations: usize,
    /// Multiplier (0–1) applied to every rule output's confidence
    /// before acceptance. Default: 1.0 (no decay).
    pub confidence_decay: f64,
    /// Floor (0–100) below which a propagated change is not accepted.
    /// Default: 0.0 (no floor).
    pub min_confidence: f64,
    /// Whether Conflict outcomes append conflict records. Default: true.
    pub enable_conflict_detection: bool,
    /// Whether incremental propagation logs cycle diagnostics when it
    /// re-reaches a visited node. Termination never depends on this.
    /// Default: true.
    pub enable_cycle_detection: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            confidence_decay: 1.0,
            min_confidence: 0.0,
            enable_conflict_detection: true,
            enable_cycle_detection: true,
        }
    }
}

impl EngineConfig {
    /// Validate all field invariants.
    ///
    /// Invalid values are rejected, never clamped: a configuration that
    /// asks for zero iterations or a NaN decay is a caller bug.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations { configured: 0 });
        }
        if !self.confidence_decay.is_finite()
            || self.confidence_decay < 0.0
            || self.confidence_decay > 1.0
        {
            return Err(ConfigError::InvalidConfidenceDecay {
                value: self.confidence_decay,
            });
        }
        if !self.min_confidence.is_finite()
            || self.min_confidence < 0.0
            || self.min_confidence > 100.0
        {
            return Err(ConfigError::InvalidMinConfidence {
                value: self.min_confidence,
            });
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `max_iterations` must be positive.
    InvalidMaxIterations {
        /// The rejected value.
        configured: usize,
    },
    /// `confidence_decay` must be a finite fraction in [0, 1].
    InvalidConfidenceDecay {
        /// The rejected value.
        value: f64,
    },
    /// `min_confidence` must be a finite value in [0, 100].
    InvalidMinConfidence {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxIterations { configured } => {
                write!(f, "max_iterations must be positive, got {configured}")
            }
            Self::InvalidConfidenceDecay { value } => {
                write!(
                    f,
                    "confidence_decay must be a finite fraction in [0, 1], got {value}"
                )
            }
            Self::InvalidMinConfidence { value } => {
                write!(
                    f,
                    "min_confidence must be finite and in [0, 100], got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
