//! Construction-time errors for undead-core.
//!
//! The per-tick AI never fails: unreachable targets produce empty paths and
//! strategies report `Status::Failure`. Errors only exist where malformed
//! input would otherwise leave the core in an undefined state, so those
//! inputs are rejected up front.

use crate::geometry::{Point, TilePos};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can retry with different input.
    ///
    /// Examples: spawn point blocked, no patrol point found
    Recoverable,

    /// Validation error - the input data itself is malformed.
    ///
    /// Examples: zero tile size, ragged grid rows
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all undead-core errors.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Rejected level grid input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("tile size must be finite and positive, got {0}")]
    InvalidTileSize(f32),

    #[error("grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("grid {width}x{height} is smaller than the {minimum}x{minimum} minimum")]
    TooSmall {
        width: u32,
        height: u32,
        minimum: u32,
    },

    #[error("expected {expected} tiles for the grid dimensions, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown tile glyph {glyph:?} at {position:?}")]
    UnknownGlyph { glyph: char, position: TilePos },
}

impl CoreError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTileSize(_) => "GRID_INVALID_TILE_SIZE",
            Self::EmptyGrid { .. } => "GRID_EMPTY",
            Self::TooSmall { .. } => "GRID_TOO_SMALL",
            Self::TileCountMismatch { .. } => "GRID_TILE_COUNT_MISMATCH",
            Self::RaggedRow { .. } => "GRID_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
        }
    }
}

/// Rejected agent construction.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpawnError {
    #[error("spawn position {position:?} overlaps a blocked region")]
    Blocked { position: Point },

    #[error("no walkable patrol point found after {attempts} attempts")]
    NoPatrolPoints { attempts: usize },
}

impl CoreError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Blocked { .. } => "SPAWN_BLOCKED",
            Self::NoPatrolPoints { .. } => "SPAWN_NO_PATROL_POINTS",
        }
    }
}

/// Rejected AI configuration value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
}

impl CoreError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            Self::Zero { .. } => "CONFIG_ZERO",
        }
    }
}
