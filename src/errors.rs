/*!
 * Error types for the scriptdoc application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering eligible scripts
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The configured ignore file does not exist
    #[error("Ignore file not found: {0}")]
    IgnoreFileMissing(PathBuf),

    /// The configured scripts path is missing or not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Listing the scripts directory failed
    #[error("Failed to list directory {path}: {source}")]
    ListDir {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading the ignore file failed
    #[error("Failed to read ignore file {path}: {source}")]
    ReadIgnoreFile {
        /// Ignore file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when a script lacks the required leading metadata declarations
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The script ended before three literal declarations were found
    #[error("{file}: expected 3 leading literal declarations, found {found}")]
    TooFewDeclarations {
        /// Script file name
        file: String,
        /// Number of qualifying declarations found
        found: usize,
    },

    /// A leading statement could not be evaluated as a literal
    #[error("{file}: leading statement {index} is not a literal declaration: {reason}")]
    NotALiteral {
        /// Script file name
        file: String,
        /// 1-based statement position
        index: usize,
        /// Why the statement was rejected
        reason: String,
    },

    /// A declaration evaluated to a literal of the wrong shape
    #[error("{file}: {field} must be {expected}")]
    WrongShape {
        /// Script file name
        file: String,
        /// Metadata field name
        field: &'static str,
        /// Expected literal shape
        expected: &'static str,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during script discovery
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Error extracting script metadata
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
