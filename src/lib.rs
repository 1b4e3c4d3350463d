/*!
 * # scriptdoc
 *
 * A Rust library for generating an aggregated listing document from a
 * directory of scripts that declare their own metadata.
 *
 * ## Features
 *
 * - Non-recursive discovery of script files with a configurable denylist
 *   and ignore-file substring filters
 * - Syntax-level extraction of author, creation date and description from
 *   the leading literal declarations of each script, without executing it
 * - Deterministic, lexicographically ordered markdown output wrapped in a
 *   configurable template
 * - Fail-fast error handling: the run either produces a fully consistent
 *   document or leaves the previous one untouched
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `script_discovery`: Enumeration and filtering of candidate scripts
 * - `script_metadata`: Literal parsing of per-script metadata
 * - `document_builder`: Fragment rendering and document assembly
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod document_builder;
pub mod errors;
pub mod file_utils;
pub mod script_discovery;
pub mod script_metadata;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document_builder::DocumentBuilder;
pub use errors::{AppError, DiscoveryError, MetadataError};
pub use script_discovery::{IgnoreRuleSet, ScriptDiscovery};
pub use script_metadata::{MetaValue, ScriptMetadata};
