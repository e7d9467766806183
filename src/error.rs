//! Rich diagnostic error types for the pharmakon engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly what went wrong
//! and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the pharmakon engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source chains) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum PharmakonError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("I/O error reading {path}: {source}")]
    #[diagnostic(
        code(pharmakon::store::io),
        help(
            "A filesystem operation failed. Check that the snapshot file exists \
             and has read permissions."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {message}")]
    #[diagnostic(
        code(pharmakon::store::parse),
        help(
            "The snapshot file is not in the expected format. \
             Re-export it from the ingestion pipeline and try again."
        )
    )]
    Parse { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Scoring errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ScoreError {
    #[error("compound not found: {id}")]
    #[diagnostic(
        code(pharmakon::score::compound_not_found),
        help(
            "The compound ID has no profile in the store. \
             Check the ID spelling, or list known compounds with `pharmakon info`."
        )
    )]
    CompoundNotFound { id: String },

    #[error("top-n must be at least 1, got 0")]
    #[diagnostic(
        code(pharmakon::score::invalid_top_n),
        help("Pass a positive number of results to return.")
    )]
    InvalidTopN,
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("node not found: {id}")]
    #[diagnostic(
        code(pharmakon::graph::node_not_found),
        help(
            "The entity ID has no corresponding node in the knowledge graph. \
             Verify the ID, including its type prefix (e.g. \"Compound::DB00123\")."
        )
    )]
    NodeNotFound { id: String },

    #[error("unsupported target count: {count}")]
    #[diagnostic(
        code(pharmakon::graph::unsupported_target_count),
        help(
            "Relation allow-lists are curated for queries with exactly one or \
             two target compounds. Provide one or two targets."
        )
    )]
    UnsupportedTargetCount { count: usize },
}

// ---------------------------------------------------------------------------
// Mapping errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MappingError {
    #[error("name not found in entity mapping: \"{name}\"")]
    #[diagnostic(
        code(pharmakon::mapping::name_not_found),
        help(
            "The display name does not match any entity in the name mapping. \
             Matching is case-insensitive but otherwise exact."
        )
    )]
    NameNotFound { name: String },
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(pharmakon::engine::invalid_config),
        help("Check the EngineConfig fields. {message}")
    )]
    InvalidConfig { message: String },
}

/// Convenience alias for functions returning pharmakon results.
pub type PharmResult<T> = std::result::Result<T, PharmakonError>;
