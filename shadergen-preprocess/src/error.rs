use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading shader definitions.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PreprocessError {
    /// The source did not start with a `#version` header.
    #[error("the version header was missing")]
    MissingVersionHeader,
    /// A source or included file could not be read.
    #[error("the file {0:?} could not be read")]
    IOError(PathBuf, std::io::Error),
    /// The source was empty.
    #[error("unexpected end of file")]
    UnexpectedEof,
    /// An `#include` directive on the given line had no target.
    #[error("unexpected end of line")]
    UnexpectedEol(usize),
    /// An `#include` was found in a source that was not loaded from disk.
    #[error("include `{0}` can not be resolved without a source path")]
    UnresolvedInclude(String),
    /// Includes nested deeper than the permitted maximum, most likely a cycle.
    #[error("exceeded maximum include depth (16)")]
    ExceededIncludeDepth,
    /// A pragma that may only appear once was repeated.
    #[error("duplicate pragma found")]
    DuplicatePragmaError(String),
    /// A `#pragma stage` named an unknown stage.
    #[error("unknown shader stage `{0}`")]
    UnknownStage(String),
    /// The shader definition name was empty.
    #[error("shader definition name was empty")]
    EmptyName,
    /// Two definitions in the same program share a name.
    #[error("duplicate shader definition `{0}`")]
    DuplicateDefinition(String),
    /// The search pattern for shader definitions was invalid.
    #[error("invalid search pattern")]
    PatternError(#[from] glob::PatternError),
}
