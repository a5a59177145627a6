//! Shader compilation and cross-compilation.
//!
//! Shader definitions are first compiled to SPIR-V by the [front end](crate::front), then
//! lowered into every target shading language by the [backends](crate::back).

/// Shader codegen backends.
pub mod back;
/// Error types.
pub mod error;
/// Shader frontend compilers.
pub mod front;
