//! # Asset loading
//!
//! Parsers for the two line-oriented text formats the engine consumes:
//! material libraries (`.mtl`) and geometry files (`.obj`). Both formats are
//! whitespace-tokenized, one directive per line, with unrecognized lines
//! ignored. All load failures surface as [`LoadError`] instead of aborting,
//! so a caller can decide whether a missing tree matters.

pub mod material;
pub mod mesh;

use std::path::PathBuf;

use thiserror::Error;

pub use material::{Material, MaterialLibrary};
pub use mesh::{Face, Mesh};

/// Errors surfaced by the material and mesh loaders.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The geometry or material file could not be opened or read.
    #[error("cannot read `{}`: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recognized directive whose payload does not parse.
    #[error("{file}:{line}: malformed `{directive}` directive")]
    MalformedDirective {
        file: String,
        line: usize,
        directive: String,
    },

    /// A face or line element references a vertex/normal index outside the
    /// range declared so far in the file.
    #[error("{file}:{line}: index {index} out of range ({declared} declared so far)")]
    MalformedIndex {
        file: String,
        line: usize,
        index: usize,
        declared: usize,
    },

    /// `usemtl` named a material absent from the active library.
    #[error("{file}:{line}: unknown material `{name}`")]
    UnknownMaterial {
        file: String,
        line: usize,
        name: String,
    },

    /// A material property directive appeared before any `newmtl`.
    #[error("{file}:{line}: material property before any `newmtl`")]
    PropertyBeforeNewmtl { file: String, line: usize },
}

/// What to do when `usemtl` names a material the active library lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownMaterialPolicy {
    /// Fail the load with [`LoadError::UnknownMaterial`].
    #[default]
    Error,
    /// Substitute an all-zero material (renders black) and log a warning.
    DefaultBlack,
}

/// Options controlling mesh loading.
///
/// Construct with `LoadOptions::default()` and override the fields you
/// care about.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub unknown_material: UnknownMaterialPolicy,
}
