//! # MTL Format
//!
//! Reader and writer for Wavefront MTL material libraries.
//!
//! An MTL file is a line-oriented list of directives describing named
//! materials: colors, transparency, specular exponents, illumination models
//! and texture map references. This crate parses that text into a
//! [`Library`] of [`Material`](elements::Material)s and serializes a
//! library back to canonical MTL text.
//!
//! ## Features
//!
//! - **Parsing**: one pass over the input, unknown directives are ignored
//! - **Serialization**: deterministic directive order that re-parses to the
//!   same library
//! - **Fluent construction**: build materials programmatically with chained
//!   `with_*` methods
//! - **`serde` support**: optional `Serialize`/`Deserialize` derives on all
//!   data types behind the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use mtl_format::prelude::*;
//!
//! fn main() -> Result<(), MtlError> {
//!     let library = mtl_format::parse("newmtl brick\nKd 0.8 0.2 0.1\nd 0.5\n")?;
//!
//!     let brick = library.material("brick").expect("brick is defined");
//!     assert_eq!(brick.transparency, Some(0.5));
//!
//!     let text = library.to_text()?;
//!     assert!(text.starts_with("newmtl brick"));
//!     Ok(())
//! }
//! ```
//!
//! The crate performs no file I/O: callers hand it text and receive text
//! back. Texture file paths are stored verbatim and never resolved.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod elements;

mod error;
mod illumination;
mod library;
mod parser;

pub use error::MtlError;
pub use illumination::Illumination;
pub use library::Library;
pub use parser::{parse, parse_into};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        elements::{BumpMap, Color, Comment, Material, TextureMap},
        parse, parse_into, Illumination, Library, MtlError,
    };
}
