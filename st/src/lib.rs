//! Stencil - source file generation from token-substituted templates
//!
//! Generates a new source file from a named template, substituting a fixed
//! set of `{{TOKEN}}` markers (author, namespace, type name, description,
//! timestamps) and writing the result to disk, with a preview path that
//! renders the same text without committing anything.
//!
//! # Architecture
//!
//! ```text
//! kind ────────────▶ TemplateLoader::resolve ──▶ template text
//!                    (disk, else embedded)           │
//! fields + clock ──▶ SubstitutionContext ──────▶ render ──▶ output text
//!                                                               │
//!                                    Generator::create ──▶ <dir>/<name>.<ext>
//!                                    Generator::preview ──▶ caller
//! ```
//!
//! Templates live in a configurable directory and fall back to embedded
//! defaults when a file is missing; substitution is one literal pass per
//! token, with no re-scanning and no escaping.
//!
//! # Example
//!
//! ```ignore
//! use stencil::{GenerateRequest, Generator, NameValidator, TemplateLoader};
//!
//! let generator = Generator::new(TemplateLoader::new("templates"), NameValidator::default());
//! let path = generator.create(&request, chrono::Local::now())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod templates;
pub mod validate;

pub use config::Config;
pub use error::GenerateError;
pub use generate::{GenerateRequest, Generator};
pub use templates::{SubstitutionContext, TemplateKind, TemplateLoader, render};
pub use validate::{DEFAULT_RESERVED, NameValidator};

/// Default output file extension
pub const DEFAULT_EXTENSION: &str = "cs";
