//! jlex-util - Foundation types shared by the jlex crates.
//!
//! This crate holds the pieces that every stage of the front end needs but
//! that carry no knowledge of Java itself:
//!
//! - [`span`] - character positions, spans and source files
//! - [`diagnostic`] - error and warning collection with source snippets
//! - [`error`] - error types for fallible utility operations
//!
//! # Example
//!
//! ```
//! use jlex_util::{DiagnosticBuilder, Handler, Position, Span};
//!
//! let mut pos = Position::START;
//! pos.advance('a');
//! assert_eq!(pos.column, 2);
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceFile, Span};

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
