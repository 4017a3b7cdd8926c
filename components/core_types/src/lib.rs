//! Shared types for the dl language front end.
//!
//! This crate provides the pieces every stage agrees on: source positions,
//! the error record, the busy-state machine, the trace sink, and the
//! interfaces of collaborators that live outside the front end.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Line, column and byte offset
//! - [`DlError`] - Error record with an [`ErrorKind`] category
//! - [`StageState`] - `Idle`/`Running` guard for reconfiguration
//! - [`TraceSink`] - Timestamped debug output
//! - [`Value`] - Runtime values of the built-in types
//! - [`Scope`] - Evaluation capability for built-in functions
//! - [`ModuleMap`] - Resolved module name to path mapping
//!
//! # Examples
//!
//! ```
//! use core_types::{DlError, ErrorKind, SourcePosition};
//!
//! let error = DlError::new(
//!     ErrorKind::ScanError,
//!     "met illegal character: @",
//!     Some(SourcePosition::new(1, 4, 3)),
//! );
//! assert_eq!(error.source_position.unwrap().column, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod module_map;
mod scope;
mod source;
mod stage;
mod trace;
mod value;

pub use error::{DlError, ErrorKind};
pub use module_map::ModuleMap;
pub use scope::{BuiltinFunction, Scope};
pub use source::SourcePosition;
pub use stage::StageState;
pub use trace::TraceSink;
pub use value::Value;
