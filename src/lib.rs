//! dynarray - a growable integer array and a small script language to drive it
//!
//! # Overview
//!
//! The container itself lives in [`dynarray_core`] and is re-exported here.
//! This crate adds [`script`], a line-oriented command language for exercising
//! the array, and an [`error_renderer`] that points script errors back at the
//! offending source.
//!
//! # Quick Start
//!
//! ```
//! use dynarray::script::{Session, parse};
//!
//! let script = parse("push 10; insert 0 5; rotate-left; print").unwrap();
//! let mut session = Session::new(1);
//! let mut out = Vec::new();
//! session.execute(&script, &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "0 10 5\n");
//! ```
//!
//! # Rendering errors
//!
//! ```
//! use dynarray::{RenderConfig, render_error_to, script::parse};
//!
//! let source = "push 1\nfrobnicate";
//! let err = parse(source).unwrap_err();
//!
//! let mut buf = Vec::new();
//! let config = RenderConfig { color: false, ..Default::default() };
//! render_error_to(&err, source, &mut buf, &config).unwrap();
//! assert!(String::from_utf8_lossy(&buf).contains("unknown command `frobnicate`"));
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub mod script;
pub use script::{ExecError, Script, ScriptError, ScriptErrorKind, Session};

// Re-export the container
pub use dynarray_core::{DynamicArray, Error};
