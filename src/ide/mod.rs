//! Request-level APIs for the editor-integration server.
//!
//! This module is the boundary the Tern language server calls into.
//! Each request is a pure function over its inputs plus the shared
//! compiled-module cache; no editor-protocol types appear anywhere —
//! conversion to the wire protocol happens on the server side.
//!
//! ## Usage
//!
//! The recommended entry point is [`NavHost`]:
//!
//! ```ignore
//! use tern_nav::ide::NavHost;
//!
//! let host = NavHost::new(config, cache);
//! let result = host.goto_definition(source, cursor, Path::new("app.py"))?;
//! ```

mod goto;
mod host;

pub use goto::{GotoRequest, GotoResult, goto_definition};
pub use host::NavHost;
