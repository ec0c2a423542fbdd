//! Go-to-definition over a foreign file.
//!
//! The pipeline per request, leaf-first: parse the foreign source,
//! convert it with original positions, find the node under the cursor,
//! extract the reference intent, resolve module and symbol. Each stage
//! checks cancellation, so a request superseded by a newer cursor
//! position is abandoned without touching shared state.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::ast::locate_path;
use crate::base::{LineCol, LineIndex};
use crate::error::NavError;
use crate::extract::{ReferenceIntent, classify};
use crate::foreign::{ForeignParser, convert_source};
use crate::resolve::{DefinitionLocation, ModuleCache, ResolveConfig, Resolver};

/// One go-to-definition request from the editor.
#[derive(Clone, Copy, Debug)]
pub struct GotoRequest<'a> {
    /// Full content of the foreign file being edited.
    pub source: &'a str,
    /// Cursor position, same 0-indexed convention as every span.
    pub cursor: LineCol,
    /// Path of the file being edited; relative imports resolve
    /// against its directory.
    pub requesting_file: &'a Path,
}

/// A successful request's outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GotoResult {
    /// The definition was found.
    Found(DefinitionLocation),
    /// The cursor is not on an import-site reference. A normal
    /// outcome, not an error.
    NoReference,
}

impl GotoResult {
    /// The location, if one was found.
    pub fn location(self) -> Option<DefinitionLocation> {
        match self {
            GotoResult::Found(location) => Some(location),
            GotoResult::NoReference => None,
        }
    }
}

/// Run one go-to-definition request.
///
/// Every failure comes back as a structured [`NavError`]; nothing
/// panics across this boundary. The AST built here is request-local
/// and dropped on return — only the compiled-module cache is shared,
/// and only through `cache`.
pub fn goto_definition(
    request: &GotoRequest<'_>,
    config: &ResolveConfig,
    cache: &dyn ModuleCache,
    cancel: &CancellationToken,
) -> Result<GotoResult, NavError> {
    if cancel.is_cancelled() {
        return Err(NavError::Cancelled);
    }

    // Cursor positions past the end of the file can't be on anything.
    let line_index = LineIndex::new(request.source);
    if line_index.offset(request.cursor).is_none() {
        return Ok(GotoResult::NoReference);
    }

    let mut parser = ForeignParser::new()?;
    let tree = parser.parse(request.source)?;

    if cancel.is_cancelled() {
        return Err(NavError::Cancelled);
    }

    let conversion = convert_source(&tree, request.source);
    let chain = locate_path(&conversion.root, request.cursor);
    let intent = classify(&chain);
    debug!(cursor = %request.cursor, ?intent, "classified cursor");

    if cancel.is_cancelled() {
        return Err(NavError::Cancelled);
    }

    let resolver = Resolver::new(config, cache, cancel);
    match intent {
        ReferenceIntent::NotAReference => Ok(GotoResult::NoReference),
        ReferenceIntent::ImportedModule { module } => resolver
            .resolve_module_location(&module, request.requesting_file)
            .map(GotoResult::Found),
        ReferenceIntent::ImportedSymbol { module, symbol }
        | ReferenceIntent::AliasedImport { module, symbol, .. } => resolver
            .resolve_symbol(&module, &symbol, request.requesting_file)
            .map(GotoResult::Found),
    }
}
