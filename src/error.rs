//! Failure taxonomy for go-to-definition requests.
//!
//! Every non-success outcome crosses the library boundary as a value
//! of these types — never a panic. The editor layer shows "no
//! definition found" for all of them, optionally distinguishing a few
//! by reason code (a compile failure in the target file reads very
//! differently from a misspelled import).

use thiserror::Error;

use crate::foreign::ParseError;
use crate::resolve::CompileError;

/// Why a go-to-definition request produced no location.
///
/// "Cursor not on a reference" is deliberately *not* here — that is a
/// normal outcome, reported as [`crate::ide::GotoResult::NoReference`].
#[derive(Error, Debug)]
pub enum NavError {
    /// The foreign source could not be parsed at all.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No resolution strategy produced a file for the module path.
    #[error("module '{module}' not found on any configured root")]
    ModuleNotFound { module: String },

    /// The module resolved and compiled, but does not declare the name.
    #[error("module '{module}' has no symbol '{symbol}'")]
    SymbolNotFound { module: String, symbol: String },

    /// Following re-exports revisited a module already on the chain.
    #[error("cyclic import while resolving '{symbol}': {chain}")]
    CyclicImport { symbol: String, chain: String },

    /// The target file has errors; reported as the compiler phrased it.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The request was abandoned in favor of a newer one.
    #[error("request cancelled")]
    Cancelled,
}

impl NavError {
    /// Stable machine-readable code for the editor layer.
    pub fn reason_code(&self) -> &'static str {
        match self {
            NavError::Parse(_) => codes::PARSE_FAILED,
            NavError::ModuleNotFound { .. } => codes::MODULE_NOT_FOUND,
            NavError::SymbolNotFound { .. } => codes::SYMBOL_NOT_FOUND,
            NavError::CyclicImport { .. } => codes::CYCLIC_IMPORT,
            NavError::Compile(_) => codes::COMPILE_FAILED,
            NavError::Cancelled => codes::CANCELLED,
        }
    }
}

/// Reason codes, stable across releases.
pub mod codes {
    pub const PARSE_FAILED: &str = "N0001";
    pub const MODULE_NOT_FOUND: &str = "N0002";
    pub const SYMBOL_NOT_FOUND: &str = "N0003";
    pub const CYCLIC_IMPORT: &str = "N0004";
    pub const COMPILE_FAILED: &str = "N0005";
    pub const CANCELLED: &str = "N0006";
}
