//! The compiled-module cache contract, and a shared implementation of
//! its locking discipline.
//!
//! The actual host compiler is an external collaborator. The core only
//! needs one promise from the cache: asking for a file's symbol table
//! either returns a ready table, reports a failure, or says "compiling,
//! come back" — and a request may block inside the cache while its own
//! compile runs. [`SharedModuleCache`] implements that promise on top
//! of any [`CompileHost`], with the single-writer/many-reader rule:
//! the first request for a path runs the compile, concurrent requests
//! for the same path see `Compiling` and poll.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::base::FileId;

use super::registry::ModuleRegistry;
use super::symbols::SymbolTable;

/// A target file failed to compile. Produced by the external compiler
/// and passed through to the editor boundary unchanged.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("failed to compile '{path}': {message}")]
pub struct CompileError {
    pub path: PathBuf,
    pub message: Arc<str>,
}

impl CompileError {
    pub fn new(path: impl Into<PathBuf>, message: impl AsRef<str>) -> Self {
        Self {
            path: path.into(),
            message: Arc::from(message.as_ref()),
        }
    }
}

/// One answer from the cache.
#[derive(Clone, Debug)]
pub enum CompileOutcome {
    /// The table is available now.
    Ready(Arc<SymbolTable>),
    /// Another request is compiling this file; retry shortly.
    Compiling,
    /// The compile ran and failed.
    Failed(CompileError),
}

/// The cache interface the resolver consumes.
///
/// A call may block while the cache compiles the file on the caller's
/// behalf; callers treat it accordingly and check cancellation around
/// it.
pub trait ModuleCache: Send + Sync {
    fn symbol_table(&self, path: &Path) -> CompileOutcome;
}

/// The compiler half of the boundary: given a resolved file, produce
/// its symbol table. Implemented by the host toolchain; tests use
/// fixture hosts.
pub trait CompileHost: Send + Sync {
    fn compile(&self, path: &Path, file: FileId) -> Result<SymbolTable, CompileError>;
}

#[derive(Debug)]
enum Slot {
    InFlight,
    Ready(Arc<SymbolTable>),
    Failed(CompileError),
}

/// An arena of compiled-module records indexed by resolved file path.
///
/// The first request for a path claims the compile and runs it with no
/// lock held; everyone else reuses the result or polls while it is in
/// flight. Nothing is ever recompiled.
pub struct SharedModuleCache<H> {
    registry: Arc<ModuleRegistry>,
    host: H,
    slots: RwLock<FxHashMap<FileId, Slot>>,
}

impl<H: CompileHost> SharedModuleCache<H> {
    pub fn new(registry: Arc<ModuleRegistry>, host: H) -> Self {
        Self {
            registry,
            host,
            slots: RwLock::new(FxHashMap::default()),
        }
    }

    /// The registry this cache interns paths in.
    pub fn registry(&self) -> &Arc<ModuleRegistry> {
        &self.registry
    }

    /// Number of files with a settled (ready or failed) compile.
    pub fn settled_len(&self) -> usize {
        self.slots
            .read()
            .values()
            .filter(|slot| !matches!(slot, Slot::InFlight))
            .count()
    }
}

impl<H: CompileHost> ModuleCache for SharedModuleCache<H> {
    fn symbol_table(&self, path: &Path) -> CompileOutcome {
        let file = self.registry.file_id(path);

        // Fast path: read lock
        {
            let slots = self.slots.read();
            match slots.get(&file) {
                Some(Slot::Ready(table)) => return CompileOutcome::Ready(Arc::clone(table)),
                Some(Slot::Failed(err)) => return CompileOutcome::Failed(err.clone()),
                Some(Slot::InFlight) => return CompileOutcome::Compiling,
                None => {}
            }
        }

        // Claim the compile: write lock, double-check, mark in flight.
        {
            let mut slots = self.slots.write();
            match slots.get(&file) {
                Some(Slot::Ready(table)) => return CompileOutcome::Ready(Arc::clone(table)),
                Some(Slot::Failed(err)) => return CompileOutcome::Failed(err.clone()),
                Some(Slot::InFlight) => return CompileOutcome::Compiling,
                None => {
                    slots.insert(file, Slot::InFlight);
                }
            }
        }

        // Run the compile with no lock held, so readers of other
        // modules never wait on it.
        debug!(path = %path.display(), %file, "compiling module");
        let outcome = self.host.compile(path, file);

        let mut slots = self.slots.write();
        match outcome {
            Ok(table) => {
                let table = Arc::new(table);
                slots.insert(file, Slot::Ready(Arc::clone(&table)));
                CompileOutcome::Ready(table)
            }
            Err(err) => {
                slots.insert(file, Slot::Failed(err.clone()));
                CompileOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Span;
    use crate::resolve::symbols::{SymbolEntry, SymbolKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHost {
        compiles: AtomicUsize,
    }

    impl CompileHost for CountingHost {
        fn compile(&self, path: &Path, file: FileId) -> Result<SymbolTable, CompileError> {
            self.compiles.fetch_add(1, Ordering::SeqCst);
            if path.ends_with("broken.tern") {
                return Err(CompileError::new(path, "type error on line 3"));
            }
            let mut table = SymbolTable::new(file);
            table.insert(SymbolEntry::declared(
                "MyClass",
                SymbolKind::Type,
                Span::zero(),
            ));
            Ok(table)
        }
    }

    fn cache() -> SharedModuleCache<CountingHost> {
        SharedModuleCache::new(
            Arc::new(ModuleRegistry::new()),
            CountingHost {
                compiles: AtomicUsize::new(0),
            },
        )
    }

    #[test]
    fn test_compile_runs_once_per_path() {
        let cache = cache();
        let path = Path::new("/src/mymodule.tern");

        for _ in 0..3 {
            match cache.symbol_table(path) {
                CompileOutcome::Ready(table) => assert!(table.get("MyClass").is_some()),
                other => panic!("expected Ready, got {other:?}"),
            }
        }

        assert_eq!(cache.host.compiles.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_compile_is_remembered() {
        let cache = cache();
        let path = Path::new("/src/broken.tern");

        for _ in 0..2 {
            match cache.symbol_table(path) {
                CompileOutcome::Failed(err) => {
                    assert!(err.message.contains("type error"));
                }
                other => panic!("expected Failed, got {other:?}"),
            }
        }

        assert_eq!(cache.host.compiles.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_requests_share_one_compile() {
        let cache = Arc::new(cache());
        let path = PathBuf::from("/src/mymodule.tern");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let path = path.clone();
                std::thread::spawn(move || {
                    // Poll through any Compiling answers, like the
                    // resolver does.
                    loop {
                        match cache.symbol_table(&path) {
                            CompileOutcome::Ready(table) => return table.len(),
                            CompileOutcome::Compiling => std::thread::yield_now(),
                            CompileOutcome::Failed(err) => panic!("unexpected failure: {err}"),
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(cache.host.compiles.load(Ordering::SeqCst), 1);
    }
}
