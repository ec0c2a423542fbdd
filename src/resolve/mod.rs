//! Module and symbol resolution.
//!
//! Turns a module path from an import site into a concrete file using
//! an ordered list of strategies, then answers the symbol lookup
//! against that file's compiled symbol table. First match wins; no
//! strategy has side effects until a file is actually chosen for
//! compilation.
//!
//! Strategy order:
//! 1. Relative resolution against the requesting file's directory
//! 2. Host-native files (`.tern`, `<dir>/mod.tern`) on the host roots
//! 3. Foreign files (`.py`, `<dir>/__init__.py`) on the host roots and
//!    external package roots
//! 4. Stub files (`.terni`, `.pyi`), lower precedence than any real
//!    implementation file

mod cache;
mod module_path;
mod registry;
mod symbols;

pub use cache::{CompileError, CompileHost, CompileOutcome, ModuleCache, SharedModuleCache};
pub use module_path::ModulePath;
pub use registry::ModuleRegistry;
pub use symbols::{SymbolEntry, SymbolKind, SymbolTable};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::base::Span;
use crate::error::NavError;

/// Host-language source extension.
pub const HOST_EXT: &str = "tern";
/// Entry file of a host directory module.
pub const HOST_DIR_ENTRY: &str = "mod.tern";
/// Foreign-language source extension.
pub const FOREIGN_EXT: &str = "py";
/// Entry file of a foreign package directory.
pub const FOREIGN_DIR_ENTRY: &str = "__init__.py";
/// Host declared-types-only stub extension.
pub const HOST_STUB_EXT: &str = "terni";
/// Foreign declared-types-only stub extension.
pub const FOREIGN_STUB_EXT: &str = "pyi";

/// How long to wait between polls while another request's compile of
/// the same file is in flight.
const COMPILE_POLL: Duration = Duration::from_millis(10);

// ============================================================================
// CONFIGURATION & RESULTS
// ============================================================================

/// Where resolution looks for modules.
#[derive(Clone, Debug, Default)]
pub struct ResolveConfig {
    /// Source roots searched for host and foreign modules, in order.
    pub host_roots: Vec<PathBuf>,
    /// Additional roots searched only for foreign modules and stubs
    /// (installed third-party packages).
    pub external_roots: Vec<PathBuf>,
}

impl ResolveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.host_roots.push(root.into());
        self
    }

    pub fn with_external_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.external_roots.push(root.into());
        self
    }
}

/// What kind of file a module path resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModuleFileKind {
    Host,
    Foreign,
    Stub,
}

/// A module path pinned to a concrete file.
///
/// Consumed immediately to drive compilation and lookup; not retained
/// past the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedModule {
    pub path: PathBuf,
    pub kind: ModuleFileKind,
}

/// The final answer: where a symbol is declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionLocation {
    pub file: PathBuf,
    pub span: Span,
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Per-request resolution engine.
///
/// Borrows the long-lived pieces (config, cache) and the request's
/// cancellation token; the resolver itself is built fresh per request
/// and holds no state of its own.
pub struct Resolver<'a> {
    config: &'a ResolveConfig,
    cache: &'a dyn ModuleCache,
    cancel: &'a CancellationToken,
}

impl<'a> Resolver<'a> {
    pub fn new(
        config: &'a ResolveConfig,
        cache: &'a dyn ModuleCache,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            config,
            cache,
            cancel,
        }
    }

    /// Resolve a module reference to the module file itself.
    pub fn resolve_module_location(
        &self,
        module: &ModulePath,
        requesting_file: &Path,
    ) -> Result<DefinitionLocation, NavError> {
        let resolved = self.resolve_module(module, requesting_file)?;
        Ok(DefinitionLocation {
            file: resolved.path,
            span: Span::zero(),
        })
    }

    /// Resolve a module reference and look up one declared name in it.
    pub fn resolve_symbol(
        &self,
        module: &ModulePath,
        symbol: &str,
        requesting_file: &Path,
    ) -> Result<DefinitionLocation, NavError> {
        let resolved = self.resolve_module(module, requesting_file)?;
        let mut chain = Vec::new();

        match self.lookup(&resolved, symbol, &mut chain) {
            Err(err @ NavError::SymbolNotFound { .. }) if chain.len() == 1 => {
                // `from pkg import name` where `name` is a submodule of
                // `pkg` rather than a symbol in its entry file.
                match self.resolve_module(&module.child(symbol), requesting_file) {
                    Ok(sub) => Ok(DefinitionLocation {
                        file: sub.path,
                        span: Span::zero(),
                    }),
                    Err(_) => Err(err),
                }
            }
            other => other,
        }
    }

    /// Apply the resolution strategies in order; first hit wins.
    pub fn resolve_module(
        &self,
        module: &ModulePath,
        requesting_file: &Path,
    ) -> Result<ResolvedModule, NavError> {
        self.check_cancelled()?;

        if module.is_relative() {
            return self.resolve_relative(module, requesting_file);
        }

        for root in &self.config.host_roots {
            trace!(root = %root.display(), %module, "trying host-native resolution");
            if let Some(path) = probe_host(root, module) {
                debug!(path = %path.display(), %module, "resolved to host file");
                return Ok(ResolvedModule {
                    path,
                    kind: ModuleFileKind::Host,
                });
            }
        }

        for root in self.foreign_search_roots() {
            trace!(root = %root.display(), %module, "trying foreign resolution");
            if let Some(path) = probe_foreign(root, module) {
                debug!(path = %path.display(), %module, "resolved to foreign file");
                return Ok(ResolvedModule {
                    path,
                    kind: ModuleFileKind::Foreign,
                });
            }
        }

        for root in self.foreign_search_roots() {
            trace!(root = %root.display(), %module, "trying stub resolution");
            if let Some(path) = probe_stub(root, module) {
                debug!(path = %path.display(), %module, "resolved to stub file");
                return Ok(ResolvedModule {
                    path,
                    kind: ModuleFileKind::Stub,
                });
            }
        }

        Err(NavError::ModuleNotFound {
            module: module.to_string(),
        })
    }

    /// Relative references resolve against the requesting file's
    /// directory: level 1 is that directory itself, each further level
    /// walks one directory up. Within the landing directory the same
    /// host → foreign → stub precedence applies.
    fn resolve_relative(
        &self,
        module: &ModulePath,
        requesting_file: &Path,
    ) -> Result<ResolvedModule, NavError> {
        let mut base = requesting_file.parent().unwrap_or(Path::new("."));
        for _ in 1..module.relative_level() {
            base = base.parent().ok_or_else(|| NavError::ModuleNotFound {
                module: module.to_string(),
            })?;
        }

        trace!(base = %base.display(), %module, "trying relative resolution");
        if let Some(path) = probe_host(base, module) {
            return Ok(ResolvedModule {
                path,
                kind: ModuleFileKind::Host,
            });
        }
        if let Some(path) = probe_foreign(base, module) {
            return Ok(ResolvedModule {
                path,
                kind: ModuleFileKind::Foreign,
            });
        }
        if let Some(path) = probe_stub(base, module) {
            return Ok(ResolvedModule {
                path,
                kind: ModuleFileKind::Stub,
            });
        }

        Err(NavError::ModuleNotFound {
            module: module.to_string(),
        })
    }

    fn foreign_search_roots(&self) -> impl Iterator<Item = &PathBuf> {
        self.config
            .host_roots
            .iter()
            .chain(self.config.external_roots.iter())
    }

    /// Look `symbol` up in a resolved module, following re-exports.
    ///
    /// `chain` records every module file visited while following the
    /// re-export trail; revisiting one terminates the request with
    /// `CyclicImport` instead of looping.
    fn lookup(
        &self,
        resolved: &ResolvedModule,
        symbol: &str,
        chain: &mut Vec<PathBuf>,
    ) -> Result<DefinitionLocation, NavError> {
        if chain.contains(&resolved.path) {
            chain.push(resolved.path.clone());
            return Err(NavError::CyclicImport {
                symbol: symbol.to_string(),
                chain: format_chain(chain),
            });
        }
        chain.push(resolved.path.clone());

        let table = self.compiled(&resolved.path)?;
        match table.get(symbol) {
            Some(entry) if entry.kind == SymbolKind::Reexport => {
                let Some(target) = entry.reexport_target.as_deref() else {
                    return Err(self.symbol_not_found(resolved, symbol));
                };
                // Re-export targets are relative to the module that
                // declares them, not to the original requesting file.
                let target_path = ModulePath::parse(target);
                let next = self.resolve_module(&target_path, &resolved.path)?;
                self.lookup(&next, symbol, chain)
            }
            Some(entry) => Ok(DefinitionLocation {
                file: resolved.path.clone(),
                span: entry.declared_span,
            }),
            None => Err(self.symbol_not_found(resolved, symbol)),
        }
    }

    fn symbol_not_found(&self, resolved: &ResolvedModule, symbol: &str) -> NavError {
        NavError::SymbolNotFound {
            module: resolved.path.display().to_string(),
            symbol: symbol.to_string(),
        }
    }

    /// Get the compiled form of a resolved file, blocking on the
    /// external cache. A `Compiling` answer is polled on a short
    /// interval, re-checking cancellation each iteration.
    fn compiled(&self, path: &Path) -> Result<Arc<SymbolTable>, NavError> {
        loop {
            self.check_cancelled()?;
            match self.cache.symbol_table(path) {
                CompileOutcome::Ready(table) => return Ok(table),
                CompileOutcome::Compiling => std::thread::sleep(COMPILE_POLL),
                CompileOutcome::Failed(err) => return Err(err.into()),
            }
        }
    }

    fn check_cancelled(&self) -> Result<(), NavError> {
        if self.cancel.is_cancelled() {
            Err(NavError::Cancelled)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// FILE PROBES
// ============================================================================

fn join_segments(base: &Path, segments: &[SmolStr]) -> PathBuf {
    let mut path = base.to_path_buf();
    for seg in segments {
        path.push(seg.as_str());
    }
    path
}

fn probe_host(base: &Path, module: &ModulePath) -> Option<PathBuf> {
    if module.is_empty() {
        // `from . import x`: the base directory is the package.
        let entry = base.join(HOST_DIR_ENTRY);
        return entry.is_file().then_some(entry);
    }

    let stem = join_segments(base, module.segments());
    let file = stem.with_extension(HOST_EXT);
    if file.is_file() {
        return Some(file);
    }
    let entry = stem.join(HOST_DIR_ENTRY);
    entry.is_file().then_some(entry)
}

fn probe_foreign(base: &Path, module: &ModulePath) -> Option<PathBuf> {
    if module.is_empty() {
        let entry = base.join(FOREIGN_DIR_ENTRY);
        return entry.is_file().then_some(entry);
    }

    let stem = join_segments(base, module.segments());
    let file = stem.with_extension(FOREIGN_EXT);
    if file.is_file() {
        return Some(file);
    }
    let entry = stem.join(FOREIGN_DIR_ENTRY);
    entry.is_file().then_some(entry)
}

fn probe_stub(base: &Path, module: &ModulePath) -> Option<PathBuf> {
    if module.is_empty() {
        return None;
    }

    let stem = join_segments(base, module.segments());
    for ext in [HOST_STUB_EXT, FOREIGN_STUB_EXT] {
        let file = stem.with_extension(ext);
        if file.is_file() {
            return Some(file);
        }
    }
    None
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FileId, LineCol};
    use rustc_hash::FxHashMap;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// A cache fixture standing in for the external compiler: fixed
    /// tables per path, empty table for anything unknown.
    #[derive(Default)]
    struct FixtureCache {
        tables: FxHashMap<PathBuf, Arc<SymbolTable>>,
        failing: Vec<PathBuf>,
    }

    impl FixtureCache {
        fn with_table(mut self, path: &Path, entries: Vec<SymbolEntry>) -> Self {
            let mut table = SymbolTable::new(FileId::new(self.tables.len() as u32));
            for entry in entries {
                table.insert(entry);
            }
            self.tables.insert(path.to_owned(), Arc::new(table));
            self
        }

        fn with_failure(mut self, path: &Path) -> Self {
            self.failing.push(path.to_owned());
            self
        }
    }

    impl ModuleCache for FixtureCache {
        fn symbol_table(&self, path: &Path) -> CompileOutcome {
            if self.failing.iter().any(|p| p == path) {
                return CompileOutcome::Failed(CompileError::new(path, "syntax error"));
            }
            match self.tables.get(path) {
                Some(table) => CompileOutcome::Ready(Arc::clone(table)),
                None => CompileOutcome::Ready(Arc::new(SymbolTable::new(FileId::new(999)))),
            }
        }
    }

    fn decl(name: &str, kind: SymbolKind, line: u32) -> SymbolEntry {
        SymbolEntry::declared(
            name,
            kind,
            Span::new(LineCol::new(line, 0), LineCol::new(line, 10)),
        )
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_host_file_wins_over_foreign() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("mymodule.tern"));
        touch(&root.join("mymodule.py"));

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let module = ModulePath::parse("mymodule");
        let resolved = resolver
            .resolve_module(&module, &root.join("editing.py"))
            .unwrap();

        assert_eq!(resolved.kind, ModuleFileKind::Host);
        assert_eq!(resolved.path, root.join("mymodule.tern"));
    }

    #[test]
    fn test_directory_module_entry_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("package/submodule/mod.tern"));

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let resolved = resolver
            .resolve_module(&ModulePath::parse("package.submodule"), Path::new("/x.py"))
            .unwrap();

        assert_eq!(resolved.path, root.join("package/submodule/mod.tern"));
    }

    #[test]
    fn test_stub_is_last_resort() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("vendored.pyi"));

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let resolved = resolver
            .resolve_module(&ModulePath::parse("vendored"), Path::new("/x.py"))
            .unwrap();
        assert_eq!(resolved.kind, ModuleFileKind::Stub);

        // A real implementation appearing anywhere beats the stub.
        touch(&root.join("vendored.py"));
        let resolved = resolver
            .resolve_module(&ModulePath::parse("vendored"), Path::new("/x.py"))
            .unwrap();
        assert_eq!(resolved.kind, ModuleFileKind::Foreign);
    }

    #[test]
    fn test_external_roots_searched_for_foreign_only() {
        let dir = TempDir::new().unwrap();
        let packages = dir.path().join("site-packages");
        touch(&packages.join("requests/__init__.py"));

        let config = ResolveConfig::new()
            .with_host_root(dir.path().join("src"))
            .with_external_root(&packages);
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let resolved = resolver
            .resolve_module(&ModulePath::parse("requests"), Path::new("/x.py"))
            .unwrap();
        assert_eq!(resolved.kind, ModuleFileKind::Foreign);
        assert_eq!(resolved.path, packages.join("requests/__init__.py"));
    }

    #[test]
    fn test_relative_resolution_walks_up() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("pkg/sibling.tern"));
        touch(&root.join("shared.tern"));
        let requesting = root.join("pkg/editing.py");
        touch(&requesting);

        let config = ResolveConfig::new();
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        // from .sibling import X
        let resolved = resolver
            .resolve_module(&ModulePath::parse(".sibling"), &requesting)
            .unwrap();
        assert_eq!(resolved.path, root.join("pkg/sibling.tern"));

        // from ..shared import X
        let resolved = resolver
            .resolve_module(&ModulePath::parse("..shared"), &requesting)
            .unwrap();
        assert_eq!(resolved.path, root.join("shared.tern"));
    }

    #[test]
    fn test_module_not_found() {
        let dir = TempDir::new().unwrap();
        let config = ResolveConfig::new().with_host_root(dir.path());
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let err = resolver
            .resolve_module(&ModulePath::parse("package.submodule"), Path::new("/x.py"))
            .unwrap_err();

        assert!(matches!(err, NavError::ModuleNotFound { module } if module == "package.submodule"));
    }

    #[test]
    fn test_symbol_lookup_hits_declared_span() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let target = root.join("mymodule.tern");
        touch(&target);

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default()
            .with_table(&target, vec![decl("MyClass", SymbolKind::Type, 4)]);
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let location = resolver
            .resolve_symbol(&ModulePath::parse("mymodule"), "MyClass", Path::new("/x.py"))
            .unwrap();

        assert_eq!(location.file, target);
        assert_eq!(location.span.start, LineCol::new(4, 0));
    }

    #[test]
    fn test_symbol_not_found() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let target = root.join("mymodule.tern");
        touch(&target);

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default()
            .with_table(&target, vec![decl("MyClass", SymbolKind::Type, 4)]);
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let err = resolver
            .resolve_symbol(&ModulePath::parse("mymodule"), "Missing", Path::new("/x.py"))
            .unwrap_err();
        assert!(matches!(err, NavError::SymbolNotFound { .. }));
    }

    #[test]
    fn test_reexport_chain_is_followed() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let facade = root.join("pkg/mod.tern");
        let inner = root.join("pkg/widgets.tern");
        touch(&facade);
        touch(&inner);

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default()
            .with_table(
                &facade,
                vec![SymbolEntry::reexport("Widget", ".widgets", Span::zero())],
            )
            .with_table(&inner, vec![decl("Widget", SymbolKind::Type, 7)]);
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let location = resolver
            .resolve_symbol(&ModulePath::parse("pkg"), "Widget", Path::new("/x.py"))
            .unwrap();
        assert_eq!(location.file, inner);
        assert_eq!(location.span.start.line, 7);
    }

    #[test]
    fn test_cyclic_reexports_terminate() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let a = root.join("a.tern");
        let b = root.join("b.tern");
        touch(&a);
        touch(&b);

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default()
            .with_table(&a, vec![SymbolEntry::reexport("X", "b", Span::zero())])
            .with_table(&b, vec![SymbolEntry::reexport("X", "a", Span::zero())]);
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let err = resolver
            .resolve_symbol(&ModulePath::parse("a"), "X", Path::new("/x.py"))
            .unwrap_err();

        match err {
            NavError::CyclicImport { symbol, chain } => {
                assert_eq!(symbol, "X");
                assert!(chain.contains("a.tern") && chain.contains("b.tern"));
            }
            other => panic!("expected CyclicImport, got {other:?}"),
        }
    }

    #[test]
    fn test_from_package_import_submodule_falls_back() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(&root.join("pkg/mod.tern"));
        touch(&root.join("pkg/helper.tern"));

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default();
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        // `from pkg import helper`: not a symbol of pkg's entry file,
        // but a submodule.
        let location = resolver
            .resolve_symbol(&ModulePath::parse("pkg"), "helper", Path::new("/x.py"))
            .unwrap();
        assert_eq!(location.file, root.join("pkg/helper.tern"));
        assert_eq!(location.span, Span::zero());
    }

    #[test]
    fn test_compile_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let target = root.join("broken.tern");
        touch(&target);

        let config = ResolveConfig::new().with_host_root(root);
        let cache = FixtureCache::default().with_failure(&target);
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let err = resolver
            .resolve_symbol(&ModulePath::parse("broken"), "X", Path::new("/x.py"))
            .unwrap_err();
        assert!(matches!(err, NavError::Compile(_)));
    }

    /// Cache that reports `Compiling` a few times before the table is
    /// ready, like a concurrent request racing a compile.
    struct SlowCache {
        remaining: AtomicUsize,
        table: Arc<SymbolTable>,
    }

    impl ModuleCache for SlowCache {
        fn symbol_table(&self, _path: &Path) -> CompileOutcome {
            if self.remaining.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                CompileOutcome::Compiling
            } else {
                CompileOutcome::Ready(Arc::clone(&self.table))
            }
        }
    }

    #[test]
    fn test_compiling_outcome_is_polled_until_ready() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let target = root.join("mymodule.tern");
        touch(&target);

        let mut table = SymbolTable::new(FileId::new(0));
        table.insert(decl("MyClass", SymbolKind::Type, 2));
        let cache = SlowCache {
            remaining: AtomicUsize::new(3),
            table: Arc::new(table),
        };

        let config = ResolveConfig::new().with_host_root(root);
        let cancel = CancellationToken::new();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let location = resolver
            .resolve_symbol(&ModulePath::parse("mymodule"), "MyClass", Path::new("/x.py"))
            .unwrap();
        assert_eq!(location.span.start.line, 2);
    }

    #[test]
    fn test_cancellation_aborts_compile_wait() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let target = root.join("mymodule.tern");
        touch(&target);

        // Never becomes ready; only cancellation gets us out.
        let cache = SlowCache {
            remaining: AtomicUsize::new(usize::MAX),
            table: Arc::new(SymbolTable::new(FileId::new(0))),
        };

        let config = ResolveConfig::new().with_host_root(root);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let resolver = Resolver::new(&config, &cache, &cancel);

        let err = resolver
            .resolve_symbol(&ModulePath::parse("mymodule"), "MyClass", Path::new("/x.py"))
            .unwrap_err();
        assert!(matches!(err, NavError::Cancelled));
    }
}
