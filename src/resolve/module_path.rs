//! Dotted and relative module paths.

use std::fmt;

use smol_str::SmolStr;

/// A module reference as written at an import site: ordered name
/// segments plus the number of leading dots for relative references.
///
/// `ModulePath` is built fresh per request from the AST node under the
/// cursor and discarded when the request completes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModulePath {
    segments: Vec<SmolStr>,
    relative_level: u32,
}

impl ModulePath {
    /// An absolute path like `package.submodule`.
    pub fn absolute(segments: Vec<SmolStr>) -> Self {
        Self {
            segments,
            relative_level: 0,
        }
    }

    /// A relative path; `level` counts the leading dots, so
    /// `from .sibling import X` has level 1 and one segment.
    pub fn relative(level: u32, segments: Vec<SmolStr>) -> Self {
        Self {
            segments,
            relative_level: level,
        }
    }

    /// Parse a dotted string, counting leading dots as relative level.
    /// This is the format symbol tables use for re-export targets.
    pub fn parse(text: &str) -> Self {
        let level = text.chars().take_while(|&c| c == '.').count() as u32;
        let rest = &text[level as usize..];
        let segments = rest
            .split('.')
            .filter(|s| !s.is_empty())
            .map(SmolStr::new)
            .collect();
        Self {
            segments,
            relative_level: level,
        }
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn relative_level(&self) -> u32 {
        self.relative_level
    }

    pub fn is_relative(&self) -> bool {
        self.relative_level > 0
    }

    /// No segments at all — `from . import x` references the enclosing
    /// package itself.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first `len` segments, keeping the relative level. Used when
    /// the cursor sits on an inner segment of a dotted path.
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
            relative_level: self.relative_level,
        }
    }

    /// This path extended by one trailing segment. Used to retry
    /// `from pkg import name` as the submodule `pkg.name`.
    pub fn child(&self, segment: impl Into<SmolStr>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            segments,
            relative_level: self.relative_level,
        }
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.relative_level {
            write!(f, ".")?;
        }
        let mut first = true;
        for seg in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{seg}")?;
            first = false;
        }
        Ok(())
    }
}
