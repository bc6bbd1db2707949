//! Backend registry: maps curve names to concrete group implementations
//!
//! Several backend libraries may claim support for the same curve; the
//! registry picks one by priority. Registration is a write phase that
//! completes during process initialization, before any resolution.
//! Concurrent registration and resolution is unsupported by contract, so
//! resolution itself is a pure, lock-free read.

use crate::error::{Error, Result};
use crate::group::EcGroup;
use crate::meta::CurveMeta;

/// Predicate deciding whether a backend supports a requested curve.
pub type SupportsFn = fn(&CurveMeta) -> bool;

/// Factory building a group implementation for a supported curve.
pub type CreateFn = fn(&CurveMeta) -> Result<Box<dyn EcGroup>>;

struct LibraryEntry {
    name: &'static str,
    priority: u32,
    supports: SupportsFn,
    create: CreateFn,
}

/// Ordered table of backend libraries.
///
/// Library names are unique keys; entries are kept in registration
/// order, which makes resolution deterministic.
#[derive(Default)]
pub struct Registry {
    entries: Vec<LibraryEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
        }
    }

    /// Register one backend library.
    ///
    /// `priority` ranks this library against others claiming the same
    /// curve; higher wins. Fails with
    /// [`Error::DuplicateLibrary`] if `name` is already registered.
    pub fn register(
        &mut self,
        name: &'static str,
        priority: u32,
        supports: SupportsFn,
        create: CreateFn,
    ) -> Result<()> {
        if self.entries.iter().any(|e| e.name == name) {
            return Err(Error::DuplicateLibrary {
                name: name.to_string(),
            });
        }
        self.entries.push(LibraryEntry {
            name,
            priority,
            supports,
            create,
        });
        Ok(())
    }

    /// Names of all registered libraries, in registration order.
    pub fn library_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Resolve a curve to the implementation of the highest-priority
    /// supporting library.
    ///
    /// The scan runs in registration order and replaces the candidate
    /// only on strictly greater priority, so between two libraries with
    /// equal priority the first registered wins. Fails with
    /// [`Error::UnsupportedCurve`] if no library supports the curve.
    pub fn resolve(&self, meta: &CurveMeta) -> Result<Box<dyn EcGroup>> {
        let mut best: Option<&LibraryEntry> = None;
        for entry in &self.entries {
            if !(entry.supports)(meta) {
                continue;
            }
            match best {
                Some(current) if entry.priority <= current.priority => {}
                _ => best = Some(entry),
            }
        }
        match best {
            Some(entry) => (entry.create)(meta),
            None => Err(Error::UnsupportedCurve {
                name: meta.name.clone(),
            }),
        }
    }
}
