//! Domain store with per-resource request generations
//!
//! The store is the single owner of everything fetched from the backend.
//! Every fetch goes through [`Resource::begin_fetch`], which hands out a
//! monotonically increasing generation; the completion message carries that
//! generation back and [`Resource::complete`] rejects anything but the
//! current one. A late-arriving response from a superseded fetch (rapid
//! view switches, overlapping reloads) can therefore never overwrite newer
//! data.

use hatatest_core::{Category, ModelCatalog, Question, Stats, TestResult};

/// One fetched resource plus its request bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Resource<T> {
    data: T,
    generation: u64,
    loading: bool,
}

impl<T> Resource<T> {
    pub fn get(&self) -> &T {
        &self.data
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a new fetch: bumps the generation and returns it. Any fetch
    /// started earlier is superseded from this point on.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Accept fetched data if `generation` is still current.
    ///
    /// Returns `false` (and drops the data) when a newer fetch has started
    /// since this one was issued.
    pub fn complete(&mut self, generation: u64, data: T) -> bool {
        if generation != self.generation {
            return false;
        }
        self.data = data;
        self.loading = false;
        true
    }

    /// Record a failed fetch if `generation` is still current. The previous
    /// data stays in place either way.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }
}

/// All backend-owned data the client holds, as a transient read cache.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub stats: Resource<Stats>,
    pub models: Resource<ModelCatalog>,
    pub categories: Resource<Vec<Category>>,
    pub questions: Resource<Vec<Question>>,
    pub results: Resource<Vec<TestResult>>,
}
