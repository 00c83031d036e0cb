// ABOUTME: Injected random selection used by workout and meal plan recommendations
// ABOUTME: Seedable ChaCha implementation so recommendations are reproducible in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Mutex;

use fittrack_core::errors::{AppError, AppResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed indices
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`, or `None` when `len` is zero
    fn pick_index(&self, len: usize) -> AppResult<Option<usize>>;
}

/// Choose one item uniformly at random
pub fn choose<'a, T, R>(source: &R, items: &'a [T]) -> AppResult<Option<&'a T>>
where
    R: RandomSource + ?Sized,
{
    Ok(source.pick_index(items.len())?.and_then(|i| items.get(i)))
}

/// ChaCha8-backed selector; identical seeds produce identical picks
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededSelector {
    /// Deterministic selector
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Selector seeded from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }
}

impl RandomSource for SeededSelector {
    fn pick_index(&self, len: usize) -> AppResult<Option<usize>> {
        if len == 0 {
            return Ok(None);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::internal("Random selector lock poisoned"))?;
        Ok(Some(rng.gen_range(0..len)))
    }
}
