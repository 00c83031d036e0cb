// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Bundles the record store, the injected random selector, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database::Database;
use fittrack_intelligence::{RandomSource, SeededSelector};
use tracing::info;

/// Resources shared across handlers behind an `Arc`
#[derive(Clone)]
pub struct ServerResources {
    /// Record store
    pub database: Database,
    /// Random selection for workout and meal plan recommendations
    pub selector: Arc<dyn RandomSource>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Build resources, seeding the selector from `RECOMMENDATION_SEED` when set
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let selector: Arc<dyn RandomSource> = match config.recommendation_seed {
            Some(seed) => {
                info!(seed, "Using seeded recommendation selector");
                Arc::new(SeededSelector::from_seed(seed))
            }
            None => Arc::new(SeededSelector::from_entropy()),
        };
        Self::with_selector(database, selector, config)
    }

    /// Build resources around an explicit selector
    #[must_use]
    pub fn with_selector(
        database: Database,
        selector: Arc<dyn RandomSource>,
        config: ServerConfig,
    ) -> Self {
        Self {
            database,
            selector,
            config: Arc::new(config),
        }
    }
}
