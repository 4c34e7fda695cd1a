use anyhow::{Context, Result};
use std::sync::Arc;

use crate::{config::Config, store::ClimateStore};

/// Shared handle given to every request handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClimateStore>,
}

impl AppState {
    pub async fn new(cfg: &Config) -> Result<Self> {
        let store = ClimateStore::open(&cfg.dataset.path)
            .await
            .with_context(|| format!("loading climate dataset from {}", cfg.dataset.path))?;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: ClimateStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
