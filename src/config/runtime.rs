// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::engine::factory::PipelineFactory;
use crate::engine::PipelineCoordinator;
use crate::errors::PipelineError;

/// Pipeline runtime builder - opens the store and wires every collaborator
/// from configuration.
///
/// # Examples
///
/// ```
/// use pdf_digest::config::{Config, RuntimeBuilder};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let coordinator = RuntimeBuilder::from_config(&Config::default()).await?;
/// assert_eq!(coordinator.max_concurrency(), 5);
/// # Ok(())
/// # }
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a ready-to-run coordinator.
    ///
    /// The configuration is validated first. A store that cannot be opened is
    /// fatal: the error is returned before any document is dispatched.
    pub async fn from_config(cfg: &Config) -> Result<PipelineCoordinator, PipelineError> {
        cfg.validate()?;
        let store = PipelineFactory::open_store(&cfg.store)
            .await
            .map_err(PipelineError::StoreInit)?;
        Ok(PipelineFactory::from_config(cfg, store))
    }
}
