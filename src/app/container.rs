//! Dependency injection container for experiment runs.
//!
//! The container owns the choice of storage backend and the default seed, and
//! wires the tree generator and the search engine into the
//! generate-then-search contract used by the sweep and the CLI.

use rand::random;
use serde::Serialize;
use tracing::info;

use super::config::{ExperimentConfig, StorageLocation};
use crate::{
    Result,
    adapters::{InMemoryEdgeStore, SqliteEdgeStore},
    ports::{EdgeStore, SearchObserver},
    search::{SearchEngine, SearchResult},
    tree::{GenerationReport, TreeGenerator},
};

/// Outcome of [`App::run`].
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentOutcome {
    /// Seed the weight sampler was initialised with
    pub seed: u64,
    pub generation: GenerationReport,
    pub search: SearchResult,
}

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use dfbnb::app::{App, ExperimentConfig};
/// use dfbnb::tree::CostDistribution;
///
/// let app = App::new();
/// let config = ExperimentConfig::new(3, 4, CostDistribution::Uniform).with_seed(42);
/// let outcome = app.run(&config)?;
/// assert_eq!(outcome.search.optimal_path.len(), 5);
/// # Ok::<(), dfbnb::Error>(())
/// ```
///
/// ## Testing with an injected backend
///
/// ```
/// use dfbnb::app::{App, StorageLocation};
///
/// let app = App::for_testing()
///     .with_storage(StorageLocation::Memory)
///     .with_default_seed(42)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Backend used for every run regardless of the config's location
    storage_override: Option<StorageLocation>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Each config's own storage location is honoured and unseeded configs
    /// draw a fresh seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Storage location a run of `config` will use.
    pub fn storage_for<'a>(&'a self, config: &'a ExperimentConfig) -> &'a StorageLocation {
        self.storage_override.as_ref().unwrap_or(&config.storage)
    }

    /// Seed a run of `config` will use: the config's, else the app default,
    /// else fresh entropy.
    pub fn resolve_seed(&self, config: &ExperimentConfig) -> u64 {
        config.seed.or(self.default_seed).unwrap_or_else(random)
    }

    /// Open the edge store backing `config`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be opened.
    pub fn open_store(&self, config: &ExperimentConfig) -> Result<Box<dyn EdgeStore>> {
        Ok(match self.storage_for(config) {
            StorageLocation::Sqlite(path) => Box::new(SqliteEdgeStore::open(path)?),
            StorageLocation::SqliteInMemory => Box::new(SqliteEdgeStore::open_in_memory()?),
            StorageLocation::Memory => Box::new(InMemoryEdgeStore::new()),
        })
    }

    /// Generate the configured tree into its store, replacing prior content.
    ///
    /// Only useful for persistent locations; in-memory stores are discarded
    /// when this returns.
    pub fn generate(&self, config: &ExperimentConfig) -> Result<(u64, GenerationReport)> {
        config.tree.validate()?;
        let seed = self.resolve_seed(config);
        let mut store = self.open_store(config)?;
        let report = TreeGenerator::seeded(seed).generate(&config.tree, &mut store)?;
        Ok((seed, report))
    }

    /// Search a tree generated earlier into the configured store.
    pub fn search(&self, config: &ExperimentConfig) -> Result<SearchResult> {
        config.tree.validate()?;
        let store = self.open_store(config)?;
        SearchEngine::new(&store, &config.tree)?.run()
    }

    /// Like [`App::search`], reporting every search event to `observer`.
    pub fn search_observed<O: SearchObserver>(
        &self,
        config: &ExperimentConfig,
        observer: O,
    ) -> Result<SearchResult> {
        config.tree.validate()?;
        let store = self.open_store(config)?;
        SearchEngine::new(&store, &config.tree)?
            .with_observer(observer)
            .run()
    }

    /// Generate then search on the same store.
    ///
    /// # Errors
    ///
    /// Configuration errors are raised before the store is opened; storage
    /// and inconsistency errors are propagated unchanged.
    pub fn run(&self, config: &ExperimentConfig) -> Result<ExperimentOutcome> {
        self.run_observed(config, crate::ports::NullObserver)
    }

    /// Like [`App::run`], reporting every search event to `observer`.
    pub fn run_observed<O: SearchObserver>(
        &self,
        config: &ExperimentConfig,
        observer: O,
    ) -> Result<ExperimentOutcome> {
        config.tree.validate()?;
        let seed = self.resolve_seed(config);
        let mut store = self.open_store(config)?;
        info!(
            storage = %self.storage_for(config),
            seed,
            "Running experiment"
        );

        let generation = TreeGenerator::seeded(seed).generate(&config.tree, &mut store)?;
        let search = SearchEngine::new(&store, &config.tree)?
            .with_observer(observer)
            .run()?;

        Ok(ExperimentOutcome {
            seed,
            generation,
            search,
        })
    }
}

/// Builder for constructing an app with custom dependencies.
///
/// # Examples
///
/// ```
/// use dfbnb::app::{AppBuilder, StorageLocation};
///
/// let app = AppBuilder::new()
///     .with_storage(StorageLocation::SqliteInMemory)
///     .with_default_seed(7)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppBuilder {
    storage_override: Option<StorageLocation>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every run onto `storage`, ignoring the config's location.
    pub fn with_storage(mut self, storage: StorageLocation) -> Self {
        self.storage_override = Some(storage);
        self
    }

    /// Set a default random seed for configs that carry none.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    pub fn build(self) -> App {
        App {
            storage_override: self.storage_override,
            default_seed: self.default_seed,
        }
    }
}
