//! Circulation engine
//!
//! [`Services`] owns the [`Repository`]; each concern borrows it through a
//! short-lived handle (`members()`, `catalog()`, `loans()`), so every
//! operation runs against an explicitly passed store.

pub mod catalog;
pub mod loans;
pub mod members;

use chrono::{NaiveDate, Utc};
use std::fmt;

use crate::{config::CirculationConfig, repository::Repository};

/// Source of the current date for checkout and check-in stamps
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, UTC date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Container for the store and the services operating on it
pub struct Services {
    config: CirculationConfig,
    clock: Box<dyn Clock>,
    repository: Repository,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("config", &self.config)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl Services {
    /// Create services over an empty store, stamping dates from the wall clock
    pub fn new(config: CirculationConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: CirculationConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
            repository: Repository::new(),
        }
    }

    pub fn config(&self) -> &CirculationConfig {
        &self.config
    }

    /// Read-only view of the store
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn members(&mut self) -> members::MembersService<'_> {
        members::MembersService::new(&self.config, &mut self.repository)
    }

    pub fn catalog(&mut self) -> catalog::CatalogService<'_> {
        catalog::CatalogService::new(&self.config, &mut self.repository)
    }

    pub fn loans(&mut self) -> loans::LoansService<'_> {
        loans::LoansService::new(&self.config, self.clock.as_ref(), &mut self.repository)
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(CirculationConfig::default())
    }
}
