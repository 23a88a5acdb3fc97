//! Provider matching - the multi-criteria filter/search/sort engine.
//!
//! [`FilterEngine`] is pure and synchronous: it takes the raw provider
//! collection, the user's [`FilterCriteria`], and the current instant,
//! and returns a new ranked vector. It is cheap enough to re-run on
//! every criterion change. [`MatchService`] is the async facade that
//! loads providers from a [`ProviderDirectory`] first.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::hours::{is_open_at, weekday_key};
use crate::traits::{Clock, ProviderDirectory};
use crate::types::{FilterCriteria, Provider};

/// Injected distance signal, in kilometers.
///
/// The engine never computes distance itself; production wires a
/// geodesic calculation here, tests a deterministic stub. `NaN` means
/// non-comparable and leaves relative order untouched.
pub type DistanceFn = Box<dyn Fn(&Provider) -> f64 + Send + Sync>;

/// Applies the filter predicates and orders the survivors by distance.
pub struct FilterEngine {
    distance: DistanceFn,
}

impl FilterEngine {
    /// Engine with an injected distance function.
    pub fn new(distance: impl Fn(&Provider) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            distance: Box::new(distance),
        }
    }

    /// Engine without a distance signal.
    ///
    /// Every provider ranks as non-comparable, so the input order is
    /// preserved.
    pub fn unranked() -> Self {
        Self::new(|_: &Provider| f64::NAN)
    }

    /// Filter and rank the provider collection.
    ///
    /// Predicates AND-combine in a fixed order; each is skipped entirely
    /// at its "no constraint" value. The input is not mutated; survivors
    /// are cloned into a new vector, sorted ascending by distance with a
    /// stable sort (ties and NaN keep their relative input order).
    pub fn filter(
        &self,
        providers: &[Provider],
        criteria: &FilterCriteria,
        now: NaiveDateTime,
    ) -> Vec<Provider> {
        let query = criteria.query.trim().to_lowercase();
        let today = weekday_key(now.weekday());
        let now_time = now.time();

        let mut ranked: Vec<(f64, Provider)> = providers
            .iter()
            .filter(|p| matches_category(p, criteria))
            .filter(|p| query.is_empty() || matches_query(p, &query))
            .filter(|p| {
                !criteria.open_now
                    || is_open_at(p.open_hours.get(today).map(String::as_str), now_time)
            })
            .filter(|p| matches_languages(p, criteria))
            .filter(|p| matches_budget(p, criteria))
            .filter(|p| !criteria.verified_only || p.verified)
            .filter(|p| !criteria.walk_ins_only || p.accepts_walkins)
            .map(|p| ((self.distance)(p), p.clone()))
            .collect();

        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        debug!(
            total = providers.len(),
            kept = ranked.len(),
            hour = now.hour(),
            "filtered providers"
        );

        ranked.into_iter().map(|(_, p)| p).collect()
    }
}

fn matches_category(provider: &Provider, criteria: &FilterCriteria) -> bool {
    match criteria.category {
        None => true,
        Some(category) => provider.category == category,
    }
}

fn matches_query(provider: &Provider, query: &str) -> bool {
    provider.name.to_lowercase().contains(query)
        || provider
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
        || provider.description.to_lowercase().contains(query)
}

fn matches_languages(provider: &Provider, criteria: &FilterCriteria) -> bool {
    criteria.languages.is_empty()
        || criteria
            .languages
            .iter()
            .any(|lang| provider.languages.contains(lang))
}

fn matches_budget(provider: &Provider, criteria: &FilterCriteria) -> bool {
    criteria.budgets.is_empty()
        || provider
            .budget
            .map_or(false, |tier| criteria.budgets.contains(&tier))
}

/// Async facade: load from the directory, then run the pure filter.
///
/// A superseded search is cancelled the usual way for futures: the UI
/// drops the stale future when it issues a new one.
///
/// # Example
///
/// ```rust,ignore
/// let service = MatchService::new(directory, FilterEngine::unranked(), Arc::new(SystemClock));
/// let results = service.search(&FilterCriteria::new().open_now()).await?;
/// ```
pub struct MatchService<D: ProviderDirectory> {
    directory: D,
    engine: FilterEngine,
    clock: Arc<dyn Clock>,
}

impl<D: ProviderDirectory> MatchService<D> {
    /// Create a new match service.
    pub fn new(directory: D, engine: FilterEngine, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            engine,
            clock,
        }
    }

    /// Load the directory and return the ranked result set.
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
    ) -> crate::error::DirectoryResult<Vec<Provider>> {
        let providers = self.directory.list().await?;
        Ok(self.engine.filter(&providers, criteria, self.clock.now()))
    }
}
