//! Filter criteria - the user's current constraints on the result set.
//!
//! Ephemeral and UI-owned; recomputed per interaction, never persisted.

use serde::{Deserialize, Serialize};

use super::provider::{BudgetTier, Category};

/// User-chosen constraints for [`FilterEngine`](crate::matching::FilterEngine).
///
/// Every field has a "no constraint" value at which its predicate is
/// skipped entirely: `None` category (the "all" chip), an empty or
/// whitespace-only query, `open_now: false`, empty language and budget
/// sets, and the two booleans at `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected category; `None` means "all".
    pub category: Option<Category>,

    /// Free-text search over name, tags, and description.
    pub query: String,

    /// Keep only providers whose declared hours cover the current instant.
    pub open_now: bool,

    /// Requested language codes; empty imposes no constraint.
    pub languages: Vec<String>,

    /// Requested budget tiers; empty imposes no constraint.
    pub budgets: Vec<BudgetTier>,

    /// Keep only verified providers.
    pub verified_only: bool,

    /// Keep only providers that accept walk-ins.
    pub walk_ins_only: bool,

    /// Maximum distance in kilometers.
    ///
    /// Advisory: carried for the UI slider, not applied as a predicate,
    /// since real distance is supplied externally.
    pub max_distance_km: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: None,
            query: String::new(),
            open_now: false,
            languages: Vec::new(),
            budgets: Vec::new(),
            verified_only: false,
            walk_ins_only: false,
            max_distance_km: 10.0,
        }
    }
}

impl FilterCriteria {
    /// Criteria with every constraint at its "no constraint" value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Enable the open-now constraint.
    pub fn open_now(mut self) -> Self {
        self.open_now = true;
        self
    }

    /// Add a requested language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Add a requested budget tier.
    pub fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budgets.push(budget);
        self
    }

    /// Keep only verified providers.
    pub fn verified_only(mut self) -> Self {
        self.verified_only = true;
        self
    }

    /// Keep only providers accepting walk-ins.
    pub fn walk_ins_only(mut self) -> Self {
        self.walk_ins_only = true;
        self
    }

    /// Set the advisory distance bound.
    pub fn with_max_distance_km(mut self, km: f64) -> Self {
        self.max_distance_km = km;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_imposes_no_constraints() {
        let criteria = FilterCriteria::default();
        assert!(criteria.category.is_none());
        assert!(criteria.query.is_empty());
        assert!(!criteria.open_now);
        assert!(criteria.languages.is_empty());
        assert!(criteria.budgets.is_empty());
        assert!(!criteria.verified_only);
        assert!(!criteria.walk_ins_only);
    }

    #[test]
    fn test_builder_accumulates() {
        let criteria = FilterCriteria::new()
            .with_category(Category::Medical)
            .with_query("pharmacy")
            .open_now()
            .with_language("EN")
            .with_budget(BudgetTier::Low);

        assert_eq!(criteria.category, Some(Category::Medical));
        assert_eq!(criteria.query, "pharmacy");
        assert!(criteria.open_now);
        assert_eq!(criteria.languages, vec!["EN"]);
        assert_eq!(criteria.budgets, vec![BudgetTier::Low]);
    }
}
