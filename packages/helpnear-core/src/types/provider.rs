//! Provider model - directory entries for help/service organizations.
//!
//! Providers are owned by an external directory and read-only to this
//! crate; every field mirrors what the directory publishes.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ProviderId;

/// Provider category.
///
/// A fixed enumeration; the "all" filter value is not a category and is
/// modeled as `Option<Category>` on [`FilterCriteria`](super::criteria::FilterCriteria).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Medical,
    SocialSupport,
    Repair,
    Volunteers,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Medical,
        Category::SocialSupport,
        Category::Repair,
        Category::Volunteers,
    ];

    /// Human-readable label for chips and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Medical => "Medical",
            Category::SocialSupport => "Social Support",
            Category::Repair => "Repair",
            Category::Volunteers => "Volunteers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Medical => write!(f, "medical"),
            Category::SocialSupport => write!(f, "social_support"),
            Category::Repair => write!(f, "repair"),
            Category::Volunteers => write!(f, "volunteers"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medical" => Ok(Category::Medical),
            "social_support" => Ok(Category::SocialSupport),
            "repair" => Ok(Category::Repair),
            "volunteers" => Ok(Category::Volunteers),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// Budget tier, ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTier::Low => write!(f, "low"),
            BudgetTier::Medium => write!(f, "medium"),
            BudgetTier::High => write!(f, "high"),
        }
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(BudgetTier::Low),
            "medium" => Ok(BudgetTier::Medium),
            "high" => Ok(BudgetTier::High),
            _ => Err(format!("Invalid budget tier: {}", s)),
        }
    }
}

/// A directory entry for a help/service organization or individual.
///
/// `open_hours` maps lowercase weekday keys (`"monday"` .. `"sunday"`) to
/// either the literal `"Closed"` marker or a `"HH:MM-HH:MM"` range. At
/// most one entry per weekday; a missing key reads as closed for the
/// open-now filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub category: Category,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Spoken-language codes, in the provider's preference order.
    #[serde(default)]
    pub languages: Vec<String>,

    pub budget: Option<BudgetTier>,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub accepts_walkins: bool,

    /// Community trust score in `0.0..=5.0`, when rated.
    pub trust_score: Option<f32>,

    pub phone: String,
    pub email: Option<String>,
    pub address: String,

    #[serde(default)]
    pub open_hours: HashMap<String, String>,
}

impl Provider {
    /// Create a provider with the required fields; optional attributes
    /// default to empty and can be filled in with the `with_*` methods.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ProviderId::new(),
            name: name.into(),
            category,
            description: String::new(),
            tags: Vec::new(),
            languages: Vec::new(),
            budget: None,
            verified: false,
            accepts_walkins: false,
            trust_score: None,
            phone: String::new(),
            email: None,
            address: String::new(),
            open_hours: HashMap::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a spoken language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Set the budget tier.
    pub fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Mark the provider as verified.
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Mark the provider as accepting walk-ins.
    pub fn accepts_walkins(mut self) -> Self {
        self.accepts_walkins = true;
        self
    }

    /// Set the trust score.
    pub fn with_trust_score(mut self, score: f32) -> Self {
        self.trust_score = Some(score);
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the hours for one weekday key.
    pub fn with_hours(mut self, day: impl Into<String>, hours: impl Into<String>) -> Self {
        self.open_hours.insert(day.into(), hours.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn test_category_rejects_all_pseudo_value() {
        // "all" is a filter value, never provider data
        assert!("all".parse::<Category>().is_err());
    }

    #[test]
    fn test_budget_tier_roundtrip() {
        for tier in [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High] {
            let parsed: BudgetTier = tier.to_string().parse().unwrap();
            assert_eq!(tier, parsed);
        }
    }

    #[test]
    fn test_budget_tiers_are_ordered() {
        assert!(BudgetTier::Low < BudgetTier::Medium);
        assert!(BudgetTier::Medium < BudgetTier::High);
    }

    #[test]
    fn test_provider_deserializes_with_missing_optionals() {
        let provider: Provider = serde_json::from_value(serde_json::json!({
            "id": uuid::Uuid::now_v7(),
            "name": "City Clinic",
            "category": "medical",
            "budget": null,
            "trust_score": null,
            "phone": "+420123456789",
            "email": null,
            "address": "Main St 1"
        }))
        .unwrap();

        assert_eq!(provider.name, "City Clinic");
        assert_eq!(provider.category, Category::Medical);
        assert!(provider.tags.is_empty());
        assert!(provider.open_hours.is_empty());
        assert!(!provider.verified);
    }
}
