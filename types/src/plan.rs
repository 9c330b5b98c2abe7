//! Subscription plan tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subscription tier attached to a user account.
///
/// New accounts start on [`SubscriptionPlan::Free`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl SubscriptionPlan {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Free => "free",
            SubscriptionPlan::Pro => "pro",
            SubscriptionPlan::Enterprise => "enterprise",
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Free => "Free",
            SubscriptionPlan::Pro => "Pro",
            SubscriptionPlan::Enterprise => "Enterprise",
        }
    }

    /// Parse a plan from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(SubscriptionPlan::Free),
            "pro" | "professional" => Some(SubscriptionPlan::Pro),
            "enterprise" | "business" => Some(SubscriptionPlan::Enterprise),
            _ => None,
        }
    }

    /// All plan tiers, cheapest first.
    #[must_use]
    pub fn all() -> &'static [SubscriptionPlan] {
        &[
            SubscriptionPlan::Free,
            SubscriptionPlan::Pro,
            SubscriptionPlan::Enterprise,
        ]
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
