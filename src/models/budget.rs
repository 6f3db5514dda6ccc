//! Category budget model
//!
//! A monthly spending ceiling for one category.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Monthly budget for a single category (keyed by category)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category: String,
    pub budget: Money,
}

impl CategoryBudget {
    pub fn new(category: impl Into<String>, budget: Money) -> Self {
        Self {
            category: category.into(),
            budget,
        }
    }
}
