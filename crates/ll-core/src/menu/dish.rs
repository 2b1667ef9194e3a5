use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu section a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Starters,
        Category::Mains,
        Category::Desserts,
        Category::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dish category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub title: String,
    pub description: String,
    /// Decimal amount kept as text, e.g. `"12.99"`.
    pub price: String,
    pub category: Category,
    #[serde(alias = "image")]
    pub image_url: String,
}

impl Dish {
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}
