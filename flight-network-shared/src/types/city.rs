//! City records.

use serde::{Deserialize, Serialize};

/// A city node. Cities are the entry point of every airport lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub country: String,
}

/// Input for registering a new city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub name: String,
    pub country: String,
}

impl From<NewCity> for City {
    fn from(city: NewCity) -> Self {
        Self {
            name: city.name,
            country: city.country,
        }
    }
}
