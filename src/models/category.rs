use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Area of the workshop a maintenance task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Mechanical,
    Electrical,
    Hydraulics,
    Logistics,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mechanical => "Mechanical",
            Category::Electrical => "Electrical",
            Category::Hydraulics => "Hydraulics",
            Category::Logistics => "Logistics",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mechanical" => Ok(Category::Mechanical),
            "electrical" => Ok(Category::Electrical),
            "hydraulics" => Ok(Category::Hydraulics),
            "logistics" => Ok(Category::Logistics),
            "other" => Ok(Category::Other),
            _ => Err(AppError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
