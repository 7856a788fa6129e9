//! Event categories and the fixed category-to-color table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvcalError;

/// The fixed set of event types driving calendar colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Theatre,
    Meeting,
    Training,
    Joint,
    Class,
    Learning,
    Other,
    Holiday,
}

impl Category {
    /// All categories, in the order the legend shows them.
    pub const ALL: [Category; 9] = [
        Category::Education,
        Category::Theatre,
        Category::Meeting,
        Category::Training,
        Category::Joint,
        Category::Class,
        Category::Learning,
        Category::Other,
        Category::Holiday,
    ];

    /// The CSS color used for both fill and border of this category's events.
    pub fn color(self) -> &'static str {
        match self {
            Category::Education => "lightsalmon",
            Category::Theatre => "yellowgreen",
            Category::Meeting => "pink",
            Category::Training => "red",
            Category::Joint => "indianred",
            Category::Class => "sandybrown",
            Category::Learning => "mediumaquamarine",
            Category::Other => "mediumturquoise",
            Category::Holiday => "red",
        }
    }

    /// Human-readable label shown in the category legend.
    pub fn label(self) -> &'static str {
        match self {
            Category::Education => "Education project",
            Category::Theatre => "Theatre/Concert",
            Category::Meeting => "Meeting",
            Category::Training => "Training",
            Category::Joint => "Joint event",
            Category::Class => "Class event",
            Category::Learning => "Learning activity",
            Category::Other => "Other event",
            Category::Holiday => "Public holidays",
        }
    }

    /// The lowercase key used on the wire and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Theatre => "theatre",
            Category::Meeting => "meeting",
            Category::Training => "training",
            Category::Joint => "joint",
            Category::Class => "class",
            Category::Learning => "learning",
            Category::Other => "other",
            Category::Holiday => "holiday",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = EvcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| EvcalError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_table() {
        assert_eq!(Category::Education.color(), "lightsalmon");
        assert_eq!(Category::Theatre.color(), "yellowgreen");
        assert_eq!(Category::Meeting.color(), "pink");
        assert_eq!(Category::Training.color(), "red");
        assert_eq!(Category::Joint.color(), "indianred");
        assert_eq!(Category::Class.color(), "sandybrown");
        assert_eq!(Category::Learning.color(), "mediumaquamarine");
        assert_eq!(Category::Other.color(), "mediumturquoise");
        assert_eq!(Category::Holiday.color(), "red");
    }

    #[test]
    fn key_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "birthday".parse::<Category>().unwrap_err();
        assert!(matches!(err, EvcalError::UnknownCategory(_)));
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        assert_eq!(
            serde_json::to_string(&Category::Education).unwrap(),
            "\"education\""
        );
        let parsed: Category = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(parsed, Category::Holiday);
    }
}
