//! Resource Feedback
//!
//! Draft of the feedback form and its validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult, ParseError};

/// Resource type options of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Lab,
    Library,
    Classroom,
    Hostel,
    Sports,
    Other,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Lab,
        ResourceKind::Library,
        ResourceKind::Classroom,
        ResourceKind::Hostel,
        ResourceKind::Sports,
        ResourceKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Lab => "lab",
            ResourceKind::Library => "library",
            ResourceKind::Classroom => "classroom",
            ResourceKind::Hostel => "hostel",
            ResourceKind::Sports => "sports",
            ResourceKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Lab => "Laboratory",
            ResourceKind::Library => "Library",
            ResourceKind::Classroom => "Classroom",
            ResourceKind::Hostel => "Hostel",
            ResourceKind::Sports => "Sports Facility",
            ResourceKind::Other => "Other",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::new("resource type", s))
    }
}

/// A 1 to 5 star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> FormResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(FormError::InvalidRating(stars))
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    /// All ratings, best first, as the select lists them
    pub fn options() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    /// "⭐⭐⭐⭐ Good"
    pub fn label(&self) -> String {
        let word = match self.0 {
            5 => "Excellent",
            4 => "Good",
            3 => "Average",
            2 => "Below Average",
            _ => "Poor",
        };
        format!("{} {}", "⭐".repeat(self.0 as usize), word)
    }
}

/// Contents of the feedback form; selects start unset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackDraft {
    pub resource_kind: Option<ResourceKind>,
    pub resource_name: String,
    pub rating: Option<Rating>,
    pub feedback: String,
    pub suggestions: String,
}

impl FeedbackDraft {
    /// Everything except suggestions is required
    pub fn validate(&self) -> FormResult<()> {
        if self.resource_kind.is_none() {
            return Err(FormError::MissingField("Resource Type"));
        }
        if self.resource_name.trim().is_empty() {
            return Err(FormError::MissingField("Resource Name/Number"));
        }
        if self.rating.is_none() {
            return Err(FormError::MissingField("Rating"));
        }
        if self.feedback.trim().is_empty() {
            return Err(FormError::MissingField("Your Feedback"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FeedbackDraft {
        FeedbackDraft {
            resource_kind: Some(ResourceKind::Lab),
            resource_name: "Physics Lab 2".to_string(),
            rating: Some(Rating::new(4).unwrap()),
            feedback: "Clean and well equipped".to_string(),
            suggestions: String::new(),
        }
    }

    #[test]
    fn test_complete_draft_is_valid_without_suggestions() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let mut draft = complete();
        draft.resource_kind = None;
        assert_eq!(draft.validate(), Err(FormError::MissingField("Resource Type")));

        let mut draft = complete();
        draft.rating = None;
        assert_eq!(draft.validate(), Err(FormError::MissingField("Rating")));

        let mut draft = complete();
        draft.feedback = "\n".to_string();
        assert_eq!(draft.validate(), Err(FormError::MissingField("Your Feedback")));
    }

    #[test]
    fn test_rating_bounds_and_labels() {
        assert_eq!(Rating::new(0), Err(FormError::InvalidRating(0)));
        assert_eq!(Rating::new(6), Err(FormError::InvalidRating(6)));
        assert_eq!(Rating::new(5).unwrap().label(), "⭐⭐⭐⭐⭐ Excellent");
        assert_eq!(Rating::new(1).unwrap().label(), "⭐ Poor");

        let stars: Vec<u8> = Rating::options().map(|r| r.stars()).collect();
        assert_eq!(stars, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_resource_kind_parse() {
        assert_eq!("sports".parse::<ResourceKind>(), Ok(ResourceKind::Sports));
        assert_eq!(ResourceKind::Sports.label(), "Sports Facility");
        assert!("gym".parse::<ResourceKind>().is_err());
    }
}
