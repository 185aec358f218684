//! Resource Entity
//!
//! Bookable campus facilities (labs, library spaces, classrooms, hostel
//! units) and the search/status filter applied to them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::ParseError;

/// Live status of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Available,
    Busy,
    Unavailable,
    Maintenance,
}

impl ResourceStatus {
    pub const ALL: [ResourceStatus; 4] = [
        ResourceStatus::Available,
        ResourceStatus::Busy,
        ResourceStatus::Unavailable,
        ResourceStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "available",
            ResourceStatus::Busy => "busy",
            ResourceStatus::Unavailable => "unavailable",
            ResourceStatus::Maintenance => "maintenance",
        }
    }

    /// Text shown next to a status dot on a resource card
    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "Available",
            ResourceStatus::Busy => "Busy",
            ResourceStatus::Unavailable => "Unavailable",
            ResourceStatus::Maintenance => "Under Maintenance",
        }
    }

    /// Shorter text used in status legends and filter options
    pub fn legend_label(&self) -> &'static str {
        match self {
            ResourceStatus::Maintenance => "Maintenance",
            other => other.label(),
        }
    }

    /// CSS class of the coloured status dot
    pub fn css_class(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "status-indicator status-available",
            ResourceStatus::Busy => "status-indicator status-busy",
            ResourceStatus::Unavailable => "status-indicator status-unavailable",
            ResourceStatus::Maintenance => "status-indicator status-maintenance",
        }
    }
}

impl FromStr for ResourceStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::new("resource status", s))
    }
}

/// Which tab of the availability view a resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    #[default]
    Labs,
    Library,
    Classrooms,
    Hostel,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Labs,
        ResourceCategory::Library,
        ResourceCategory::Classrooms,
        ResourceCategory::Hostel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Labs => "labs",
            ResourceCategory::Library => "library",
            ResourceCategory::Classrooms => "classrooms",
            ResourceCategory::Hostel => "hostel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Labs => "Labs",
            ResourceCategory::Library => "Library",
            ResourceCategory::Classrooms => "Classrooms",
            ResourceCategory::Hostel => "Hostel",
        }
    }

    /// Message shown when the filter leaves a tab empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            ResourceCategory::Labs => "No laboratories found matching your criteria.",
            ResourceCategory::Library => "No library resources found matching your criteria.",
            ResourceCategory::Classrooms => "No classrooms found matching your criteria.",
            ResourceCategory::Hostel => "No hostel resources found matching your criteria.",
        }
    }

    /// Label of the card action button
    pub fn action_label(&self) -> &'static str {
        match self {
            ResourceCategory::Hostel => "Check Availability",
            _ => "Book Now",
        }
    }
}

impl FromStr for ResourceCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseError::new("resource category", s))
    }
}

/// A bookable campus facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ResourceStatus,
    pub details: Option<String>,
}

impl Resource {
    pub fn new(id: &str, name: &str, description: &str, status: ResourceStatus) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status,
            details: None,
        }
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Only available resources accept a booking request
    pub fn is_bookable(&self) -> bool {
        self.status == ResourceStatus::Available
    }

    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lower-cased.
    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

impl Entity for Resource {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Status filter of the availability view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ResourceStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::Only(status) => status.legend_label(),
        }
    }

    /// Every filter option in display order
    pub fn options() -> impl Iterator<Item = StatusFilter> {
        std::iter::once(StatusFilter::All).chain(ResourceStatus::ALL.into_iter().map(StatusFilter::Only))
    }

    pub fn accepts(&self, status: ResourceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<ResourceStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseError::new("status filter", s))
    }
}

/// Resources whose name or description contains `query` (case-insensitive)
/// and whose status passes `filter`. Input order is preserved.
pub fn filter_resources(resources: &[Resource], query: &str, filter: StatusFilter) -> Vec<Resource> {
    let needle = query.to_lowercase();
    resources
        .iter()
        .filter(|resource| resource.matches_query(&needle))
        .filter(|resource| filter.accepts(resource.status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_status_round_trip_strings() {
        assert_eq!("busy".parse::<ResourceStatus>(), Ok(ResourceStatus::Busy));
        assert!("closed".parse::<ResourceStatus>().is_err());
        assert_eq!(ResourceStatus::Maintenance.label(), "Under Maintenance");
        assert_eq!(ResourceStatus::Maintenance.legend_label(), "Maintenance");
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "available".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(ResourceStatus::Available))
        );
        assert!("everything".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::options().count(), 5);
    }

    #[test]
    fn test_empty_query_all_filter_keeps_everything() {
        let labs = catalog::resources(ResourceCategory::Labs);
        assert_eq!(filter_resources(&labs, "", StatusFilter::All), labs);
    }

    #[test]
    fn test_query_is_case_insensitive_on_name_and_description() {
        let labs = catalog::resources(ResourceCategory::Labs);

        let by_name = filter_resources(&labs, "PHYSICS", StatusFilter::All);
        let ids: Vec<_> = by_name.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["lab1", "lab2"]);

        let by_description = filter_resources(&labs, "networking", StatusFilter::All);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Computer Lab 2");
    }

    #[test]
    fn test_query_and_status_combine_conjunctively() {
        let labs = catalog::resources(ResourceCategory::Labs);
        let hits = filter_resources(&labs, "chemistry", StatusFilter::Only(ResourceStatus::Available));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "lab4");
    }

    #[test]
    fn test_filter_matches_definition_over_whole_catalog() {
        let queries = ["", "lab", "ROOM", "hostel", "study", "zzz"];
        for category in ResourceCategory::ALL {
            let resources = catalog::resources(category);
            for filter in StatusFilter::options() {
                for query in queries {
                    let needle = query.to_lowercase();
                    let expected: Vec<Resource> = resources
                        .iter()
                        .filter(|r| {
                            (r.name.to_lowercase().contains(&needle)
                                || r.description.to_lowercase().contains(&needle))
                                && filter.accepts(r.status)
                        })
                        .cloned()
                        .collect();
                    assert_eq!(filter_resources(&resources, query, filter), expected);
                }
            }
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let hostel = catalog::resources(ResourceCategory::Hostel);
        assert!(filter_resources(&hostel, "guest", StatusFilter::Only(ResourceStatus::Busy)).is_empty());
    }

    #[test]
    fn test_bookable_and_action_label() {
        let resource = Resource::new("x", "X", "Y", ResourceStatus::Busy);
        assert!(!resource.is_bookable());
        assert_eq!(ResourceCategory::Hostel.action_label(), "Check Availability");
        assert_eq!(ResourceCategory::Labs.action_label(), "Book Now");
    }
}
