//! Grievance Board
//!
//! Session-only list of campus complaints with upvoting, filtering and
//! submission.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{next_id, Entity};
use crate::error::{FormError, FormResult, ParseError};

/// Progress of a grievance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrievanceStatus {
    Pending,
    InProgress,
    Resolved,
}

impl GrievanceStatus {
    pub const ALL: [GrievanceStatus; 3] = [
        GrievanceStatus::Pending,
        GrievanceStatus::InProgress,
        GrievanceStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrievanceStatus::Pending => "pending",
            GrievanceStatus::InProgress => "inProgress",
            GrievanceStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrievanceStatus::Pending => "Pending",
            GrievanceStatus::InProgress => "In Progress",
            GrievanceStatus::Resolved => "Resolved",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            GrievanceStatus::Pending => "status-badge badge-pending",
            GrievanceStatus::InProgress => "status-badge badge-in-progress",
            GrievanceStatus::Resolved => "status-badge badge-resolved",
        }
    }
}

impl FromStr for GrievanceStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrievanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::new("grievance status", s))
    }
}

/// Area a grievance is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrievanceCategory {
    #[default]
    Facilities,
    Labs,
    Library,
    Classroom,
    Hostel,
    Other,
}

impl GrievanceCategory {
    pub const ALL: [GrievanceCategory; 6] = [
        GrievanceCategory::Facilities,
        GrievanceCategory::Labs,
        GrievanceCategory::Library,
        GrievanceCategory::Classroom,
        GrievanceCategory::Hostel,
        GrievanceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrievanceCategory::Facilities => "facilities",
            GrievanceCategory::Labs => "labs",
            GrievanceCategory::Library => "library",
            GrievanceCategory::Classroom => "classroom",
            GrievanceCategory::Hostel => "hostel",
            GrievanceCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrievanceCategory::Facilities => "Facilities",
            GrievanceCategory::Labs => "Laboratories",
            GrievanceCategory::Library => "Library",
            GrievanceCategory::Classroom => "Classrooms",
            GrievanceCategory::Hostel => "Hostel",
            GrievanceCategory::Other => "Other",
        }
    }
}

impl FromStr for GrievanceCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrievanceCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseError::new("grievance category", s))
    }
}

pub const NO_GRIEVANCES: &str = "No grievances found for this filter.";

/// List filter: everything, one category, or one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrievanceFilter {
    #[default]
    All,
    Category(GrievanceCategory),
    Status(GrievanceStatus),
}

impl GrievanceFilter {
    /// Options offered by the list's filter select, in display order
    pub const OPTIONS: [GrievanceFilter; 8] = [
        GrievanceFilter::All,
        GrievanceFilter::Category(GrievanceCategory::Facilities),
        GrievanceFilter::Category(GrievanceCategory::Labs),
        GrievanceFilter::Category(GrievanceCategory::Library),
        GrievanceFilter::Category(GrievanceCategory::Hostel),
        GrievanceFilter::Status(GrievanceStatus::Pending),
        GrievanceFilter::Status(GrievanceStatus::InProgress),
        GrievanceFilter::Status(GrievanceStatus::Resolved),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrievanceFilter::All => "all",
            GrievanceFilter::Category(category) => category.as_str(),
            GrievanceFilter::Status(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrievanceFilter::All => "All Grievances",
            GrievanceFilter::Category(category) => category.label(),
            GrievanceFilter::Status(status) => status.label(),
        }
    }

    /// Shown when the board has nothing for this filter
    pub fn empty_message(&self) -> &'static str {
        NO_GRIEVANCES
    }

    pub fn accepts(&self, grievance: &Grievance) -> bool {
        match self {
            GrievanceFilter::All => true,
            GrievanceFilter::Category(category) => grievance.category == *category,
            GrievanceFilter::Status(status) => grievance.status == *status,
        }
    }
}

impl FromStr for GrievanceFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(GrievanceFilter::All);
        }
        if let Ok(category) = s.parse::<GrievanceCategory>() {
            return Ok(GrievanceFilter::Category(category));
        }
        s.parse::<GrievanceStatus>()
            .map(GrievanceFilter::Status)
            .map_err(|_| ParseError::new("grievance filter", s))
    }
}

/// A complaint record held in session memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grievance {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: GrievanceCategory,
    pub status: GrievanceStatus,
    pub date: NaiveDate,
    pub upvotes: u32,
    pub comments: u32,
    pub location: Option<String>,
}

impl Entity for Grievance {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Contents of the submission form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrievanceDraft {
    pub title: String,
    pub category: GrievanceCategory,
    pub description: String,
    pub location: String,
}

impl GrievanceDraft {
    /// Every text field is required
    pub fn validate(&self) -> FormResult<()> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingField("Title"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::MissingField("Description"));
        }
        if self.location.trim().is_empty() {
            return Err(FormError::MissingField("Specific Location"));
        }
        Ok(())
    }
}

/// Grievances of the current session, newest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GrievanceBoard {
    pub grievances: Vec<Grievance>,
}

impl GrievanceBoard {
    pub fn new(grievances: Vec<Grievance>) -> Self {
        Self { grievances }
    }

    /// Add one to the upvote counter of `id`. Repeated votes all count;
    /// an unknown id changes nothing. Returns the new count.
    pub fn upvote(&mut self, id: u32) -> Option<u32> {
        let Some(grievance) = self.grievances.iter_mut().find(|g| g.id == id) else {
            log::warn!("[GRIEVANCE] upvote for unknown id {}", id);
            return None;
        };
        grievance.upvotes += 1;
        Some(grievance.upvotes)
    }

    /// Validate `draft` and prepend it as a new pending grievance
    pub fn submit(&mut self, draft: GrievanceDraft, today: NaiveDate) -> FormResult<Grievance> {
        draft.validate()?;
        let grievance = Grievance {
            id: next_id(&self.grievances),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            status: GrievanceStatus::Pending,
            date: today,
            upvotes: 0,
            comments: 0,
            location: Some(draft.location.trim().to_string()),
        };
        log::debug!("[GRIEVANCE] filed #{} under {}", grievance.id, grievance.category.as_str());
        self.grievances.insert(0, grievance.clone());
        Ok(grievance)
    }

    pub fn filtered(&self, filter: GrievanceFilter) -> Vec<Grievance> {
        self.grievances.iter().filter(|g| filter.accepts(g)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.grievances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grievances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    }

    fn draft() -> GrievanceDraft {
        GrievanceDraft {
            title: "Broken fan".to_string(),
            category: GrievanceCategory::Hostel,
            description: "Room fan stopped working".to_string(),
            location: "Boys Hostel A, Room 12".to_string(),
        }
    }

    #[test]
    fn test_submit_prepends_exactly_one_pending() {
        let mut board = GrievanceBoard::new(catalog::grievances());
        let before = board.clone();

        let created = board.submit(draft(), today()).unwrap();

        assert_eq!(board.len(), before.len() + 1);
        assert_eq!(board.grievances[0], created);
        assert_eq!(&board.grievances[1..], &before.grievances[..]);
        assert_eq!(created.status, GrievanceStatus::Pending);
        assert_eq!(created.upvotes, 0);
        assert_eq!(created.comments, 0);
        assert_eq!(created.date, today());
        assert_eq!(created.id, 4);
    }

    #[test]
    fn test_submit_rejects_missing_fields() {
        let mut board = GrievanceBoard::default();
        let mut incomplete = draft();
        incomplete.location = "  ".to_string();

        assert_eq!(
            board.submit(incomplete, today()),
            Err(FormError::MissingField("Specific Location"))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn test_upvote_has_no_dedup() {
        let mut board = GrievanceBoard::new(catalog::grievances());
        assert_eq!(board.upvote(2), Some(25));
        assert_eq!(board.upvote(2), Some(26));
        assert_eq!(board.upvote(99), None);
        assert_eq!(board.grievances[0].upvotes, 15);
    }

    #[test]
    fn test_filter_by_category_or_status() {
        let board = GrievanceBoard::new(catalog::grievances());

        assert_eq!(board.filtered(GrievanceFilter::All).len(), 3);

        let labs = board.filtered("labs".parse().unwrap());
        assert_eq!(labs.len(), 1);
        assert_eq!(labs[0].id, 2);

        let in_progress = board.filtered("inProgress".parse().unwrap());
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, 1);

        assert!(board.filtered(GrievanceFilter::Category(GrievanceCategory::Hostel)).is_empty());
    }

    #[test]
    fn test_status_labels_and_wire_names() {
        assert_eq!(GrievanceStatus::InProgress.label(), "In Progress");
        assert_eq!(GrievanceStatus::InProgress.as_str(), "inProgress");
        assert_eq!(
            serde_json::to_string(&GrievanceStatus::InProgress).unwrap(),
            "\"inProgress\""
        );
        assert!("closed".parse::<GrievanceFilter>().is_err());
    }

    #[test]
    fn test_filter_options_round_trip() {
        for option in GrievanceFilter::OPTIONS {
            assert_eq!(option.as_str().parse::<GrievanceFilter>(), Ok(option));
        }
    }

    #[test]
    fn test_empty_board_message() {
        let board = GrievanceBoard::new(catalog::grievances());
        let hostel = GrievanceFilter::Category(GrievanceCategory::Hostel);
        assert!(board.filtered(hostel).is_empty());
        assert_eq!(hostel.empty_message(), "No grievances found for this filter.");
        assert_eq!(GrievanceFilter::All.empty_message(), NO_GRIEVANCES);
    }
}
