//! Mock Catalog
//!
//! Hard-coded campus data shown by the dashboard. Every call returns a
//! fresh copy so each mounted view starts from the same literals.

use chrono::NaiveDate;

use crate::event::{CampusEvent, EventType};
use crate::grievance::{Grievance, GrievanceCategory, GrievanceStatus};
use crate::resource::{Resource, ResourceCategory, ResourceStatus};

use ResourceStatus::{Available, Busy, Maintenance, Unavailable};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Resources of one availability tab
pub fn resources(category: ResourceCategory) -> Vec<Resource> {
    match category {
        ResourceCategory::Labs => vec![
            Resource::new("lab1", "Physics Lab 1", "General Physics Laboratory", Busy).with_details("Currently in use for PHY101"),
            Resource::new("lab2", "Physics Lab 2", "Advanced Physics Laboratory", Available).with_details("All equipment operational"),
            Resource::new("lab3", "Chemistry Lab 1", "General Chemistry Laboratory", Maintenance).with_details("Under renovation until May 5th"),
            Resource::new("lab4", "Chemistry Lab 2", "Organic Chemistry Laboratory", Available),
            Resource::new("lab5", "Computer Lab 1", "Programming Laboratory", Busy).with_details("CS301 session in progress"),
            Resource::new("lab6", "Computer Lab 2", "Networking Laboratory", Available),
        ],
        ResourceCategory::Library => vec![
            Resource::new("lib1", "Main Reading Hall", "Quiet study space", Busy).with_details("80% occupied"),
            Resource::new("lib2", "Group Study Room 1", "Collaborative work space", Available),
            Resource::new("lib3", "Group Study Room 2", "Collaborative work space", Unavailable).with_details("Reserved until 5 PM"),
            Resource::new("lib4", "Computer Terminal Section", "Digital resources access", Available).with_details("15 computers available"),
            Resource::new("lib5", "Periodicals Section", "Journals and magazines", Available),
            Resource::new("lib6", "Reference Section", "Non-borrowable resources", Available),
        ],
        ResourceCategory::Classrooms => vec![
            Resource::new("class1", "Classroom 101", "Large lecture hall", Busy).with_details("In use until 2 PM"),
            Resource::new("class2", "Classroom 102", "Medium lecture room", Available),
            Resource::new("class3", "Classroom 201", "Small tutorial room", Available),
            Resource::new("class4", "Classroom 202", "Medium lecture room", Maintenance).with_details("Projector repair"),
            Resource::new("class5", "Seminar Hall", "Large presentation room", Unavailable).with_details("Reserved for conference"),
            Resource::new("class6", "Tutorial Room 301", "Small discussion room", Available),
        ],
        ResourceCategory::Hostel => vec![
            Resource::new("hostel1", "Boys Hostel A", "Undergraduate hostel", Busy).with_details("95% occupied"),
            Resource::new("hostel2", "Boys Hostel B", "Postgraduate hostel", Available).with_details("Rooms available on 2nd floor"),
            Resource::new("hostel3", "Girls Hostel A", "Undergraduate hostel", Busy).with_details("98% occupied"),
            Resource::new("hostel4", "Girls Hostel B", "Postgraduate hostel", Available).with_details("Limited rooms available"),
            Resource::new("hostel5", "Guest House", "Visitor accommodation", Available),
            Resource::new("hostel6", "Married Student Housing", "Family accommodation", Unavailable).with_details("Waiting list active"),
        ],
    }
}

/// Dashboard quick-access cards
pub fn quick_access_resources() -> Vec<Resource> {
    vec![
        Resource::new("qa1", "Computer Lab 2", "Programming Laboratory", Available).with_details("30 workstations"),
        Resource::new("qa2", "Library Study Room 1", "Group study space", Available),
        Resource::new("qa3", "Lecture Hall 101", "Large classroom", Busy).with_details("In use until 2 PM"),
        Resource::new("qa4", "Physics Lab", "Experimental lab", Maintenance).with_details("Under renovation"),
    ]
}

pub fn calendar_events() -> Vec<CampusEvent> {
    vec![
        CampusEvent::new(1, "Technical Symposium", ymd(2025, 4, 26), EventType::Academic),
        CampusEvent::new(2, "Annual Sports Meet", ymd(2025, 4, 28), EventType::Sports),
        CampusEvent::new(3, "Library Maintenance", ymd(2025, 4, 30), EventType::Maintenance),
        CampusEvent::new(4, "Cultural Festival", ymd(2025, 5, 5), EventType::Cultural),
        CampusEvent::new(5, "Research Conference", ymd(2025, 5, 10), EventType::Academic),
    ]
}

/// Seed list of the grievance board
pub fn grievances() -> Vec<Grievance> {
    vec![
        Grievance {
            id: 1,
            title: "Insufficient lighting in Science Block".to_string(),
            description: "The lighting in Science Block corridors is very dim, making it difficult to navigate during evening classes.".to_string(),
            category: GrievanceCategory::Facilities,
            status: GrievanceStatus::InProgress,
            date: ymd(2025, 4, 10),
            upvotes: 15,
            comments: 3,
            location: None,
        },
        Grievance {
            id: 2,
            title: "Outdated equipment in Computer Lab 3".to_string(),
            description: "The computers in Lab 3 are extremely slow and some have non-functional peripherals.".to_string(),
            category: GrievanceCategory::Labs,
            status: GrievanceStatus::Pending,
            date: ymd(2025, 4, 15),
            upvotes: 24,
            comments: 7,
            location: None,
        },
        Grievance {
            id: 3,
            title: "Library noise issues during exams".to_string(),
            description: "There's too much noise in the library during exam period. Need better enforcement of silence rules.".to_string(),
            category: GrievanceCategory::Library,
            status: GrievanceStatus::Resolved,
            date: ymd(2025, 4, 5),
            upvotes: 32,
            comments: 5,
            location: None,
        },
    ]
}

/// A building pin on the campus map mock-up
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub name: &'static str,
    pub status: ResourceStatus,
    pub activity: &'static str,
    /// Inline CSS placing the pin inside the map canvas
    pub position: &'static str,
    pub badge: Option<&'static str>,
}

pub fn map_markers() -> Vec<MapMarker> {
    vec![
        MapMarker { name: "Main Building", status: Busy, activity: "High Activity", position: "top: 25%; left: 25%;", badge: None },
        MapMarker { name: "Science Lab", status: Available, activity: "Available", position: "top: 50%; left: 33%;", badge: None },
        MapMarker { name: "Library", status: Busy, activity: "Moderately Busy", position: "top: 33%; right: 25%;", badge: None },
        MapMarker {
            name: "Sports Complex",
            status: Maintenance,
            activity: "Under Maintenance",
            position: "bottom: 25%; right: 33%;",
            badge: Some("Construction Zone"),
        },
        MapMarker { name: "Computer Lab", status: Available, activity: "Available", position: "bottom: 33%; left: 50%;", badge: None },
    ]
}

/// Navbar notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification { id: 1, title: "Book Return Reminder", message: "Chemistry Handbook due in 2 days" },
        Notification { id: 2, title: "Lab Booking Confirmed", message: "Physics Lab 3 booked for tomorrow at 2 PM" },
        Notification { id: 3, title: "System Maintenance", message: "Computer Science Lab will be unavailable on Friday" },
    ]
}

/// Headline numbers of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub labs: u32,
    pub classrooms: u32,
    pub library_spaces: u32,
    pub hostel_units: u32,
    pub available: u32,
    pub bookings: u32,
}

impl DashboardStats {
    pub fn total(&self) -> u32 {
        self.labs + self.classrooms + self.library_spaces + self.hostel_units
    }

    /// Share of resources currently available, rounded to the nearest percent
    pub fn available_percent(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => (self.available * 100 + total / 2) / total,
        }
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        labs: 24,
        classrooms: 35,
        library_spaces: 15,
        hostel_units: 54,
        available: 47,
        bookings: 2,
    }
}

/// Summary of the user's active bookings on the dashboard
pub const BOOKINGS_SUMMARY: &str = "Library study room, Chemistry lab equipment";

pub const MAINTENANCE_NOTICE: &str = "Central Library will be closed for system upgrades on Saturday, April 27th. \
The Computer Science building will undergo electrical maintenance from April 29-30. Please plan accordingly.";

/// Dashboard "Upcoming Events" entry
#[derive(Debug, Clone, PartialEq)]
pub struct CampusHighlight {
    pub id: u32,
    pub name: &'static str,
    pub date: NaiveDate,
    pub location: &'static str,
}

pub fn campus_highlights() -> Vec<CampusHighlight> {
    vec![
        CampusHighlight { id: 1, name: "Technical Symposium", date: ymd(2025, 4, 26), location: "Main Auditorium" },
        CampusHighlight { id: 2, name: "Library Book Fair", date: ymd(2025, 4, 28), location: "Central Library" },
        CampusHighlight { id: 3, name: "Campus Cleaning Drive", date: ymd(2025, 5, 2), location: "Campus Grounds" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_six_unique_resources() {
        for category in ResourceCategory::ALL {
            let list = resources(category);
            assert_eq!(list.len(), 6);
            let mut ids: Vec<_> = list.iter().map(|r| r.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 6);
        }
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = dashboard_stats();
        assert_eq!(stats.total(), 128);
        assert_eq!(stats.available_percent(), 37);
    }

    #[test]
    fn test_seed_dates_are_real() {
        assert!(calendar_events().iter().all(|e| e.date != NaiveDate::default()));
        assert!(grievances().iter().all(|g| g.date != NaiveDate::default()));
    }
}
