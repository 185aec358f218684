//! Frontend Models
//!
//! UI-only structures: sidebar navigation and the toast queue. Campus
//! domain types live in `campus_core`.

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", icon: "🏠", href: "/dashboard" },
    NavItem { title: "Calendar", icon: "📆", href: "/calendar" },
    NavItem { title: "Booking", icon: "🗓", href: "/booking" },
    NavItem { title: "Availability", icon: "✅", href: "/availability" },
    NavItem { title: "Library", icon: "📖", href: "/library" },
    NavItem { title: "Maps", icon: "📍", href: "/maps" },
    NavItem { title: "Chatbot", icon: "💬", href: "/chatbot" },
    NavItem { title: "Grievance", icon: "⚠", href: "/grievance" },
    NavItem { title: "Feedback", icon: "📝", href: "/feedback" },
    NavItem { title: "Sign In", icon: "🔑", href: "/signin" },
];

impl NavItem {
    /// Exact path match, ignoring a trailing slash
    pub fn is_active(&self, pathname: &str) -> bool {
        let trimmed = pathname.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        path == self.href
    }
}

/// Toast raised when a booking request resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingNotice {
    /// Availability pages
    Requested,
    /// Dashboard quick access
    Booked,
}

impl BookingNotice {
    /// Toast title and description for `name`
    pub fn toast(self, name: &str) -> (&'static str, String) {
        match self {
            BookingNotice::Requested => (
                "Booking Request Sent",
                format!("Your request to book {} has been submitted.", name),
            ),
            BookingNotice::Booked => ("Resource Booked", format!("You have successfully booked {}", name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    /// Queue a toast and return its id
    pub fn push(&mut self, title: String, description: String, kind: ToastKind) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title, description, kind });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_active_matching() {
        let calendar = NAV_ITEMS[1];
        assert!(calendar.is_active("/calendar"));
        assert!(calendar.is_active("/calendar/"));
        assert!(!calendar.is_active("/"));
        assert!(!calendar.is_active("/calendar-old"));
    }

    #[test]
    fn test_nav_covers_every_feature_route() {
        let hrefs: Vec<_> = NAV_ITEMS.iter().map(|item| item.href).collect();
        for route in [
            "/dashboard", "/calendar", "/booking", "/availability", "/library",
            "/maps", "/chatbot", "/grievance", "/feedback", "/signin",
        ] {
            assert!(hrefs.contains(&route), "missing {}", route);
        }
    }

    #[test]
    fn test_booking_notices() {
        let (title, description) = BookingNotice::Requested.toast("Physics Lab 3");
        assert_eq!(title, "Booking Request Sent");
        assert_eq!(description, "Your request to book Physics Lab 3 has been submitted.");

        let (title, description) = BookingNotice::Booked.toast("Computer Lab 2");
        assert_eq!(title, "Resource Booked");
        assert_eq!(description, "You have successfully booked Computer Lab 2");
    }

    #[test]
    fn test_toast_queue() {
        let mut queue = ToastQueue::default();
        let first = queue.push("A".into(), "a".into(), ToastKind::Info);
        let second = queue.push("B".into(), "b".into(), ToastKind::Error);
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "B");

        // dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
    }
}
