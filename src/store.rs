//! View State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each store is
//! created by the view that owns it, so its contents vanish on navigation.
//! Timers are never cancelled: anything that touches a store after an
//! await goes through the helpers below, which drop the update once the
//! store has been disposed.

use campus_core::{
    catalog, ChatSession, FormResult, Grievance, GrievanceBoard, GrievanceDraft, GrievanceFilter,
    Language,
};
use chrono::{NaiveDate, NaiveDateTime};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;

/// State of the chat panel
#[derive(Clone, Debug, Store)]
pub struct ChatPanelState {
    /// Messages of this session
    pub session: ChatSession,
    /// Reply language picked in the header
    pub language: Language,
    /// Simulated voice capture running
    pub listening: bool,
    /// Message currently "read aloud"
    pub speaking: Option<u32>,
}

impl ChatPanelState {
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(commands::now()),
            language: Language::default(),
            listening: false,
            speaking: None,
        }
    }
}

/// State of the grievance portal
#[derive(Clone, Debug, Store)]
pub struct GrievancePortalState {
    /// Seeded board plus this session's submissions
    pub board: GrievanceBoard,
    /// Selected list filter
    pub filter: GrievanceFilter,
    /// Submission in flight
    pub submitting: bool,
}

impl GrievancePortalState {
    pub fn new() -> Self {
        Self {
            board: GrievanceBoard::new(catalog::grievances()),
            filter: GrievanceFilter::All,
            submitting: false,
        }
    }
}

/// Record the user's question and return the reply language.
/// `None` for blank input or once the panel is gone.
pub fn post_question(
    state: Store<ChatPanelState>,
    text: &str,
    now: NaiveDateTime,
) -> Option<Language> {
    let language = state.language().try_get_untracked()?;
    state.session().try_update(|session| session.send(text, now)).flatten()?;
    Some(language)
}

/// Append a delayed assistant answer; false when the panel is gone
pub fn deliver_reply(state: Store<ChatPanelState>, answer: String, now: NaiveDateTime) -> bool {
    let delivered = state
        .session()
        .try_update(|session| {
            session.receive(answer, now);
        })
        .is_some();
    if !delivered {
        log::debug!("[CHAT] panel closed, reply dropped");
    }
    delivered
}

/// Clear the read-aloud pulse unless another message took it over
pub fn finish_speaking(state: Store<ChatPanelState>, id: u32) {
    state.speaking().try_update(|speaking| {
        if *speaking == Some(id) {
            *speaking = None;
        }
    });
}

/// Prepend a submitted draft to the board. `None` once the portal is gone.
pub fn file_grievance(
    state: Store<GrievancePortalState>,
    draft: GrievanceDraft,
    today: NaiveDate,
) -> Option<FormResult<Grievance>> {
    let filed = state.board().try_update(|board| board.submit(draft, today));
    if filed.is_none() {
        log::debug!("[GRIEVANCE] portal closed, submission dropped");
    }
    filed
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::{GrievanceCategory, GrievanceStatus};

    fn unmount(owner: Owner) {
        owner.cleanup();
        drop(owner);
    }

    fn draft() -> GrievanceDraft {
        GrievanceDraft {
            title: "Broken projector".into(),
            category: GrievanceCategory::Classroom,
            description: "Room 201 projector flickers".into(),
            location: "Block B, Room 201".into(),
        }
    }

    #[test]
    fn test_chat_round_trip_while_mounted() {
        let owner = Owner::new();
        let state = owner.with(|| Store::new(ChatPanelState::new()));
        let now = commands::now();

        assert_eq!(post_question(state, "   ", now), None);
        assert_eq!(post_question(state, "book a lab", now), Some(Language::English));
        assert!(deliver_reply(state, "Sure".into(), now));
        assert_eq!(state.session().with_untracked(|s| s.messages.len()), 3);

        state.speaking().try_update(|speaking| *speaking = Some(3));
        finish_speaking(state, 2);
        assert_eq!(state.speaking().try_get_untracked(), Some(Some(3)));
        finish_speaking(state, 3);
        assert_eq!(state.speaking().try_get_untracked(), Some(None));
    }

    #[test]
    fn test_late_chat_updates_after_unmount_are_dropped() {
        let owner = Owner::new();
        let state = owner.with(|| Store::new(ChatPanelState::new()));
        unmount(owner);
        let now = commands::now();

        assert!(!deliver_reply(state, "late answer".into(), now));
        assert_eq!(post_question(state, campus_core::chat::VOICE_SAMPLE_QUERY, now), None);
        finish_speaking(state, 1);
        assert_eq!(state.listening().try_update(|listening| *listening = false), None);
    }

    #[test]
    fn test_file_grievance_while_mounted() {
        let owner = Owner::new();
        let state = owner.with(|| Store::new(GrievancePortalState::new()));
        let before = state.board().with_untracked(|board| board.len());

        let filed = file_grievance(state, draft(), commands::today());
        let grievance = match filed {
            Some(Ok(grievance)) => grievance,
            other => panic!("expected a filed grievance, got {:?}", other),
        };
        assert_eq!(grievance.status, GrievanceStatus::Pending);
        assert_eq!(grievance.upvotes, 0);
        assert_eq!(state.board().with_untracked(|board| board.len()), before + 1);
        assert_eq!(
            state.board().with_untracked(|board| board.grievances[0].id),
            grievance.id
        );
    }

    #[test]
    fn test_late_grievance_after_unmount_is_dropped() {
        let owner = Owner::new();
        let state = owner.with(|| Store::new(GrievancePortalState::new()));
        unmount(owner);

        assert_eq!(file_grievance(state, draft(), commands::today()), None);
        assert_eq!(state.submitting().try_update(|busy| *busy = false), None);
        assert_eq!(state.submitting().try_get_untracked(), None);
    }
}
