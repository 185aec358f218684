//! Form Submission Commands
//!
//! Feedback and grievance submissions.

use campus_core::{FeedbackDraft, GrievanceDraft};

use super::latency;
use crate::config::delays;

pub async fn submit_feedback(draft: FeedbackDraft) -> Result<(), String> {
    draft.validate().map_err(|e| e.to_string())?;
    latency(delays::FEEDBACK_MS).await;
    log::info!(
        "[FEEDBACK] {} rated {} stars",
        draft.resource_name.trim(),
        draft.rating.map_or(0, |r| r.stars())
    );
    Ok(())
}

/// Validate and "send" a grievance; the caller files the returned draft
pub async fn submit_grievance(draft: GrievanceDraft) -> Result<GrievanceDraft, String> {
    draft.validate().map_err(|e| e.to_string())?;
    latency(delays::GRIEVANCE_MS).await;
    Ok(draft)
}
