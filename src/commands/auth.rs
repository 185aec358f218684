//! Sign-in Commands
//!
//! Login, sign-up and face recognition. Nothing is verified; a complete
//! form always succeeds after the delay.

use campus_core::{LoginDraft, SignupDraft};

use super::latency;
use crate::config::delays;

/// Which flow started a face scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceScan {
    /// "Face Recognition" on the login tab
    Verify,
    /// "Scan Face" on the sign-up tab
    Register,
}

pub async fn sign_in(draft: LoginDraft) -> Result<(), String> {
    draft.validate().map_err(|e| e.to_string())?;
    latency(delays::LOGIN_MS).await;
    log::info!("[AUTH] signed in {}", draft.email.trim());
    Ok(())
}

pub async fn sign_up(draft: SignupDraft) -> Result<(), String> {
    draft.validate().map_err(|e| e.to_string())?;
    latency(delays::SIGNUP_MS).await;
    log::info!("[AUTH] registered {} ({})", draft.email.trim(), draft.student_id.trim());
    Ok(())
}

pub async fn scan_face(mode: FaceScan) -> Result<(), String> {
    log::debug!("[AUTH] face scan started: {:?}", mode);
    latency(delays::FACE_SCAN_MS).await;
    Ok(())
}
