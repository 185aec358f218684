//! Assistant Commands
//!
//! Delayed chatbot replies and the voice input / read-aloud stand-ins.

use campus_core::chat::{self, Language, VOICE_SAMPLE_QUERY};

use super::latency;
use crate::config::delays;

/// Canned answer to `question`, after the bot's "thinking" delay
pub async fn ask_assistant(question: String, language: Language) -> String {
    latency(delays::BOT_REPLY_MS).await;
    let answer = chat::respond(&question, language);
    log::debug!("[CHAT] {:?} -> {} chars ({})", question, answer.len(), language.as_str());
    answer
}

/// Pretend to listen and return the recognised phrase
pub async fn capture_voice() -> String {
    latency(delays::VOICE_CAPTURE_MS).await;
    VOICE_SAMPLE_QUERY.to_string()
}

/// Pause between recognition and the automatic send
pub async fn voice_auto_send_pause() {
    latency(delays::VOICE_AUTO_SEND_MS).await;
}

/// Pretend to read `text` aloud; resolves when "speech" ends
pub async fn read_aloud(text: String) {
    log::info!("[CHAT] speaking: {}", text);
    latency(delays::READ_ALOUD_MS).await;
}
