//! Campus Assistant
//!
//! Keyword-matched canned answers and the message log of one chat session.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::{next_id, Entity};
use crate::error::ParseError;

pub const GREETING: &str = "Hello! I'm your Campus Assistant. How can I help you today?";

/// Phrase the simulated voice capture "hears"
pub const VOICE_SAMPLE_QUERY: &str = "How do I book a laboratory?";

const FALLBACK: &str = "I'm not sure I understand. Could you please be more specific about what campus resource you need help with?";

/// Ordered trigger table: the first row with any matching substring wins
const TRIGGERS: &[(&[&str], &str)] = &[
    (
        &["book", "reserve"],
        "To book a resource, go to the Booking tab and select the type of resource you need. You can then check availability and make a reservation.",
    ),
    (
        &["lab", "laboratory"],
        "Our campus has multiple laboratories. You can check their availability in the Availability tab under 'Labs'. Currently, Physics Lab 2 and Computer Lab 3 are available.",
    ),
    (
        &["library", "book"],
        "The main library is open from 8 AM to 10 PM. You can check book availability in the Library tab. Each student can borrow up to 3 books at once.",
    ),
    (
        &["hostel", "dorm"],
        "Hostel information is available in the Availability tab under 'Hostel'. You can check room availability and mess schedules there.",
    ),
    (
        &["class", "classroom"],
        "Classroom information can be found under the Availability tab. For booking a classroom for an event, please use the Booking tab.",
    ),
];

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Reply language selected in the chat header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Spanish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Spanish => "spanish",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
        }
    }

    /// Marker appended to replies; no actual translation happens
    fn reply_suffix(&self) -> Option<&'static str> {
        match self {
            Language::English => None,
            Language::Hindi => Some(" [Translated to Hindi]"),
            Language::Spanish => Some(" [Translated to Spanish]"),
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| ParseError::new("language", s))
    }
}

/// Canned answer for `input` in `language`
pub fn respond(input: &str, language: Language) -> String {
    let lowered = input.to_lowercase();
    let answer = TRIGGERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(FALLBACK, |(_, answer)| *answer);

    let mut reply = answer.to_string();
    if let Some(suffix) = language.reply_suffix() {
        reply.push_str(suffix);
    }
    reply
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
    pub timestamp: NaiveDateTime,
}

impl Message {
    /// "02:05 PM"
    pub fn time_label(&self) -> String {
        self.timestamp.format("%I:%M %p").to_string()
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

impl Entity for Message {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Messages of one chat session, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatSession {
    pub messages: Vec<Message>,
}

impl ChatSession {
    /// A fresh session holding only the assistant greeting
    pub fn new(now: NaiveDateTime) -> Self {
        let mut session = Self::default();
        session.append(GREETING.to_string(), Sender::Bot, now);
        session
    }

    /// Record a user message. Blank input is ignored and yields `None`.
    pub fn send(&mut self, text: &str, now: NaiveDateTime) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.append(text.to_string(), Sender::User, now))
    }

    /// Append the assistant's answer to `question`
    pub fn reply(&mut self, question: &str, language: Language, now: NaiveDateTime) -> Message {
        self.receive(respond(question, language), now)
    }

    /// Append an already computed assistant answer
    pub fn receive(&mut self, answer: String, now: NaiveDateTime) -> Message {
        self.append(answer, Sender::Bot, now)
    }

    fn append(&mut self, text: String, sender: Sender, now: NaiveDateTime) -> Message {
        let message = Message {
            id: next_id(&self.messages),
            text,
            sender,
            timestamp: now,
        };
        self.messages.push(message.clone());
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 20)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_booking_keywords_win_first() {
        let reply = respond("Can I RESERVE the seminar hall?", Language::English);
        assert!(reply.starts_with("To book a resource"));
        // "book" beats "library" even when both appear
        assert!(respond("library book", Language::English).starts_with("To book a resource"));
    }

    #[test]
    fn test_trigger_order() {
        assert!(respond("is the physics lab free", Language::English).starts_with("Our campus has multiple laboratories"));
        assert!(respond("library hours?", Language::English).starts_with("The main library"));
        assert!(respond("dorm rooms", Language::English).starts_with("Hostel information"));
        assert!(respond("which classroom", Language::English).starts_with("Classroom information"));
        // hostel is checked before class
        assert!(respond("hostel class", Language::English).starts_with("Hostel information"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("hello there", Language::English), FALLBACK);
    }

    #[test]
    fn test_language_suffix() {
        assert!(respond("hostel", Language::Hindi).ends_with(" [Translated to Hindi]"));
        assert!(respond("xyz", Language::Spanish).ends_with(" [Translated to Spanish]"));
        assert!(!respond("xyz", Language::English).contains("[Translated"));
    }

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new(now());
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].text, GREETING);
        assert_eq!(session.messages[0].sender, Sender::Bot);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new(now());
        assert!(session.send("   ", now()).is_none());
        assert_eq!(session.messages.len(), 1);
    }

    #[test]
    fn test_ids_stay_unique_with_interleaved_replies() {
        let mut session = ChatSession::new(now());
        session.send("book", now()).unwrap();
        session.send("lab", now()).unwrap();
        session.reply("book", Language::English, now());
        session.reply("lab", Language::English, now());

        let ids: Vec<u32> = session.messages.iter().map(|m| m.id).collect();
        let unique: std::collections::HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_time_label() {
        let mut session = ChatSession::new(now());
        let sent = session.send(VOICE_SAMPLE_QUERY, now()).unwrap();
        assert!(sent.is_user());
        assert_eq!(sent.time_label(), "02:05 PM");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("spanish".parse::<Language>(), Ok(Language::Spanish));
        assert!("french".parse::<Language>().is_err());
    }
}
