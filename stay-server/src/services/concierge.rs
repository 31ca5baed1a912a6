//! Scripted concierge replies
//!
//! Keyword matching over the latest guest message. First matching topic wins.

use shared::models::ChatRequest;

/// Reply when the request cannot be read at all
pub const APOLOGY: &str = "Sorry, something went wrong processing your request.";

const GREETING: &str = "Thanks for reaching out! How can I help you with your stay?";

const TOPICS: &[(&[&str], &str)] = &[
    (
        &["price", "rate", "cost"],
        "Our suite rates start at \u{20b9}8,999 per night, with seasonal offers available. Would you like me to check availability for your dates?",
    ),
    (
        &["room", "suite", "availability"],
        "We have Deluxe, Executive, and Presidential suites. Tell me your dates and number of guests to show availability.",
    ),
    (
        &["amenit"],
        "Amenities include spa & wellness, infinity pool, 24/7 concierge, airport transfers, and gourmet dining.",
    ),
    (
        &["check-in", "check in"],
        "Check\u{2011}in starts at 2 PM and check\u{2011}out is at 12 PM. Early check\u{2011}in/late check\u{2011}out is subject to availability.",
    ),
    (
        &["location", "where"],
        "We\u{2019}re centrally located near business and shopping districts. Parking and airport pickup are available.",
    ),
    (
        &["contact", "phone", "call"],
        "You can reach our team via the Contact page. Shall I open it for you?",
    ),
];

pub fn reply(request: &ChatRequest) -> &'static str {
    let question = request
        .last_user_message()
        .unwrap_or_default()
        .to_lowercase();

    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| question.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or(GREETING)
}
