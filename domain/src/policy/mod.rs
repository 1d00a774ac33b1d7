//! Store-policy (FAQ) subdomain.
//!
//! Policy questions are answered by a case-insensitive substring test of the
//! user's query against each FAQ question, in store order. The first match
//! wins. No fuzzy scoring here: policy queries tend to carry a distinctive
//! keyword ("refund", "warranty") that substring matching catches reliably.

use serde::{Deserialize, Serialize};

/// A question/answer pair from the policy FAQ store.
///
/// The question text itself is the identity; there is no separate key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqRecord {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Find the answer of the first FAQ whose question contains `query`
/// (case-insensitive).
pub fn find_policy_answer<'a>(faqs: &'a [FaqRecord], query: &str) -> Option<&'a str> {
    let needle = query.to_lowercase();
    faqs.iter()
        .find(|f| f.question.to_lowercase().contains(&needle))
        .map(|f| f.answer.as_str())
}
