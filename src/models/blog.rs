use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use utoipa::ToSchema;

/// Occurrences per normalized word.
pub type WordCount = BTreeMap<String, u64>;

/// A persisted blog post. Rows with `deleted_at` set are soft-deleted and never returned by reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Mutable fields of a blog, as handed to the store on create and update. Update replaces both fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub body: String,
}

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-zA-Z0-9]").expect("static pattern compiles"))
}

/// Strip everything but ASCII letters and digits.
pub(crate) fn normalize_word(token: &str) -> String {
    non_word().replace_all(token, "").into_owned()
}

impl Blog {
    /// Count words in the body. Tokens are split on single spaces and normalized with [`normalize_word`];
    /// tokens that normalize to nothing are skipped, so `"red, red!"` counts `red` twice.
    pub fn word_count(&self) -> WordCount {
        let mut counts = WordCount::new();
        for token in self.body.split(' ') {
            let word = normalize_word(token);
            if word.is_empty() {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
        counts
    }
}
