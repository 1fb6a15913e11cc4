//! Turns raw API entries into [`QuestionRecord`]s.
//!
//! The API is queried with `encode=url3986`, so every text field arrives
//! percent-encoded. A field that fails to decode keeps its raw text; a
//! record is never dropped here.

use std::borrow::Cow;

use tracing::debug;

use crate::models::{QuestionRecord, RawQuestion};

/// True when every `%` starts a two-hex-digit escape.
fn escapes_well_formed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Percent-decode `raw`, falling back to the input untouched when it holds
/// a malformed escape or the decoded bytes are not valid UTF-8.
pub fn safe_decode(raw: &str) -> Cow<'_, str> {
    if !escapes_well_formed(raw) {
        debug!("Keeping field with malformed escape as-is: {:?}", raw);
        return Cow::Borrowed(raw);
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!("Keeping undecodable field as-is: {}", err);
            Cow::Borrowed(raw)
        }
    }
}

fn decode_field(field: Option<&str>) -> String {
    field.map(|s| safe_decode(s).into_owned()).unwrap_or_default()
}

/// Decode and normalize a single raw entry.
pub fn decode_record(raw: &RawQuestion) -> QuestionRecord {
    QuestionRecord {
        category: decode_field(raw.category.as_deref()),
        difficulty: decode_field(raw.difficulty.as_deref()).to_lowercase(),
        question: decode_field(raw.question.as_deref()),
    }
}

/// Decode a whole batch, preserving order and length.
pub fn decode_records(raw: &[RawQuestion]) -> Vec<QuestionRecord> {
    raw.iter().map(decode_record).collect()
}
