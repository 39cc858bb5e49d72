//! Shapes of the trivia service responses, only the fields the game reads.

use alloc::string::{String, ToString};
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque category identifier handed out by the trivia service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of `GET categories?count=N`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

/// Response of `GET category?id=ID`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryPayload {
    pub title: String,
    pub clues: alloc::vec::Vec<CluePayload>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CluePayload {
    #[serde(deserialize_with = "lenient_text")]
    pub question: String,
    #[serde(deserialize_with = "lenient_text")]
    pub answer: String,
}

/// Accepts either a string or a bare number, some answers come back as JSON numbers.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(text) => text,
        Text::Num(num) => num.to_string(),
    })
}
