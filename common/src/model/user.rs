use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of the acting user.
///
/// The backend emits numeric ids while the pages carry them as attribute
/// strings, so both shapes are accepted on the wire and kept as text.
/// An identifier is never empty: blank input yields `None` from [`UserId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n.to_string())),
            Raw::Text(s) => {
                UserId::parse(&s).ok_or_else(|| serde::de::Error::custom("empty user id"))
            }
        }
    }
}

/// Body of `GET /api/currentUser`. Only `id` matters to the client; a
/// missing or null `id` means the session has no resolvable user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_textual_ids_compare_equal() {
        let from_number: UserId = serde_json::from_str("42").unwrap();
        let from_text: UserId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(UserId::parse("   ").is_none());
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }

    #[test]
    fn current_user_without_id_decodes_to_none() {
        let user: CurrentUser = serde_json::from_str(r#"{"userName":"ana"}"#).unwrap();
        assert!(user.id.is_none());
        assert_eq!(user.user_name.as_deref(), Some("ana"));
    }
}
