use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::services::template::FORMAL_TEMPLATE;

/// One entry of a generated guest batch, as kept in the invite tool store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredGuest {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Milliseconds since the Unix epoch, `batch_start + index`.
    pub created_at: i64,
}

/// A stored guest plus the fields recomputed from the current base URL and template.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGuest {
    #[serde(flatten)]
    pub guest: StoredGuest,
    pub invite_link: String,
    pub personalized_text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteToolState {
    pub raw_guest_names: String,
    pub intro_text: String,
    pub guests: Vec<StoredGuest>,
}

impl Default for InviteToolState {
    fn default() -> Self {
        Self {
            raw_guest_names: String::new(),
            intro_text: FORMAL_TEMPLATE.to_string(),
            guests: Vec::new(),
        }
    }
}

/// Outcome of reading a stored blob. Nothing in it is trusted until it lands in `Valid`.
#[derive(Debug, PartialEq)]
pub enum StoredState {
    Valid(InviteToolState),
    Invalid(String),
}

impl InviteToolState {
    /// Validates a stored blob field by field.
    ///
    /// Fields with the wrong type keep their defaults, guest entries missing
    /// `id`, `name` or `slug` are dropped, and a guest without a numeric
    /// `createdAt` is stamped with `now_ms`.
    pub fn parse(raw: &str, now_ms: i64) -> StoredState {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => return StoredState::Invalid(format!("malformed JSON: {e}")),
        };

        let Some(object) = value.as_object() else {
            return StoredState::Invalid("stored state is not a JSON object".into());
        };

        let mut state = Self::default();

        if let Some(raw_names) = object.get("rawGuestNames").and_then(Value::as_str) {
            state.raw_guest_names = raw_names.to_string();
        }

        if let Some(intro) = object.get("introText").and_then(Value::as_str) {
            state.intro_text = intro.to_string();
        }

        if let Some(items) = object.get("guests").and_then(Value::as_array) {
            state.guests = items
                .iter()
                .filter_map(|item| parse_guest(item, now_ms))
                .collect();
        }

        StoredState::Valid(state)
    }
}

fn parse_guest(item: &Value, now_ms: i64) -> Option<StoredGuest> {
    let id = item.get("id")?.as_str()?;
    let name = item.get("name")?.as_str()?;
    let slug = item.get("slug")?.as_str()?;
    let created_at = item
        .get("createdAt")
        .and_then(Value::as_f64)
        .map(|ms| ms as i64)
        .unwrap_or(now_ms);

    Some(StoredGuest {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> InviteToolState {
        InviteToolState {
            raw_guest_names: "Budi\nSiti".into(),
            intro_text: "Hello [nama]".into(),
            guests: vec![
                StoredGuest { id: "a1".into(), name: "Budi".into(), slug: "budi".into(), created_at: 1_700_000_000_000 },
                StoredGuest { id: "b2".into(), name: "Siti".into(), slug: "siti".into(), created_at: 1_700_000_000_001 },
            ],
        }
    }

    #[test]
    fn test_serialized_state_parses_back_unchanged() {
        let state = sample_state();
        let raw = serde_json::to_string(&state).unwrap();

        assert!(raw.contains("\"rawGuestNames\""));
        assert!(raw.contains("\"createdAt\":1700000000000"));
        assert_eq!(InviteToolState::parse(&raw, 0), StoredState::Valid(state));
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        assert!(matches!(InviteToolState::parse("{not json", 0), StoredState::Invalid(_)));
        assert!(matches!(InviteToolState::parse("[1,2,3]", 0), StoredState::Invalid(_)));
    }

    #[test]
    fn test_wrongly_typed_fields_fall_back() {
        let raw = r#"{
            "rawGuestNames": 42,
            "introText": null,
            "guests": [
                {"id": "x", "name": "Ana", "slug": "ana", "createdAt": 5},
                {"id": "y", "name": "No Slug"},
                {"id": "z", "name": "Late", "slug": "late", "createdAt": "yesterday"},
                "garbage"
            ]
        }"#;

        let StoredState::Valid(state) = InviteToolState::parse(raw, 99) else {
            panic!("expected a valid state");
        };

        assert_eq!(state.raw_guest_names, "");
        assert_eq!(state.intro_text, FORMAL_TEMPLATE);
        assert_eq!(state.guests.len(), 2);
        assert_eq!(state.guests[0].created_at, 5);
        assert_eq!(state.guests[1].slug, "late");
        assert_eq!(state.guests[1].created_at, 99);
    }

    #[test]
    fn test_generated_guest_flattens_stored_fields() {
        let generated = GeneratedGuest {
            guest: sample_state().guests.remove(0),
            invite_link: "https://x/?to=budi".into(),
            personalized_text: "Dear, Budi,".into(),
        };
        let json = serde_json::to_value(&generated).unwrap();

        assert_eq!(json["slug"], "budi");
        assert_eq!(json["inviteLink"], "https://x/?to=budi");
        assert_eq!(json["personalizedText"], "Dear, Budi,");
    }
}
