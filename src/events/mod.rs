//! Inbound code hook event sent by the conversation host

use serde::{Deserialize, Deserializer, Serialize};

use crate::value_objects::{InvocationSource, SessionAttributes, Slots};

/// Bot that received the user input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Intent the host recognized for the current turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default, deserialize_with = "nullable_slots")]
    pub slots: Slots,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

fn nullable_slots<'de, D>(deserializer: D) -> Result<Slots, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Slots>::deserialize(deserializer)?.unwrap_or_default())
}

/// One code hook invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeHookEvent {
    pub current_intent: CurrentIntent,
    pub invocation_source: InvocationSource,
    #[serde(default)]
    pub session_attributes: SessionAttributes,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub bot: Bot,
    #[serde(default)]
    pub message_version: Option<String>,
    #[serde(default)]
    pub output_dialog_mode: Option<String>,
    #[serde(default)]
    pub input_transcript: Option<String>,
}

impl CodeHookEvent {
    /// Decode an event from its JSON form
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// Value of a filled slot; `None` when the slot is absent or null
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|value| value.as_deref())
    }
}
