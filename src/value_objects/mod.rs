//! Value objects shared by the inbound event and the outbound dialog response

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Slot values keyed by slot name; the host sends `null` for unfilled slots
pub type Slots = HashMap<String, Option<String>>;

/// Opaque session state owned by the host, echoed back untouched.
///
/// `None` stands for a `null` on the wire and is echoed back as `null`.
pub type SessionAttributes = Option<HashMap<String, String>>;

/// Stage of the conversation that triggered the code hook
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InvocationSource {
    /// Mid-dialog validation step
    DialogCodeHook,
    /// Final fulfillment step
    FulfillmentCodeHook,
}

impl InvocationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DialogCodeHook => "DialogCodeHook",
            Self::FulfillmentCodeHook => "FulfillmentCodeHook",
        }
    }

    pub fn is_fulfillment(&self) -> bool {
        matches!(self, Self::FulfillmentCodeHook)
    }
}

impl fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome reported on a `Close` dialog action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Format of a message body
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

/// A message the host relays to the end user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    /// Plain-text message, the only kind this bot produces
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

/// Best-effort integer parse that yields NaN instead of failing
pub fn parse_int(value: &str) -> f64 {
    value
        .trim()
        .parse::<i64>()
        .map(|n| n as f64)
        .unwrap_or(f64::NAN)
}
