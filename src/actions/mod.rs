//! Dialog actions returned to the conversation host
//!
//! The response shapes are fixed by the host. Builders here are pure functions;
//! session attributes always go back exactly as they arrived.

use serde::Serialize;

use crate::events::CodeHookEvent;
use crate::value_objects::{FulfillmentState, Message, SessionAttributes, Slots};

/// Prompt used when the user asked about income tax without saying which kind
pub const INCOME_TAX_PROMPT: &str = "What type of income tax? (Individual, Business or Trusts?)";

/// Instruction telling the host how to continue the conversation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Ask the user for a specific slot
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },
    /// End the turn
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
    /// Let the host pick the next step
    Delegate { message: Message },
    /// Hand the conversation over to another intent
    ConfirmIntent {
        intent_name: String,
        message: Message,
        slots: Slots,
    },
}

/// Complete response body for one invocation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    /// Absent on `ElicitSlot`, which does not carry session state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

impl DialogResponse {
    pub fn action(&self) -> &DialogAction {
        &self.dialog_action
    }

    /// Text of the message carried by the action
    pub fn message(&self) -> &Message {
        match &self.dialog_action {
            DialogAction::ElicitSlot { message, .. }
            | DialogAction::Close { message, .. }
            | DialogAction::Delegate { message }
            | DialogAction::ConfirmIntent { message, .. } => message,
        }
    }
}

/// Ask the host to prompt for `slot_to_elicit`.
///
/// `session_attributes` is accepted for call-site symmetry with the other
/// builders but the host does not expect it on this action.
pub fn elicit_slot(
    _session_attributes: &SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: impl Into<String>,
) -> DialogResponse {
    DialogResponse {
        session_attributes: None,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message: Message::plain_text(message),
        },
    }
}

pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes: Some(session_attributes),
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

pub fn delegate(session_attributes: SessionAttributes, message: Message) -> DialogResponse {
    DialogResponse {
        session_attributes: Some(session_attributes),
        dialog_action: DialogAction::Delegate { message },
    }
}

/// Redirect the conversation to `intent`, always with [`INCOME_TAX_PROMPT`]
pub fn switch_intent(event: &CodeHookEvent, intent: impl Into<String>) -> DialogResponse {
    DialogResponse {
        session_attributes: Some(event.session_attributes.clone()),
        dialog_action: DialogAction::ConfirmIntent {
            intent_name: intent.into(),
            message: Message::plain_text(INCOME_TAX_PROMPT),
            slots: Slots::new(),
        },
    }
}
