//! Code hook handlers
//!
//! [`DialogResponder`] turns one decoded event into one dialog response.
//! [`CodeHook`] wraps it with the JSON entry point the host calls.

pub mod code_hook;

pub use code_hook::{CodeHook, InvocationContext};

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    actions::{self, DialogResponse},
    errors::{DialogError, DialogResult},
    events::CodeHookEvent,
    queries::{normalize_category, Lookup, ResponseSource, ResponseTable},
    routing::{is_income_tax, SupportedIntent},
    value_objects::{FulfillmentState, Message},
};

/// Time zone user requests are interpreted in unless configured otherwise
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";

/// Answers tax-deadline intents from a response source
pub struct DialogResponder<S = ResponseTable>
where
    S: ResponseSource,
{
    responses: Arc<S>,
    time_zone: String,
}

impl DialogResponder<ResponseTable> {
    /// Responder over the built-in table in the default time zone
    pub fn builtin() -> Self {
        Self::new(Arc::new(ResponseTable::builtin()), DEFAULT_TIME_ZONE)
    }
}

impl<S> DialogResponder<S>
where
    S: ResponseSource,
{
    pub fn new(responses: Arc<S>, time_zone: impl Into<String>) -> Self {
        Self {
            responses,
            time_zone: time_zone.into(),
        }
    }

    /// Time zone requests are interpreted in
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn responses(&self) -> &S {
        &self.responses
    }

    /// Route the event to its intent handler
    pub fn handle(&self, event: &CodeHookEvent) -> DialogResult<DialogResponse> {
        debug!(
            user_id = %event.user_id,
            intent_name = %event.intent_name(),
            "dispatch"
        );

        match event.intent_name().parse::<SupportedIntent>()? {
            SupportedIntent::CheckBalanceDueDate => self.handle_balance_due_date(event),
            SupportedIntent::IncomeTaxChoice => self.handle_income_tax_choice(event),
        }
    }

    /// Handle CheckBalanceDueDate.
    ///
    /// Income tax needs a follow-up question, which is only asked at fulfillment.
    /// Every other balance type closes with its answer whatever the invocation
    /// source.
    fn handle_balance_due_date(&self, event: &CodeHookEvent) -> DialogResult<DialogResponse> {
        let intent = SupportedIntent::CheckBalanceDueDate;
        let balance_type = category_slot(event, intent)?;
        let source = event.invocation_source;
        info!(balance_type = %balance_type, source = %source, "balance due date requested");

        if source.is_fulfillment() && is_income_tax(&balance_type) {
            return Ok(actions::switch_intent(
                event,
                SupportedIntent::IncomeTaxChoice.name(),
            ));
        }

        self.fulfill(event, &balance_type)
    }

    /// Handle IncomeTaxChoice; only valid at fulfillment
    fn handle_income_tax_choice(&self, event: &CodeHookEvent) -> DialogResult<DialogResponse> {
        let intent = SupportedIntent::IncomeTaxChoice;
        let income_type = category_slot(event, intent)?;
        let source = event.invocation_source;
        info!(income_type = %income_type, source = %source, "income tax type chosen");

        if !source.is_fulfillment() {
            return Err(DialogError::InvalidInvocationSource {
                intent: intent.name().to_string(),
                invocation_source: source,
            });
        }

        self.fulfill(event, &income_type)
    }

    fn fulfill(&self, event: &CodeHookEvent, category: &str) -> DialogResult<DialogResponse> {
        match self.responses.lookup(category) {
            Lookup::Found(text) => Ok(actions::close(
                event.session_attributes.clone(),
                FulfillmentState::Fulfilled,
                Message::plain_text(text),
            )),
            Lookup::NotFound(category) => Err(DialogError::UnknownCategory(category)),
        }
    }
}

/// Normalized value of the slot that selects the answer for `intent`
fn category_slot(event: &CodeHookEvent, intent: SupportedIntent) -> DialogResult<String> {
    event
        .slot(intent.category_slot())
        .map(normalize_category)
        .ok_or_else(|| DialogError::MissingSlot {
            intent: intent.name().to_string(),
            slot: intent.category_slot().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::DialogAction;
    use serde_json::json;

    fn event(intent: &str, slot: &str, value: &str, source: &str) -> CodeHookEvent {
        CodeHookEvent::from_value(json!({
            "invocationSource": source,
            "userId": "tester",
            "bot": {"name": "TaxBot"},
            "sessionAttributes": {},
            "currentIntent": {"name": intent, "slots": {slot: value}}
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_slot() {
        let responder = DialogResponder::builtin();
        let event = CodeHookEvent::from_value(json!({
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": "CheckBalanceDueDate", "slots": {"BalanceType": null}}
        }))
        .unwrap();

        let err = responder.handle(&event).unwrap_err();
        assert!(matches!(
            err,
            DialogError::MissingSlot { ref slot, .. } if slot == "BalanceType"
        ));
    }

    #[test]
    fn test_income_redirect_only_at_fulfillment() {
        let responder = DialogResponder::builtin();

        let at_fulfillment = event(
            "CheckBalanceDueDate",
            "BalanceType",
            "Income Tax",
            "FulfillmentCodeHook",
        );
        let response = responder.handle(&at_fulfillment).unwrap();
        assert!(matches!(
            response.action(),
            DialogAction::ConfirmIntent { intent_name, .. } if intent_name == "IncomeTaxChoice"
        ));

        // Mid-dialog, income falls through to the table, which has no entry for it
        let mid_dialog = event("CheckBalanceDueDate", "BalanceType", "income", "DialogCodeHook");
        let err = responder.handle(&mid_dialog).unwrap_err();
        assert!(matches!(err, DialogError::UnknownCategory(ref c) if c == "income"));
    }

    #[test]
    fn test_custom_source() {
        let table = ResponseTable::from_entries([("Rent", "Rent is due on the first.")]).unwrap();
        let responder = DialogResponder::new(Arc::new(table), "UTC");
        assert_eq!(responder.time_zone(), "UTC");

        let response = responder
            .handle(&event("CheckBalanceDueDate", "BalanceType", "RENT", "FulfillmentCodeHook"))
            .unwrap();
        assert_eq!(response.message().content, "Rent is due on the first.");
    }
}
