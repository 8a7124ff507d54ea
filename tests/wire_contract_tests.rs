//! Tests for the exact JSON exchanged with the conversation host

use serde_json::{json, Value};
use taxbot_router::{
    delegate, CodeHook, DialogError, DialogResponder, InvocationContext, Message,
};

fn hook() -> CodeHook<taxbot_router::ResponseTable> {
    CodeHook::new(DialogResponder::builtin())
}

fn context() -> InvocationContext {
    InvocationContext::new("taxbot-router", "America/New_York")
}

#[test]
fn test_close_response_bytes() {
    let response = hook()
        .invoke(
            json!({
                "messageVersion": "1.0",
                "invocationSource": "FulfillmentCodeHook",
                "userId": "abc",
                "sessionAttributes": {"a": "1"},
                "bot": {"name": "TaxBot", "alias": null, "version": "$LATEST"},
                "outputDialogMode": "Text",
                "currentIntent": {
                    "name": "CheckBalanceDueDate",
                    "slots": {"BalanceType": "Individual"},
                    "confirmationStatus": "None"
                },
                "inputTranscript": "individual"
            }),
            &context(),
        )
        .unwrap();

    assert_eq!(
        response,
        json!({
            "sessionAttributes": {"a": "1"},
            "dialogAction": {
                "type": "Close",
                "fulfillmentState": "Fulfilled",
                "message": {
                    "contentType": "PlainText",
                    "content": "Your balance is due no later than December 31.\nFor more information, see your taxes.( https://www.abc.ca/your-taxes.html )"
                }
            }
        })
    );
}

#[test]
fn test_confirm_intent_response() {
    let response = hook()
        .invoke(
            json!({
                "invocationSource": "FulfillmentCodeHook",
                "userId": "abc",
                "sessionAttributes": {},
                "bot": {"name": "TaxBot"},
                "currentIntent": {"name": "CheckBalanceDueDate", "slots": {"BalanceType": "Income Tax"}}
            }),
            &context(),
        )
        .unwrap();

    assert_eq!(
        response,
        json!({
            "sessionAttributes": {},
            "dialogAction": {
                "type": "ConfirmIntent",
                "intentName": "IncomeTaxChoice",
                "message": {
                    "contentType": "PlainText",
                    "content": "What type of income tax? (Individual, Business or Trusts?)"
                },
                "slots": {}
            }
        })
    );
}

#[test]
fn test_null_session_attributes_echo_as_null() {
    let response = hook()
        .invoke(
            json!({
                "invocationSource": "FulfillmentCodeHook",
                "userId": "abc",
                "sessionAttributes": null,
                "bot": {"name": "TaxBot"},
                "currentIntent": {"name": "IncomeTaxChoice", "slots": {"IncomeType": "Trusts"}}
            }),
            &context(),
        )
        .unwrap();

    let object = response.as_object().unwrap();
    assert_eq!(object.get("sessionAttributes"), Some(&Value::Null));
    assert_eq!(response["dialogAction"]["type"], "Close");
}

#[test]
fn test_delegate_echoes_attributes() {
    let attributes = Some(
        [("step".to_string(), "2".to_string())]
            .into_iter()
            .collect(),
    );
    let response = delegate(attributes, Message::plain_text("continue"));

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "sessionAttributes": {"step": "2"},
            "dialogAction": {
                "type": "Delegate",
                "message": {"contentType": "PlainText", "content": "continue"}
            }
        })
    );
}

#[test]
fn test_unknown_invocation_source_is_malformed() {
    let err = hook()
        .invoke(
            json!({
                "invocationSource": "SomethingElse",
                "currentIntent": {"name": "IncomeTaxChoice", "slots": {"IncomeType": "individual"}}
            }),
            &context(),
        )
        .unwrap_err();

    assert!(matches!(err, DialogError::MalformedEvent(_)));
}

#[test]
fn test_errors_propagate_from_entry_point() {
    let err = hook()
        .invoke(
            json!({
                "invocationSource": "DialogCodeHook",
                "currentIntent": {"name": "IncomeTaxChoice", "slots": {"IncomeType": "individual"}}
            }),
            &context(),
        )
        .unwrap_err();

    assert!(matches!(err, DialogError::InvalidInvocationSource { .. }));
}
