//! Tax-deadline dialog code hook
//!
//! The conversation host (an NLU service) calls this crate once per turn with
//! the recognized intent, its slots and the stage of the dialog. The crate
//! answers with a dialog action:
//! - closing the turn with a canned answer looked up by balance category
//! - redirecting an income tax question to the `IncomeTaxChoice` follow-up
//!
//! Nothing is kept between invocations; session attributes are echoed back.

pub mod actions;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod queries;
pub mod routing;
pub mod value_objects;

// Re-export main types
pub use actions::{
    close, delegate, elicit_slot, switch_intent, DialogAction, DialogResponse,
    INCOME_TAX_PROMPT,
};

pub use config::Config;

pub use errors::{ContentError, DialogError, DialogResult};

pub use events::{Bot, CodeHookEvent, CurrentIntent};

pub use handlers::{CodeHook, DialogResponder, InvocationContext, DEFAULT_TIME_ZONE};

pub use queries::{Lookup, ResponseSource, ResponseTable};

pub use routing::SupportedIntent;

pub use value_objects::{
    parse_int, ContentType, FulfillmentState, InvocationSource, Message,
    SessionAttributes, Slots,
};
