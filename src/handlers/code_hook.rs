//! JSON entry point invoked by the conversation host

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info_span, warn};
use uuid::Uuid;

use crate::{
    errors::{DialogError, DialogResult},
    events::CodeHookEvent,
    handlers::DialogResponder,
    queries::ResponseSource,
};

/// Execution context handed to the entry point alongside the event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvocationContext {
    pub request_id: Uuid,
    pub function_name: String,
    pub time_zone: String,
    pub invoked_at: DateTime<Utc>,
}

impl InvocationContext {
    pub fn new(function_name: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            function_name: function_name.into(),
            time_zone: time_zone.into(),
            invoked_at: Utc::now(),
        }
    }
}

/// Code hook entry point: raw event in, raw response out
pub struct CodeHook<S>
where
    S: ResponseSource,
{
    responder: DialogResponder<S>,
}

impl<S> CodeHook<S>
where
    S: ResponseSource,
{
    pub fn new(responder: DialogResponder<S>) -> Self {
        Self { responder }
    }

    pub fn responder(&self) -> &DialogResponder<S> {
        &self.responder
    }

    /// Answer one event. Errors are returned to the host untouched.
    pub fn invoke(
        &self,
        event: serde_json::Value,
        context: &InvocationContext,
    ) -> DialogResult<serde_json::Value> {
        let span = info_span!(
            "invocation",
            request_id = %context.request_id,
            function_name = %context.function_name,
            time_zone = %context.time_zone,
        );
        let _entered = span.enter();

        let result = self.answer(event);
        if let Err(err) = &result {
            warn!(error = %err, "invocation failed");
        }
        result
    }

    fn answer(&self, event: serde_json::Value) -> DialogResult<serde_json::Value> {
        let event = CodeHookEvent::from_value(event).map_err(DialogError::MalformedEvent)?;
        debug!(bot_name = %event.bot.name, "event received");

        let response = self.responder.handle(&event)?;
        serde_json::to_value(&response).map_err(DialogError::Encode)
    }

    /// Read one JSON event from `reader` and write the JSON response to `writer`
    pub async fn invoke_io<R, W>(
        &self,
        reader: &mut R,
        writer: &mut W,
        context: &InvocationContext,
    ) -> DialogResult<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).await?;
        let event: serde_json::Value =
            serde_json::from_slice(&raw).map_err(DialogError::MalformedEvent)?;

        let response = self.invoke(event, context)?;
        let mut body = serde_json::to_vec(&response).map_err(DialogError::Encode)?;
        body.push(b'\n');

        writer.write_all(&body).await?;
        writer.flush().await?;
        Ok(())
    }
}
