use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DIRECT_INVOCATION: &str = "direct-invocation";

/// An incoming invocation event.
///
/// The event is kept as raw JSON: nothing about its shape is required, and
/// whatever the caller sent is logged as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

impl InvocationEvent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Event with no payload, as sent by a direct invocation.
    pub fn empty() -> Self {
        Self(Value::Object(Default::default()))
    }

    /// `requestContext.requestId`, when present and not null.
    ///
    /// Strings are borrowed as-is; any other value is rendered as JSON text
    /// so the id always reaches the response as a string.
    pub fn request_id(&self) -> Option<Cow<'_, str>> {
        let request_id = self
            .0
            .get("requestContext")
            .and_then(|context| context.get("requestId"))?;

        match request_id {
            Value::Null => None,
            Value::String(id) => Some(Cow::Borrowed(id.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn correlation_id(&self) -> Cow<'_, str> {
        self.request_id().unwrap_or(Cow::Borrowed(DIRECT_INVOCATION))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for InvocationEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
