use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{
    event::InvocationEvent,
    response::{Acknowledgement, InvocationResponse},
};

/// Entry point for one invocation. Always succeeds with a 200 envelope.
pub async fn handle_event(event: InvocationEvent) -> InvocationResponse {
    info!(
        request_id = %event.correlation_id(),
        "Received event: {:#}",
        event.as_value()
    );

    acknowledge(&event, Utc::now())
}

/// Builds the acknowledgement for `event` as of `now`.
///
/// No processing is started here; the response only confirms intake.
pub fn acknowledge(event: &InvocationEvent, now: DateTime<Utc>) -> InvocationResponse {
    let ack = Acknowledgement::new(&event.correlation_id(), now);
    InvocationResponse::ok(&ack)
}
