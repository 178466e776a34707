use std::time::Duration;

use tokio::time::sleep;

use crate::api::AnimalsApi;
use crate::state::Message;

/// Keeps the spinner on screen even when the backend answers
/// instantly. Not a timeout; it never races the request.
const SPINNER_DELAY: Duration = Duration::from_millis(800);

/// Runs one search against the port and wraps the outcome in the
/// message the reducer expects. The delay is awaited after the call,
/// never instead of it.
pub async fn perform_search(api: &dyn AnimalsApi, term: &str) -> Message {
    let result = api.search(term).await;

    sleep(SPINNER_DELAY).await;

    match result {
        Ok(records) => {
            log::info!("[RUNNER] Search for '{term}' returned {} records", records.len());
            Message::SearchFinished(Ok(records))
        }
        Err(cause) => {
            log::error!("[RUNNER] Search for '{term}' failed: {cause}");
            Message::SearchFinished(Err(cause.to_string()))
        }
    }
}
