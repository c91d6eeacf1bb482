pub mod client;
pub mod types;

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use crate::api::client::{ApiError, Backend};
use crate::api::types::{Quote, UserProfile, Word};
use crate::event::AppEvent;

/// A request the app wants issued against the backend. The app queues
/// these in an outbox; the main loop drains it and dispatches each one.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    FetchUser,
    FetchQuote,
    FetchWords,
    FetchNote(i64),
    SaveNote { word_id: i64, notes: String },
}

/// The completion of one request, posted back onto the event channel.
#[derive(Debug)]
pub enum ApiEvent {
    User(Result<UserProfile, ApiError>),
    Quote(Result<Quote, ApiError>),
    Words(Result<Vec<Word>, ApiError>),
    Note {
        word_id: i64,
        result: Result<String, ApiError>,
    },
    NoteSaved(Result<(), ApiError>),
}

/// Run one request on its own thread and post the result as an event.
///
/// Requests are fire-and-forget: there is no cancellation, no retry, and
/// no ordering between requests in flight. A note fetch that resolves
/// after the user has navigated on still lands on the note surface.
pub fn dispatch(backend: Arc<dyn Backend>, request: ApiRequest, tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let event = match request {
            ApiRequest::FetchUser => ApiEvent::User(backend.fetch_user()),
            ApiRequest::FetchQuote => ApiEvent::Quote(backend.fetch_quote()),
            ApiRequest::FetchWords => ApiEvent::Words(backend.fetch_words()),
            ApiRequest::FetchNote(word_id) => ApiEvent::Note {
                word_id,
                result: backend.fetch_note(word_id),
            },
            ApiRequest::SaveNote { word_id, notes } => {
                ApiEvent::NoteSaved(backend.save_note(word_id, &notes))
            }
        };
        // The receiver is gone only during shutdown; nothing to do then.
        let _ = tx.send(AppEvent::Api(event));
    });
}
