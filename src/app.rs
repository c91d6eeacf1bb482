use std::time::Instant;

use tracing::warn;

use crate::api::types::{Quote, UserProfile};
use crate::api::{ApiEvent, ApiRequest};
use crate::browser::pager::WordPager;
use crate::browser::save_status::SaveIndicator;
use crate::config::Config;
use crate::ui::note_input::NoteInput;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Browse,
    EditNote,
}

/// Word-list fetch progress; the list itself lives in the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// A slot on the surface fed by one fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed,
}

/// All client state hangs off this struct: the word list and cursor, the
/// note editor, the save indicator, and the user/quote slots. Network
/// requests are queued in `pending` and drained by the main loop, so the
/// whole flow is drivable from tests without a terminal or a backend.
pub struct App {
    pub config: Config,
    pub theme: &'static Theme,
    pub mode: Mode,
    pub user: Option<UserProfile>,
    pub quote: Remote<Quote>,
    pub words: LoadState,
    pub pager: WordPager,
    pub note: NoteInput,
    pub save: SaveIndicator,
    pub should_quit: bool,
    pending: Vec<ApiRequest>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::load().unwrap_or_default())
    }

    pub fn with_config(config: Config) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(theme));

        Self {
            config,
            theme,
            mode: Mode::Browse,
            user: None,
            quote: Remote::Loading,
            words: LoadState::Loading,
            pager: WordPager::new(),
            note: NoteInput::new(""),
            save: SaveIndicator::new(),
            should_quit: false,
            // The three startup fetches are independent and may complete
            // in any order; they touch disjoint surface slots.
            pending: vec![
                ApiRequest::FetchUser,
                ApiRequest::FetchQuote,
                ApiRequest::FetchWords,
            ],
        }
    }

    /// Drain the request outbox for dispatch.
    pub fn take_requests(&mut self) -> Vec<ApiRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Show the word at `index`. Out-of-bounds indices are a silent no-op.
    /// Setting the cursor queues a fetch of that word's note; the note
    /// surface keeps its old content until the response lands.
    pub fn display_word(&mut self, index: usize) {
        if self.pager.go_to(index) {
            if let Some(word) = self.pager.current() {
                self.pending.push(ApiRequest::FetchNote(word.id));
            }
        }
    }

    pub fn previous_word(&mut self) {
        if self.pager.prev_enabled() {
            self.display_word(self.pager.cursor() - 1);
        }
    }

    pub fn next_word(&mut self) {
        if self.pager.next_enabled() {
            self.display_word(self.pager.cursor() + 1);
        }
    }

    pub fn start_editing(&mut self) {
        if self.pager.current().is_some() {
            self.mode = Mode::EditNote;
        }
    }

    pub fn stop_editing(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Submit the current editor text for the word under the cursor. The
    /// indicator flips to Saving immediately; the outcome arrives later
    /// as an `ApiEvent::NoteSaved`. No-op when the list is empty.
    pub fn save_note(&mut self) {
        let Some(word) = self.pager.current() else {
            return;
        };
        let word_id = word.id;
        self.save.begin();
        self.pending.push(ApiRequest::SaveNote {
            word_id,
            notes: self.note.value().to_string(),
        });
    }

    /// Re-issue the startup fetches; the word list is replaced wholesale
    /// when the new response arrives.
    pub fn refresh(&mut self) {
        self.quote = Remote::Loading;
        self.words = LoadState::Loading;
        self.pending.extend([
            ApiRequest::FetchUser,
            ApiRequest::FetchQuote,
            ApiRequest::FetchWords,
        ]);
    }

    pub fn tick(&mut self, now: Instant) {
        self.save.tick(now);
    }

    pub fn apply_api(&mut self, event: ApiEvent, now: Instant) {
        match event {
            ApiEvent::User(Ok(user)) => {
                self.user = Some(user);
            }
            ApiEvent::User(Err(err)) => {
                // Silent degrade: prior header content stays as it was.
                warn!("failed to fetch user profile: {err}");
            }
            ApiEvent::Quote(Ok(quote)) => {
                self.quote = Remote::Ready(quote);
            }
            ApiEvent::Quote(Err(err)) => {
                warn!("failed to fetch quote: {err}");
                self.quote = Remote::Failed;
            }
            ApiEvent::Words(Ok(words)) => {
                self.words = LoadState::Ready;
                self.pager.set_words(words);
                if !self.pager.is_empty() {
                    self.display_word(0);
                }
            }
            ApiEvent::Words(Err(err)) => {
                warn!("failed to fetch words: {err}");
                self.words = LoadState::Failed;
            }
            // Applied as they arrive: a fetch that was in flight when the
            // user navigated on will still land on the note surface.
            ApiEvent::Note { word_id, result } => match result {
                Ok(text) => self.note.set_text(&text),
                Err(err) => {
                    warn!("failed to fetch note for word {word_id}: {err}");
                    self.note.set_text("");
                }
            },
            ApiEvent::NoteSaved(Ok(())) => {
                self.save.resolve_ok(now);
            }
            ApiEvent::NoteSaved(Err(err)) => {
                warn!("failed to save note: {err}");
                self.save.resolve_err(now);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::api::client::ApiError;
    use crate::api::types::Word;
    use crate::browser::save_status::{ERROR_REVERT, SAVED_REVERT, SaveState};

    fn word(id: i64, text: &str) -> Word {
        Word {
            id,
            word: text.to_string(),
            polish_translation: format!("{text}-pl"),
            example_sentence_1: format!("{text} one"),
            example_sentence_2: format!("{text} two"),
            example_sentence_3: format!("{text} three"),
        }
    }

    fn three_words() -> Vec<Word> {
        vec![word(10, "apple"), word(20, "branch"), word(30, "cellar")]
    }

    fn app() -> App {
        App::with_config(Config::default())
    }

    fn server_error() -> ApiError {
        ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn loaded_app() -> App {
        let mut app = app();
        app.take_requests();
        app.apply_api(ApiEvent::Words(Ok(three_words())), Instant::now());
        app
    }

    #[test]
    fn startup_queues_the_three_fetches() {
        let mut app = app();
        assert_eq!(
            app.take_requests(),
            vec![
                ApiRequest::FetchUser,
                ApiRequest::FetchQuote,
                ApiRequest::FetchWords
            ]
        );
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn words_arrival_displays_first_word_and_fetches_its_note() {
        let mut app = loaded_app();
        assert_eq!(app.words, LoadState::Ready);
        assert_eq!(app.pager.current().unwrap().word, "apple");
        assert_eq!(app.pager.position(), 1);
        assert_eq!(app.take_requests(), vec![ApiRequest::FetchNote(10)]);
    }

    #[test]
    fn words_failure_leaves_list_empty_and_cursor_inactive() {
        let mut app = app();
        app.take_requests();
        app.apply_api(ApiEvent::Words(Err(server_error())), Instant::now());
        assert_eq!(app.words, LoadState::Failed);
        assert!(app.pager.current().is_none());
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn empty_word_list_renders_total_zero_without_content() {
        let mut app = app();
        app.take_requests();
        app.apply_api(ApiEvent::Words(Ok(Vec::new())), Instant::now());
        assert_eq!(app.words, LoadState::Ready);
        assert_eq!(app.pager.total(), 0);
        assert!(app.pager.current().is_none());
        // No note fetch for a word that isn't there
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn navigation_fetches_the_new_words_note() {
        let mut app = loaded_app();
        app.take_requests();

        app.next_word();
        assert_eq!(app.pager.cursor(), 1);
        assert_eq!(app.take_requests(), vec![ApiRequest::FetchNote(20)]);

        app.previous_word();
        assert_eq!(app.pager.cursor(), 0);
        assert_eq!(app.take_requests(), vec![ApiRequest::FetchNote(10)]);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut app = loaded_app();
        app.take_requests();

        app.previous_word();
        assert_eq!(app.pager.cursor(), 0);
        assert!(app.take_requests().is_empty());

        app.next_word();
        app.next_word();
        assert_eq!(app.pager.cursor(), 2);
        app.take_requests();

        app.next_word();
        assert_eq!(app.pager.cursor(), 2);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn next_twice_from_load_lands_on_last_word_with_next_disabled() {
        let mut app = loaded_app();
        app.next_word();
        app.next_word();
        assert_eq!(app.pager.cursor(), 2);
        assert!(app.pager.prev_enabled());
        assert!(!app.pager.next_enabled());
    }

    #[test]
    fn display_word_out_of_bounds_is_a_noop() {
        let mut app = loaded_app();
        app.take_requests();
        app.display_word(3);
        assert_eq!(app.pager.cursor(), 0);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn note_arrival_fills_editor_and_failure_clears_it() {
        let mut app = loaded_app();
        app.apply_api(
            ApiEvent::Note {
                word_id: 10,
                result: Ok("remember the orchard".to_string()),
            },
            Instant::now(),
        );
        assert_eq!(app.note.value(), "remember the orchard");

        app.apply_api(
            ApiEvent::Note {
                word_id: 10,
                result: Err(server_error()),
            },
            Instant::now(),
        );
        assert_eq!(app.note.value(), "");
    }

    #[test]
    fn missing_note_reads_as_empty_editor() {
        let mut app = loaded_app();
        app.note.set_text("leftover");
        app.apply_api(
            ApiEvent::Note {
                word_id: 10,
                result: Ok(String::new()),
            },
            Instant::now(),
        );
        assert_eq!(app.note.value(), "");
    }

    #[test]
    fn stale_note_response_still_lands_on_the_editor() {
        // No cancellation: a fetch in flight across a navigation
        // overwrites the editor when it finally resolves.
        let mut app = loaded_app();
        app.next_word();
        app.apply_api(
            ApiEvent::Note {
                word_id: 10,
                result: Ok("note for apple".to_string()),
            },
            Instant::now(),
        );
        assert_eq!(app.pager.current().unwrap().id, 20);
        assert_eq!(app.note.value(), "note for apple");
    }

    #[test]
    fn save_success_transitions_and_reverts_after_two_seconds() {
        let now = Instant::now();
        let mut app = loaded_app();
        app.take_requests();
        app.note.set_text("planted in spring");

        app.save_note();
        assert_eq!(app.save.state(), SaveState::Saving);
        assert_eq!(
            app.take_requests(),
            vec![ApiRequest::SaveNote {
                word_id: 10,
                notes: "planted in spring".to_string()
            }]
        );

        app.apply_api(ApiEvent::NoteSaved(Ok(())), now);
        assert_eq!(app.save.state(), SaveState::Saved);
        assert_eq!(app.save.label(), "Saved!");

        app.tick(now + SAVED_REVERT);
        assert_eq!(app.save.state(), SaveState::Idle);
    }

    #[test]
    fn save_failure_reverts_after_three_seconds_and_never_touches_words() {
        let now = Instant::now();
        let mut app = loaded_app();
        app.take_requests();
        app.note.set_text("this text must not leak into word state");

        app.save_note();
        app.apply_api(ApiEvent::NoteSaved(Err(server_error())), now);
        assert_eq!(app.save.state(), SaveState::Error);
        assert_eq!(app.save.label(), "Error saving");

        app.tick(now + Duration::from_millis(2500));
        assert_eq!(app.save.state(), SaveState::Error);
        app.tick(now + ERROR_REVERT);
        assert_eq!(app.save.state(), SaveState::Idle);

        let current = app.pager.current().unwrap();
        assert_eq!(current.word, "apple");
        assert_eq!(current.polish_translation, "apple-pl");
    }

    #[test]
    fn save_with_empty_list_is_a_noop() {
        let mut app = app();
        app.take_requests();
        app.save_note();
        assert_eq!(app.save.state(), SaveState::Idle);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn quote_arrival_and_failure_fill_the_slot() {
        let mut app = app();
        let quote = Quote {
            text: "Learning never exhausts the mind.".to_string(),
            author: "Leonardo da Vinci".to_string(),
        };
        app.apply_api(ApiEvent::Quote(Ok(quote.clone())), Instant::now());
        assert_eq!(app.quote, Remote::Ready(quote));

        app.apply_api(ApiEvent::Quote(Err(server_error())), Instant::now());
        assert_eq!(app.quote, Remote::Failed);
    }

    #[test]
    fn user_failure_leaves_prior_surface_unchanged() {
        let mut app = app();
        let ada = UserProfile {
            name: "Ada".to_string(),
            picture: "https://example.com/a.png".to_string(),
        };
        app.apply_api(ApiEvent::User(Ok(ada.clone())), Instant::now());
        app.apply_api(ApiEvent::User(Err(server_error())), Instant::now());
        assert_eq!(app.user, Some(ada));
    }

    #[test]
    fn editing_requires_a_current_word() {
        let mut app = app();
        app.start_editing();
        assert_eq!(app.mode, Mode::Browse);

        let mut app = loaded_app();
        app.start_editing();
        assert_eq!(app.mode, Mode::EditNote);
        app.stop_editing();
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn refresh_reissues_the_startup_fetches() {
        let mut app = loaded_app();
        app.take_requests();
        app.refresh();
        assert_eq!(app.words, LoadState::Loading);
        assert_eq!(app.quote, Remote::Loading);
        assert_eq!(
            app.take_requests(),
            vec![
                ApiRequest::FetchUser,
                ApiRequest::FetchQuote,
                ApiRequest::FetchWords
            ]
        );
        // The current list stays visible until the replacement arrives
        assert_eq!(app.pager.total(), 3);
    }
}
