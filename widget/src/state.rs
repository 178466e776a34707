//! The widget's state machine.
//!
//! `update` is a pure reducer: it consumes one [`Message`], mutates
//! the widget, and at most asks its driver to run one [`Command`]. No
//! I/O happens here, which is what makes every transition unit
//! testable.
use crate::card::{AnimalRecord, DisplayCard};

pub const NOT_FOUND_MESSAGE: &str = "No animal found";
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong while searching";

/// The four observable widget states. `Error` doubles as the closed
/// prompt with a message on display, so "loading and error at once" is
/// unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingInput,
    Loading,
    Error(String),
}

#[derive(Clone, Debug)]
pub enum Message {
    /// User asked to add an animal.
    OpenPrompt,
    /// User edited the prompt's input field.
    InputChanged(String),
    /// User dismissed the prompt.
    CancelPrompt,
    /// User confirmed the prompt's current input.
    ConfirmPrompt,
    /// The driver finished running a search, successfully or not.
    SearchFinished(Result<Vec<AnimalRecord>, String>),
}

/// Effects the reducer asks its driver to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
}

pub struct SearchWidget {
    phase: Phase,
    input: String,
    cards: Vec<DisplayCard>,
}

impl Default for SearchWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchWidget {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            cards: Vec::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Session-local card list, append-only.
    pub fn cards(&self) -> &[DisplayCard] {
        &self.cards
    }

    pub fn update(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::OpenPrompt => {
                // also the way out of the error state
                if matches!(self.phase, Phase::Idle | Phase::Error(_)) {
                    self.phase = Phase::AwaitingInput;
                }
                None
            }
            Message::InputChanged(value) => {
                if self.phase == Phase::AwaitingInput {
                    self.input = value;
                }
                None
            }
            Message::CancelPrompt => {
                if self.phase == Phase::AwaitingInput {
                    self.input.clear();
                    self.phase = Phase::Idle;
                }
                None
            }
            Message::ConfirmPrompt => self.confirm(),
            Message::SearchFinished(result) => {
                self.finish(result);
                None
            }
        }
    }

    fn confirm(&mut self) -> Option<Command> {
        // a confirm while loading would start a second in-flight query
        if self.phase != Phase::AwaitingInput {
            return None;
        }

        let term = self.input.trim().to_string();
        if term.is_empty() {
            log::debug!("[WIDGET] Ignoring confirm with blank input");
            return None;
        }

        self.phase = Phase::Loading;
        Some(Command::Search(term))
    }

    fn finish(&mut self, result: Result<Vec<AnimalRecord>, String>) {
        if self.phase != Phase::Loading {
            log::warn!("[WIDGET] Dropping a search result that nobody is waiting for");
            return;
        }

        match result {
            Err(cause) => {
                log::error!("[WIDGET] Search failed: {cause}");
                self.phase = Phase::Error(SEARCH_FAILED_MESSAGE.to_string());
            }
            Ok(records) => match records.first() {
                None => {
                    self.phase = Phase::Error(NOT_FOUND_MESSAGE.to_string());
                }
                Some(record) => {
                    let card = DisplayCard::from_record(record, self.input.trim());
                    self.cards.push(card);
                    self.phase = Phase::Idle;
                }
            },
        }

        self.input.clear();
    }
}
