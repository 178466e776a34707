//! Textual projection of the widget state.
//!
//! One line of status (prompt, spinner, or error) followed by the card
//! list as a disclosure block that expands once it holds anything.
use std::fmt::Write;

use crate::state::{Phase, SearchWidget};

pub fn render(widget: &SearchWidget) -> String {
    let mut out = String::new();

    match widget.phase() {
        Phase::Idle => out.push_str("[a] add an animal  [q] quit\n"),
        Phase::AwaitingInput => {
            out.push_str("New animal (empty line cancels)\n");
            let _ = writeln!(out, "> {}", widget.input());
        }
        Phase::Loading => out.push_str("Loading...\n"),
        Phase::Error(message) => {
            let _ = writeln!(out, "! {message}");
        }
    }

    let cards = widget.cards();
    let marker = if cards.is_empty() { ">" } else { "v" };
    let _ = writeln!(out, "{marker} Animals ({})", cards.len());

    for card in cards {
        let _ = writeln!(out, "  {}", card.name);
        let _ = writeln!(out, "    {}", card.image);
        let _ = writeln!(out, "    {}", card.description);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AnimalRecord;
    use crate::state::{Message, NOT_FOUND_MESSAGE};

    #[test]
    fn loading_shows_a_spinner_line() {
        let mut widget = SearchWidget::new();
        widget.update(Message::OpenPrompt);
        widget.update(Message::InputChanged("lion".to_string()));
        widget.update(Message::ConfirmPrompt);

        assert!(render(&widget).contains("Loading..."));
    }

    #[test]
    fn errors_show_their_message() {
        let mut widget = SearchWidget::new();
        widget.update(Message::OpenPrompt);
        widget.update(Message::InputChanged("zzz".to_string()));
        widget.update(Message::ConfirmPrompt);
        widget.update(Message::SearchFinished(Ok(vec![])));

        assert!(render(&widget).contains(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn the_disclosure_block_expands_once_a_card_exists() {
        let mut widget = SearchWidget::new();
        assert!(render(&widget).contains("> Animals (0)"));

        widget.update(Message::OpenPrompt);
        widget.update(Message::InputChanged("lion".to_string()));
        widget.update(Message::ConfirmPrompt);
        widget.update(Message::SearchFinished(Ok(vec![AnimalRecord {
            name: "Lion".to_string(),
            description: Some("Big cat".to_string()),
            image: None,
        }])));

        let rendered = render(&widget);
        assert!(rendered.contains("v Animals (1)"));
        assert!(rendered.contains("Lion"));
        assert!(rendered.contains("Big cat"));
    }
}
