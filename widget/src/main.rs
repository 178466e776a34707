use std::env;

use tokio::io::{AsyncBufReadExt, BufReader};

use animals_widget::{
    api::HttpAnimalsApi,
    runner::perform_search,
    state::{Command, Message, Phase, SearchWidget},
    view::render,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    let base_url =
        env::var("ANIMALS_API").unwrap_or_else(|_| "http://localhost:3333".to_string());
    log::info!("[MAIN] Talking to {base_url}");

    let api = HttpAnimalsApi::new(base_url);
    let mut widget = SearchWidget::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", render(&widget));

    while let Ok(Some(line)) = lines.next_line().await {
        let messages = match widget.phase() {
            Phase::AwaitingInput => {
                if line.trim().is_empty() {
                    vec![Message::CancelPrompt]
                } else {
                    vec![Message::InputChanged(line), Message::ConfirmPrompt]
                }
            }
            _ => match line.trim() {
                "q" => break,
                "a" => vec![Message::OpenPrompt],
                _ => vec![],
            },
        };

        for message in messages {
            if let Some(Command::Search(term)) = widget.update(message) {
                // show the spinner before blocking on the search
                print!("{}", render(&widget));
                let finished = perform_search(&api, &term).await;
                widget.update(finished);
            }
        }

        print!("{}", render(&widget));
    }
}
