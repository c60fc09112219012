pub mod commands;
pub mod render;

pub use commands::{Command, HELP};

use crate::app::App;
use crate::contact::DeepLinks;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

/// Reads commands line by line until EOF or `quit`
pub async fn run<R>(app: &mut App, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    println!("{}", render::screen(app));

    while let Some(line) = lines.next_line().await.context("Failed to read command")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Rejected input '{}'", line.trim());
                println!("error: {:#}", e);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        if let Err(e) = execute(app, command).await {
            println!("error: {:#}", e);
        }
    }

    info!("👋 Session ended on {}", app.current_screen());
    Ok(())
}

async fn execute(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Dispatch(action) => {
            let effect = app.dispatch(action);
            if let Some(notice) = effect.notice {
                println!("{}", render::notice(&notice));
            }
            println!("{}", render::screen(app));
        }
        Command::Send(form) => {
            println!("Sending...");
            let effect = app.send_message(form).await?;
            if let Some(notice) = effect.notice {
                println!("{}", render::notice(&notice));
            }
            println!("{}", render::screen(app));
        }
        Command::Results(sort) => {
            let results = app.results(sort)?;
            println!("{}", render::listings(app, &results));
        }
        Command::Saved(query) => {
            let saved = app.saved_listings(query.as_deref());
            println!("{}", render::listings(app, &saved));
        }
        Command::Details => match app.selected_details() {
            Some(details) => println!("{}", render::details(&details)),
            None => println!("Property not found"),
        },
        Command::Links => match app.selected_details() {
            Some(details) => {
                let links = DeepLinks::for_agent(&details.agent);
                println!("call:     {}", links.call);
                println!("sms:      {}", links.sms);
                println!("whatsapp: {}", links.whatsapp);
            }
            None => println!("Property not found"),
        },
        Command::State => {
            let json = serde_json::to_string_pretty(app.state())?;
            println!("{}", json);
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use crate::config::Config;
    use crate::contact::SimulatedSender;
    use crate::listings::MockCatalog;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        App::new(
            &Config::default(),
            Arc::new(MockCatalog::new()),
            Arc::new(SimulatedSender::new(Duration::ZERO)),
        )
    }

    #[tokio::test]
    async fn scripted_walkthrough_ends_on_details() {
        let mut app = app();
        let script = b"start\nsearch type=house\nbogus\nopen 7\ncontact\nsend name=Abebe email=a@b.et\n" as &[u8];

        run(&mut app, script).await.unwrap();

        assert_eq!(app.current_screen(), Screen::PropertyDetails);
        assert_eq!(app.state().selected_property_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn back_after_sending_returns_to_results() {
        let mut app = app();
        let script = b"start\ntab search\nopen 3\ncontact\nsend name=Abebe\nback\n" as &[u8];

        run(&mut app, script).await.unwrap();

        assert_eq!(app.current_screen(), Screen::SearchResults);
        assert_eq!(app.state().tab, crate::app::Tab::Search);
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut app = app();
        let script = b"start\nquit\ntab profile\n" as &[u8];

        run(&mut app, script).await.unwrap();

        assert_eq!(app.current_screen(), Screen::Home);
    }
}
