use crate::app::{Action, InfoAction, MenuItem, QuickAction, Tab};
use crate::listings::SortOrder;
use crate::models::{ContactForm, SearchFilters};
use anyhow::{bail, Context, Result};

/// One parsed line of driver input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Send(ContactForm),
    Results(SortOrder),
    Saved(Option<String>),
    Details,
    Links,
    State,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  start                          leave the splash screen
  search type=.. beds=.. price=.. location=.. furnished=yes|no verified=yes|no
  quick rent|buy|map|invest
  open ID | save ID
  tab home|search|saved|messages|profile
  back | home | contact | cancel | logout
  send name=.. email=.. phone=.. message=..
  menu open|close|home|rent|buy|map|invest|saved|account
  navbar search|profile
  info map|notifications|messages|list-property|create-alert|login|register|
       edit-profile|settings|search-history|help|share
  results [price-low|price-high|newest|size]
  saved [QUERY]
  details | links | state | help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "start" => Self::Dispatch(Action::StartExploring),
            "search" => Self::Dispatch(Action::Search(parse_filters(rest)?)),
            "quick" => Self::Dispatch(Action::QuickAction(rest.parse::<QuickAction>()?)),
            "open" => Self::Dispatch(Action::OpenProperty(required_id(verb, rest)?)),
            "save" => Self::Dispatch(Action::ToggleSaved(required_id(verb, rest)?)),
            "tab" => Self::Dispatch(Action::ChangeTab(rest.parse::<Tab>()?)),
            "back" => Self::Dispatch(Action::Back),
            "home" => Self::Dispatch(Action::BackToHome),
            "contact" => Self::Dispatch(Action::ContactAgent),
            "cancel" => Self::Dispatch(Action::CancelContact),
            "logout" => Self::Dispatch(Action::Logout),
            "menu" => match rest {
                "open" => Self::Dispatch(Action::ToggleMenu(true)),
                "close" => Self::Dispatch(Action::ToggleMenu(false)),
                item => Self::Dispatch(Action::Menu(item.parse::<MenuItem>()?)),
            },
            "navbar" => match rest {
                "search" => Self::Dispatch(Action::NavbarSearch),
                "profile" => Self::Dispatch(Action::NavbarProfile),
                other => bail!("unknown navbar button '{}'", other),
            },
            "info" => Self::Dispatch(Action::Inform(rest.parse::<InfoAction>()?)),
            "send" => Self::Send(parse_form(rest)?),
            "results" if rest.is_empty() => Self::Results(SortOrder::default()),
            "results" => Self::Results(rest.parse()?),
            "saved" => Self::Saved((!rest.is_empty()).then(|| rest.to_string())),
            "details" => Self::Details,
            "links" => Self::Links,
            "state" => Self::State,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{}', try 'help'", other),
        };

        Ok(Some(command))
    }
}

fn required_id(verb: &str, rest: &str) -> Result<String> {
    let id = rest.split_whitespace().next().with_context(|| format!("'{}' needs a listing id", verb))?;
    Ok(id.to_string())
}

/// Splits `a=1 b=two words c=3` into pairs; values run until the next `key=`
fn key_values<'a>(input: &'a str, keys: &[&str]) -> Result<Vec<(&'a str, String)>> {
    let mut pairs: Vec<(&'a str, String)> = Vec::new();

    for token in input.split_whitespace() {
        let field = token
            .split_once('=')
            .filter(|(key, _)| keys.contains(key));

        if let Some((key, value)) = field {
            pairs.push((key, value.to_string()));
            continue;
        }
        match pairs.last_mut() {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(token);
            }
            None => bail!("expected key=value, got '{}'", token),
        }
    }

    Ok(pairs)
}

fn parse_filters(input: &str) -> Result<SearchFilters> {
    let mut filters = SearchFilters::any();
    let keys = ["type", "beds", "price", "location", "furnished", "verified"];
    for (key, value) in key_values(input, &keys)? {
        match key {
            "type" => filters.property_type = value,
            "beds" => filters.bedrooms = value,
            "price" => filters.price_range = value,
            "furnished" => filters.furnished = Some(yes_no(key, &value)?),
            "verified" => filters.verified_only = yes_no(key, &value)?,
            _ => filters.location = Some(value),
        }
    }
    Ok(filters)
}

fn yes_no(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "furnished" => Ok(true),
        "no" | "false" | "unfurnished" => Ok(false),
        other => bail!("'{}' expects yes or no, got '{}'", key, other),
    }
}

fn parse_form(input: &str) -> Result<ContactForm> {
    let mut form = ContactForm::default();
    for (key, value) in key_values(input, &["name", "email", "phone", "message"])? {
        match key {
            "name" => form.name = value,
            "email" => form.email = value,
            "phone" => form.phone = value,
            _ => form.message = value,
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().expect("a command")
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert!(Command::parse("   ").unwrap().is_none());
        assert!(Command::parse("# walkthrough").unwrap().is_none());
    }

    #[test]
    fn parses_search_filters() {
        let command = parse("search type=apartment beds=2 price=20000-40000 location=Bole Medhanialem");
        assert_eq!(
            command,
            Command::Dispatch(Action::Search(SearchFilters {
                property_type: "apartment".to_string(),
                bedrooms: "2".to_string(),
                price_range: "20000-40000".to_string(),
                location: Some("Bole Medhanialem".to_string()),
                ..SearchFilters::any()
            }))
        );

        assert_eq!(parse("search"), Command::Dispatch(Action::Search(SearchFilters::any())));
    }

    #[test]
    fn parses_furnishing_and_verification_flags() {
        assert_eq!(
            parse("search furnished=no verified=yes"),
            Command::Dispatch(Action::Search(SearchFilters {
                furnished: Some(false),
                verified_only: true,
                ..SearchFilters::any()
            }))
        );
        assert_eq!(
            parse("search type=condo furnished=Furnished"),
            Command::Dispatch(Action::Search(SearchFilters {
                furnished: Some(true),
                ..SearchFilters::of_type("condo")
            }))
        );
        assert!(Command::parse("search furnished=maybe").is_err());
        assert!(Command::parse("search verified=").is_err());
    }

    #[test]
    fn message_values_keep_spaces_and_equals_signs() {
        let command = parse("send name=Abebe Kebede email=a@b.et message=Is 2+2=4 parking included?");
        let Command::Send(form) = &command else {
            panic!("expected send, got {:?}", command);
        };
        assert_eq!(form.name, "Abebe Kebede");
        assert_eq!(form.email, "a@b.et");
        assert_eq!(form.phone, "");
        assert_eq!(form.message, "Is 2+2=4 parking included?");
    }

    #[test]
    fn send_without_message_uses_default_text() {
        let Command::Send(form) = parse("send name=Abebe") else {
            panic!("expected send");
        };
        assert_eq!(form.message, ContactForm::default().message);
    }

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(parse("open 7"), Command::Dispatch(Action::OpenProperty("7".to_string())));
        assert_eq!(parse("tab saved"), Command::Dispatch(Action::ChangeTab(Tab::Saved)));
        assert_eq!(parse("menu open"), Command::Dispatch(Action::ToggleMenu(true)));
        assert_eq!(parse("menu buy"), Command::Dispatch(Action::Menu(MenuItem::Buy)));
        assert_eq!(parse("info share"), Command::Dispatch(Action::Inform(InfoAction::Share)));
        assert_eq!(parse("results newest"), Command::Results(SortOrder::Newest));
        assert_eq!(parse("results size"), Command::Results(SortOrder::Size));
        assert_eq!(parse("saved cmc"), Command::Saved(Some("cmc".to_string())));
    }

    #[test]
    fn reports_bad_input() {
        assert!(Command::parse("fly").is_err());
        assert!(Command::parse("open").is_err());
        assert!(Command::parse("tab inbox").is_err());
        assert!(Command::parse("search bedrooms").is_err());
    }
}
