use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Full-view states the app can display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Splash,
    Home,
    SearchResults,
    PropertyDetails,
    SavedListings,
    ContactAgent,
    UserAccount,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Splash,
        Screen::Home,
        Screen::SearchResults,
        Screen::PropertyDetails,
        Screen::SavedListings,
        Screen::ContactAgent,
        Screen::UserAccount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Home => "home",
            Self::SearchResults => "search-results",
            Self::PropertyDetails => "property-details",
            Self::SavedListings => "saved-listings",
            Self::ContactAgent => "contact-agent",
            Self::UserAccount => "user-account",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bottom-navigation destinations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Home,
    Search,
    Saved,
    Messages,
    Profile,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Saved => "saved",
            Self::Messages => "messages",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "home" => Ok(Self::Home),
            "search" => Ok(Self::Search),
            "saved" => Ok(Self::Saved),
            "messages" => Ok(Self::Messages),
            "profile" => Ok(Self::Profile),
            other => bail!("unknown tab '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_names_match_serde_tags() {
        for screen in Screen::ALL {
            let json = serde_json::to_value(screen).unwrap();
            assert_eq!(json, serde_json::Value::String(screen.to_string()));
        }
    }

    #[test]
    fn tabs_round_trip_through_names() {
        for tab in [Tab::Home, Tab::Search, Tab::Saved, Tab::Messages, Tab::Profile] {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert!("inbox".parse::<Tab>().is_err());
    }
}
