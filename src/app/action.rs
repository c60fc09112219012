use crate::app::screen::Tab;
use crate::models::SearchFilters;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shortcut cards on the home screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
    Rent,
    Buy,
    Map,
    Invest,
}

impl FromStr for QuickAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "rent" => Ok(Self::Rent),
            "buy" => Ok(Self::Buy),
            "map" => Ok(Self::Map),
            "invest" => Ok(Self::Invest),
            other => bail!("unknown quick action '{}'", other),
        }
    }
}

/// Entries of the slide-out drawer menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MenuItem {
    Home,
    Rent,
    Buy,
    Map,
    Invest,
    Saved,
    Account,
}

impl FromStr for MenuItem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "home" => Ok(Self::Home),
            "rent" => Ok(Self::Rent),
            "buy" => Ok(Self::Buy),
            "map" => Ok(Self::Map),
            "invest" => Ok(Self::Invest),
            "saved" => Ok(Self::Saved),
            "account" => Ok(Self::Account),
            other => bail!("unknown menu item '{}'", other),
        }
    }
}

/// Actions that only surface a message and never touch navigation state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InfoAction {
    OpenMap,
    Notifications,
    Messages,
    ListProperty,
    CreateAlert,
    Login,
    Register,
    EditProfile,
    Settings,
    SearchHistory,
    Help,
    Share,
}

impl InfoAction {
    pub fn message(&self) -> &'static str {
        match self {
            Self::OpenMap => "Map view would open here with all properties",
            Self::Notifications => "Notifications would open here",
            Self::Messages => "Messages feature would open here",
            Self::ListProperty => "Property listing form would open here",
            Self::CreateAlert => "Alert creation form would open here",
            Self::Login => "Login form would open here",
            Self::Register => "Registration form would open here",
            Self::EditProfile => "Profile editing form would open here",
            Self::Settings => "Settings page would open here",
            Self::SearchHistory => "Search history would be displayed here",
            Self::Help => "Help & support page would open here",
            Self::Share => "Property link copied to clipboard",
        }
    }
}

impl FromStr for InfoAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "map" => Ok(Self::OpenMap),
            "notifications" => Ok(Self::Notifications),
            "messages" => Ok(Self::Messages),
            "list-property" => Ok(Self::ListProperty),
            "create-alert" => Ok(Self::CreateAlert),
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "edit-profile" => Ok(Self::EditProfile),
            "settings" => Ok(Self::Settings),
            "search-history" => Ok(Self::SearchHistory),
            "help" => Ok(Self::Help),
            "share" => Ok(Self::Share),
            other => bail!("unknown info action '{}'", other),
        }
    }
}

/// Every user intent the coordinator understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartExploring,
    Search(SearchFilters),
    QuickAction(QuickAction),
    OpenProperty(String),
    ToggleSaved(String),
    ChangeTab(Tab),
    /// Back from the details screen
    Back,
    /// Back from the results screen
    BackToHome,
    ContactAgent,
    /// Leave the contact form without sending
    CancelContact,
    MessageSent,
    Logout,
    ToggleMenu(bool),
    Menu(MenuItem),
    NavbarSearch,
    NavbarProfile,
    Inform(InfoAction),
}
