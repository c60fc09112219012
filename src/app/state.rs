use crate::app::action::{Action, InfoAction, MenuItem, QuickAction};
use crate::app::notice::{Effect, Notice, ToggleOutcome};
use crate::app::screen::{Screen, Tab};
use crate::models::SearchFilters;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info};

/// Identifiers of listings the user marked as favorites
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SavedIds(HashSet<String>);

impl SavedIds {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// Flips membership of `id`. The id is not checked against any catalog.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if self.0.remove(id) {
            ToggleOutcome::Removed
        } else {
            self.0.insert(id.to_string());
            ToggleOutcome::Saved
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.0
    }
}

/// Field updates merged into the state by [`NavigationState::navigate`]
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub selected_property_id: Option<String>,
    pub search_filters: Option<SearchFilters>,
}

impl Patch {
    pub fn selecting(id: impl Into<String>) -> Self {
        Self {
            selected_property_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn filtering(filters: SearchFilters) -> Self {
        Self {
            search_filters: Some(filters),
            ..Self::default()
        }
    }
}

/// A screen together with the tab that was active on it
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Visit {
    pub screen: Screen,
    pub tab: Tab,
}

/// Single source of truth for what is currently shown
#[derive(Debug, Clone, Serialize)]
pub struct NavigationState {
    pub screen: Screen,
    pub tab: Tab,
    pub search_filters: Option<SearchFilters>,
    pub selected_property_id: Option<String>,
    pub saved_ids: SavedIds,
    pub menu_open: bool,
    pub onboarding: bool,
    history: VecDeque<Visit>,
    #[serde(skip)]
    history_limit: usize,
}

impl NavigationState {
    pub fn new(saved_ids: SavedIds, history_limit: usize) -> Self {
        Self {
            screen: Screen::Splash,
            tab: Tab::Home,
            search_filters: None,
            selected_property_id: None,
            saved_ids,
            menu_open: false,
            onboarding: true,
            history: VecDeque::new(),
            history_limit,
        }
    }

    /// Shows `screen`, optionally switching tab, and closes the menu
    pub fn navigate(&mut self, screen: Screen, tab: Option<Tab>, patch: Patch) {
        if screen != self.screen {
            self.remember();
        }
        debug!("{} -> {}", self.screen, screen);

        self.screen = screen;
        if let Some(tab) = tab {
            self.tab = tab;
        }
        self.menu_open = false;

        if let Some(id) = patch.selected_property_id {
            self.selected_property_id = Some(id);
        }
        if let Some(filters) = patch.search_filters {
            self.search_filters = Some(filters);
        }
    }

    fn remember(&mut self) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(Visit {
            screen: self.screen,
            tab: self.tab,
        });
    }

    /// Restores the newest history entry without recording the screen left
    fn restore(&mut self, visit: Visit) {
        debug!("{} -> {} (back)", self.screen, visit.screen);
        self.screen = visit.screen;
        self.tab = visit.tab;
        self.menu_open = false;
    }

    /// Leaves the contact form for the details screen it was opened from.
    /// The form itself never enters the history.
    fn leave_contact_form(&mut self) {
        match self.history.back() {
            Some(visit) if visit.screen == Screen::PropertyDetails => {
                let visit = *visit;
                self.history.pop_back();
                self.restore(visit);
            }
            _ => {
                self.screen = Screen::PropertyDetails;
                self.menu_open = false;
            }
        }
    }

    /// Applies one user intent. Every action is total.
    pub fn apply(&mut self, action: Action) -> Effect {
        info!("▶ {:?} on {}", action, self.screen);

        match action {
            Action::StartExploring => {
                if self.screen != Screen::Home {
                    self.remember();
                }
                self.screen = Screen::Home;
                self.onboarding = false;
                Effect::none()
            }
            Action::Search(filters) => {
                self.search(filters);
                Effect::none()
            }
            Action::QuickAction(kind) => match kind {
                QuickAction::Rent | QuickAction::Buy => {
                    self.search(SearchFilters::of_type("apartment"));
                    Effect::none()
                }
                QuickAction::Map => {
                    Effect::notice(Notice::info("Map view would open here with all properties"))
                }
                QuickAction::Invest => {
                    Effect::notice(Notice::info("Investment insights would be displayed here"))
                }
            },
            Action::OpenProperty(id) => {
                self.navigate(Screen::PropertyDetails, None, Patch::selecting(id));
                Effect::none()
            }
            Action::ToggleSaved(id) => {
                let outcome = self.saved_ids.toggle(&id);
                info!("♥ {} {:?}, {} saved", id, outcome, self.saved_ids.len());
                Effect {
                    notice: Some(Notice::success(outcome.message())),
                    toggled: Some(outcome),
                }
            }
            Action::ChangeTab(tab) => self.change_tab(tab),
            Action::Back => {
                match self.history.pop_back() {
                    Some(previous) => self.restore(previous),
                    None => self.navigate(Screen::Home, Some(Tab::Home), Patch::default()),
                }
                Effect::none()
            }
            Action::BackToHome => {
                self.navigate(Screen::Home, Some(Tab::Home), Patch::default());
                Effect::none()
            }
            Action::ContactAgent => {
                self.navigate(Screen::ContactAgent, None, Patch::default());
                Effect::none()
            }
            Action::CancelContact => {
                self.leave_contact_form();
                Effect::none()
            }
            Action::MessageSent => {
                self.leave_contact_form();
                Effect::notice(Notice::success(
                    "Message sent successfully! The agent will contact you soon.",
                ))
            }
            Action::Logout => {
                self.navigate(Screen::Home, Some(Tab::Home), Patch::default());
                Effect::notice(Notice::success("Logged out successfully"))
            }
            Action::ToggleMenu(open) => {
                self.menu_open = open;
                Effect::none()
            }
            Action::Menu(item) => self.menu(item),
            Action::NavbarSearch => {
                self.navigate(Screen::SearchResults, Some(Tab::Search), Patch::default());
                Effect::none()
            }
            Action::NavbarProfile => {
                self.navigate(Screen::UserAccount, Some(Tab::Profile), Patch::default());
                Effect::none()
            }
            Action::Inform(kind) => {
                let notice = match kind {
                    InfoAction::Share => Notice::success(kind.message()),
                    _ => Notice::info(kind.message()),
                };
                Effect::notice(notice)
            }
        }
    }

    fn search(&mut self, filters: SearchFilters) {
        self.navigate(Screen::SearchResults, Some(Tab::Search), Patch::filtering(filters));
    }

    fn change_tab(&mut self, tab: Tab) -> Effect {
        match tab {
            Tab::Home => self.navigate(Screen::Home, Some(tab), Patch::default()),
            Tab::Search => self.search(SearchFilters::any()),
            Tab::Saved => self.navigate(Screen::SavedListings, Some(tab), Patch::default()),
            Tab::Messages => {
                return Effect::notice(Notice::info("Messages feature would open here"));
            }
            Tab::Profile => self.navigate(Screen::UserAccount, Some(tab), Patch::default()),
        }
        Effect::none()
    }

    fn menu(&mut self, item: MenuItem) -> Effect {
        match item {
            MenuItem::Home => self.navigate(Screen::Home, Some(Tab::Home), Patch::default()),
            MenuItem::Rent => self.search(SearchFilters::of_type("apartment")),
            MenuItem::Buy => self.search(SearchFilters::of_type("house")),
            MenuItem::Map => return Effect::notice(Notice::info("Map view would open here")),
            MenuItem::Invest => {
                return Effect::notice(Notice::info("Investment insights would open here"));
            }
            MenuItem::Saved => self.navigate(Screen::SavedListings, Some(Tab::Saved), Patch::default()),
            MenuItem::Account => {
                self.navigate(Screen::UserAccount, Some(Tab::Profile), Patch::default())
            }
        }
        Effect::none()
    }
}
