use crate::app::action::Action;
use crate::app::notice::{Effect, Notice};
use crate::app::screen::Screen;
use crate::app::state::{NavigationState, SavedIds};
use crate::config::Config;
use crate::contact::MessageSender;
use crate::listings::{self, FilterMode, ListingSource, SortOrder};
use crate::models::{ContactForm, Property, PropertyDetails, SearchFilters};
use anyhow::Result;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{info, warn};

const NOTICE_LOG_LIMIT: usize = 20;

/// Listing shown when the details screen opens with nothing selected
const FALLBACK_PROPERTY_ID: &str = "1";

/// Top-level coordinator: owns the state and routes intents into it
pub struct App {
    state: NavigationState,
    source: Arc<dyn ListingSource>,
    sender: Arc<dyn MessageSender>,
    filter_mode: FilterMode,
    notices: VecDeque<Notice>,
}

impl App {
    pub fn new(
        config: &Config,
        source: Arc<dyn ListingSource>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        let saved = SavedIds::new(config.initial_saved_ids.iter().cloned());
        info!(
            "🏠 Browsing {} via {} with {} saved listings",
            source.source_name(),
            sender.channel_name(),
            saved.len()
        );

        Self {
            state: NavigationState::new(saved, config.history_limit),
            source,
            sender,
            filter_mode: config.filter_mode,
            notices: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn source(&self) -> &dyn ListingSource {
        self.source.as_ref()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        let effect = self.state.apply(action);
        if let Some(notice) = &effect.notice {
            self.record(notice.clone());
        }
        effect
    }

    /// Hands the form to the sender, then returns to the details screen
    pub async fn send_message(&mut self, form: ContactForm) -> Result<Effect> {
        match self.sender.submit(&form).await {
            Ok(receipt) => {
                info!("Contact receipt {} at {}", receipt.reference, receipt.sent_at);
                Ok(self.dispatch(Action::MessageSent))
            }
            Err(e) => {
                warn!("Message to agent failed: {:#}", e);
                self.record(Notice::error("Message could not be sent. Please try again."));
                Err(e.context("Failed to send message to agent"))
            }
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.state.saved_ids.contains(id)
    }

    /// Listings for the results screen under the stored filters
    pub fn results(&self, sort: SortOrder) -> Result<Vec<Property>> {
        let any = SearchFilters::any();
        let filters = self.state.search_filters.as_ref().unwrap_or(&any);
        listings::search(self.source.as_ref(), filters, sort, self.filter_mode)
    }

    pub fn saved_listings(&self, query: Option<&str>) -> Vec<Property> {
        listings::saved_listings(self.source.as_ref(), self.state.saved_ids.as_set(), query)
    }

    pub fn selected_details(&self) -> Option<PropertyDetails> {
        let id = self
            .state
            .selected_property_id
            .as_deref()
            .unwrap_or(FALLBACK_PROPERTY_ID);
        let details = self.source.details(id);
        if details.is_none() {
            warn!("No listing with id {}", id);
        }
        details
    }

    pub fn current_screen(&self) -> Screen {
        self.state.screen
    }

    fn record(&mut self, notice: Notice) {
        info!("🔔 {:?}: {}", notice.level, notice.message);
        if self.notices.len() == NOTICE_LOG_LIMIT {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notice::NoticeLevel;
    use crate::app::screen::Tab;
    use crate::contact::traits::Receipt;
    use crate::listings::MockCatalog;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    struct InstantSender {
        forms: Mutex<Vec<ContactForm>>,
    }

    #[async_trait]
    impl MessageSender for InstantSender {
        async fn submit(&self, form: &ContactForm) -> Result<Receipt> {
            self.forms.lock().unwrap().push(form.clone());
            Ok(Receipt {
                reference: "instant".to_string(),
                sent_at: Utc::now(),
            })
        }

        fn channel_name(&self) -> &'static str {
            "Instant"
        }
    }

    struct FailingSender;

    #[async_trait]
    impl MessageSender for FailingSender {
        async fn submit(&self, _form: &ContactForm) -> Result<Receipt> {
            anyhow::bail!("agent inbox unreachable")
        }

        fn channel_name(&self) -> &'static str {
            "Failing"
        }
    }

    fn app_with(sender: Arc<dyn MessageSender>, config: Config) -> App {
        App::new(&config, Arc::new(MockCatalog::new()), sender)
    }

    fn app() -> (App, Arc<InstantSender>) {
        let sender = Arc::new(InstantSender {
            forms: Mutex::new(Vec::new()),
        });
        (app_with(sender.clone(), Config::default()), sender)
    }

    #[test]
    fn starts_with_configured_saved_ids() {
        let (app, _) = app();
        assert_eq!(app.current_screen(), Screen::Splash);
        assert!(app.is_saved("2"));
        assert!(app.is_saved("4"));
        assert!(!app.is_saved("1"));
    }

    #[test]
    fn dispatch_records_notices() {
        let (mut app, _) = app();
        app.dispatch(Action::StartExploring);
        app.dispatch(Action::ToggleSaved("2".to_string()));
        app.dispatch(Action::ChangeTab(Tab::Messages));

        let messages: Vec<&str> = app.notices().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Property removed from saved items", "Messages feature would open here"]
        );
    }

    #[test]
    fn results_follow_stored_filters() {
        let (mut app, _) = app();
        app.dispatch(Action::Search(SearchFilters {
            property_type: "apartment".to_string(),
            bedrooms: "2".to_string(),
            price_range: "20000-40000".to_string(),
            ..SearchFilters::any()
        }));

        let ids: Vec<String> = app
            .results(SortOrder::PriceLow)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn cosmetic_mode_shows_everything() {
        let config = Config {
            filter_mode: FilterMode::Cosmetic,
            ..Config::default()
        };
        let mut app = app_with(Arc::new(FailingSender), config);
        app.dispatch(Action::Search(SearchFilters::of_type("villa")));

        assert_eq!(app.results(SortOrder::PriceLow).unwrap().len(), 7);
    }

    #[test]
    fn saved_listings_track_toggles() {
        let (mut app, _) = app();
        app.dispatch(Action::ToggleSaved("7".to_string()));
        app.dispatch(Action::ToggleSaved("2".to_string()));

        let ids: Vec<String> = app.saved_listings(None).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["4", "7"]);
    }

    #[test]
    fn details_fall_back_to_first_listing() {
        let (mut app, _) = app();
        assert_eq!(app.selected_details().unwrap().property.id, "1");

        app.dispatch(Action::OpenProperty("7".to_string()));
        assert_eq!(app.selected_details().unwrap().property.id, "7");

        app.dispatch(Action::OpenProperty("404".to_string()));
        assert!(app.selected_details().is_none());
    }

    #[tokio::test]
    async fn sending_a_message_returns_to_details() {
        let (mut app, sender) = app();
        app.dispatch(Action::StartExploring);
        app.dispatch(Action::OpenProperty("5".to_string()));
        app.dispatch(Action::ContactAgent);

        let form = ContactForm {
            name: "Abebe Kebede".to_string(),
            email: "abebe.kebede@email.com".to_string(),
            ..ContactForm::default()
        };
        let effect = app.send_message(form.clone()).await.unwrap();

        assert_eq!(app.current_screen(), Screen::PropertyDetails);
        assert_eq!(app.state().selected_property_id.as_deref(), Some("5"));
        assert_eq!(effect.notice.map(|n| n.level), Some(NoticeLevel::Success));
        assert_eq!(*sender.forms.lock().unwrap(), vec![form]);
    }

    #[tokio::test]
    async fn failed_send_stays_on_the_form() {
        let mut app = app_with(Arc::new(FailingSender), Config::default());
        app.dispatch(Action::OpenProperty("1".to_string()));
        app.dispatch(Action::ContactAgent);

        let err = app.send_message(ContactForm::default()).await.unwrap_err();

        assert!(format!("{:#}", err).contains("agent inbox unreachable"));
        assert_eq!(app.current_screen(), Screen::ContactAgent);
        assert_eq!(
            app.notices().last().map(|n| n.level),
            Some(NoticeLevel::Error)
        );
    }
}
