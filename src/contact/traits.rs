use crate::models::ContactForm;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acknowledgement returned once a message has been handed off
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    pub reference: String,
    pub sent_at: DateTime<Utc>,
}

/// Common trait for anything that delivers a contact message to an agent
/// Tests substitute an immediate fake for the delayed sender
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver the form
    async fn submit(&self, form: &ContactForm) -> Result<Receipt>;

    /// Get the name of the delivery channel
    fn channel_name(&self) -> &'static str;
}
