use crate::contact::traits::{MessageSender, Receipt};
use crate::models::ContactForm;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Stands in for the agent messaging backend: waits, then always succeeds
pub struct SimulatedSender {
    delay: Duration,
    sent: AtomicU64,
}

impl SimulatedSender {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sent: AtomicU64::new(0),
        }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl MessageSender for SimulatedSender {
    async fn submit(&self, form: &ContactForm) -> Result<Receipt> {
        info!("📨 Sending message from {} <{}>", form.name, form.email);
        debug!("Simulating {:?} of network latency", self.delay);

        tokio::time::sleep(self.delay).await;

        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        let receipt = Receipt {
            reference: format!("msg-{:04}", n),
            sent_at: Utc::now(),
        };

        info!("✅ Message delivered as {}", receipt.reference);
        Ok(receipt)
    }

    fn channel_name(&self) -> &'static str {
        "Simulated"
    }
}
