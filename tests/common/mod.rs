//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex, Once};

use filter_bot::application::errors::BotError;
use filter_bot::application::messaging::CommandDispatcher;
use filter_bot::domain::entities::{Guild, Reply};
use filter_bot::domain::traits::{BotInfo, GuildStore, ReplySink};
use filter_bot::infrastructure::storage::MemoryStore;

static INIT: Once = Once::new();

pub fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub const BOT_ID: &str = "bot-1";

/// Sink that records everything instead of delivering it
#[derive(Default)]
pub struct RecordingSink {
    pub replies: Mutex<Vec<(String, Reply)>>,
    pub deleted: Mutex<Vec<(String, String)>>,
    pub fail_delivery: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_delivery: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.replies.lock().unwrap().last().map(|(_, r)| r.render())
    }

    pub fn deleted(&self) -> Vec<(String, String)> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send_reply(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        if self.fail_delivery {
            return Err(BotError::Delivery("channel unavailable".to_string()));
        }
        self.replies.lock().unwrap().push((channel_id.to_string(), reply.clone()));
        Ok(())
    }

    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<(), BotError> {
        if self.fail_delivery {
            return Err(BotError::Delivery("channel unavailable".to_string()));
        }
        self.deleted.lock().unwrap().push((channel_id.to_string(), message_id.to_string()));
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        BotInfo {
            id: BOT_ID.to_string(),
            name: "FilterBot".to_string(),
            username: "filterbot".to_string(),
        }
    }
}

pub fn guild() -> Guild {
    Guild::new("g1", "Test Guild")
}

pub fn memory_dispatcher() -> (Arc<MemoryStore>, CommandDispatcher) {
    let store = Arc::new(MemoryStore::new("f!"));
    let dispatcher = CommandDispatcher::new(store.clone() as Arc<dyn GuildStore>);
    (store, dispatcher)
}
