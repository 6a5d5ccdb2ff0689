//! Message routing integration tests
//! Run with: cargo test --test message_service_test

mod common;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{ensure_init, guild, memory_dispatcher, RecordingSink, BOT_ID};
use filter_bot::application::errors::{BotError, StorageError};
use filter_bot::application::messaging::CommandDispatcher;
use filter_bot::application::services::{MessageService, Outcome};
use filter_bot::domain::entities::{InboundMessage, Reply};
use filter_bot::domain::traits::GuildStore;
use filter_bot::infrastructure::storage::MemoryStore;

fn service() -> (Arc<MemoryStore>, MessageService) {
    let (store, dispatcher) = memory_dispatcher();
    (store, MessageService::new(Arc::new(dispatcher)))
}

fn guild_message(text: &str) -> InboundMessage {
    InboundMessage::in_guild(guild(), "c1", "user-1", text)
}

#[tokio::test]
async fn test_own_messages_are_ignored() {
    ensure_init();
    let (store, service) = service();
    store.add_filters("g1", &["cats".to_string()]).await.unwrap();
    let sink = RecordingSink::new();

    let message = InboundMessage::in_guild(guild(), "c1", BOT_ID, "f!add cats");
    let outcome = service.on_message(&message, &sink).await.unwrap();

    assert_eq!(outcome, Outcome::Ignored);
    assert!(sink.replies().is_empty());
    assert!(sink.deleted().is_empty());
    assert_eq!(store.get_filters("g1").await.unwrap(), vec!["cats"]);
}

#[tokio::test]
async fn test_direct_messages_are_refused() {
    let (_, service) = service();
    let sink = RecordingSink::new();

    let message = InboundMessage::new("dm-1", "user-1", "f!list");
    let outcome = service.on_message(&message, &sink).await.unwrap();

    assert_eq!(outcome, Outcome::DirectMessage);
    assert_eq!(
        sink.replies(),
        vec![Reply::text("This bot does not support direct messages or groups")]
    );
}

#[tokio::test]
async fn test_commands_are_dispatched() {
    let (store, service) = service();
    let sink = RecordingSink::new();

    let outcome = service.on_message(&guild_message("F!Add Cats"), &sink).await.unwrap();
    assert!(matches!(outcome, Outcome::Command(_)));
    assert_eq!(store.get_filters("g1").await.unwrap(), vec!["cats"]);
}

#[tokio::test]
async fn test_commands_are_not_scanned() {
    let (store, service) = service();
    store.add_filters("g1", &["cats".to_string()]).await.unwrap();
    let sink = RecordingSink::new();

    service.on_message(&guild_message("f!remove cats"), &sink).await.unwrap();
    assert!(sink.deleted().is_empty());
}

#[tokio::test]
async fn test_unrecognized_command_is_dropped_quietly() {
    let (_, service) = service();
    let sink = RecordingSink::new();

    let outcome = service.on_message(&guild_message("f!dance"), &sink).await.unwrap();
    assert_eq!(outcome, Outcome::Unrecognized("dance".to_string()));
    assert!(sink.replies().is_empty());
}

#[tokio::test]
async fn test_unrecognized_command_hint_when_enabled() {
    let (_, dispatcher) = memory_dispatcher();
    let service = MessageService::new(Arc::new(dispatcher)).with_reply_on_unknown(true);
    let sink = RecordingSink::new();

    service.on_message(&guild_message("f!dance"), &sink).await.unwrap();
    assert_eq!(
        sink.last_text().as_deref(),
        Some("Unknown command. Use f!help to list commands.")
    );
}

#[tokio::test]
async fn test_matching_text_is_deleted() {
    let (store, service) = service();
    store.add_filters("g1", &["Cats".to_string(), "dogs".to_string()]).await.unwrap();
    let sink = RecordingSink::new();

    let message = guild_message("I love CATS").with_id("m-42");
    let outcome = service.on_message(&message, &sink).await.unwrap();

    let Outcome::Filtered(matches) = outcome else {
        panic!("expected the message to be filtered");
    };
    assert_eq!(matches.terms(), vec!["Cats"]);
    assert_eq!(sink.deleted(), vec![("c1".to_string(), "m-42".to_string())]);
}

#[tokio::test]
async fn test_clean_text_is_left_alone() {
    let (store, service) = service();
    store.add_filters("g1", &["cats".to_string()]).await.unwrap();
    let sink = RecordingSink::new();

    let outcome = service.on_message(&guild_message("hello there"), &sink).await.unwrap();
    assert_eq!(outcome, Outcome::Clean);
    assert!(sink.deleted().is_empty());

    let outcome = service.on_message(&guild_message(""), &sink).await.unwrap();
    assert_eq!(outcome, Outcome::Clean);
}

#[tokio::test]
async fn test_prefix_change_moves_command_detection() {
    let (store, service) = service();
    let sink = RecordingSink::new();
    store.set_command_prefix("g1", "!").await.unwrap();

    // with the new prefix "f!list" is plain text
    let outcome = service.on_message(&guild_message("f!list"), &sink).await.unwrap();
    assert_eq!(outcome, Outcome::Clean);

    let outcome = service.on_message(&guild_message("!list"), &sink).await.unwrap();
    assert!(matches!(outcome, Outcome::Command(_)));
}

/// Store whose prefix changes right after the first read, as if a SetPrefix
/// from another task landed between routing and parsing.
struct SwitchingPrefixStore {
    inner: MemoryStore,
    reads: AtomicUsize,
}

#[async_trait]
impl GuildStore for SwitchingPrefixStore {
    async fn get_command_prefix(&self, _guild_id: &str) -> Result<String, StorageError> {
        let prefix = if self.reads.fetch_add(1, Ordering::SeqCst) == 0 { "f!" } else { "!" };
        Ok(prefix.to_string())
    }

    async fn set_command_prefix(&self, guild_id: &str, prefix: &str) -> Result<(), StorageError> {
        self.inner.set_command_prefix(guild_id, prefix).await
    }

    async fn get_filters(&self, guild_id: &str) -> Result<Vec<String>, StorageError> {
        self.inner.get_filters(guild_id).await
    }

    async fn set_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError> {
        self.inner.set_filters(guild_id, filters).await
    }

    async fn add_filters(&self, guild_id: &str, filters: &[String]) -> Result<(), StorageError> {
        self.inner.add_filters(guild_id, filters).await
    }

    async fn list_guilds(&self) -> Result<Vec<String>, StorageError> {
        self.inner.list_guilds().await
    }
}

#[tokio::test]
async fn test_prefix_change_during_dispatch_keeps_command() {
    ensure_init();
    let store = Arc::new(SwitchingPrefixStore {
        inner: MemoryStore::new("f!"),
        reads: AtomicUsize::new(0),
    });
    let service = MessageService::new(Arc::new(CommandDispatcher::new(store)));
    let sink = RecordingSink::new();

    // routed with "f!" and parsed with the same prefix
    let outcome = service.on_message(&guild_message("f!list"), &sink).await.unwrap();
    assert!(matches!(outcome, Outcome::Command(_)), "got {:?}", outcome);
    assert_eq!(sink.replies().len(), 1);
}

/// Store that keeps prefixes but cannot read or write filters
struct BrokenFilterStore;

#[async_trait]
impl GuildStore for BrokenFilterStore {
    async fn get_command_prefix(&self, _guild_id: &str) -> Result<String, StorageError> {
        Ok("f!".to_string())
    }

    async fn set_command_prefix(&self, _guild_id: &str, _prefix: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn get_filters(&self, _guild_id: &str) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Lock("filters".to_string()))
    }

    async fn set_filters(&self, _guild_id: &str, _filters: &[String]) -> Result<(), StorageError> {
        Err(StorageError::Lock("filters".to_string()))
    }

    async fn add_filters(&self, _guild_id: &str, _filters: &[String]) -> Result<(), StorageError> {
        Err(StorageError::Lock("filters".to_string()))
    }

    async fn list_guilds(&self) -> Result<Vec<String>, StorageError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_store_failure_in_command_is_storage_error() {
    ensure_init();
    let service = MessageService::new(Arc::new(CommandDispatcher::new(Arc::new(BrokenFilterStore))));
    let sink = RecordingSink::new();

    let err = service.on_message(&guild_message("f!list"), &sink).await.unwrap_err();
    assert!(matches!(err, BotError::Storage(StorageError::Lock(_))), "got {:?}", err);
    assert!(sink.replies().is_empty());

    // plain text hits the same store path directly
    let err = service.on_message(&guild_message("hello"), &sink).await.unwrap_err();
    assert!(matches!(err, BotError::Storage(_)));
}
