//! Per-user conversation state.
//!
//! The state lives in teloxide dialogue storage, in memory by default or in
//! SQLite when conversations should survive a restart. Storage entries are
//! keyed by the sender's user id, so people sharing a group chat each keep
//! their own flow.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use teloxide::dispatching::dialogue::{
    serializer::Json, Dialogue, ErasedStorage, InMemStorage, SqliteStorage, Storage,
};
use teloxide::types::{ChatId, Message};

use crate::config::DialogueStorageKind;

/// Which input the bot expects next from a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    #[default]
    Idle,
    AwaitingAddDate,
    /// Date already captured, waiting for "HH:MM description"
    AwaitingEventText { date: String },
    AwaitingShowDate,
}

pub type PlannerStorage = ErasedStorage<State>;
pub type PlannerDialogue = Dialogue<State, PlannerStorage>;
pub type HandlerResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Dialogue of one user, wherever they write from
pub fn user_dialogue(storage: Arc<PlannerStorage>, user_id: u64) -> PlannerDialogue {
    // Storage is addressed by `ChatId`; a user id fits the same slot
    PlannerDialogue::new(storage, ChatId(user_id as i64))
}

/// Dialogue of the message sender. Messages without a sender (channel posts)
/// have none.
pub fn dialogue_for_message(msg: &Message, storage: Arc<PlannerStorage>) -> Option<PlannerDialogue> {
    msg.from().map(|user| user_dialogue(storage, user.id.0))
}

pub fn in_memory_storage() -> Arc<PlannerStorage> {
    InMemStorage::<State>::new().erase()
}

pub async fn build_storage(kind: &DialogueStorageKind) -> Result<Arc<PlannerStorage>> {
    match kind {
        DialogueStorageKind::Memory => Ok(in_memory_storage()),
        DialogueStorageKind::Sqlite(path) => Ok(SqliteStorage::open(path, Json).await?.erase()),
    }
}
