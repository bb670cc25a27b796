pub mod message;
pub mod planner;

pub use planner::Planner;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;
use crate::bot::dialogue::{dialogue_for_message, PlannerStorage};

/// Update routing: commands first, then free text by dialogue state.
///
/// The dialogue is looked up by sender rather than by chat. Expects
/// `Arc<PlannerStorage>` and `Arc<Planner>` among the dispatcher
/// dependencies.
pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .filter_map(|msg: Message, storage: Arc<PlannerStorage>| dialogue_for_message(&msg, storage))
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(message::command_handler),
        )
        .branch(dptree::endpoint(message::text_handler))
}
