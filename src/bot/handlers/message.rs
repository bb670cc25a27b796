use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::dialogue::{HandlerResult, PlannerDialogue};
use crate::bot::handlers::planner::Planner;
use crate::utils::logging::log_command_start;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: PlannerDialogue,
    planner: Arc<Planner>,
) -> HandlerResult {
    let user_id = msg.from().map(|u| u.id.0).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v.as_str());
    log_command_start(cmd.name(), username, user_id, msg.chat.id.0);

    let reply = planner.respond_to_command(&dialogue, cmd).await;
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

pub async fn text_handler(
    bot: Bot,
    msg: Message,
    dialogue: PlannerDialogue,
    planner: Arc<Planner>,
) -> HandlerResult {
    let (Some(text), Some(user)) = (msg.text(), msg.from()) else {
        tracing::debug!("Ignoring non-text message in chat {}", msg.chat.id.0);
        return Ok(());
    };

    tracing::debug!("Text from user {} in chat {}: '{}'", user.id.0, msg.chat.id.0, text);
    let reply = planner.respond_to_text(&dialogue, user.id.0, text).await;
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
