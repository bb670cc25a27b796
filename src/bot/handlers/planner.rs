use chrono::NaiveDate;

use crate::bot::commands::Command;
use crate::bot::dialogue::{PlannerDialogue, State};
use crate::bot::replies;
use crate::database::models::WeekdayNames;
use crate::database::StoreManager;
use crate::utils::datetime::format_date;
use crate::utils::errors::{InputError, PlannerError, StoreError};
use crate::utils::logging::{log_command_success, log_store_error, log_validation_error};
use crate::utils::validation::{parse_date, parse_event_text, EventInput};

/// Conversation logic of the bot, independent of the Telegram transport.
///
/// Each call consumes one inbound message, moves the sender's dialogue to its
/// next state and returns the single reply to send.
#[derive(Clone)]
pub struct Planner {
    store: StoreManager,
    weekdays: WeekdayNames,
}

impl Planner {
    pub fn new(store: StoreManager, weekdays: WeekdayNames) -> Self {
        Self { store, weekdays }
    }

    /// Shared document handle, also served by the health endpoints
    pub fn store(&self) -> &StoreManager {
        &self.store
    }

    /// Handles a command. Failures become a generic reply and leave the
    /// dialogue untouched.
    pub async fn respond_to_command(&self, dialogue: &PlannerDialogue, command: Command) -> String {
        let key = dialogue.chat_id().0;
        self.handle_command(dialogue, command.clone())
            .await
            .unwrap_or_else(|e| {
                log_store_error(command.name(), &e.to_string(), key);
                replies::STORAGE_FAILURE.to_string()
            })
    }

    /// Handles free text according to the sender's current state. Failures
    /// become a generic reply and leave the dialogue untouched.
    pub async fn respond_to_text(&self, dialogue: &PlannerDialogue, user_id: u64, text: &str) -> String {
        let key = dialogue.chat_id().0;
        self.handle_text(dialogue, user_id, text)
            .await
            .unwrap_or_else(|e| {
                log_store_error("text", &e.to_string(), key);
                replies::STORAGE_FAILURE.to_string()
            })
    }

    pub async fn handle_command(&self, dialogue: &PlannerDialogue, command: Command) -> Result<String, PlannerError> {
        match command {
            // Both leave any flow in progress as it is
            Command::Start | Command::Help => Ok(replies::WELCOME.to_string()),
            Command::Add => {
                dialogue.update(State::AwaitingAddDate).await.map_err(PlannerError::dialogue)?;
                Ok(replies::ASK_ADD_DATE.to_string())
            }
            Command::Show => {
                dialogue.update(State::AwaitingShowDate).await.map_err(PlannerError::dialogue)?;
                Ok(replies::ASK_SHOW_DATE.to_string())
            }
            Command::Cancel => {
                let state = dialogue.get_or_default().await.map_err(PlannerError::dialogue)?;
                if state == State::Idle {
                    return Ok(replies::NOTHING_TO_CANCEL.to_string());
                }
                dialogue.update(State::Idle).await.map_err(PlannerError::dialogue)?;
                Ok(replies::CANCELLED.to_string())
            }
        }
    }

    pub async fn handle_text(&self, dialogue: &PlannerDialogue, user_id: u64, text: &str) -> Result<String, PlannerError> {
        let state = dialogue.get_or_default().await.map_err(PlannerError::dialogue)?;

        match state {
            State::Idle => Ok(replies::IDLE_HINT.to_string()),
            State::AwaitingAddDate => match parse_date(text) {
                Ok(date) => {
                    let date = format_date(&date);
                    dialogue
                        .update(State::AwaitingEventText { date })
                        .await
                        .map_err(PlannerError::dialogue)?;
                    Ok(replies::ASK_EVENT_TEXT.to_string())
                }
                Err(e) => {
                    log_validation_error("add_date", text, &e.to_string(), user_id);
                    Ok(replies::RETRY_ADD_DATE.to_string())
                }
            },
            State::AwaitingEventText { date } => match parse_event_text(text) {
                Ok(event) => {
                    let entry = self.add_event(user_id, &date, &event).await?;
                    dialogue.update(State::Idle).await.map_err(PlannerError::dialogue)?;
                    log_command_success("add", user_id, Some(&format!("{date}: {entry}")));
                    Ok(replies::event_added(&date, &entry))
                }
                Err(e) => {
                    log_validation_error("event_text", text, &e.to_string(), user_id);
                    Ok(match e {
                        InputError::InvalidTimeFormat(_) => replies::RETRY_EVENT_TIME,
                        _ => replies::RETRY_EVENT_TEXT,
                    }
                    .to_string())
                }
            },
            State::AwaitingShowDate => match parse_date(text) {
                Ok(date) => {
                    let view = self.show_schedule(user_id, &date)?;
                    dialogue.update(State::Idle).await.map_err(PlannerError::dialogue)?;
                    log_command_success("show", user_id, Some(&format_date(&date)));
                    Ok(view)
                }
                Err(e) => {
                    log_validation_error("show_date", text, &e.to_string(), user_id);
                    Ok(replies::RETRY_SHOW_DATE.to_string())
                }
            },
        }
    }

    /// Stores the event in the user's calendar and returns the stored line.
    pub async fn add_event(&self, user_id: u64, date: &str, event: &EventInput) -> Result<String, StoreError> {
        let user_key = user_id.to_string();
        let entry = event.entry();
        self.store
            .update(|doc| doc.add_event(&user_key, date, entry.clone()))
            .await?;
        Ok(entry)
    }

    /// Lessons for the date's weekday merged with the user's own events.
    pub fn show_schedule(&self, user_id: u64, date: &NaiveDate) -> Result<String, StoreError> {
        let doc = self.store.read()?;
        let date_key = format_date(date);

        let lessons = doc.lessons_for(self.weekdays.name_for(date));
        let events = doc.events_for(&user_id.to_string(), &date_key);

        if lessons.is_empty() && events.is_empty() {
            return Ok(replies::nothing_planned(&date_key));
        }
        Ok(replies::schedule_view(&date_key, lessons, events))
    }
}
