use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: i64) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs the completion of a conversation flow
pub fn log_command_success(flow: &str, user_id: u64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} by user {} - {}", flow, user_id, d),
        None => info!("CMD_SUCCESS: {} by user {}", flow, user_id),
    }
}

/// Logs rejected user input with consistent format
pub fn log_validation_error(step: &str, value: &str, error: &str, user_id: u64) {
    warn!(
        "VALIDATION_ERROR: {} - value '{}' invalid: {} - user {}",
        step, value, error, user_id
    );
}

/// Logs store operations with consistent format
pub fn log_store_operation(operation: &str, location: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} - {}", operation, location, d),
        None => debug!("STORE_OP: {} on {}", operation, location),
    }
}

/// Logs store and dialogue storage failures with consistent format
pub fn log_store_error(operation: &str, error: &str, dialogue_key: i64) {
    error!("STORE_ERROR: {} failed for dialogue {}: {}", operation, dialogue_key, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
