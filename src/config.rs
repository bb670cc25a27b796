use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

use crate::database::models::WeekdayNames;

const DEFAULT_DATA_FILE: &str = "data.json";

/// Where conversation state lives between messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueStorageKind {
    Memory,
    Sqlite(String),
}

impl DialogueStorageKind {
    fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() || value == "memory" {
            return Ok(DialogueStorageKind::Memory);
        }
        match value.strip_prefix("sqlite:") {
            Some(path) if !path.trim().is_empty() => Ok(DialogueStorageKind::Sqlite(path.trim().to_string())),
            _ => Err(anyhow!("Invalid DIALOGUE_STORAGE: expected 'memory' or 'sqlite:<path>'")),
        }
    }
}

/// Settings needed to open the schedule document
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_file: PathBuf,
    pub weekdays: WeekdayNames,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let data_file = env::var("DATA_FILE").unwrap_or_default();
        let data_file = if data_file.trim().is_empty() {
            DEFAULT_DATA_FILE.to_string()
        } else {
            data_file
        };

        let weekdays = match env::var("WEEKDAY_NAMES") {
            Ok(list) if !list.trim().is_empty() => WeekdayNames::parse(&list)?,
            _ => WeekdayNames::default(),
        };

        Ok(StoreConfig {
            data_file: PathBuf::from(data_file),
            weekdays,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub store: StoreConfig,
    pub http_port: u16,
    pub dialogue_storage: DialogueStorageKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let store = StoreConfig::from_env()?;

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let dialogue_storage = DialogueStorageKind::parse(
            &env::var("DIALOGUE_STORAGE").unwrap_or_default(),
        )?;

        Ok(Config {
            telegram_bot_token: token,
            store,
            http_port,
            dialogue_storage,
        })
    }
}
