pub mod commands;
pub mod dialogue;
pub mod handlers;
pub mod replies;
