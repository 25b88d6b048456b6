pub mod api_connection;
pub mod bmi;
pub mod chat_session;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod prompts;
pub mod render;
pub mod schemas;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;
