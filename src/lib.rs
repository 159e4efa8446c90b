pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod models;
pub mod os;
pub mod output;
pub mod resolve;
