//! Integration test common infrastructure.
//!
//! Provides a scripted IRC server for the bot to connect to, and a handle on
//! a spawned slircbot process.

#![allow(dead_code)]

pub mod bot;
pub mod server;

#[allow(unused_imports)]
pub use bot::TestBot;
#[allow(unused_imports)]
pub use server::{TestConnection, TestServer};
