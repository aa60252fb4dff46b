//! Terminal demo of a screen that follows one asynchronous fetch through
//! pending, failed and succeeded states.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod ui;
