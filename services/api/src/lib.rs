//! EduAgent API Library Crate
//!
//! This library contains the web service: configuration, shared state,
//! request extraction, handlers and routing. The `api` binary is a thin
//! wrapper around this library.

pub mod config;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
