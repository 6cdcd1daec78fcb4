//! Menuza console - terminal client for the Menuza restaurant platform
//!
//! This library module exports the headless core (auth, forms, navigation,
//! admin state) for integration tests and potential future library consumers.

// Allow dead code in the library - some internal modules are only used by main.rs
#![allow(dead_code)]

pub mod admin;
pub mod auth;
pub mod config;
pub mod forms;
pub mod logging;
pub mod shell;
