//! Authentication against the Menuza platform
//!
//! This module provides:
//! - The gateway trait over the two auth HTTP operations and its reqwest
//!   implementation
//! - Typed gateway errors that keep any server-provided message
//! - The credential store capability over the single persisted token

pub mod error;
pub mod gateway;
pub mod token;

pub use error::GatewayError;
pub use gateway::{AuthGateway, AuthResponse, HttpAuthGateway, LoginRequest, SignupRequest};
pub use token::{CredentialStore, FileTokenStore, MemoryTokenStore};
