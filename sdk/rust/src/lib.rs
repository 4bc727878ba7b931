//! Async client for the user service HTTP API.

pub mod client;

pub use client::{ClientError, User, UserClient};
