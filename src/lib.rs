// Supporting modules
pub mod config;
pub mod error;

// Domain layer (business logic)
pub mod domain;

// External collaborators
pub mod webhook;

// Application layer
pub mod api;
pub mod server;
