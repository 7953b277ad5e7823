//! Shared types for the POS staff front end
//!
//! Wire DTOs and pure domain logic used by both the client library
//! (`pos-client`) and the terminal app (`pos-term`). Everything here is
//! serialization plus small, side-effect-free helpers; all authoritative
//! state lives on the remote service.

pub mod capability;
pub mod client;
pub mod models;

pub use capability::{Destination, default_destination, permitted_destinations};
pub use client::{ChangePasswordRequest, LoginForm, StaffProfile};
