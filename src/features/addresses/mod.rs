//! Address identifier validation and rendering.
//!
//! Booking and vehicle-listing forms submit semi-structured address
//! payloads that reference regions either by legacy opaque identifier or
//! by BPS government code, with identifiers spread across flat fields or
//! nested sub-objects. This feature normalizes the extraction, detects
//! which scheme the payload uses, validates cross-level consistency, and
//! renders a display string.
//!
//! An invalid payload is an answer, not an error: handlers return
//! `valid: false` and frontends re-prompt the user.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AddressResolver;
