//! Networking modules for the RideWise REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the registration-status lookup and `types` defines its wire
//! schema and failure modes.

pub mod api;
pub mod types;
