//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navbar` renders the navigation chrome from the pure model built in
//! `navbar_model`.

pub mod navbar;
pub mod navbar_model;
