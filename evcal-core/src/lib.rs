//! Core types for the evcal ecosystem.
//!
//! This crate provides the types shared by evcal-cli and evcal-server:
//! - `Event` and `Category` for calendar events
//! - `Agenda` for the in-memory event list and its mutation rules
//! - `date` helpers for the day/month/year format used at the UI boundary

pub mod agenda;
pub mod category;
pub mod date;
pub mod error;
pub mod event;

pub use agenda::Agenda;
pub use category::Category;
pub use error::{EvcalError, EvcalResult};
pub use event::{Event, ExtendedProps};
