//! Folio: view-state coordinator for a single-page portfolio.
//!
//! Exposes the pure-logic modules for integration testing and for a thin
//! browser shell.  The shell harvests the page into a
//! [`store::Document`], feeds DOM events and elapsed time into
//! [`app::service::PortfolioApp`], and applies the [`app::events::ViewEvent`]s
//! that come back.

#![deny(unused_must_use)]

pub mod adapters;
pub mod anim;
pub mod app;
pub mod config;
pub mod controllers;
pub mod effects;
pub mod events;
pub mod fsm;
pub mod scheduler;
pub mod store;

mod error;

pub use error::{Error, Result};
