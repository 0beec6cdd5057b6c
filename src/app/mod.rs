//! Application core: view-state coordination, zero browser I/O.
//!
//! This module contains the rules for the portfolio page: which items are
//! visible, which widget owns which timer, and how inbound events turn
//! into view updates.  All interaction with the page happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a DOM.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
