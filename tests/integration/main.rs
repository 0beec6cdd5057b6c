//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a slice of the page
//! against the mock platform.  Everything runs on logical time; no browser
//! is required.

mod collaborator_tests;
mod content_tests;
mod mock_platform;
mod widget_tests;
