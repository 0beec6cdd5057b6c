//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter          | Implements          | Connects to                  |
//! |------------------|---------------------|------------------------------|
//! | `log_sink`       | ViewSink            | `log` facade                 |
//! | `memory_storage` | StoragePort         | in-memory map                |
//! | `headless`       | Platform (all five) | log + memory, no browser     |
//! | `mail_link`      | none                | `mailto:` URL composition    |
//!
//! Browser adapters (DOM patching, `localStorage`, `fetch`) live in the
//! host shell and implement the same traits.

pub mod headless;
pub mod log_sink;
pub mod mail_link;
pub mod memory_storage;
