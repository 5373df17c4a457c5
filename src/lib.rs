//! # EV Roaming Mock Service
//!
//! Stub backend for an EV charging network's roaming API, used for client
//! integration testing: card management, trade/usage registration, charger
//! and charging-station status.
//!
//! Every endpoint validates the inbound request against fixed field-format
//! rules and answers with either a pre-recorded fixture document, a
//! synthesized count summary, or a per-item transform that mints random
//! identifiers. Nothing is persisted and no call shares state with another.
//!
//! ## Architecture
//!
//! - **domain**: enumerated code sets (business ids, status codes, envelope codes)
//! - **application**: the three response strategies — selector resolution,
//!   summary synthesis, identifier minting
//! - **infrastructure**: fixture document store
//! - **api**: HTTP surface with Swagger documentation
//! - **shared**: field rules and error taxonomy

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use api::{create_router, AppState, JsonForm};
pub use config::{default_config_path, AppConfig};

// Re-export the pieces embedders and tests wire together.
pub use application::minting::{RandomSuffix, SuffixSource};
pub use infrastructure::fixtures::{FileFixtureStore, FixtureStore, MemoryFixtureStore};
