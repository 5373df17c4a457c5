pub mod dto;
pub mod handlers;
pub mod json_form;
pub mod router;

use std::sync::Arc;

use crate::application::minting::SuffixSource;
use crate::infrastructure::fixtures::FixtureStore;

pub use json_form::JsonForm;
pub use router::create_router;

/// Shared state for every route: the fixture store and the identifier
/// suffix source, both read-only.
#[derive(Clone)]
pub struct AppState {
    pub fixtures: Arc<dyn FixtureStore>,
    pub suffixes: Arc<dyn SuffixSource>,
}
