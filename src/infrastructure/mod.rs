pub mod fixtures;

pub use fixtures::{FileFixtureStore, FixtureError, FixtureStore, MemoryFixtureStore};
