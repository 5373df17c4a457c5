pub mod minting;
pub mod selectors;
pub mod summary;

pub use minting::{PartnerEnvelope, PartnerOp, RandomSuffix, SuffixSource};
pub use selectors::FixtureEndpoint;
pub use summary::{SummaryKind, SummaryResponse};
