//! Request models for every endpoint, serde-decoded from the `messages`
//! form field and validated with the shared rules in
//! [`crate::shared::validation`].

pub mod card;
pub mod charger;
pub mod code;
pub mod partner;
pub mod trade;
pub mod usage;

pub use card::{CardListRequest, CardUpdate, CardUpdateRequest};
pub use charger::{
    ChargerInfoListRequest, ChargerQrRequest, ChargerStatusEntry, ChargerStatusListRequest,
    ChargerStatusUpdateRequest,
};
pub use code::CodeListRequest;
pub use partner::PartnerUpdateRequest;
pub use trade::{TradeListRequest, TradeRecord, TradeRegiRequest};
pub use usage::{UsageRecord, UseRegiRequest};
