//! Selector resolution for the fixture-echo endpoints.
//!
//! One table maps each endpoint to its `selector → fixture key` entries and
//! a single routine resolves them, so no handler carries its own map.

use thiserror::Error;

/// Selector value assumed when the request omits the field.
pub const DEFAULT_SELECTOR: &str = "1";

/// Endpoints that answer with a pre-recorded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureEndpoint {
    CodeList,
    CardList,
    TradeList,
    TradeListAll,
    ChargerInfoList,
    ChargerInfoListAll,
    ChargerStatusList,
    ChargerQr,
}

/// Selector value outside the endpoint's map.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}={value}")]
pub struct SelectorError {
    pub field: &'static str,
    pub value: String,
}

impl FixtureEndpoint {
    /// Name of the request field carrying the selector.
    pub fn selector_field(self) -> &'static str {
        match self {
            FixtureEndpoint::CardList | FixtureEndpoint::ChargerStatusList => "kind",
            _ => "pageno",
        }
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FixtureEndpoint::CodeList => &[("1", "code_list")],
            FixtureEndpoint::CardList => &[("1", "card_list_1"), ("2", "card_list_2")],
            FixtureEndpoint::TradeList => &[
                ("1", "trade_list_1"),
                ("2", "trade_list_2"),
                ("3", "trade_list_3"),
            ],
            FixtureEndpoint::TradeListAll => &[("1", "trade_listall")],
            FixtureEndpoint::ChargerInfoList => &[
                ("1", "charger_info_1"),
                ("2", "charger_info_2"),
                ("3", "charger_info_3"),
            ],
            FixtureEndpoint::ChargerInfoListAll => &[("1", "charger_info_all")],
            FixtureEndpoint::ChargerStatusList => {
                &[("1", "charger_status_1"), ("2", "charger_status_2")]
            }
            FixtureEndpoint::ChargerQr => &[("1", "charger_qr")],
        }
    }
}

/// Resolve a selector (defaulting to `"1"` when omitted) to a fixture key.
///
/// Unknown selectors are rejected here, before the store is consulted, so a
/// stray document on disk can never make an undefined page reachable.
pub fn resolve(
    endpoint: FixtureEndpoint,
    selector: Option<&str>,
) -> Result<&'static str, SelectorError> {
    let value = selector.unwrap_or(DEFAULT_SELECTOR);
    endpoint
        .entries()
        .iter()
        .find(|(s, _)| *s == value)
        .map(|(_, key)| *key)
        .ok_or_else(|| SelectorError {
            field: endpoint.selector_field(),
            value: value.to_string(),
        })
}

// ── Tests ──────────────────────────────────────────────────────
