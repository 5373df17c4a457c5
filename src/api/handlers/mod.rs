pub mod cards;
pub mod chargers;
pub mod codes;
pub mod health;
pub mod partners;
pub mod trades;
pub mod usages;
