pub mod envelope;
pub mod error;
pub mod i18n;
pub mod order;
pub mod orders_state;
pub mod provider;
