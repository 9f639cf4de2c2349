//! API client and view logic for the ride orders page.

pub mod api;
pub mod config;
pub mod controller;
pub mod http;
pub mod mock;
pub mod notify;

pub use api::BookingApi;
pub use config::ClientConfig;
pub use controller::{ActionOutcome, OrdersController, OrdersStore};
pub use http::HttpBookingApi;
pub use notify::{Notice, NoticeLevel, Notifier};
