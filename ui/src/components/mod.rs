pub mod app;
pub mod orders_view;
pub mod toast;
