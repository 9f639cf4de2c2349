use dioxus::prelude::*;

use ride_client::config::{locale_from_env, ConfigError};
use ride_client::{ClientConfig, HttpBookingApi, OrdersController};
use ride_common::i18n::Locale;

use super::orders_view::OrdersView;
use super::toast::{ToastHost, Toaster};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Orders {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(Toaster::new);
    let config = use_hook(load_config);

    match config {
        Ok(config) => rsx! { ConfiguredApp { config } },
        Err(e) => {
            tracing::error!("bad client configuration: {e}");
            rsx! { div { class: "alert alert-error", "{e}" } }
        }
    }
}

#[component]
fn ConfiguredApp(config: ClientConfig) -> Element {
    use_context_provider(|| {
        tracing::info!(base_url = %config.base_url, locale = config.locale.tag(), "orders client ready");
        OrdersController::new(HttpBookingApi::new(&config), config.locale)
    });

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "ride-app",
            main {
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

/// Route component: the orders view, with "back" wired to browser history.
#[component]
fn Orders() -> Element {
    let nav = use_navigator();
    rsx! { OrdersView { on_back: move |_| nav.go_back() } }
}

/// Build-time config, with the browser language when no locale was baked in.
fn load_config() -> Result<ClientConfig, ConfigError> {
    let config = ClientConfig::from_env()?;
    Ok(match (locale_from_env(), browser_locale()) {
        (None, Some(locale)) => config.with_locale(locale),
        _ => config,
    })
}

#[cfg(target_family = "wasm")]
fn browser_locale() -> Option<Locale> {
    let tag = web_sys::window()?.navigator().language()?;
    Some(Locale::from_tag(&tag))
}

#[cfg(not(target_family = "wasm"))]
fn browser_locale() -> Option<Locale> {
    None
}
