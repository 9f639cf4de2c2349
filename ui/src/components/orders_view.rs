//! The user's ride bookings: loaded once on mount, cancellable while
//! confirmed, deletable once cancelled.

use dioxus::prelude::*;

use ride_client::{HttpBookingApi, OrdersController, OrdersStore};
use ride_common::i18n::Message;
use ride_common::orders_state::{OrdersState, RowAction, ViewMode};

use super::toast::use_toaster;

/// Booking creation page, outside this app's router.
pub const NEW_BOOKING_PATH: &str = "/transportation";

const MUTED_ROW_STYLE: &str = "background-color: #f3f3f3; color: #8a8a8a;";

/// Signal-backed store handed to the controller.
#[derive(Clone, Copy)]
struct SignalStore(Signal<OrdersState>);

impl OrdersStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut OrdersState) -> R) -> R {
        let mut signal = self.0;
        let result = f(&mut signal.write());
        result
    }
}

#[component]
pub fn OrdersView(on_back: EventHandler<()>) -> Element {
    let controller = use_context::<OrdersController<HttpBookingApi>>();
    let toaster = use_toaster();
    let state = use_signal(|| OrdersState {
        loading: true,
        ..OrdersState::default()
    });
    let store = SignalStore(state);
    let locale = controller.locale();

    let loader = controller.clone();
    use_hook(move || {
        spawn(async move {
            loader.fetch_orders(&store, &toaster).await;
        });
    });

    let snapshot = state.read();
    let mode = snapshot.view_mode();
    let rows = snapshot.rows(locale);
    drop(snapshot);

    let title = Message::Title.render(locale);
    let back = Message::Back.render(locale);

    rsx! {
        div { class: "orders-view",
            div { class: "orders-header",
                button { class: "btn-back", onclick: move |_| on_back.call(()), "{back}" }
                h2 { "{title}" }
            }

            {match mode {
                ViewMode::Loading => rsx! {
                    div { class: "orders-loading",
                        progress {}
                    }
                },
                ViewMode::Empty => {
                    let empty = Message::EmptyState.render(locale);
                    let book = Message::BookRide.render(locale);
                    rsx! {
                        div { class: "empty-state",
                            p { "{empty}" }
                            a { class: "btn", href: NEW_BOOKING_PATH, "{book}" }
                        }
                    }
                }
                ViewMode::Table => {
                    let col_ride = Message::ColumnRide.render(locale);
                    let col_schedule = Message::ColumnSchedule.render(locale);
                    let col_fare = Message::ColumnFare.render(locale);
                    let col_status = Message::ColumnStatus.render(locale);
                    let col_action = Message::ColumnAction.render(locale);
                    rsx! {
                        table { class: "orders-table",
                            thead {
                                tr {
                                    th { "{col_ride}" }
                                    th { "{col_schedule}" }
                                    th { "{col_fare}" }
                                    th { "{col_status}" }
                                    th { "{col_action}" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    {
                                        let order_id = row.order_id;
                                        let action = row.action;
                                        let action_label = action.label().render(locale);
                                        let ctl = controller.clone();
                                        rsx! {
                                            tr {
                                                key: "{order_id}",
                                                class: if row.muted { "order-row cancelled" } else { "order-row" },
                                                style: if row.muted { MUTED_ROW_STYLE } else { "" },
                                                td {
                                                    div { class: "provider-name", "{row.provider_label}" }
                                                    div { class: "route", "{row.route}" }
                                                }
                                                td { "{row.schedule}" }
                                                td { class: "fare", "{row.fare}" }
                                                td { "{row.status}" }
                                                td {
                                                    button {
                                                        class: match action {
                                                            RowAction::Cancel => "btn-sm btn-warning",
                                                            RowAction::Delete => "btn-sm btn-danger",
                                                        },
                                                        disabled: row.busy,
                                                        onclick: move |_| {
                                                            let ctl = ctl.clone();
                                                            spawn(async move {
                                                                let outcome = match action {
                                                                    RowAction::Cancel => {
                                                                        ctl.cancel_order(order_id, &store, &toaster).await
                                                                    }
                                                                    RowAction::Delete => {
                                                                        ctl.delete_order(order_id, &store, &toaster).await
                                                                    }
                                                                };
                                                                tracing::debug!(%order_id, ?action, ?outcome, "row action finished");
                                                            });
                                                        },
                                                        "{action_label}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }}
        }
    }
}
