use std::cell::RefCell;

use axum::http::StatusCode;
use serde_json::json;

use ride_api_integration::harness::StubApi;
use ride_api_integration::{error_envelope, init_tracing, order_json, unreachable_config};
use ride_client::mock::RecordingNotifier;
use ride_client::{ActionOutcome, HttpBookingApi, Notice, OrdersController};
use ride_common::i18n::Locale;
use ride_common::order::OrderId;
use ride_common::orders_state::{OrdersState, RowAction, ViewMode};
use ride_common::provider::ProviderId;

fn controller(stub: &StubApi) -> OrdersController<HttpBookingApi> {
    OrdersController::new(HttpBookingApi::new(&stub.config()), Locale::En)
}

/// Five orders over two providers → two provider GETs, names resolved.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetch_resolves_each_provider_once() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![
        order_json(1, 10, true),
        order_json(2, 20, true),
        order_json(3, 10, false),
        order_json(4, 20, true),
        order_json(5, 10, true),
    ])
    .await;
    stub.set_provider(10, "City Cabs").await;
    stub.set_provider(20, "Night Shuttle").await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    assert_eq!(stub.requests_to("transportation-provider/").await.len(), 2);
    let state = store.borrow();
    assert_eq!(state.orders.len(), 5);
    assert_eq!(state.orders[0].estimated_fare, 21.5);
    assert_eq!(state.provider_names.get(ProviderId(10)), Some("City Cabs"));
    assert_eq!(state.provider_names.get(ProviderId(20)), Some("Night Shuttle"));
    assert_eq!(state.view_mode(), ViewMode::Table);
    assert!(notifier.notices().is_empty());
}

/// A provider endpoint returning HTML 500 just leaves that name unresolved.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn provider_failure_is_swallowed() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![order_json(1, 1, true), order_json(2, 2, true)])
        .await;
    stub.set_provider(1, "City Cabs").await;
    stub.set_provider_response(2, StatusCode::INTERNAL_SERVER_ERROR, json!("boom"))
        .await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    let state = store.borrow();
    assert!(!state.provider_names.contains(ProviderId(2)));
    assert_eq!(state.rows(Locale::En)[1].provider_label, "Loading...");
    assert!(notifier.notices().is_empty());
}

/// Envelope rejection: the server's msg is shown verbatim.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_rejection_shows_server_message() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders_response(StatusCode::OK, error_envelope(403, "forbidden"))
        .await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    assert_eq!(notifier.notices(), vec![Notice::error("forbidden")]);
    let state = store.borrow();
    assert!(state.orders.is_empty());
    assert!(!state.loading);
}

/// Same message when the rejection also comes with an HTTP error status.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_http_error_with_envelope_shows_server_message() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders_response(StatusCode::FORBIDDEN, error_envelope(403, "forbidden"))
        .await;

    let ctl = controller(&stub);
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&RefCell::new(OrdersState::new()), &notifier)
        .await;

    assert_eq!(notifier.notices(), vec![Notice::error("forbidden")]);
}

/// Nothing listening: generic localized text, never the transport error.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_unreachable_shows_generic_message() {
    init_tracing();
    let config = unreachable_config().await;
    let ctl = OrdersController::new(HttpBookingApi::new(&config), Locale::En);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();

    ctl.fetch_orders(&store, &notifier).await;

    assert_eq!(notifier.notices(), vec![Notice::error("Failed to get orders")]);
    assert!(!store.borrow().loading);
    assert_eq!(store.borrow().view_mode(), ViewMode::Empty);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn empty_list_shows_empty_state() {
    init_tracing();
    let stub = StubApi::start().await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    ctl.fetch_orders(&store, &RecordingNotifier::new()).await;

    assert_eq!(store.borrow().view_mode(), ViewMode::Empty);
    assert!(stub.requests_to("transportation-provider/").await.is_empty());
}

/// Cancel sends exactly `{"booking_status": false}` and flips only that order.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_patches_booking_status() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![
        order_json(4, 1, true),
        order_json(5, 1, true),
        order_json(6, 1, true),
    ])
    .await;
    stub.set_provider(1, "City Cabs").await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    let outcome = ctl.cancel_order(OrderId(5), &store, &notifier).await;
    assert_eq!(outcome, ActionOutcome::Applied);

    let patches = stub.requests_to("ride-booking/5/").await;
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].method, "PATCH");
    assert_eq!(patches[0].body, Some(json!({ "booking_status": false })));

    let state = store.borrow();
    let statuses: Vec<_> = state.orders.iter().map(|o| o.booking_status).collect();
    assert_eq!(statuses, vec![true, false, true]);
    let rows = state.rows(Locale::En);
    assert!(rows[1].muted);
    assert_eq!(rows[1].action, RowAction::Delete);
    assert_eq!(
        notifier.notices(),
        vec![Notice::success("Order #5 has been cancelled")]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_rejected_keeps_order_confirmed() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![order_json(5, 1, true)]).await;
    stub.set_patch_response(StatusCode::OK, error_envelope(400, "ride already started"))
        .await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    let outcome = ctl.cancel_order(OrderId(5), &store, &notifier).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert!(store.borrow().orders[0].booking_status);
    assert_eq!(
        notifier.notices().last(),
        Some(&Notice::error("ride already started"))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_removes_order_on_no_content() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![
        order_json(6, 1, false),
        order_json(7, 1, false),
        order_json(8, 1, true),
    ])
    .await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    let outcome = ctl.delete_order(OrderId(7), &store, &notifier).await;

    assert_eq!(outcome, ActionOutcome::Applied);
    let deletes = stub.requests_to("ride-booking/7/").await;
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].method, "DELETE");
    let ids: Vec<_> = store.borrow().orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![OrderId(6), OrderId(8)]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_server_error_shows_delete_failed() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![order_json(7, 1, false)]).await;
    stub.set_delete_status(StatusCode::INTERNAL_SERVER_ERROR).await;

    let ctl = controller(&stub);
    let store = RefCell::new(OrdersState::new());
    let notifier = RecordingNotifier::new();
    ctl.fetch_orders(&store, &notifier).await;

    let outcome = ctl.delete_order(OrderId(7), &store, &notifier).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(store.borrow().orders.len(), 1);
    assert_eq!(
        notifier.notices().last(),
        Some(&Notice::error("Failed to delete order"))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_unreachable_shows_network_error() {
    init_tracing();
    let stub = StubApi::start().await;
    stub.set_orders(vec![order_json(7, 1, false)]).await;

    // Load from the live stub, then delete against a dead port.
    let store = RefCell::new(OrdersState::new());
    controller(&stub)
        .fetch_orders(&store, &RecordingNotifier::new())
        .await;

    let config = unreachable_config().await;
    let dead = OrdersController::new(HttpBookingApi::new(&config), Locale::En);
    let notifier = RecordingNotifier::new();
    let outcome = dead.delete_order(OrderId(7), &store, &notifier).await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert_eq!(store.borrow().orders.len(), 1);
    assert_eq!(
        notifier.notices(),
        vec![Notice::error("Network error, please try again later")]
    );
}
