//! The orders view's behavior, independent of any UI toolkit.
//!
//! The controller talks to a [`BookingApi`], applies results to an
//! [`OrdersStore`] and reports outcomes through a [`Notifier`]. The web
//! front end backs the store with a signal; tests back it with a `RefCell`.

use std::cell::RefCell;

use futures::future::join_all;
use ride_common::error::ApiError;
use ride_common::i18n::{Locale, Message};
use ride_common::order::{OrderId, RideOrder};
use ride_common::orders_state::OrdersState;
use ride_common::provider::{distinct_provider_ids, ProviderId, ProviderLookup, ProviderNameMap};
use tracing::{debug, error, warn};

use crate::api::BookingApi;
use crate::notify::{Notice, Notifier};

/// Mutable home of the view state.
pub trait OrdersStore {
    fn update<R>(&self, f: impl FnOnce(&mut OrdersState) -> R) -> R;
}

impl OrdersStore for RefCell<OrdersState> {
    fn update<R>(&self, f: impl FnOnce(&mut OrdersState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// What a cancel or delete request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Failed,
    /// A request for the same order was still running; nothing was sent.
    AlreadyPending,
}

#[derive(Debug, Clone)]
pub struct OrdersController<A> {
    api: A,
    locale: Locale,
}

impl<A: BookingApi> OrdersController<A> {
    pub fn new(api: A, locale: Locale) -> Self {
        Self { api, locale }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Load the order list and then the provider names for it.
    ///
    /// `loading` is raised for the whole operation and always lowered at the
    /// end, whatever the outcome.
    pub async fn fetch_orders(&self, store: &impl OrdersStore, notifier: &impl Notifier) {
        store.update(|s| s.loading = true);

        match self.api.list_orders().await {
            Ok(orders) => {
                debug!(count = orders.len(), "fetched orders");
                store.update(|s| s.replace_orders(orders.clone()));
                let names = self.fetch_provider_names(&orders).await;
                store.update(|s| s.replace_provider_names(names));
            }
            Err(e) => {
                error!(error = %e, "failed to fetch orders");
                let text = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| Message::FetchOrdersFailed.render(self.locale));
                notifier.notify(Notice::error(text));
            }
        }

        store.update(|s| s.loading = false);
    }

    /// Name map for the providers referenced by `orders`. Lookups that fail
    /// are logged and left out.
    pub async fn fetch_provider_names(&self, orders: &[RideOrder]) -> ProviderNameMap {
        let lookups = self.lookup_providers(&distinct_provider_ids(orders)).await;
        for lookup in &lookups {
            if let Err(e) = &lookup.result {
                warn!(provider_id = %lookup.provider_id, error = %e, "provider lookup failed");
            }
        }
        ProviderNameMap::from_lookups(&lookups)
    }

    /// One lookup per id, all in flight at once. Every lookup runs to
    /// completion; each result is reported individually.
    pub async fn lookup_providers(&self, ids: &[ProviderId]) -> Vec<ProviderLookup> {
        join_all(ids.iter().map(|&provider_id| async move {
            let result = self.api.provider(provider_id).await.map(|p| p.name);
            ProviderLookup {
                provider_id,
                result,
            }
        }))
        .await
    }

    /// Mark a confirmed order as cancelled on the server, then locally.
    pub async fn cancel_order(
        &self,
        order_id: OrderId,
        store: &impl OrdersStore,
        notifier: &impl Notifier,
    ) -> ActionOutcome {
        if !store.update(|s| s.begin_action(order_id)) {
            debug!(%order_id, "cancel ignored, request already in flight");
            return ActionOutcome::AlreadyPending;
        }

        let result = self.api.cancel_order(order_id).await;
        let ok = result.is_ok();
        store.update(|s| {
            s.end_action(order_id);
            if ok {
                s.mark_cancelled(order_id);
            }
        });

        match result {
            Ok(()) => {
                debug!(%order_id, "order cancelled");
                notifier.notify(Notice::success(
                    Message::OrderCancelled { order_id }.render(self.locale),
                ));
                ActionOutcome::Applied
            }
            Err(e) => {
                error!(%order_id, error = %e, "failed to cancel order");
                let text = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| Message::CancelFailed { order_id }.render(self.locale));
                notifier.notify(Notice::error(text));
                ActionOutcome::Failed
            }
        }
    }

    /// Delete a cancelled order on the server, then drop it from the list.
    pub async fn delete_order(
        &self,
        order_id: OrderId,
        store: &impl OrdersStore,
        notifier: &impl Notifier,
    ) -> ActionOutcome {
        if !store.update(|s| s.begin_action(order_id)) {
            debug!(%order_id, "delete ignored, request already in flight");
            return ActionOutcome::AlreadyPending;
        }

        let result = self.api.delete_order(order_id).await;
        let ok = result.is_ok();
        store.update(|s| {
            s.end_action(order_id);
            if ok {
                s.remove(order_id);
            }
        });

        match result {
            Ok(()) => {
                debug!(%order_id, "order deleted");
                notifier.notify(Notice::success(
                    Message::OrderDeleted { order_id }.render(self.locale),
                ));
                ActionOutcome::Applied
            }
            Err(e) => {
                error!(%order_id, error = %e, "failed to delete order");
                notifier.notify(Notice::error(self.delete_failure_text(&e)));
                ActionOutcome::Failed
            }
        }
    }

    fn delete_failure_text(&self, e: &ApiError) -> String {
        let message = if e.is_transport() {
            Message::NetworkError
        } else {
            Message::DeleteFailed
        };
        message.render(self.locale)
    }
}
