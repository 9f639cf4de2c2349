use std::collections::HashSet;

use crate::i18n::{Locale, Message};
use crate::order::{format_fare, OrderId, RideOrder};
use crate::provider::ProviderNameMap;

/// Local state of the orders view. The server owns the truth; this is the
/// snapshot from the last fetch plus the edits made since.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdersState {
    pub orders: Vec<RideOrder>,
    pub loading: bool,
    pub provider_names: ProviderNameMap,
    /// Orders with a cancel or delete request in flight.
    pub pending: HashSet<OrderId>,
}

/// What the view shows as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Loading,
    Table,
    Empty,
}

/// The single action offered on a row. Confirmed orders can be cancelled,
/// cancelled orders can be deleted; never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Cancel,
    Delete,
}

impl RowAction {
    pub fn label(self) -> Message {
        match self {
            RowAction::Cancel => Message::CancelAction,
            RowAction::Delete => Message::DeleteAction,
        }
    }
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub order_id: OrderId,
    pub provider_label: String,
    pub route: String,
    pub schedule: String,
    pub fare: String,
    pub status: String,
    /// Cancelled rows get the muted background.
    pub muted: bool,
    pub action: RowAction,
    pub busy: bool,
}

impl OrdersState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.loading {
            ViewMode::Loading
        } else if self.orders.is_empty() {
            ViewMode::Empty
        } else {
            ViewMode::Table
        }
    }

    pub fn find(&self, id: OrderId) -> Option<&RideOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn replace_orders(&mut self, orders: Vec<RideOrder>) {
        self.orders = orders;
    }

    /// Swap in a freshly built name map; the previous one is discarded.
    pub fn replace_provider_names(&mut self, names: ProviderNameMap) {
        self.provider_names = names;
    }

    /// Flip the matching order to cancelled. Returns false if no such order.
    pub fn mark_cancelled(&mut self, id: OrderId) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.booking_status = false;
                true
            }
            None => false,
        }
    }

    /// Drop the matching order, keeping the others in place.
    pub fn remove(&mut self, id: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        self.orders.len() != before
    }

    /// Claim `id` for a mutation. False if a request for it is already running.
    pub fn begin_action(&mut self, id: OrderId) -> bool {
        self.pending.insert(id)
    }

    pub fn end_action(&mut self, id: OrderId) {
        self.pending.remove(&id);
    }

    pub fn is_pending(&self, id: OrderId) -> bool {
        self.pending.contains(&id)
    }

    pub fn rows(&self, locale: Locale) -> Vec<OrderRow> {
        self.orders
            .iter()
            .map(|order| {
                let provider_label = self
                    .provider_names
                    .get(order.provider_id)
                    .map(str::to_string)
                    .unwrap_or_else(|| Message::ProviderLoading.render(locale));
                let (status, action) = if order.is_confirmed() {
                    (Message::StatusConfirmed, RowAction::Cancel)
                } else {
                    (Message::StatusCancelled, RowAction::Delete)
                };
                OrderRow {
                    order_id: order.id,
                    provider_label,
                    route: order.route_label(),
                    schedule: order.schedule_label(),
                    fare: format_fare(order.estimated_fare),
                    status: status.render(locale),
                    muted: !order.is_confirmed(),
                    action,
                    busy: self.is_pending(order.id),
                }
            })
            .collect()
    }
}
