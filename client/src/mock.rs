//! In-memory stand-ins for the API and the toast surface.
//!
//! Used by the controller tests and by anything that wants to drive the
//! orders flow without a server.

use std::cell::RefCell;
use std::collections::HashMap;

use ride_common::error::ApiError;
use ride_common::order::{OrderId, RideOrder};
use ride_common::provider::{Provider, ProviderId};

use crate::api::BookingApi;
use crate::notify::{Notice, Notifier};

/// A request the mock received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    ListOrders,
    Provider(ProviderId),
    Cancel(OrderId),
    Delete(OrderId),
}

pub struct MockBookingApi {
    list: Result<Vec<RideOrder>, ApiError>,
    providers: HashMap<ProviderId, Result<String, ApiError>>,
    cancel_error: Option<ApiError>,
    delete_error: Option<ApiError>,
    calls: RefCell<Vec<ApiCall>>,
}

impl MockBookingApi {
    pub fn with_orders(orders: Vec<RideOrder>) -> Self {
        Self {
            list: Ok(orders),
            providers: HashMap::new(),
            cancel_error: None,
            delete_error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_list(error: ApiError) -> Self {
        Self {
            list: Err(error),
            ..Self::with_orders(Vec::new())
        }
    }

    pub fn provider(mut self, id: u64, name: &str) -> Self {
        self.providers.insert(ProviderId(id), Ok(name.to_string()));
        self
    }

    pub fn failing_provider(mut self, id: u64, error: ApiError) -> Self {
        self.providers.insert(ProviderId(id), Err(error));
        self
    }

    pub fn failing_cancel(mut self, error: ApiError) -> Self {
        self.cancel_error = Some(error);
        self
    }

    pub fn failing_delete(mut self, error: ApiError) -> Self {
        self.delete_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn provider_lookups(&self) -> Vec<ProviderId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ApiCall::Provider(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl BookingApi for MockBookingApi {
    async fn list_orders(&self) -> Result<Vec<RideOrder>, ApiError> {
        self.record(ApiCall::ListOrders);
        self.list.clone()
    }

    async fn provider(&self, id: ProviderId) -> Result<Provider, ApiError> {
        self.record(ApiCall::Provider(id));
        match self.providers.get(&id) {
            Some(Ok(name)) => Ok(Provider { name: name.clone() }),
            Some(Err(e)) => Err(e.clone()),
            None => Err(ApiError::Rejected {
                code: 404,
                msg: Some("provider not found".into()),
            }),
        }
    }

    async fn cancel_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.record(ApiCall::Cancel(id));
        match &self.cancel_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id));
        match &self.delete_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Collects every notice instead of showing it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
