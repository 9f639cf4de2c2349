use ride_common::error::ApiError;
use ride_common::order::{OrderId, RideOrder};
use ride_common::provider::{Provider, ProviderId};

/// The ride-booking REST endpoints the orders view consumes.
///
/// Implementations decode the `{ code, data, msg }` envelope and hand back
/// the payload, so callers only see typed results:
/// - `list_orders`    → `GET ride-booking/`
/// - `provider`       → `GET transportation-provider/{id}/`
/// - `cancel_order`   → `PATCH ride-booking/{id}/` with `{"booking_status": false}`
/// - `delete_order`   → `DELETE ride-booking/{id}/`
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    async fn list_orders(&self) -> Result<Vec<RideOrder>, ApiError>;

    async fn provider(&self, id: ProviderId) -> Result<Provider, ApiError>;

    /// Succeeds only on a success envelope.
    async fn cancel_order(&self, id: OrderId) -> Result<(), ApiError>;

    /// Succeeds on any 2xx; the body is not inspected.
    async fn delete_order(&self, id: OrderId) -> Result<(), ApiError>;
}
