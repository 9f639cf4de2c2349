//! `reqwest` implementation of [`BookingApi`].
//!
//! Works natively and in the browser (reqwest falls back to `fetch` on
//! wasm32). No timeout or retry is configured; the transport defaults apply.

use reqwest::{Client, RequestBuilder, Url};
use ride_common::envelope::{Envelope, SUCCESS_CODE};
use ride_common::error::ApiError;
use ride_common::order::{BookingStatusPatch, OrderId, RideOrder};
use ride_common::provider::{Provider, ProviderId};
use serde::de::DeserializeOwned;

use crate::api::BookingApi;
use crate::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    client: Client,
    base_url: Url,
}

impl HttpBookingApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("bad endpoint {path:?}: {e}")))
    }

    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let resp = request.send().await.map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport)?;
        Ok((status, body))
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let (status, body) = self.send(request).await?;
        decode_envelope(status, &body)
    }
}

impl BookingApi for HttpBookingApi {
    async fn list_orders(&self) -> Result<Vec<RideOrder>, ApiError> {
        let url = self.endpoint("ride-booking/")?;
        tracing::debug!(%url, "GET orders");
        self.send_envelope(self.client.get(url)).await?.into_result()
    }

    async fn provider(&self, id: ProviderId) -> Result<Provider, ApiError> {
        let url = self.endpoint(&format!("transportation-provider/{id}/"))?;
        tracing::debug!(%url, "GET provider");
        self.send_envelope(self.client.get(url)).await?.into_result()
    }

    async fn cancel_order(&self, id: OrderId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("ride-booking/{id}/"))?;
        tracing::debug!(%url, "PATCH cancel order");
        let request = self.client.patch(url).json(&BookingStatusPatch::cancel());
        self.send_envelope::<serde_json::Value>(request)
            .await?
            .into_ack()
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("ride-booking/{id}/"))?;
        tracing::debug!(%url, "DELETE order");
        let (status, body) = self.send(self.client.delete(url)).await?;
        if is_success_status(status) {
            Ok(())
        } else {
            Err(error_from_status(status, &body))
        }
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response body into an envelope, folding HTTP errors into
/// [`ApiError`]. Error statuses that still carry an envelope keep its
/// code and message so the server's text reaches the user.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Envelope<T>, ApiError> {
    if !is_success_status(status) {
        return Err(error_from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn error_from_status(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        Ok(env) if env.code != SUCCESS_CODE => ApiError::Rejected {
            code: env.code,
            msg: env.msg,
        },
        _ => ApiError::Status { status },
    }
}
