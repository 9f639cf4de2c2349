use std::net::SocketAddr;

use ride_client::ClientConfig;
use serde_json::{json, Value};


/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ride_client=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// API base URL for a server listening on `addr`.
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/local-transportation/")
}

/// Client config pointing at a port nothing listens on.
pub async fn unreachable_config() -> ClientConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind port listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    ClientConfig::new(&base_url(addr)).expect("valid URL")
}

/// Wire-format order, fare sent as a decimal string the way the API does.
pub fn order_json(id: u64, provider_id: u64, confirmed: bool) -> Value {
    json!({
        "id": id,
        "provider_id": provider_id,
        "pickup_location": format!("Pickup {id}"),
        "drop_off_location": "Central Station",
        "ride_date": "2026-10-21",
        "pickup_time": "09:30:00",
        "estimated_fare": format!("{}.50", 20 + id),
        "booking_status": confirmed,
    })
}

/// `{ code: 200, data, msg: "success" }`
pub fn ok_envelope(data: Value) -> Value {
    json!({ "code": 200, "data": data, "msg": "success" })
}

pub fn error_envelope(code: i64, msg: &str) -> Value {
    json!({ "code": code, "data": null, "msg": msg })
}
