//! Dry-run wiring demo.
//!
//! Assembles an envelope from an inline config profile and hands it to the
//! recording transport, then prints what a real transport would have sent.
//! Run with `RUST_LOG=debug` to watch the assembly steps.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use pushprism_core::message::GcmPriority;
use pushprism_dispatch::config;
use pushprism_dispatch::publisher::Publisher;
use pushprism_dispatch::transport::RecordingTransport;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let profile = r#"
version: 1
limits:
  apns_bytes: 2048
platforms: [APNS, GCM, ADM]
"#;
    let cfg = config::load_from_str(profile).expect("config load failed");

    let transport = Arc::new(RecordingTransport::new());
    let publisher = Publisher::new(&cfg, transport.clone());

    let mut msg = publisher.message("Nightly build 1.4.2 is ready to install");
    msg.title = Some("pushPrism".to_string());
    msg.ttl = Some(3600);
    msg.priority = Some(GcmPriority::High);
    msg.custom
        .insert("build".to_string(), serde_json::Value::from("1.4.2"));

    publisher
        .publish(&msg, "arn:demo:endpoint/42")
        .await
        .expect("publish failed");

    for (target, envelope) in transport.sent() {
        println!("{target} <- {envelope}");
    }
}
