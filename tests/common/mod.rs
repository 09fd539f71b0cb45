#![allow(dead_code)]

use std::sync::Once;

use instance_ping::models::InstanceMetadata;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // test-log may already have installed a subscriber for this test binary
        let _ = tracing_subscriber::fmt()
            .with_env_filter("instance_ping=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Metadata with a fixed id so assertions do not depend on the test host.
pub fn test_instance() -> InstanceMetadata {
    InstanceMetadata::new("test-instance")
}

/// Spawns the application with default test metadata and returns its address.
pub async fn spawn_app() -> String {
    spawn_app_with_instance(test_instance()).await
}

/// Spawns the application serving the given metadata and returns its address.
pub async fn spawn_app_with_instance(instance: InstanceMetadata) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");

    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = instance_ping::app_with_instance(instance);
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}
