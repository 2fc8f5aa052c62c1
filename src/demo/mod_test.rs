use super::*;
use crate::pipeline::test_helpers::{MockBackend, url};
use crate::store::{DEMO_MODE_KEY, KeyValueStore, MemoryStore};
use serde_json::{Value, json};
use std::sync::Mutex;

/// Delay that records what it was asked to wait and returns immediately.
#[derive(Default)]
struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

#[async_trait::async_trait]
impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

struct Harness {
    network: Arc<MockBackend>,
    delay: Arc<RecordingDelay>,
    transport: DemoTransport,
}

fn harness(demo: bool) -> Harness {
    let kv = Arc::new(MemoryStore::new());
    if demo {
        kv.set(DEMO_MODE_KEY, "true").unwrap();
    }
    let network = Arc::new(MockBackend::new());
    let delay = Arc::new(RecordingDelay::default());
    let transport = DemoTransport::new(
        network.clone(),
        CredentialStore::new(kv),
        Arc::new(DemoBackend::seeded()),
        LatencyWindow::default(),
        delay.clone(),
    );
    Harness { network, delay, transport }
}

// =========================================================================
// routing
// =========================================================================

#[tokio::test]
async fn demo_mode_serves_fixtures_without_network() {
    let h = harness(true);
    let resp = h
        .transport
        .send(&ApiRequest::get(url("employees/?page=1&page_size=2")))
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    let body: Value = resp.json_body().unwrap();
    assert_eq!(body["count"], 7);
    assert_eq!(body["results"][0]["id"], "emp-001");
    assert_eq!(body["results"][1]["id"], "emp-002");
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert!(h.network.requests().is_empty());
}

#[tokio::test]
async fn demo_mode_simulates_latency_inside_the_window() {
    let h = harness(true);
    h.transport.send(&ApiRequest::get(url("reports/"))).await.unwrap();
    h.transport.send(&ApiRequest::get(url("audit-logs/"))).await.unwrap();

    let waits = h.delay.waits.lock().unwrap().clone();
    assert_eq!(waits.len(), 2);
    for wait in waits {
        assert!(wait >= Duration::from_millis(220) && wait <= Duration::from_millis(350), "{wait:?}");
    }
}

#[tokio::test]
async fn demo_login_is_answered_locally() {
    let h = harness(true);
    let request = ApiRequest::post(url("auth/login/"), json!({ "email": "hr@demo.com", "password": "x" }));
    let resp = h.transport.send(&request).await.unwrap();

    let body: Value = resp.json_body().unwrap();
    assert_eq!(body["user"]["email"], "hr@demo.com");
    assert!(h.network.requests().is_empty());
}

// =========================================================================
// pass-through
// =========================================================================

#[tokio::test]
async fn without_demo_flag_everything_passes_through() {
    let h = harness(false);
    h.transport.send(&ApiRequest::get(url("employees/"))).await.unwrap();
    assert_eq!(h.network.requests().len(), 1);
    assert!(h.delay.waits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn urls_outside_the_api_prefix_pass_through() {
    let h = harness(true);
    h.transport
        .send(&ApiRequest::get("http://cdn.test/assets/logo.png"))
        .await
        .unwrap();
    assert_eq!(h.network.requests().len(), 1);
}

#[tokio::test]
async fn unmatched_routes_pass_through() {
    let h = harness(true);
    let request = ApiRequest::get(url("payroll/runs/"));
    h.transport.send(&request).await.unwrap();
    assert_eq!(h.network.requests(), vec![request]);
}

// =========================================================================
// backend and latency
// =========================================================================

#[test]
fn backend_splits_path_and_query() {
    let backend = DemoBackend::seeded();
    let resp = backend
        .handle(Method::Get, "documents/?status=expired", None)
        .unwrap();
    let body: Value = resp.json_body().unwrap();
    assert_eq!(body["count"], 1);
    assert!(backend.handle(Method::Get, "nothing/here/", None).is_none());
    assert_eq!(backend.fixtures().employees.len(), 7);
}

#[test]
fn latency_samples_stay_in_window() {
    let window = LatencyWindow { min_ms: 5, max_ms: 9 };
    for _ in 0..200 {
        let ms = window.sample().as_millis();
        assert!((5..=9).contains(&ms));
    }
    assert_eq!(LatencyWindow { min_ms: 40, max_ms: 40 }.sample(), Duration::from_millis(40));
    assert_eq!(LatencyWindow::ZERO.sample(), Duration::ZERO);
}
