use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    log: BTreeMap<String, Value>,
    completion: u8,
}

#[derive(Debug, Deserialize)]
struct WeekDay {
    date: String,
    weekday: String,
    log: BTreeMap<String, Value>,
    completion: u8,
}

#[derive(Debug, Deserialize)]
struct WeekResponse {
    start: String,
    days: Vec<WeekDay>,
}

#[derive(Debug, Deserialize)]
struct InsightResponse {
    text: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "habit_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/catalog")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    spawn_server_at(&unique_data_path()).await
}

async fn spawn_server_at(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .env_remove("GEMINI_API_KEY")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn record(
    client: &Client,
    base_url: &str,
    date: &str,
    habit_id: &str,
    value: Value,
) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/log"))
        .json(&json!({ "date": date, "habit_id": habit_id, "value": value }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_recorded_values_show_up_in_the_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // 2026-01-05 is a Monday; this test owns that week.
    let response = record(&client, &server.base_url, "2026-01-05", "solat_fardhu", json!(3)).await;
    assert!(response.status().is_success());
    let day: DayResponse = response.json().await.unwrap();
    assert_eq!(day.date, "2026-01-05");
    assert_eq!(day.log["solat_fardhu"], json!(3));
    // 3 of the catalog's 37 possible points.
    assert_eq!(day.completion, 8);

    let response = record(&client, &server.base_url, "2026-01-05", "puasa", json!(true)).await;
    assert!(response.status().is_success());

    let week: WeekResponse = client
        .get(format!("{}/api/week?start=2026-01-05", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(week.start, "2026-01-05");
    assert_eq!(week.days.len(), 7);
    assert_eq!(week.days[0].date, "2026-01-05");
    assert_eq!(week.days[0].weekday, "Mon");
    assert_eq!(week.days[0].log["solat_fardhu"], json!(3));
    assert_eq!(week.days[0].log["puasa"], json!(true));
    // 3 prayers + fasting out of 37 possible points across the catalog.
    assert_eq!(week.days[0].completion, 11);
    assert!(week.days[1..].iter().all(|day| day.completion == 0));
}

#[tokio::test]
async fn http_bounded_counter_updates_are_clamped() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = record(&client, &server.base_url, "2026-01-12", "al_mathurat", json!(99)).await;
    assert!(response.status().is_success());
    let day: DayResponse = response.json().await.unwrap();
    assert_eq!(day.log["al_mathurat"], json!(2));
}

#[tokio::test]
async fn http_rejects_malformed_updates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = record(&client, &server.base_url, "2026-01-19", "not_a_habit", json!(1)).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = record(&client, &server.base_url, "2026-01-19", "tilawah", json!(true)).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = record(&client, &server.base_url, "19-01-2026", "tilawah", json!(1)).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_updates_survive_a_restart() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path();
    let client = Client::new();

    let first = spawn_server_at(&data_path).await;
    let response = record(&client, &first.base_url, "2026-01-26", "tilawah", json!(7)).await;
    assert!(response.status().is_success());
    drop(first);

    // A fresh instance on the same data file must see the write.
    let second = spawn_server_at(&data_path).await;
    let week: WeekResponse = client
        .get(format!("{}/api/week?start=2026-01-26", second.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(week.days[0].log["tilawah"], json!(7));
}

#[tokio::test]
async fn http_insight_without_credential_returns_the_fixed_message() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let insight: InsightResponse = client
        .post(format!("{}/api/insight", server.base_url))
        .json(&json!({ "start": "2026-01-05" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        insight.text,
        "API Key is missing. Please configure your environment to use AI features."
    );
}

#[tokio::test]
async fn http_index_serves_the_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Weekly Habit Tracker"));
    assert!(body.contains("Get Advice"));
}
