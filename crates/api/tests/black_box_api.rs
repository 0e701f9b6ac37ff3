use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = tillbook_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn alice() -> serde_json::Value {
    json!({
        "user": { "name": "Alice", "email": "a@x.com" },
        "pass": "secret",
        "balance": 50.0,
    })
}

async fn create_alice(client: &reqwest::Client, base_url: &str) {
    let res = client
        .post(format!("{}/acc/create", base_url))
        .json(&alice())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

/// Read the current balance without changing it (deposit of zero).
async fn current_balance(client: &reqwest::Client, base_url: &str) -> f64 {
    let res = client
        .put(format!("{}/acc/deposit", base_url))
        .json(&json!({ "email": "a@x.com", "pass": "secret", "value": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body["balance"].as_f64().unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_account_echoes_stored_state() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/acc/create", srv.base_url))
        .json(&alice())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["pass"], "secret");
    assert_eq!(body["balance"].as_f64().unwrap(), 50.0);
}

#[tokio::test]
async fn withdraw_reduces_balance() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_alice(&client, &srv.base_url).await;

    let res = client
        .put(format!("{}/acc/withdraw", srv.base_url))
        .json(&json!({ "email": "a@x.com", "pass": "secret", "value": 20.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["balance"].as_f64().unwrap(), 30.0);
}

#[tokio::test]
async fn wrong_password_is_forbidden_and_balance_unchanged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_alice(&client, &srv.base_url).await;

    let res = client
        .put(format!("{}/acc/withdraw", srv.base_url))
        .json(&json!({ "email": "a@x.com", "pass": "wrong", "value": 20.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(current_balance(&client, &srv.base_url).await, 50.0);
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/acc/withdraw", srv.base_url))
        .json(&json!({ "email": "nobody@x.com", "pass": "secret", "value": 20.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_create_is_a_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_alice(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/acc/create", srv.base_url))
        .json(&alice())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
    // The original account is untouched.
    assert_eq!(current_balance(&client, &srv.base_url).await, 50.0);
}

#[tokio::test]
async fn empty_email_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/acc/create", srv.base_url))
        .json(&json!({
            "user": { "name": "Nobody", "email": "" },
            "pass": "pw",
            "balance": 0.0,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/acc/create", srv.base_url))
        .json(&json!({ "unexpected": true }))
        .send()
        .await
        .unwrap();

    assert!(res.status().is_client_error());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_deposit_and_withdraw_preserve_the_sum() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create_alice(&client, &srv.base_url).await;

    let deposit = client
        .put(format!("{}/acc/deposit", srv.base_url))
        .json(&json!({ "email": "a@x.com", "pass": "secret", "value": 20.0 }))
        .send();
    let withdraw = client
        .put(format!("{}/acc/withdraw", srv.base_url))
        .json(&json!({ "email": "a@x.com", "pass": "secret", "value": 20.0 }))
        .send();

    let (dep, wit) = tokio::join!(deposit, withdraw);
    assert_eq!(dep.unwrap().status(), StatusCode::OK);
    assert_eq!(wit.unwrap().status(), StatusCode::OK);

    // 30 or 70 would mean one update was lost.
    assert_eq!(current_balance(&client, &srv.base_url).await, 50.0);
}
