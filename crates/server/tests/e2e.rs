use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestServer {
    base_url: String,
    data_dir: std::path::PathBuf,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

async fn start_server() -> anyhow::Result<TestServer> {
    // isolated data file per test run
    let data_dir = std::env::temp_dir().join(format!("server_e2e_{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = data_dir.join("employees.json");

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestServer { base_url, data_dir })
}

#[tokio::test]
async fn e2e_add_list_and_search() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/api/employees", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    let res = c
        .post(format!("{}/api/employees", app.base_url))
        .json(&json!({"id": "E1", "name": "A", "department": "Eng", "salary": 50000}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c
        .post(format!("{}/api/employees", app.base_url))
        .json(&json!({"id": "E1", "name": "A", "department": "Eng", "salary": 50000}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Employee ID already exists");

    let res = c.get(format!("{}/api/employees/E1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["department"], "Eng");
    assert_eq!(body["salary"], 50000.0);

    let res = c.get(format!("{}/api/employees/E404", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(format!("{}/api/employees", app.base_url)).send().await?;
    let list = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_data_survives_restart() -> anyhow::Result<()> {
    let first = start_server().await?;
    let c = reqwest::Client::new();
    let res = c
        .post(format!("{}/api/employees", first.base_url))
        .json(&json!({"id": "E7", "name": "G", "department": "Ops", "salary": "1200.50"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    // a second app over the same file sees the record
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = first.data_dir.join("employees.json");
    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let res = c.get(format!("http://{}/api/employees/E7", addr)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["salary"], 1200.5);
    Ok(())
}
