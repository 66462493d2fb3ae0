use reqwest::{Client, StatusCode};
use std::process::{Child, Command};
use std::time::Duration;

struct MockWeatherServer {
    process: Child,
    base_url: String,
}

impl MockWeatherServer {
    async fn spawn(port: u16) -> Self {
        let executable = env!("CARGO_BIN_EXE_mock-weather");
        let server = MockWeatherServer {
            process: Command::new(executable)
                .args(["--address", "127.0.0.1", "--port", &port.to_string()])
                .spawn()
                .expect("Could not start mock-weather"),
            base_url: format!("http://127.0.0.1:{port}"),
        };
        while reqwest::get(server.url("/health")).await.is_err() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        server
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for MockWeatherServer {
    fn drop(&mut self) {
        self.process.kill().expect("Failed to send kill signal to mock-weather");
        self.process.wait().expect("mock-weather failed to stop");
    }
}

#[tokio::test]
async fn health_is_served() {
    let server = MockWeatherServer::spawn(3711).await;

    let res = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Healthy");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = MockWeatherServer::spawn(3712).await;

    let res = reqwest::get(server.url("/forecast")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn weather_answers_with_json_within_the_delay_bound() {
    let server = MockWeatherServer::spawn(3713).await;
    let client = Client::new();

    let start = std::time::Instant::now();
    let res = client
        .get(server.url("/weather"))
        .query(&[("size", "30")])
        .send()
        .await
        .expect("Could not send request");
    assert!(start.elapsed() < Duration::from_millis(5000 + 1000));

    let status = res.status();
    assert!(
        status.is_success() || status.is_client_error() || status.is_server_error(),
        "{status}"
    );
    assert_eq!(
        res.headers()[reqwest::header::CONTENT_TYPE],
        mime::APPLICATION_JSON.as_ref()
    );

    // Bodies of 204 responses are dropped on the wire.
    if status == StatusCode::NO_CONTENT {
        return;
    }
    let body: serde_json::Value = res.json().await.unwrap();
    if status.is_success() {
        assert_eq!(body["readings"].as_array().unwrap().len(), 30);
        assert_eq!(body["message"], "Successfully retrieved 30 weather readings.");
    } else {
        assert!(body.get("readings").is_none());
        assert!(body["message"].as_str().unwrap().contains(status.as_str()));
    }
}
