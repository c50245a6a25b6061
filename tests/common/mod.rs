#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use wiremock::MockServer;

/// Binary with every variable it reads removed, and no proxies
pub fn hitokoto_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hitokoto-gist").unwrap();
    for key in [
        "CATEGORY",
        "FILE_NAME",
        "GH_TOKEN",
        "GIST_ID",
        "HITOKOTO_ENDPOINT",
        "GITHUB_API_URL",
        "HTTP_TIMEOUT_SECS",
        "RUST_LOG",
        "HTTP_PROXY",
        "HTTPS_PROXY",
        "ALL_PROXY",
        "http_proxy",
        "https_proxy",
        "all_proxy",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Binary configured to talk to `server` for both remote APIs
pub fn cmd_against(server: &MockServer) -> Command {
    let mut cmd = hitokoto_cmd();
    cmd.env("FILE_NAME", "hitokoto.txt")
        .env("GH_TOKEN", "ghp_test")
        .env("GIST_ID", "abc")
        .env("HITOKOTO_ENDPOINT", format!("{}/hitokoto", server.uri()))
        .env("GITHUB_API_URL", server.uri())
        .env("HTTP_TIMEOUT_SECS", "10");
    cmd
}

/// Run the binary off the async runtime so the mock server keeps serving
pub async fn run(mut cmd: Command) -> Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .unwrap()
}

/// Requests the server has seen, as `(method, path?query)`
pub async fn received(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let target = match request.url.query() {
                Some(query) => format!("{}?{}", request.url.path(), query),
                None => request.url.path().to_string(),
            };
            (request.method.as_str().to_string(), target)
        })
        .collect()
}
