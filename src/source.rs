use std::time::Instant;

use reqwest::header::CACHE_CONTROL;
use tracing::{info, warn};

/// Load the fragment from an `http(s)://` URL or a local path.
///
/// One attempt, no retry. Any failure, or a body that is only whitespace,
/// comes back as `None` so the caller can leave its output alone.
pub async fn load(input: &str) -> Option<String> {
    let start = Instant::now();
    let content = if is_url(input) {
        fetch(input).await
    } else {
        read(input).await
    }?;

    if content.trim().is_empty() {
        warn!("Empty content from {}", input);
        return None;
    }

    info!(
        "Loaded {} bytes from {} in {}ms",
        content.len(),
        input,
        start.elapsed().as_millis()
    );
    Some(content)
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

async fn fetch(url: &str) -> Option<String> {
    let response = reqwest::Client::new()
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|e| warn!("Fetch failed for {}: {}", url, e))
        .ok()?;

    if !response.status().is_success() {
        warn!("Fetch for {} returned {}", url, response.status());
        return None;
    }

    response
        .text()
        .await
        .map_err(|e| warn!("Failed to read body from {}: {}", url, e))
        .ok()
}

async fn read(path: &str) -> Option<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| warn!("Failed to read {}: {}", path, e))
        .ok()
}
