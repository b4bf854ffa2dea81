use base::setting::Settings;
use log::{info, trace, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

use crate::fetch::CLIENT;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Server URL is not set, please configure")]
    MissingServer,

    #[error("Could not serialize the payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Request to the server failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// What the server answered. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

/// POSTs the whole batch as one JSON array. Nothing is retried and the
/// answer is not interpreted beyond logging it.
pub async fn send<T: Serialize>(settings: &Settings, items: &[T]) -> Result<Delivery, SendError> {
    let server_url = settings.server_url().ok_or(SendError::MissingServer)?;
    let body = serde_json::to_string(items)?;

    let mut req = CLIENT
        .post(server_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body);
    if let Some(token) = settings.token() {
        req = req.header(AUTHORIZATION, format!("Bearer {}", token));
    }

    let start = Instant::now();
    let res = req.send().await?;
    trace!("POST {} took {:?}", server_url, start.elapsed());
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        info!("Sent {} item(s) to {}: {} {}", items.len(), server_url, status, body);
    } else {
        warn!("Server {} answered {}: {}", server_url, status, body);
    }
    Ok(Delivery {
        status: status.as_u16(),
        body,
    })
}
