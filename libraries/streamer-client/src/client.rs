//! HTTP implementation of the playback service.

use crate::error::{ClientError, Result};
use crate::service::PlaybackService;
use crate::types::{ApiError, ClientConfig};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use streamer_core::{Device, PlaybackAction, PlaybackRequest, StatusSnapshot, VolumeRequest};
use tracing::{debug, info};

/// Client for the device/playback service.
///
/// # Example
///
/// ```ignore
/// use streamer_client::{ClientConfig, PlaybackService, StreamerClient};
/// use streamer_core::{PlaybackRequest, SliderLevel};
///
/// let client = StreamerClient::new(ClientConfig::new("http://localhost:8000"))?;
///
/// let devices = client.devices().await?;
/// let request = PlaybackRequest::new(&devices[0].name, SliderLevel::new(20), true);
/// client.play(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StreamerClient {
    http: Client,
    base_url: String,
}

impl StreamerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(format!("StreamerRemote/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;

        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", path, e))
        })
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path);
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(send_error)?;

        // The body of a successful POST carries nothing the remote uses
        check_status(response).await.map(|_| ())
    }
}

#[async_trait]
impl PlaybackService for StreamerClient {
    async fn devices(&self) -> Result<Vec<Device>> {
        let devices: Vec<Device> = self.get_json("/devices").await?;
        debug!(count = devices.len(), "Fetched device list");
        Ok(devices)
    }

    async fn status(&self) -> Result<StatusSnapshot> {
        let status: StatusSnapshot = self.get_json("/status").await?;
        debug!(
            devices = status.devices.len(),
            playing = ?status.playing_device,
            "Fetched status"
        );
        Ok(status)
    }

    async fn play(&self, request: &PlaybackRequest) -> Result<()> {
        self.post_json(PlaybackAction::Play.path(), request).await?;
        info!(
            device = %request.device_name,
            volume = request.volume,
            looping = request.looping,
            "Playback requested"
        );
        Ok(())
    }

    async fn stop(&self, request: &PlaybackRequest) -> Result<()> {
        self.post_json(PlaybackAction::Stop.path(), request).await?;
        info!(device = %request.device_name, "Stop requested");
        Ok(())
    }

    async fn set_volume(&self, request: &VolumeRequest) -> Result<()> {
        self.post_json("/volume", request).await?;
        info!(device = %request.device_name, volume = request.volume, "Volume updated");
        Ok(())
    }
}

fn send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

/// Turn a non-2xx response into `ServerError`, preferring the service's own message.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or(body);

    Err(ClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}
