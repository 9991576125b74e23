//! Tests for the Streamer client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real device/playback service.

use serde_json::json;
use std::time::Duration;
use streamer_client::{ClientConfig, ClientError, PlaybackService, StreamerClient};
use streamer_core::{PlaybackAction, PlaybackRequest, SliderLevel, VolumeRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> StreamerClient {
    StreamerClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(config.timeout, streamer_client::DEFAULT_TIMEOUT);

        let config = config.with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = StreamerClient::new(ClientConfig::new(""));

        match result.unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = StreamerClient::new(ClientConfig::new("example.com"));

        match result.unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_multiple_trailing_slashes_removed() {
        let client = StreamerClient::new(ClientConfig::new("http://example.com///")).unwrap();
        assert_eq!(client.url(), "http://example.com");
    }
}

// =============================================================================
// Read Endpoint Tests
// =============================================================================

mod reads {
    use super::*;

    #[tokio::test]
    async fn test_devices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"name": "Kitchen"}, {"name": "Office"}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let devices = client.devices().await.unwrap();

        let names: Vec<_> = devices.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Kitchen", "Office"]);
    }

    #[tokio::test]
    async fn test_status_with_playing_device() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "devices": ["A", "B"],
                "playing_device": "B"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let status = client.status().await.unwrap();

        assert_eq!(status.devices, vec!["A", "B"]);
        assert_eq!(status.playing_device.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_status_without_playing_device() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let status = client.status().await.unwrap();

        assert!(status.devices.is_empty());
        assert!(status.playing_device.is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;

        match client.status().await.unwrap_err() {
            ClientError::ParseError(msg) => assert!(msg.contains("/status")),
            e => panic!("Expected ParseError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_parse_error() {
        let mock_server = MockServer::start().await;

        // A /devices listing where /status was expected
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "A"}])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;

        assert!(matches!(
            client.status().await.unwrap_err(),
            ClientError::ParseError(_)
        ));
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;

        match client.devices().await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = StreamerClient::new(
            ClientConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = client.status().await.unwrap_err();
        assert!(err.is_network(), "Expected network error, got: {:?}", err);
    }
}

// =============================================================================
// Write Endpoint Tests
// =============================================================================

mod writes {
    use super::*;

    #[tokio::test]
    async fn test_play_sends_request_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/play"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "device_name": "Kitchen",
                "volume": 0.4,
                "loop": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "playing"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let request = PlaybackRequest::new("Kitchen", SliderLevel::new(40), true);

        client.play(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_sends_full_playback_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/stop"))
            .and(body_json(json!({
                "device_name": "Office",
                "volume": 0.1,
                "loop": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "stopped"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let request = PlaybackRequest::new("Office", SliderLevel::new(10), false);

        client.playback(PlaybackAction::Stop, &request).await.unwrap();
    }

    #[tokio::test]
    async fn test_volume_sends_normalized_level() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/volume"))
            .and(body_json(json!({"device_name": "Kitchen", "volume": 0.73})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let request = VolumeRequest::new("Kitchen", SliderLevel::new(73));

        client.set_volume(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_response_body_is_ignored() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/volume"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let request = VolumeRequest::new("Kitchen", SliderLevel::new(5));

        assert!(client.set_volume(&request).await.is_ok());
    }

    #[tokio::test]
    async fn test_backend_error_message_is_extracted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/play"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": "error",
                "message": "Device not found"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let request = PlaybackRequest::new("Ghost", SliderLevel::new(10), true);

        match client.play(&request).await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Device not found");
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }
}
