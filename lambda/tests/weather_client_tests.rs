//! Tests for `OpenWeatherClient` against a local mock of the OpenWeatherMap API.

use owm_weather::api::WeatherHandler;
use owm_weather::clients::{OpenWeatherClient, WeatherProvider};
use owm_weather::core::config::AppConfig;
use owm_weather::core::models::ProxyRequest;
use owm_weather::errors::WeatherError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        base_url: server.uri(),
        ..AppConfig::new("test-key")
    }
}

fn seattle_json() -> serde_json::Value {
    json!({
        "coord": {"lon": -122.33, "lat": 47.61},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 55.2, "pressure": 1012, "humidity": 80, "temp_min": 53.0, "temp_max": 57.4},
        "visibility": 10000,
        "wind": {"speed": 6.3, "deg": 200},
        "clouds": {"all": 90},
        "id": 5809844,
        "name": "Seattle",
        "cod": 200
    })
}

#[tokio::test]
async fn test_current_weather_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "imperial"))
        .and(query_param("q", "Seattle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seattle_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
    let report = client.current_weather("Seattle").await.unwrap();

    assert_eq!(report.name, "Seattle");
    assert_eq!(report.weather[0].description, "light rain");
    assert_eq!(report.main.humidity, 80);
}

#[tokio::test]
async fn test_location_with_spaces_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New York,US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "New York",
            "weather": [{"description": "haze"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
    let report = client.current_weather("New York,US").await.unwrap();

    assert_eq!(report.name, "New York");
}

#[tokio::test]
async fn test_provider_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
    let err = client.current_weather("Atlantis").await.unwrap_err();

    assert_eq!(
        err,
        WeatherError::ProviderStatus {
            status: 404,
            message: "city not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_provider_error_status_without_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
    let err = client.current_weather("Seattle").await.unwrap_err();

    assert_eq!(
        err,
        WeatherError::ProviderStatus {
            status: 503,
            message: "Service Unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"name\": "))
        .mount(&server)
        .await;

    let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
    let err = client.current_weather("Seattle").await.unwrap_err();

    assert!(matches!(err, WeatherError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(seattle_json())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = AppConfig {
        request_timeout: Duration::from_millis(100),
        ..config_for(&server)
    };
    let client = OpenWeatherClient::new(&config).unwrap();
    let err = client.current_weather("Seattle").await.unwrap_err();

    assert_eq!(err, WeatherError::Timeout);
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    let config = AppConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..AppConfig::new("test-key")
    };
    let client = OpenWeatherClient::new(&config).unwrap();
    let err = client.current_weather("Seattle").await.unwrap_err();

    match err {
        WeatherError::Transport(msg) => assert!(!msg.contains("test-key")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_handler_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Seattle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seattle_json()))
        .expect(1)
        .mount(&server)
        .await;

    let weather = WeatherHandler::from_config(&config_for(&server)).unwrap();
    let response = weather
        .handle(&ProxyRequest::with_location("Seattle"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        r#"{"message":"Weather for Seattle is 55.2° F with light rain, 6.3 MPH winds and 80% humidity"}"#
    );
}
