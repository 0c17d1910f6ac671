//! End-to-end tests for the weather path against a mock provider.

use chrono::{Days, Utc};
use serde_json::json;
use skycast_core::{WeatherError, WeatherService};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample(dt_txt: String, temp: f64) -> serde_json::Value {
    json!({
        "dt_txt": dt_txt,
        "main": { "temp": temp, "humidity": 63.0 },
        "weather": [ { "icon": "10d", "description": "light rain" } ],
        "wind": { "speed": 7.6 }
    })
}

async fn mount_geocode(server: &MockServer, city: &str, lat: f64, lon: f64) {
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", city))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "lat": lat, "lon": lon }])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn forecast_round_trip_returns_current_plus_daily_entries() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Chicago", 41.85, -87.65).await;

    let today = Utc::now().date_naive();
    let day = |offset: u64, time: &str| {
        let date = today.checked_add_days(Days::new(offset)).unwrap();
        format!("{} {time}", date.format("%Y-%m-%d"))
    };

    // Daily samples start two days out: even if UTC midnight passes between
    // building this payload and the service reading the clock, both days stay
    // strictly in the future and the expected length holds.
    let payload = json!({
        "city": { "name": "Chicago" },
        "list": [
            sample(day(0, "09:00:00"), 71.4),
            sample(day(2, "12:00:00"), 68.0),
            sample(day(3, "12:00:00"), 70.2),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let service = WeatherService::new(server.uri(), "test-key");
    let entries = service.get_forecast("Chicago").await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].city, "Chicago");
    assert_eq!(entries[0].date, today.format("%m/%d/%Y").to_string());
    assert_eq!(entries[0].temp_f, 71);
    assert_eq!(entries[1].temp_f, 68);
    assert_eq!(entries[2].temp_f, 70);
    assert_eq!(entries[0].wind_mph, 8);
    assert_eq!(entries[0].humidity_pct, 63);
}

#[tokio::test]
async fn zero_geocoding_candidates_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let service = WeatherService::new(server.uri(), "test-key");
    let err = service.get_forecast("Nowhereville").await.unwrap_err();

    assert!(matches!(err, WeatherError::NotFound(ref q) if q == "Nowhereville"));
}

#[tokio::test]
async fn provider_failure_surfaces_as_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = WeatherService::new(server.uri(), "test-key");
    let err = service.get_forecast("Chicago").await.unwrap_err();

    match err {
        WeatherError::Upstream { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn forecast_fetch_failure_surfaces_as_upstream_error() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Chicago", 41.85, -87.65).await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let service = WeatherService::new(server.uri(), "test-key");
    let err = service.get_forecast("Chicago").await.unwrap_err();

    assert!(matches!(err, WeatherError::Upstream { status, .. } if status.as_u16() == 401));
}

#[tokio::test]
async fn payload_without_expected_shape_is_malformed_data() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Chicago", 41.85, -87.65).await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cod": "200" })))
        .mount(&server)
        .await;

    let service = WeatherService::new(server.uri(), "test-key");
    let err = service.get_forecast("Chicago").await.unwrap_err();

    assert!(matches!(err, WeatherError::MalformedData(_)));
}
