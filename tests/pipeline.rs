//! End-to-end pipeline tests against a mock provider

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meteovuelo::config::ProviderConfig;
use meteovuelo::controller::{
    FORECAST_UNAVAILABLE_TEXT, NO_RESULTS_TEXT, RenderOutcome, SessionState, UiController, UiEvent,
};
use meteovuelo::meteored::MeteoredClient;
use meteovuelo::risk::DroneProfile;

const SEARCH_BODY: &str = r#"{"localidad": [
    {"id": "123", "nombre": "Córdoba", "jerarquia": ["Argentina", "Córdoba"]}
]}"#;

const FORECAST_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<report>
    <location city="Córdoba [Argentina]">
        <day value="20260807" name="Viernes">
            <hour value="14">
                <temp unit="c" value="20"/>
                <symbol value="1" desc="Despejado"/>
                <wind unit="kmh" value="18" dir="Norte"/>
                <wind-gusts unit="kmh" value="35"/>
                <rain unit="mm" value="0"/>
            </hour>
        </day>
    </location>
</report>"#;

fn provider_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        search_base_url: format!("{}/peticionBuscador.php", server.uri()),
        forecast_base_url: format!("{}/index.php", server.uri()),
        ..ProviderConfig::default()
    }
}

#[tokio::test]
async fn search_populates_selector() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/peticionBuscador.php"))
        .and(query_param("lang", "ar"))
        .and(query_param("texto", "Cordoba"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::LocalityNameChanged("Cordoba".to_string()))
        .await;

    assert_eq!(controller.state(), SessionState::LocalitySearched);
    match outcome {
        RenderOutcome::Selector { options, notice } => {
            assert_eq!(options.len(), 1);
            assert_eq!(
                options[0].selector_label(),
                "Córdoba, Argentina, Córdoba (ID: 123)"
            );
            assert!(notice.is_none());
        }
        other => panic!("expected selector options, got {other:?}"),
    }
}

#[tokio::test]
async fn search_with_no_matches_reports_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/peticionBuscador.php"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::LocalityNameChanged("Atlantis".to_string()))
        .await;

    assert_eq!(controller.state(), SessionState::NoResults);
    match outcome {
        RenderOutcome::Selector { options, notice } => {
            assert!(options.is_empty());
            assert_eq!(notice, Some(NO_RESULTS_TEXT));
        }
        other => panic!("expected cleared selector, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_search_degrades_to_empty_selector() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/peticionBuscador.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::LocalityNameChanged("Cordoba".to_string()))
        .await;

    assert_eq!(controller.state(), SessionState::SearchFailed);
    match outcome {
        RenderOutcome::Selector { options, notice } => {
            assert!(options.is_empty());
            assert_eq!(notice, Some(NO_RESULTS_TEXT));
        }
        other => panic!("expected cleared selector, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_search_text_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::LocalityNameChanged(String::new()))
        .await;

    assert_eq!(controller.state(), SessionState::Idle);
    match outcome {
        RenderOutcome::Selector { options, notice } => {
            assert!(options.is_empty());
            assert!(notice.is_none());
        }
        other => panic!("expected cleared selector, got {other:?}"),
    }
}

#[tokio::test]
async fn selection_renders_annotated_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .and(query_param("api_lang", "ar"))
        .and(query_param("localidad", "123"))
        .and(query_param("affiliate_id", "sb6pndn36a5p"))
        .and(query_param("v", "2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FORECAST_BODY, "text/xml"))
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::SelectionChanged {
            locality_id: "123".to_string(),
            profile: DroneProfile::StandardHeavy,
        })
        .await;

    assert_eq!(controller.state(), SessionState::ForecastRendered);
    match outcome {
        RenderOutcome::Table(table) => {
            assert_eq!(table.total_rows, 1);
            let cells = &table.pages[0][0];
            assert_eq!(cells[0], "20260807");
            assert_eq!(cells[1], "14");
            assert_eq!(cells[2], "20");
            // gusts 35 km/h: caution for the heavy profile, dry hour favorable
            assert_eq!(cells[8], "🟡");
            assert_eq!(cells[9], "🟢");
        }
        other => panic!("expected rendered table, got {other:?}"),
    }
}

#[tokio::test]
async fn profile_change_reclassifies_same_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FORECAST_BODY, "text/xml"))
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    // gusts 35 km/h exceed the light profile's unfavorable threshold
    let outcome = controller
        .handle_event(UiEvent::SelectionChanged {
            locality_id: "123".to_string(),
            profile: DroneProfile::LightMulti,
        })
        .await;

    match outcome {
        RenderOutcome::Table(table) => {
            assert_eq!(table.pages[0][0][8], "🔴");
        }
        other => panic!("expected rendered table, got {other:?}"),
    }
}

#[tokio::test]
async fn forecast_server_error_renders_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::SelectionChanged {
            locality_id: "123".to_string(),
            profile: DroneProfile::StandardHeavy,
        })
        .await;

    assert_eq!(controller.state(), SessionState::ForecastUnavailable);
    match outcome {
        RenderOutcome::Notice(text) => assert_eq!(text, FORECAST_UNAVAILABLE_TEXT),
        other => panic!("expected unavailability notice, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_forecast_payload_renders_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>not a forecast</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let client = MeteoredClient::new(provider_config(&server)).unwrap();
    let mut controller = UiController::new(&client);

    let outcome = controller
        .handle_event(UiEvent::SelectionChanged {
            locality_id: "123".to_string(),
            profile: DroneProfile::StandardHeavy,
        })
        .await;

    assert_eq!(controller.state(), SessionState::ForecastUnavailable);
    match outcome {
        RenderOutcome::Notice(text) => assert_eq!(text, FORECAST_UNAVAILABLE_TEXT),
        other => panic!("expected unavailability notice, got {other:?}"),
    }
}
