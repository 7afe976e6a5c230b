use std::time::Duration;

use pretty_assertions::assert_eq;
use reporter_core::{ApiError, RepositoryModel};
use reporter_engine::{FetchSettings, JsonDecoder, RepositoryFetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPOS_JSON: &str = r#"[
    {"name": "alpha", "description": "first", "stars": 12, "forks": 3, "language": "Rust"},
    {"name": "beta", "description": "second", "stars": 0, "forks": 1, "language": "Swift"}
]"#;

fn settings_for(endpoint: String) -> FetchSettings {
    FetchSettings {
        endpoint,
        connect_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(5),
        ..FetchSettings::default()
    }
}

async fn serve(route: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetcher_decodes_array_in_order() {
    reporter_logging::initialize_for_tests();
    let server = serve(
        "/users/someone",
        ResponseTemplate::new(200).set_body_raw(REPOS_JSON, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(format!("{}/users/someone", server.uri())));
    let repositories = fetcher.fetch(&JsonDecoder).await.expect("fetch ok");

    assert_eq!(
        repositories,
        vec![
            RepositoryModel::new("alpha", "first", 12, 3, "Rust"),
            RepositoryModel::new("beta", "second", 0, 1, "Swift"),
        ]
    );
}

#[tokio::test]
async fn object_body_is_download_error() {
    let server = serve(
        "/users/someone",
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"login":"someone","public_repos":3}"#, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(format!("{}/users/someone", server.uri())));
    let err = fetcher.fetch(&JsonDecoder).await.unwrap_err();

    assert_eq!(err, ApiError::DownloadError);
}

#[tokio::test]
async fn malformed_json_is_download_error() {
    let server = serve(
        "/users/someone",
        ResponseTemplate::new(200).set_body_string("[{\"name\": "),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(format!("{}/users/someone", server.uri())));

    assert_eq!(
        fetcher.fetch(&JsonDecoder).await,
        Err(ApiError::DownloadError)
    );
}

#[tokio::test]
async fn error_status_with_error_body_is_download_error() {
    let server = serve(
        "/users/someone",
        ResponseTemplate::new(403).set_body_raw(
            r#"{"message":"Request forbidden by administrative rules."}"#,
            "application/json",
        ),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(format!("{}/users/someone", server.uri())));

    assert_eq!(
        fetcher.fetch(&JsonDecoder).await,
        Err(ApiError::DownloadError)
    );
}

#[tokio::test]
async fn oversized_body_is_download_error() {
    let server = serve(
        "/users/someone",
        ResponseTemplate::new(200).set_body_raw(REPOS_JSON, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 16,
        ..settings_for(format!("{}/users/someone", server.uri()))
    };
    let fetcher = ReqwestFetcher::new(settings);

    assert_eq!(
        fetcher.fetch(&JsonDecoder).await,
        Err(ApiError::DownloadError)
    );
}

#[tokio::test]
async fn slow_response_times_out_as_download_error() {
    let server = serve(
        "/users/someone",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw(REPOS_JSON, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(format!("{}/users/someone", server.uri()))
    };
    let fetcher = ReqwestFetcher::new(settings);

    assert_eq!(
        fetcher.fetch(&JsonDecoder).await,
        Err(ApiError::DownloadError)
    );
}

#[tokio::test]
async fn unreachable_host_is_download_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    let endpoint = format!("http://127.0.0.1:{port}/users/someone");

    let fetcher = ReqwestFetcher::new(settings_for(endpoint));

    assert_eq!(
        fetcher.fetch(&JsonDecoder).await,
        Err(ApiError::DownloadError)
    );
}

#[tokio::test]
async fn invalid_endpoint_is_download_error() {
    let fetcher = ReqwestFetcher::new(settings_for("not a url".to_string()));

    assert_eq!(
        fetcher.fetch(&JsonDecoder).await,
        Err(ApiError::DownloadError)
    );
}

#[test]
fn default_settings_target_fixed_endpoint() {
    let settings = FetchSettings::default();
    assert_eq!(settings.endpoint, "https://api.github.com/users/raywenderlich");
    assert_eq!(settings.endpoint, reporter_engine::DEFAULT_ENDPOINT);
}
