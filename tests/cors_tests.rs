use ai_service::routes::app;
use ai_service::state::AppState;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::util::ServiceExt;

const ORIGIN: &str = "https://dashboard.umkmpro.example";

fn request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, ORIGIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn every_route_allows_any_origin_with_credentials() {
    let app = app(AppState::default().shared());

    let cases = [
        (Method::GET, "/health", ""),
        (Method::GET, "/", ""),
        (Method::POST, "/chat", "{}"),
        (Method::POST, "/chat", "not json"),
        (Method::GET, "/openapi.json", ""),
        (Method::GET, "/docs", ""),
        (Method::GET, "/redoc", ""),
    ];

    for (method, uri, body) in cases {
        let response = app
            .clone()
            .oneshot(request(method.clone(), uri, body))
            .await
            .unwrap();
        let headers = response.headers();

        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            ORIGIN,
            "{method} {uri}"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true",
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn origin_is_not_restricted() {
    let app = app(AppState::default().shared());

    for origin in ["http://localhost:3000", "https://anything.test", "null"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            origin
        );
    }
}

#[tokio::test]
async fn preflight_allows_requested_method_and_headers() {
    let app = app(AppState::default().shared());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/chat")
                .header(header::ORIGIN, ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), ORIGIN);
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );

    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));

    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("x-custom-header"));
}
