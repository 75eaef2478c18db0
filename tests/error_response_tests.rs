use axum::{http::StatusCode, response::IntoResponse};
use foodisus::AppError;
use tower_sessions::{session, session_store};

#[tokio::test]
async fn test_app_error_hides_detail_behind_500() {
    let error = AppError::Session(session::Error::Store(session_store::Error::Backend(
        "redis connection refused at 10.0.0.5".to_string(),
    )));

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(body, "Internal Server Error");
}
