#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

use moviehero_web::client::DataClient;
use moviehero_web::router::build_app_router;
use moviehero_web::state::AppState;

/// Build the full application router with the backend URL pointed at `url`.
pub fn build_test_app(url: &str) -> Router {
    let client = DataClient::new(url).unwrap();
    build_app_router(AppState {
        client: Arc::new(client),
    })
}

/// Serve `backend` on an ephemeral local port and return its base URL
/// (`http://127.0.0.1:<port>`).
pub async fn spawn_backend(backend: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve a raw HTTP/1.1 responder that promises a 500-byte JSON body, sends
/// a fragment of it and closes the connection. Returns the `/data` URL.
pub async fn spawn_truncated_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      content-type: application/json\r\n\
                      content-length: 500\r\n\
                      \r\n\
                      {\"data\":[",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}/data")
}

/// A URL on a local port that was just released, so connecting is refused.
pub async fn closed_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/data")
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
