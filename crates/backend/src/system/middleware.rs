use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Per-request console line: local time, latency, status, method and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    // Restaurant local time, +05:30
    let timestamp = chrono::Utc::now() + chrono::Duration::minutes(330);

    // Cyan for success, brown for everything else
    let color_code = if status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {} {:>6} {}",
        color_code,
        timestamp.format("%H:%M:%S"),
        duration.as_millis(),
        status.as_u16(),
        method,
        uri.path()
    );

    response
}
