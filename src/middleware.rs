use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    middleware::Next,
};

/// Security headers middleware
/// Adds essential security headers to all responses
pub async fn security_headers(
    request: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    // Prevent clickjacking
    headers.insert(
        header::HeaderName::from_static("x-frame-options"),
        header::HeaderValue::from_static("DENY"),
    );

    // Prevent MIME sniffing of uploaded and generated images
    headers.insert(
        header::HeaderName::from_static("x-content-type-options"),
        header::HeaderValue::from_static("nosniff"),
    );

    // Pages use inline styles; only same-origin scripts (API docs)
    headers.insert(
        header::HeaderName::from_static("content-security-policy"),
        header::HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: blob:; \
             form-action 'self'; \
             frame-ancestors 'none';",
        ),
    );

    headers.insert(
        header::HeaderName::from_static("referrer-policy"),
        header::HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    Ok(response)
}
