use crate::app_state::AppState;
use crate::constants::{MAX_UPLOAD_SIZE, PHOTO_FIELD};
use crate::error::{ApiError, AppError, Result};
use crate::models::*;
use crate::pages;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health, api_analyze),
    components(schemas(HealthResponse, AnalyzeResponse, ResultRecord)),
    tags(
        (name = "mission-poster", description = "Mission poster generator")
    ),
    info(
        title = "Mission poster API",
        version = "0.1.0",
        description = "Upload a photo, get back a 1080×1080 promotional poster.\n\n\
                      ## Uploads\n\
                      - Multipart field `photo`\n\
                      - Accepted extensions: .jpg, .jpeg, .png, .webp\n\
                      - Posters are served from `/static/generated/`",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Upload form
pub async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::read_to_string(state.config.static_dir.join("index.html")).await {
        Ok(content) => Html(content).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load page").into_response(),
    }
}

/// Body-limit overruns become 413, anything else is a malformed form
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(format!("{}: {}", context, e))
    }
}

/// Pull the `photo` field out of the form. `None` when it is absent or has no file name.
async fn read_photo(multipart: &mut Multipart) -> Result<Option<PhotoUpload>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to parse multipart", e))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            return Ok(None);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read photo data", e))?;

        return Ok(Some(PhotoUpload {
            filename,
            data: data.to_vec(),
        }));
    }
    Ok(None)
}

/// Form submission: render the result page, or bounce back to the form when no photo was sent
pub async fn analyze(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    let Some(upload) = read_photo(&mut multipart).await? else {
        tracing::debug!("Analyze without photo, redirecting to form");
        return Ok(Redirect::to("/").into_response());
    };

    let outcome = state.poster_service().analyze(upload, &*state.rng).await?;

    Ok(Html(pages::result_page(&outcome).into_string()).into_response())
}

/// Generate a poster from an uploaded photo
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "mission-poster",
    request_body(content = inline(Vec<u8>), description = "Multipart form with a `photo` file field", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Poster generated", body = AnalyzeResponse),
        (status = 400, description = "Missing photo or unsupported extension"),
        (status = 413, description = "Photo larger than the upload limit"),
        (status = 422, description = "Photo could not be decoded"),
        (status = 500, description = "Generation failed")
    )
)]
pub async fn api_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> std::result::Result<Json<AnalyzeResponse>, ApiError> {
    let upload = read_photo(&mut multipart)
        .await?
        .ok_or_else(|| AppError::BadRequest("No photo provided".to_string()))?;

    let outcome = state.poster_service().analyze(upload, &*state.rng).await?;

    Ok(Json(AnalyzeResponse {
        poster_url: outcome.poster_url,
        title: outcome.headline,
        message: outcome.message,
        caption: outcome.caption,
    }))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "mission-poster",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_upload_size: MAX_UPLOAD_SIZE,
    })
}
