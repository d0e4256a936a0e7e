use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use mission_viewer_shared::models::ServiceError;

/// Client handle for the external parser service.
#[derive(Clone)]
pub struct ParserClient {
    client: reqwest::Client,
    parser_url: String,
}

impl ParserClient {
    pub fn new(parser_url: String) -> Self {
        ParserClient {
            client: reqwest::Client::new(),
            parser_url,
        }
    }
}

/// `POST /api/parse`: relay the uploaded mission file to the parser
/// service and pass its status and JSON body through verbatim. A network
/// failure synthesizes `502 {"detail": <message>}` so the frontend sees
/// the same error shape either way.
pub async fn parse_handler(
    State(parser): State<ParserClient>,
    multipart: Multipart,
) -> Response {
    let (file_name, bytes) = match read_file_field(multipart).await {
        Ok(found) => found,
        Err(detail) => {
            return (StatusCode::BAD_REQUEST, Json(ServiceError::from_detail(detail)))
                .into_response();
        }
    };

    tracing::info!(file_name = %file_name, size = bytes.len(), "Relaying mission file to parser");

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part("file", part);

    match parser
        .client
        .post(&parser.parser_url)
        .multipart(form)
        .send()
        .await
    {
        Ok(upstream) => {
            // reqwest and axum disagree on http versions; carry the code over
            let status = StatusCode::from_u16(upstream.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            if !status.is_success() {
                tracing::warn!(%status, "Parser rejected mission file");
            }
            let body = upstream.bytes().await.unwrap_or_default();
            Response::builder()
                .status(status)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_vec()))
                .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
        }
        Err(error) => {
            tracing::warn!(%error, "Parser service unreachable");
            (
                StatusCode::BAD_GATEWAY,
                Json(ServiceError::from_detail(error.to_string())),
            )
                .into_response()
        }
    }
}

async fn read_file_field(mut multipart: Multipart) -> Result<(String, Vec<u8>), String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("mission.mis").to_string();
            let bytes = field.bytes().await.map_err(|e| e.to_string())?;
            return Ok((file_name, bytes.to_vec()));
        }
    }
    Err("multipart form has no 'file' field".to_string())
}
