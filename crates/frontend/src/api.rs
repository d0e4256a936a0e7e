use mission_viewer_shared::upload::{classify_response, network_failure, UploadOutcome};

/// Upload a mission file as the single multipart `file` field and
/// classify whatever comes back. Never fails: every failure mode folds
/// into a rejected outcome.
pub async fn upload_mission(parser_url: &str, file_name: &str, bytes: Vec<u8>) -> UploadOutcome {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    let resp = match reqwest::Client::new()
        .post(parser_url)
        .multipart(form)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(error) => return network_failure(&error.to_string()),
    };

    let ok = resp.status().is_success();
    let status_text = resp
        .status()
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string();

    match resp.text().await {
        Ok(body) => classify_response(ok, &status_text, &body),
        Err(error) => network_failure(&error.to_string()),
    }
}
