use contracts::usecases::u601_submit_text_data::{ServerResponse, SubmissionSuccess};
use gloo_net::http::Request;

use super::error::{http_error_description, into_result, SubmitError};
use super::form_payload::FormPayload;
use crate::shared::api_utils::{ACCEPT_JSON, FORM_CONTENT_TYPE};

/// POST the serialized form to `action` and interpret the JSON reply
pub async fn submit_form(
    action: &str,
    payload: &FormPayload,
) -> Result<SubmissionSuccess, SubmitError> {
    let response = Request::post(action)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("Accept", ACCEPT_JSON)
        .header("X-Requested-With", "XMLHttpRequest")
        .body(payload.to_urlencoded())
        .map_err(SubmitError::transport)?
        .send()
        .await
        .map_err(SubmitError::transport)?;

    if !response.ok() {
        return Err(SubmitError::Transport(http_error_description(
            response.status(),
            &response.status_text(),
        )));
    }

    let parsed = response
        .json::<ServerResponse>()
        .await
        .map_err(SubmitError::transport)?;

    into_result(parsed)
}
