use contracts::usecases::u601_submit_text_data::{
    ServerResponse, SubmissionFailure, SubmissionSuccess,
};
use thiserror::Error;

/// Сообщение, когда сервер отклонил данные без описания причины
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Префикс сообщения о сбое транспорта
pub const SERVER_ERROR_PREFIX: &str = "Server error: ";

/// Ошибка отправки формы.
///
/// `Display` даёт ровно тот текст, который показывается пользователю.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Сервер ответил `success: false`
    #[error("{}", .0.error.as_deref().filter(|e| !e.is_empty()).unwrap_or(UNKNOWN_ERROR_MESSAGE))]
    Application(SubmissionFailure),

    /// Сеть, HTTP-статус не 2xx или ответ не разобран
    #[error("Server error: {0}")]
    Transport(String),
}

impl SubmitError {
    pub fn transport(description: impl ToString) -> Self {
        SubmitError::Transport(description.to_string())
    }

    /// Ошибки валидации по полям в виде строк `field: message`
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            SubmitError::Application(failure) => failure
                .field_errors
                .iter()
                .flat_map(|(field, messages)| {
                    messages.iter().map(move |m| format!("{}: {}", field, m))
                })
                .collect(),
            SubmitError::Transport(_) => Vec::new(),
        }
    }
}

impl From<SubmissionFailure> for SubmitError {
    fn from(failure: SubmissionFailure) -> Self {
        SubmitError::Application(failure)
    }
}

/// Разложить разобранный ответ сервера в `Result`
pub fn into_result(response: ServerResponse) -> Result<SubmissionSuccess, SubmitError> {
    match response {
        ServerResponse::Succeeded(success) => Ok(success),
        ServerResponse::Failed(failure) => Err(failure.into()),
    }
}

/// Описание HTTP-ошибки: текст статуса, как его отдаёт браузер.
///
/// По HTTP/2 `statusText` приходит пустым, тогда используется код.
pub fn http_error_description(status: u16, status_text: &str) -> String {
    if status_text.trim().is_empty() {
        format!("HTTP error: {}", status)
    } else {
        status_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_submit_text_data::ResultId;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_application_error_message() {
        let err = SubmitError::from(SubmissionFailure {
            error: Some("Invalid input".to_string()),
            field_errors: BTreeMap::new(),
        });
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn test_application_error_fallback() {
        let err = SubmitError::from(SubmissionFailure::default());
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_empty_error_string_falls_back() {
        let response: ServerResponse =
            serde_json::from_value(json!({"success": false, "error": ""})).unwrap();
        assert_eq!(
            into_result(response).unwrap_err().to_string(),
            UNKNOWN_ERROR_MESSAGE
        );

        let err = SubmitError::from(SubmissionFailure {
            error: Some(String::new()),
            field_errors: BTreeMap::new(),
        });
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_transport_error_message() {
        assert_eq!(
            SubmitError::transport("timeout").to_string(),
            "Server error: timeout"
        );
        assert!(SubmitError::transport("x").to_string().starts_with(SERVER_ERROR_PREFIX));
    }

    #[test]
    fn test_field_messages() {
        let mut field_errors = BTreeMap::new();
        field_errors.insert(
            "input_text".to_string(),
            vec!["This field is required.".to_string()],
        );
        let err = SubmitError::from(SubmissionFailure {
            error: None,
            field_errors,
        });
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(
            err.field_messages(),
            vec!["input_text: This field is required.".to_string()]
        );
        assert!(SubmitError::transport("x").field_messages().is_empty());
    }

    #[test]
    fn test_into_result() {
        let ok = into_result(ServerResponse::Succeeded(SubmissionSuccess {
            data: json!({}),
            id: ResultId::from(1u64),
        }));
        assert!(ok.is_ok());

        let err = into_result(ServerResponse::Failed(SubmissionFailure::default()));
        assert_eq!(err, Err(SubmitError::Application(SubmissionFailure::default())));
    }

    #[test]
    fn test_http_error_description() {
        assert_eq!(http_error_description(500, "Internal Server Error"), "Internal Server Error");
        assert_eq!(http_error_description(502, ""), "HTTP error: 502");
    }
}
