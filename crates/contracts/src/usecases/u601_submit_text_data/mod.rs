pub mod response;

pub use response::{
    ResponseShapeError, ResultId, ServerResponse, SubmissionFailure, SubmissionSuccess,
};

use crate::usecases::common::UseCaseMetadata;

/// Путь эндпоинта обработки текста по умолчанию
pub const PROCESS_PATH: &str = "/process/";

/// Имя поля формы с исходным текстом
pub const INPUT_TEXT_FIELD: &str = "input_text";

pub struct SubmitTextData;

impl UseCaseMetadata for SubmitTextData {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "submit_text_data"
    }

    fn display_name() -> &'static str {
        "Data Input"
    }

    fn description() -> &'static str {
        "Paste text containing numbers: the server extracts structured data and suggests a visualization."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(SubmitTextData::full_name(), "u601_submit_text_data");
    }
}
