//! Состояние страницы отправки и то, что из него рендерится.
//!
//! Один сигнал `SubmissionPhase` определяет видимость трёх областей
//! (загрузка, результат, ошибка) и их содержимое. Каждый пришедший ответ
//! переводит фазу независимо от того, какой запрос был отправлен последним.

use contracts::shared::viewer_links::{result_url, unity_url};
use contracts::usecases::u601_submit_text_data::SubmissionSuccess;

use super::error::SubmitError;

/// Message under the extracted data
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Server suggested a chart type
    Visualization(String),
    /// No suggestion, data was processed
    Generic,
}

impl Suggestion {
    pub fn heading(&self) -> &'static str {
        match self {
            Suggestion::Visualization(_) => "Suggested Visualization:",
            Suggestion::Generic => "Processed Successfully!",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Suggestion::Visualization(kind) => kind,
            Suggestion::Generic => "Ready for visualization.",
        }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.heading(), self.detail())
    }
}

/// Всё, что показывается в области результата
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub id: String,
    pub pretty_json: String,
    pub suggestion: Suggestion,
    pub result_href: String,
    pub unity_href: String,
}

impl From<&SubmissionSuccess> for ResultView {
    fn from(success: &SubmissionSuccess) -> Self {
        let suggestion = match success.visualization_type() {
            Some(kind) => Suggestion::Visualization(kind),
            None => Suggestion::Generic,
        };

        Self {
            id: success.id.to_string(),
            pretty_json: serde_json::to_string_pretty(&success.data)
                .unwrap_or_else(|_| success.data.to_string()),
            suggestion,
            result_href: result_url(&success.id),
            unity_href: unity_url(&success.id),
        }
    }
}

/// Всё, что показывается в области ошибки
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub message: String,
    pub field_messages: Vec<String>,
}

impl From<&SubmitError> for ErrorView {
    fn from(err: &SubmitError) -> Self {
        Self {
            message: err.to_string(),
            field_messages: err.field_messages(),
        }
    }
}

/// Сколько результатов сессии держать в списке
pub const RECENT_RESULTS_LIMIT: usize = 20;

/// Результат сессии со стабильным ключом для `<For>`
#[derive(Debug, Clone, PartialEq)]
pub struct RecentResult {
    pub key: u64,
    pub view: ResultView,
}

/// Список успешных отправок за сессию, новые сверху.
///
/// Ключ растёт с каждой вставкой, поэтому повторный id от сервера не даёт
/// дубликатов ключей.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecentResults {
    next_key: u64,
    items: Vec<RecentResult>,
}

impl RecentResults {
    pub fn push(&mut self, view: ResultView) {
        let key = self.next_key;
        self.next_key += 1;
        self.items.insert(0, RecentResult { key, view });
        self.items.truncate(RECENT_RESULTS_LIMIT);
    }

    pub fn items(&self) -> &[RecentResult] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded(ResultView),
    Failed(ErrorView),
}

impl SubmissionPhase {
    /// Phase after a response (or failure) arrives
    pub fn completed(result: &Result<SubmissionSuccess, SubmitError>) -> Self {
        match result {
            Ok(success) => SubmissionPhase::Succeeded(success.into()),
            Err(err) => SubmissionPhase::Failed(err.into()),
        }
    }

    pub fn loading_visible(&self) -> bool {
        matches!(self, SubmissionPhase::Pending)
    }

    pub fn result_visible(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded(_))
    }

    pub fn error_visible(&self) -> bool {
        matches!(self, SubmissionPhase::Failed(_))
    }

    pub fn result(&self) -> Option<&ResultView> {
        match self {
            SubmissionPhase::Succeeded(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorView> {
        match self {
            SubmissionPhase::Failed(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_submit_text_data::error::UNKNOWN_ERROR_MESSAGE;
    use contracts::usecases::u601_submit_text_data::ServerResponse;
    use serde_json::json;

    fn success(value: serde_json::Value) -> Result<SubmissionSuccess, SubmitError> {
        match serde_json::from_value::<ServerResponse>(value).unwrap() {
            ServerResponse::Succeeded(ok) => Ok(ok),
            ServerResponse::Failed(failure) => Err(failure.into()),
        }
    }

    fn result_view(id: u64) -> ResultView {
        match success(json!({"success": true, "data": {}, "id": id})) {
            Ok(ok) => ResultView::from(&ok),
            Err(err) => panic!("unexpected: {:?}", err),
        }
    }

    #[test]
    fn test_recent_results_keys_are_unique_for_repeated_ids() {
        let mut recent = RecentResults::default();
        recent.push(result_view(7));
        recent.push(result_view(7));

        let items = recent.items();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].key, items[1].key);
        assert_eq!(items[0].view.id, "7");
        assert_eq!(items[1].view.id, "7");
    }

    #[test]
    fn test_recent_results_newest_first_and_capped() {
        let mut recent = RecentResults::default();
        assert!(recent.is_empty());
        for id in 0..(RECENT_RESULTS_LIMIT as u64 + 5) {
            recent.push(result_view(id));
        }

        let items = recent.items();
        assert_eq!(items.len(), RECENT_RESULTS_LIMIT);
        assert_eq!(items[0].view.id, (RECENT_RESULTS_LIMIT + 4).to_string());
        assert_eq!(items[RECENT_RESULTS_LIMIT - 1].view.id, "5");
    }

    #[test]
    fn test_idle_hides_everything() {
        let phase = SubmissionPhase::default();
        assert!(!phase.loading_visible());
        assert!(!phase.result_visible());
        assert!(!phase.error_visible());
    }

    #[test]
    fn test_pending_shows_only_loading() {
        let phase = SubmissionPhase::Pending;
        assert!(phase.loading_visible());
        assert!(!phase.result_visible());
        assert!(!phase.error_visible());
    }

    #[test]
    fn test_success_with_generic_message() {
        let phase = SubmissionPhase::completed(&success(
            json!({"success": true, "data": {"foo": "bar"}, "id": 42}),
        ));

        assert!(!phase.loading_visible());
        assert!(phase.result_visible());
        assert!(!phase.error_visible());

        let view = phase.result().unwrap();
        assert_eq!(view.pretty_json, "{\n  \"foo\": \"bar\"\n}");
        assert_eq!(view.suggestion, Suggestion::Generic);
        assert_eq!(view.suggestion.text(), "Processed Successfully! Ready for visualization.");
        assert_eq!(view.result_href, "/result/42/");
        assert_eq!(view.unity_href, "unity://open?id=42");
    }

    #[test]
    fn test_success_with_visualization_type() {
        let phase = SubmissionPhase::completed(&success(json!({
            "success": true,
            "data": {"visualization_type": "line_chart", "points": [1, 2, 3]},
            "id": "17"
        })));

        let view = phase.result().unwrap();
        assert_eq!(view.suggestion, Suggestion::Visualization("line_chart".to_string()));
        assert!(view.suggestion.text().contains("line_chart"));
        assert!(!view.suggestion.text().contains("Processed Successfully!"));
        assert_eq!(view.result_href, "/result/17/");
        assert_eq!(view.unity_href, "unity://open?id=17");
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let phase = SubmissionPhase::completed(&success(json!({
            "success": true,
            "data": {"zeta": 1, "alpha": 2},
            "id": 1
        })));
        let view = phase.result().unwrap();
        assert_eq!(view.pretty_json, "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}");
    }

    #[test]
    fn test_application_failure() {
        let phase = SubmissionPhase::completed(&success(
            json!({"success": false, "error": "Invalid input"}),
        ));
        assert!(!phase.loading_visible());
        assert!(!phase.result_visible());
        assert!(phase.error_visible());
        assert_eq!(phase.error().unwrap().message, "Invalid input");
    }

    #[test]
    fn test_application_failure_without_message() {
        let phase = SubmissionPhase::completed(&success(json!({"success": false})));
        assert_eq!(phase.error().unwrap().message, UNKNOWN_ERROR_MESSAGE);
        assert!(phase.error().unwrap().field_messages.is_empty());
    }

    #[test]
    fn test_transport_failure() {
        let phase = SubmissionPhase::completed(&Err(SubmitError::transport("timeout")));
        assert!(phase.error_visible());
        assert!(!phase.loading_visible());
        assert_eq!(phase.error().unwrap().message, "Server error: timeout");
    }
}
