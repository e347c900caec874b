use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Идентификатор сохранённого результата.
///
/// Сервер может прислать id как числом, так и строкой. Значение хранится
/// в исходном виде и выводится без преобразований: `42` -> `"42"`.
/// Целые числа в записи с плавающей точкой выводятся без дробной части:
/// `42.0` -> `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultId {
    Number(serde_json::Number),
    Text(String),
}

/// Граница точного представления целых в f64 (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultId::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < MAX_SAFE_INTEGER => {
                    write!(f, "{}", x as i64)
                }
                _ => write!(f, "{}", n),
            },
            ResultId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ResultId {
    fn from(value: &str) -> Self {
        ResultId::Text(value.to_string())
    }
}

impl From<u64> for ResultId {
    fn from(value: u64) -> Self {
        ResultId::Number(value.into())
    }
}

/// Успешная обработка: извлечённые данные и id сохранённой записи
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSuccess {
    pub data: Value,
    pub id: ResultId,
}

impl SubmissionSuccess {
    /// Suggested chart type reported inside `data`.
    ///
    /// Empty strings, `null`, `false` and `0` count as absent.
    pub fn visualization_type(&self) -> Option<String> {
        match self.data.get("visualization_type")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Ошибка уровня приложения (`success: false`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionFailure {
    pub error: Option<String>,
    /// Ошибки валидации формы по полям, как их отдаёт Django (`form.errors`)
    pub field_errors: BTreeMap<String, Vec<String>>,
}

/// Ответ эндпоинта обработки текста.
///
/// На проводе это один JSON-объект с флагом `success`; здесь флаг
/// превращён в вариант перечисления, поэтому `data`/`id` существуют только
/// у успешного ответа, а `error` только у неуспешного.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawServerResponse")]
pub enum ServerResponse {
    Succeeded(SubmissionSuccess),
    Failed(SubmissionFailure),
}

#[derive(Debug, Deserialize)]
struct RawServerResponse {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    id: Option<ResultId>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Ответ с `success: true`, в котором нет обязательного поля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseShapeError {
    pub missing_field: &'static str,
}

impl fmt::Display for ResponseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "successful response is missing field `{}`",
            self.missing_field
        )
    }
}

impl std::error::Error for ResponseShapeError {}

impl TryFrom<RawServerResponse> for ServerResponse {
    type Error = ResponseShapeError;

    fn try_from(raw: RawServerResponse) -> Result<Self, Self::Error> {
        if !raw.success {
            return Ok(ServerResponse::Failed(SubmissionFailure {
                error: raw.error.filter(|e| !e.is_empty()),
                field_errors: raw.errors.unwrap_or_default(),
            }));
        }

        let data = raw.data.ok_or(ResponseShapeError {
            missing_field: "data",
        })?;
        let id = raw.id.ok_or(ResponseShapeError { missing_field: "id" })?;

        Ok(ServerResponse::Succeeded(SubmissionSuccess { data, id }))
    }
}
