//! Serialized form contents.
//!
//! Same body a classic AJAX form post sends: successful controls in
//! document order, `application/x-www-form-urlencoded`, line breaks normalized
//! to CRLF and spaces encoded as `+`. File inputs are skipped.

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use super::error::SubmitError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Request body for a form POST
    pub fn to_urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    encode_component(name),
                    encode_component(&normalize_line_breaks(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Read the current values of every control in `form`
    pub fn from_form(form: &HtmlFormElement) -> Result<Self, SubmitError> {
        let form_data = FormData::new_with_form(form)
            .map_err(|e| SubmitError::transport(format!("Failed to read form: {:?}", e)))?;

        let entries = js_sys::try_iter(&form_data)
            .map_err(|e| SubmitError::transport(format!("Failed to iterate form: {:?}", e)))?
            .ok_or_else(|| SubmitError::transport("Form data is not iterable"))?;

        let mut payload = Self::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| SubmitError::transport(format!("Failed to read form entry: {:?}", e)))?;
            let Ok(pair) = entry.dyn_into::<js_sys::Array>() else {
                continue;
            };
            let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
            else {
                // File entries have no string value
                continue;
            };
            payload.push(name, value);
        }

        Ok(payload)
    }
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

fn normalize_line_breaks(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', "\r\n")
}
