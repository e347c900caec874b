//! API utilities for frontend-backend communication
//!
//! The client is served by the same origin as the processing endpoint, so
//! URLs are resolved against the current page rather than a fixed host.

use web_sys::HtmlFormElement;

/// Content type of a serialized form body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Accept header for JSON endpoints
pub const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";

/// Current page URL, or an empty string if window is not available
pub fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Pick the request URL for a form's raw `action` attribute.
///
/// A missing or empty action posts back to `fallback` (the current page).
pub fn resolve_action(action: Option<String>, fallback: impl FnOnce() -> String) -> String {
    match action {
        Some(action) if !action.trim().is_empty() => action,
        _ => fallback(),
    }
}

/// Request URL for submitting `form`
///
/// Uses the raw `action` attribute, so relative actions like `/process/`
/// are left for the browser to resolve.
pub fn form_action_url(form: &HtmlFormElement) -> String {
    resolve_action(form.get_attribute("action"), current_page_url)
}

/// Navigate the current page to `url`
pub fn navigate_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("Navigation to {} failed: {:?}", url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> String {
        "http://localhost:8000/".to_string()
    }

    #[test]
    fn test_resolve_action_uses_attribute() {
        assert_eq!(resolve_action(Some("/process/".to_string()), page), "/process/");
    }

    #[test]
    fn test_resolve_action_falls_back_to_page() {
        assert_eq!(resolve_action(None, page), "http://localhost:8000/");
        assert_eq!(resolve_action(Some("  ".to_string()), page), "http://localhost:8000/");
    }
}
