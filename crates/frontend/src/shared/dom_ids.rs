//! Element ids and classes shared with the server-rendered templates.
//!
//! The Django templates and stylesheets address these elements directly, so
//! the values must stay in sync with them.

pub const FORM_ID: &str = "data-form";
pub const LOADING_ID: &str = "loading";
pub const RESULT_CONTAINER_ID: &str = "result-container";
pub const RESULT_CONTENT_ID: &str = "result-content";
pub const VIZ_SUGGESTION_ID: &str = "viz-suggestion";
pub const ERROR_CONTAINER_ID: &str = "error-container";
pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const VIEW_RESULT_ID: &str = "view-result";
pub const UNITY_LINK_ID: &str = "unity-link";

/// Controls that open an item in the external viewer.
pub const EXTERNAL_VIEWER_SELECTOR: &str = ".unity-link, #unity-button";

/// Attribute carrying the item id on external-viewer controls.
pub const ITEM_ID_ATTR: &str = "data-id";

/// Bootstrap utility class that hides an element.
pub const HIDDEN_CLASS: &str = "d-none";

/// Class list for a toggled region: `base` plus `d-none` when hidden.
pub fn region_class(base: &str, visible: bool) -> String {
    match (base.is_empty(), visible) {
        (_, true) => base.to_string(),
        (true, false) => HIDDEN_CLASS.to_string(),
        (false, false) => format!("{} {}", base, HIDDEN_CLASS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_class() {
        assert_eq!(region_class("alert alert-danger", true), "alert alert-danger");
        assert_eq!(region_class("alert alert-danger", false), "alert alert-danger d-none");
        assert_eq!(region_class("", false), "d-none");
        assert_eq!(region_class("", true), "");
    }
}
