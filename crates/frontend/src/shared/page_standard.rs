//! Page category constants.
//!
//! Every page mounted by the app declares:
//!   - HTML `id` in the format `{usecase}--{category}` (e.g. `"u601_submit_text_data--usecase"`)
//!   - `data-page-category` with one of the constants below

/// Use-case action page (data submission and the like).
pub const PAGE_CAT_USECASE: &str = "usecase";
