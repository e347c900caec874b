//! PageFrame — standard root wrapper for every page the app mounts.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{usecase}--{category}"`, e.g. `"u601_submit_text_data--usecase"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```rust
//! # use leptos::prelude::*;
//! use frontend::shared::page_frame::PageFrame;
//! use frontend::shared::page_standard::PAGE_CAT_USECASE;
//!
//! #[component]
//! pub fn MyPage() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="u601_submit_text_data--usecase" category=PAGE_CAT_USECASE>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// BEM class list for a page category.
///
/// - `usecase` → `page`
/// - anything else → `page page--{category}`
pub fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_USECASE | "" => "page".to_string(),
        other => format!("page page--{other}"),
    };

    if extra.is_empty() {
        base_class
    } else {
        format!("{base_class} {extra}")
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{usecase}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
