//! "Open in external viewer" controls.
//!
//! Any element matching [`EXTERNAL_VIEWER_SELECTOR`] with a `data-id`
//! attribute opens `unity://open?id=<data-id>` when clicked. Pages rendered by
//! the server call [`init_external_viewer_controls`] once after load; lists
//! rendered by the app use [`UnityLaunchButton`].

use contracts::shared::viewer_links::unity_url;
use leptos::prelude::*;
use wasm_bindgen::prelude::{wasm_bindgen, Closure};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::api_utils::navigate_to;
use super::dom_ids::{EXTERNAL_VIEWER_SELECTOR, ITEM_ID_ATTR};

/// Navigate the current page to the external viewer for `id`
pub fn open_in_external_viewer(id: &str) {
    let url = unity_url(id);
    log::info!("Opening external viewer: {}", url);
    if let Err(e) = navigate_to(&url) {
        log::error!("{}", e);
    }
}

/// Click handler shared by every external-viewer control.
///
/// The id is read from the control the listener is attached to, not from the
/// clicked descendant.
pub fn handle_external_viewer_click(ev: &Event) {
    ev.prevent_default();

    let item_id = ev
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.get_attribute(ITEM_ID_ATTR));

    match item_id {
        Some(id) => open_in_external_viewer(&id),
        None => log::warn!("External viewer control without {} attribute", ITEM_ID_ATTR),
    }
}

/// Bind the external-viewer click handler to every matching control on the page.
///
/// Returns the number of controls bound. Listeners stay attached for the
/// lifetime of the page.
#[wasm_bindgen]
pub fn init_external_viewer_controls() -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document, external viewer controls not bound");
        return 0;
    };

    let nodes = match document.query_selector_all(EXTERNAL_VIEWER_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::error!("Failed to query external viewer controls: {:?}", e);
            return 0;
        }
    };

    let handler = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        handle_external_viewer_click(&ev);
    });

    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        match node.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
            Ok(()) => bound += 1,
            Err(e) => log::error!("Failed to bind external viewer control: {:?}", e),
        }
    }
    handler.forget();

    log::debug!("Bound {} external viewer control(s)", bound);
    bound
}

/// Link that opens one item in the external viewer
#[component]
pub fn UnityLaunchButton(
    /// Item id passed to the viewer
    #[prop(into)]
    item_id: String,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href="#"
            class=format!("unity-link btn btn-sm btn-outline-success {}", class)
            data-id=item_id
            on:click=move |ev: leptos::ev::MouseEvent| handle_external_viewer_click(&ev)
        >
            {children()}
        </a>
    }
}
