use crate::usecases::u601_submit_text_data::SubmitTextDataPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SubmitTextDataPage />
    }
}
