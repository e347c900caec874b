use super::api;
use super::error::SubmitError;
use super::form_payload::FormPayload;
use super::view_model::{RecentResults, SubmissionPhase};
use crate::shared::api_utils::form_action_url;
use crate::shared::dom_ids::*;
use crate::shared::external_viewer::UnityLaunchButton;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_submit_text_data::{SubmitTextData, INPUT_TEXT_FIELD, PROCESS_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

#[component]
pub fn SubmitTextDataPage() -> impl IntoView {
    view! {
        <PageFrame page_id=SubmitTextData::page_id() category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2 class="section-title">{SubmitTextData::display_name()}</h2>
                <p class="text-muted">{SubmitTextData::description()}</p>
            </div>
            <div class="page__content">
                <SubmitTextDataForm />
            </div>
        </PageFrame>
    }
}

/// Форма отправки текста с областями загрузки, результата и ошибки.
///
/// Повторная отправка не отменяет запрос, который ещё в пути: область
/// обновляет тот ответ, который пришёл последним.
#[component]
pub fn SubmitTextDataForm(
    /// Endpoint the form posts to, `/process/` by default
    #[prop(optional, into)]
    action: Option<String>,
) -> impl IntoView {
    let action = action.unwrap_or_else(|| PROCESS_PATH.to_string());
    let (phase, set_phase) = signal(SubmissionPhase::Idle);
    let (recent, set_recent) = signal(RecentResults::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_phase.set(SubmissionPhase::Pending);

        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            log::error!("Submit event without a form target");
            set_phase.set(SubmissionPhase::completed(&Err(SubmitError::transport(
                "Form not found",
            ))));
            return;
        };

        let url = form_action_url(&form);
        let payload = FormPayload::from_form(&form);

        spawn_local(async move {
            log::debug!("Submitting form to {}", url);
            let result = match payload {
                Ok(payload) => api::submit_form(&url, &payload).await,
                Err(err) => Err(err),
            };

            match &result {
                Ok(success) => log::info!("Submission processed, result id {}", success.id),
                Err(err @ SubmitError::Application(_)) => {
                    log::warn!("Submission rejected: {}", err)
                }
                Err(err) => log::error!("Submission failed: {}", err),
            }

            let next = SubmissionPhase::completed(&result);
            if let Some(view) = next.result() {
                let view = view.clone();
                set_recent.update(|list| list.push(view));
            }
            set_phase.set(next);
        });
    };

    let result_href = move || {
        phase.with(|p| p.result().map(|r| r.result_href.clone()).unwrap_or_else(|| "#".to_string()))
    };
    let unity_href = move || {
        phase.with(|p| p.result().map(|r| r.unity_href.clone()).unwrap_or_else(|| "#".to_string()))
    };
    let field_messages =
        move || phase.with(|p| p.error().map(|e| e.field_messages.clone()).unwrap_or_default());

    view! {
        <form id=FORM_ID action=action method="post" on:submit=on_submit>
            <div class="mb-3">
                <label class="form-label" for="id_input_text">"Data Input"</label>
                <textarea
                    id="id_input_text"
                    name=INPUT_TEXT_FIELD
                    class="form-control"
                    rows="8"
                    placeholder="Enter your numerical data here..."
                    required
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">"Process Data"</button>
        </form>

        <div
            id=LOADING_ID
            class=move || region_class("text-center my-4", phase.with(SubmissionPhase::loading_visible))
        >
            <Spinner label="Processing your data..." />
        </div>

        <div
            id=RESULT_CONTAINER_ID
            class=move || region_class("card mt-4", phase.with(SubmissionPhase::result_visible))
        >
            <div class="card__body">
                <div id=RESULT_CONTENT_ID>
                    {move || phase.with(|p| p.result().map(|result| view! {
                        <div class="mb-3">
                            <h6>"Extracted Data:"</h6>
                            <pre class="bg-light p-2 rounded">{result.pretty_json.clone()}</pre>
                        </div>
                    }))}
                </div>
                <div id=VIZ_SUGGESTION_ID class="alert alert-info">
                    {move || phase.with(|p| p.result().map(|result| view! {
                        <strong>{result.suggestion.heading()}</strong>
                        " "
                        {result.suggestion.detail().to_string()}
                    }))}
                </div>
                <a id=VIEW_RESULT_ID class="btn btn-outline-primary me-2" href=result_href>
                    "View Full Result"
                </a>
                <a id=UNITY_LINK_ID class="btn btn-outline-success" href=unity_href>
                    "Open in Unity"
                </a>
            </div>
        </div>

        <div
            id=ERROR_CONTAINER_ID
            class=move || region_class("alert alert-danger mt-4", phase.with(SubmissionPhase::error_visible))
        >
            <span id=ERROR_MESSAGE_ID>
                {move || phase.with(|p| p.error().map(|e| e.message.clone()).unwrap_or_default())}
            </span>
            <Show when=move || !field_messages().is_empty()>
                <ul class="mb-0 mt-2">
                    {move || field_messages()
                        .into_iter()
                        .map(|message| view! { <li>{message}</li> })
                        .collect_view()}
                </ul>
            </Show>
        </div>

        <Show when=move || recent.with(|list| !list.is_empty())>
            <div class="card mt-4">
                <div class="card__body">
                    <h6>"Processed this session"</h6>
                    <ul class="list-unstyled mb-0">
                        <For
                            each=move || recent.with(|list| list.items().to_vec())
                            key=|item| item.key
                            let:item
                        >
                            <li class="d-flex justify-content-between align-items-center py-1">
                                <a href=item.view.result_href.clone()>{format!("Result #{}", item.view.id)}</a>
                                <span class="text-muted">{item.view.suggestion.detail().to_string()}</span>
                                <UnityLaunchButton item_id=item.view.id.clone()>
                                    "Open in Unity"
                                </UnityLaunchButton>
                            </li>
                        </For>
                    </ul>
                </div>
            </div>
        </Show>
    }
}
