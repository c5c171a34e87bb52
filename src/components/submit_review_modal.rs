use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::*;

use crate::client::HttpReviewsApi;
use crate::components::review_form::ReviewForm;
use crate::state::{submit_review, CloseOutcome, SubmissionWorkflow, SUCCESS_DISPLAY_DELAY};

/// "Leave a Review" dialog. Only closes through its own buttons (no backdrop or Escape).
#[component]
pub fn SubmitReviewModal(
    workflow: RwSignal<SubmissionWorkflow>,
    api: HttpReviewsApi,
    #[prop(into)] on_close: Callback<CloseOutcome>,
) -> impl IntoView {
    let api = store_value(api);

    let close = move || {
        if let Some(Some(outcome)) = workflow.try_update(SubmissionWorkflow::close) {
            on_close.call(outcome);
        }
    };

    let submit = move || {
        let api = api.get_value();
        spawn_local(async move {
            if submit_review(&api, &workflow).await == Some(true) {
                TimeoutFuture::new(SUCCESS_DISPLAY_DELAY.as_millis() as u32).await;
                if let Some(Some(outcome)) = workflow.try_update(SubmissionWorkflow::close_after_success) {
                    log!("[SUBMIT] Closing review modal");
                    on_close.call(outcome);
                }
            }
        });
    };

    let submitting = move || workflow.with(SubmissionWorkflow::is_submitting);
    let locked = move || workflow.with(|w| w.is_submitting() || w.is_success());
    // Re-render the dialog only when it opens or closes, not on every keystroke.
    let restaurant = create_memo(move |_| workflow.with(|w| w.restaurant().cloned()));

    move || {
        restaurant.get().map(|restaurant| {
            let address = restaurant.address.clone();
            view! {
                <div class="modal-backdrop fade show"></div>
                <div class="modal fade show d-block" tabindex="-1" role="dialog" aria-modal="true">
                    <div class="modal-dialog modal-lg">
                        <div class="modal-content">
                            <div class="modal-header">
                                <div class="modal-title h4">
                                    <div>
                                        {format!("Bain Review of {}", restaurant.name)}
                                        <div class="mt-2 smaller-font">
                                            {move || {
                                                workflow
                                                    .with(|w| w.error().map(str::to_string))
                                                    .map(|error| {
                                                        view! {
                                                            <div class="alert alert-danger alert-dismissible mt-2 mb-0" role="alert">
                                                                {error}
                                                                <button
                                                                    type="button"
                                                                    class="btn-close"
                                                                    aria-label="Close"
                                                                    on:click=move |_| workflow.update(SubmissionWorkflow::dismiss_error)
                                                                ></button>
                                                            </div>
                                                        }
                                                    })
                                            }}
                                            <Show when=move || workflow.with(SubmissionWorkflow::is_success)>
                                                <div class="alert alert-success mt-2 mb-0" role="alert">
                                                    "Review submitted successfully!"
                                                </div>
                                            </Show>
                                            <Show when=move || workflow.with(|w| w.error().is_none() && !w.is_success())>
                                                <div class="text-muted small fw-normal">{address.clone()}</div>
                                            </Show>
                                        </div>
                                    </div>
                                </div>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    disabled=submitting
                                    on:click=move |_| close()
                                ></button>
                            </div>

                            <div class="modal-body">
                                <ReviewForm
                                    workflow=workflow
                                    on_submit=move |_: ()| {
                                        if !locked() {
                                            submit();
                                        }
                                    }
                                />
                            </div>

                            <div class="modal-footer">
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    disabled=submitting
                                    on:click=move |_| close()
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-danger"
                                    disabled=locked
                                    on:click=move |_| submit()
                                >
                                    {move || {
                                        if submitting() {
                                            view! {
                                                <span
                                                    class="spinner-border spinner-border-sm me-2"
                                                    role="status"
                                                    aria-hidden="true"
                                                ></span>
                                                "Submitting..."
                                            }
                                                .into_view()
                                        } else {
                                            "Submit Your Review".into_view()
                                        }
                                    }}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
