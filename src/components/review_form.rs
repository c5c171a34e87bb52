use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::star_rating::StarRating;
use crate::models::review::{AUTHOR_NAME_LIMIT, TITLE_LIMIT};
use crate::state::SubmissionWorkflow;

/// Fields of the review modal, bound to the workflow's draft.
#[component]
pub fn ReviewForm(
    workflow: RwSignal<SubmissionWorkflow>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let rating = Signal::derive(move || workflow.with(|w| w.draft().rating));

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form on:submit=submit_review>
            <div class="mb-2">
                <label class="form-label">
                    <strong>"Your Name"</strong>
                    ", Location and Title "
                    <span class="text-muted">
                        "(" <small class="form-text text-muted">
                            "Optional - helps others understand your perspective"
                        </small> ")"
                    </span>
                </label>
                <input
                    type="text"
                    class="form-control"
                    placeholder="e.g., Tom Sawyer, New York Partner"
                    maxlength=AUTHOR_NAME_LIMIT
                    prop:value=move || workflow.with(|w| w.draft().author_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        workflow.update(|w| w.edit(|draft| draft.set_author_name(&value)));
                    }
                />
            </div>

            <div class="mb-2">
                <div class="d-flex align-items-center align-items-middle gap-3">
                    <label class="form-label">"Rating " <span class="text-danger">"*"</span></label>
                    <StarRating
                        value=rating
                        on_select=move |star: u8| workflow.update(|w| w.edit(|draft| draft.set_rating(star)))
                    />
                </div>
            </div>

            <div class="mb-3">
                <label class="form-label">
                    "Title of Review "
                    <small class="form-text text-muted">
                        {move || workflow.with(|w| w.draft().title_counter())}
                    </small>
                </label>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Brief summary of your experience"
                    maxlength=TITLE_LIMIT
                    prop:value=move || workflow.with(|w| w.draft().title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        workflow.update(|w| w.edit(|draft| draft.set_title(&value)));
                    }
                />
            </div>

            <div class="mb-2">
                <label class="form-label">"Review"</label>
                <textarea
                    class="form-control"
                    rows="5"
                    placeholder="Share your experience..."
                    prop:value=move || workflow.with(|w| w.draft().text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        workflow.update(|w| w.edit(|draft| draft.set_text(&value)));
                    }
                ></textarea>
            </div>
        </form>
    }
}
