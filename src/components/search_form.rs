use leptos::ev::SubmitEvent;
use leptos::*;

use crate::models::RestaurantType;
use crate::state::BrowseState;

/// Keyword, cuisine and Bain toggle, plus the Search and Clear buttons.
#[component]
pub fn SearchForm(
    state: RwSignal<BrowseState>,
    #[prop(into)] on_search: Callback<()>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let loading = move || state.with(|s| s.search.is_loading());

    // Enter in the keyword box submits the form.
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !loading() {
            on_search.call(());
        }
    };

    view! {
        <div class="card mb-4">
            <div class="card-body">
                <form on:submit=handle_submit>
                    <div class="mb-3">
                        <label for="name-keyword-input" class="form-label">"Name Search:"</label>
                        <input
                            id="name-keyword-input"
                            class="form-control"
                            type="text"
                            placeholder="Enter name keywords"
                            prop:value=move || state.with(|s| s.search.keyword.clone())
                            on:input=move |ev| {
                                let keyword = event_target_value(&ev);
                                state.update(|s| s.search.keyword = keyword);
                            }
                        />
                    </div>

                    <div class="mb-3">
                        <label for="restaurant-type-select" class="form-label">"Type Search:"</label>
                        <select
                            id="restaurant-type-select"
                            class="form-select"
                            prop:value=move || state.with(|s| s.search.category.as_str())
                            on:change=move |ev| {
                                if let Ok(category) = event_target_value(&ev).parse::<RestaurantType>() {
                                    state.update(|s| s.search.category = category);
                                }
                            }
                        >
                            {RestaurantType::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="mb-3 form-check">
                        <input
                            id="show-bain-checkbox"
                            class="form-check-input"
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.search.show_bain)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                state.update(|s| s.search.show_bain = checked);
                            }
                        />
                        <label for="show-bain-checkbox" class="form-check-label">"Show Bain Reviews"</label>
                    </div>

                    <p class="text-muted small fst-italic">
                        "To show all restaurants, press search with empty options above"
                    </p>

                    <div class="d-flex gap-2">
                        <button type="submit" class="btn btn-primary flex-fill" disabled=loading>
                            {move || {
                                if loading() {
                                    view! {
                                        <span
                                            class="spinner-border spinner-border-sm me-2"
                                            role="status"
                                            aria-hidden="true"
                                        ></span>
                                        "Searching..."
                                    }
                                        .into_view()
                                } else {
                                    "Search".into_view()
                                }
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary flex-fill"
                            disabled=loading
                            on:click=move |_| on_clear.call(())
                        >
                            "Clear"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
