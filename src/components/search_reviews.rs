use leptos::logging::log;
use leptos::*;

use crate::client::HttpReviewsApi;
use crate::components::restaurant_card::RestaurantCard;
use crate::components::search_form::SearchForm;
use crate::components::submit_review_modal::SubmitReviewModal;
use crate::models::RestaurantSummary;
use crate::state::{
    refresh_after_submission, search_restaurants, toggle_restaurant, BrowseState, CloseOutcome,
    SubmissionWorkflow,
};

/// The whole page: search form, results and the review modal.
#[component]
pub fn SearchReviews(api: HttpReviewsApi) -> impl IntoView {
    let state = create_rw_signal(BrowseState::default());
    let workflow = create_rw_signal(SubmissionWorkflow::default());
    let stored_api = store_value(api.clone());

    let on_search = move |_: ()| {
        let api = stored_api.get_value();
        spawn_local(async move {
            search_restaurants(&api, &state).await;
        });
    };

    let on_clear = move |_: ()| {
        log!("[SEARCH] Clearing search");
        state.update(BrowseState::clear);
    };

    let on_toggle = move |restaurant_id: String| {
        let api = stored_api.get_value();
        spawn_local(async move {
            toggle_restaurant(&api, &state, &restaurant_id).await;
        });
    };

    let on_review = move |restaurant: RestaurantSummary| {
        log!("[SUBMIT] Opening review modal for {}", restaurant.id);
        workflow.update(|w| w.open(restaurant));
    };

    let on_close = move |outcome: CloseOutcome| {
        let api = stored_api.get_value();
        spawn_local(async move {
            refresh_after_submission(&api, &state, outcome).await;
        });
    };

    view! {
        <div class="container py-4">
            <div class="text-left mb-4">
                <h1>"Toronto Restaurant Reviews Search"</h1>
                <p class="text-muted ms-2 me-4 fst-italic">
                    "The list of restaurants has already been procured to include places that are sit-down, \
                     quiet, elegant enough, or have private space. You can further refine your search by \
                     restaurant type or name."
                </p>
            </div>

            <SearchForm state=state on_search=on_search on_clear=on_clear/>

            {move || {
                state
                    .with(|s| s.error().map(str::to_string))
                    .map(|error| view! { <div class="alert alert-danger mb-3" role="alert">{error}</div> })
            }}

            <Show when=move || state.with(|s| s.search.has_results())>
                <div>
                    <h2 class="mb-3">{move || state.with(|s| s.search.results_heading())}</h2>
                    <For
                        each=move || state.with(|s| s.search.results().to_vec())
                        key=|restaurant| restaurant.id.clone()
                        children=move |restaurant| {
                            view! {
                                <RestaurantCard
                                    restaurant=restaurant
                                    state=state
                                    on_toggle=on_toggle
                                    on_review=on_review
                                />
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=move || state.with(BrowseState::show_empty_state)>
                <div class="text-center text-muted py-5">
                    <p>"No results yet. Use the search form above to find restaurants."</p>
                </div>
            </Show>

            <SubmitReviewModal workflow=workflow api=api.clone() on_close=on_close/>
        </div>
    }
}
