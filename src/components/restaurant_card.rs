use leptos::*;

use crate::components::reviews_list::ReviewsList;
use crate::models::RestaurantSummary;
use crate::state::BrowseState;

/// One search result. Clicking the header expands it; the badge opens the review modal.
#[component]
pub fn RestaurantCard(
    restaurant: RestaurantSummary,
    state: RwSignal<BrowseState>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_review: Callback<RestaurantSummary>,
) -> impl IntoView {
    let id = store_value(restaurant.id.clone());
    let summary = store_value(restaurant.clone());

    let expanded = create_memo(move |_| state.with(|s| id.with_value(|id| s.expansion.is_expanded(id))));
    let loading = create_memo(move |_| state.with(|s| id.with_value(|id| s.expansion.is_loading(id))));
    let show_bain = create_memo(move |_| state.with(|s| s.search.show_bain));
    let reviews = create_memo(move |_| {
        state.with(|s| id.with_value(|id| s.expansion.reviews(id).map(<[_]>::to_vec).unwrap_or_default()))
    });

    let all_ratings = restaurant.all_ratings.clone();
    let bain_ratings = restaurant.bain_ratings.clone();

    view! {
        <div class="card mb-3">
            <div
                class="card-header d-flex justify-content-between align-items-center"
                style="cursor: pointer"
                on:click=move |_| on_toggle.call(id.get_value())
            >
                <div class="flex-grow-1">
                    <div class="d-flex align-items-center gap-3">
                        <h5 class="mb-0">{restaurant.name}</h5>
                        <span class="text-muted">{restaurant.address}</span>
                    </div>
                    <div class="d-flex gap-3 mt-2">
                        <span>
                            <strong>"Rating:"</strong>
                            {format!(" {} ", all_ratings.display_average())}
                            <span class="text-muted">{format!("({})", all_ratings.count)}</span>
                        </span>
                        <Show when=move || show_bain.get()>
                            <span>
                                <strong>"Bain Rating:"</strong>
                                {format!(" {} ", bain_ratings.display_average())}
                                <span class="text-muted">{format!("({})", bain_ratings.count)}</span>
                            </span>
                        </Show>
                        <span>
                            <a
                                class="badge bg-danger text-decoration-none"
                                style="cursor: pointer"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_review.call(summary.get_value());
                                }
                            >
                                "Leave a Review"
                            </a>
                        </span>
                    </div>
                </div>
                <div>
                    {move || {
                        if loading.get() {
                            view! {
                                <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                            }
                                .into_view()
                        } else if expanded.get() {
                            view! { <span>"▼"</span> }.into_view()
                        } else {
                            view! { <span>"▶"</span> }.into_view()
                        }
                    }}
                </div>
            </div>

            <Show when=move || expanded.get()>
                <div class="card-body">
                    <ReviewsList reviews=reviews/>
                </div>
            </Show>
        </div>
    }
}
