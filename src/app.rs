/// Root of the restaurant reviews UI.
/// Fetches the browser-side config from the server, then mounts the search page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::get_client_config;
use crate::client::HttpReviewsApi;
use crate::components::search_reviews::SearchReviews;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Stylesheet id="leptos" href="/pkg/dinereview.css"/>
        <Title text="Toronto Restaurant Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ReviewsPage() -> impl IntoView {
    let config = create_resource(|| (), |_| get_client_config());

    view! {
        <Suspense fallback=move || view! { <p class="text-center text-muted py-5">"Loading..."</p> }>
            {move || {
                config
                    .get()
                    .map(|result| match result {
                        Ok(config) => view! { <SearchReviews api=HttpReviewsApi::new(config)/> }.into_view(),
                        Err(err) => {
                            logging::error!("[CONFIG] Could not load client config: {}", err);
                            view! {
                                <div class="alert alert-danger m-4" role="alert">
                                    "The review service is not configured."
                                </div>
                            }
                                .into_view()
                        }
                    })
            }}
        </Suspense>
    }
}
