use leptos::*;
use crate::models::ReviewRecord;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<ReviewRecord>>) -> impl IntoView {
    move || {
        let reviews = reviews.get();
        if reviews.is_empty() {
            view! { <p class="text-muted text-center fst-italic">"No reviews available"</p> }.into_view()
        } else {
            reviews
                .into_iter()
                .map(|review| view! { <ReviewEntry review=review/> })
                .collect_view()
        }
    }
}

#[component]
fn ReviewEntry(review: ReviewRecord) -> impl IntoView {
    let stars = review.stars();
    let date = review.display_date();
    let provider = review.provider.map(|provider| {
        let logo = provider.logo();
        let name = provider.as_str().to_string();
        view! {
            <span class="badge bg-light text-dark d-flex align-items-center gap-1 align-top provider">
                {logo.map(|logo| view! { <img src=logo alt=name.clone() class="provider-logo"/> })}
                {name.clone()}
            </span>
        }
    });

    view! {
        <div class="mb-3 p-3 bg-light rounded border-start border-primary border-4">
            {review.title.map(|title| view! { <h6 class="mb-2">{title}</h6> })}
            <div class="d-flex flex-wrap gap-2 mb-2 small text-muted align-items-middle">
                {stars.map(|stars| view! { <span class="text-warning">{stars}</span> })}
                {review.author_name.map(|author| view! { <span>{format!("by {author}")}</span> })}
                {date.map(|date| view! { <span>{date}</span> })}
                {provider}
            </div>
            {review.text.map(|text| view! { <p class="mb-0">{text}</p> })}
        </div>
    }
}
