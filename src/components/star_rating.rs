use leptos::*;

use crate::models::review::MAX_RATING;

/// Clickable 1–5 star picker. Hovering previews a rating without choosing it.
#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<u8>,
    #[prop(into)] on_select: Callback<u8>,
) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(0u8);
    let shown = move || match hovered.get() {
        0 => value.get(),
        preview => preview,
    };

    view! {
        <div class="d-flex gap-1 star-rating">
            {(1..=MAX_RATING)
                .map(|star| {
                    view! {
                        <span
                            class="star"
                            style:cursor="pointer"
                            style:font-size="2rem"
                            style:color=move || if star <= shown() { "#ffc107" } else { "#e4e5e9" }
                            on:click=move |_| on_select.call(star)
                            on:mouseenter=move |_| set_hovered.set(star)
                            on:mouseleave=move |_| set_hovered.set(0)
                        >
                            "★"
                        </span>
                    }
                })
                .collect_view()}
            <Show when=move || { value.get() > 0 }>
                <span class="ms-2 align-self-center">
                    {move || format!("{} / {}", value.get(), MAX_RATING)}
                </span>
            </Show>
        </div>
    }
}
