use crate::config::MIN_REVIEW_LENGTH;
use leptos::ev::SubmitEvent;
use leptos::*;

/// Star picker plus free-text review. Length rules are enforced by the caller;
/// the counter here is only a hint.
#[component]
pub fn ReviewForm(
    on_submit: Callback<(u8, String)>,
    /// Bumped by the parent after each accepted review; clears the form.
    #[prop(into)]
    submitted: Signal<usize>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let (rating, set_rating) = create_signal(5u8); // Default rating to 5
    let (review_content, set_review_content) = create_signal(String::new());

    create_effect(move |previous: Option<usize>| {
        let current = submitted.get();
        if previous.is_some_and(|previous| previous != current) {
            set_rating.set(5);
            set_review_content.set(String::new());
        }
        current
    });

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call((rating.get_untracked(), review_content.get_untracked()));
    };

    let handle_input = move |e: web_sys::Event| set_review_content.set(event_target_value(&e));

    let typed = move || review_content.with(|c| c.trim().chars().count());

    view! {
        <form class="review-form" on:submit=submit_review>
            <h3>{ "Write a Review" }</h3>
            <div class="review-form__rating" role="radiogroup" aria-label="Rating">
                {(1..=5u8).map(|star| {
                    let class = move || {
                        if star <= rating.get() { "star star--filled" } else { "star" }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            aria-label=format!("{} star{}", star, if star == 1 { "" } else { "s" })
                            on:click=move |_| set_rating.set(star)
                        >
                            { "★" }
                        </button>
                    }
                }).collect_view()}
            </div>
            <textarea
                placeholder="Share your experience working with this freelancer"
                prop:value=move || review_content.get()
                on:input=handle_input
            />
            <p class="review-form__hint">
                {move || format!("{}/{} characters minimum", typed(), MIN_REVIEW_LENGTH)}
            </p>
            <button type="submit" disabled=move || disabled.get()>{ "Submit Review" }</button>
        </form>
    }
}
