use crate::components::review_card::ReviewCard;
use crate::models::review::Review;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ReviewsList(
    reviews: RwSignal<Vec<Rc<Review>>>,
    #[prop(into)] loading: Signal<bool>,
    on_helpful: Callback<String>,
    on_reply: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="reviews-list">
            <h2>{move || format!("All Reviews ({})", reviews.with(Vec::len))}</h2>
            {move || {
                if loading.get() {
                    view! { <div class="reviews-list__status">{ "Loading reviews..." }</div> }.into_view()
                } else if reviews.with(Vec::is_empty) {
                    view! {
                        <div class="reviews-list__status">{ "No reviews yet. Be the first to review!" }</div>
                    }.into_view()
                } else {
                    view! {
                        // Keyed on the Rc address so only replaced entries re-render.
                        <For
                            each=move || reviews.get()
                            key=|review| (review.id.clone(), Rc::as_ptr(review) as usize)
                            children=move |review| view! {
                                <ReviewCard review=review on_helpful=on_helpful on_reply=on_reply />
                            }
                        />
                    }.into_view()
                }
            }}
        </div>
    }
}
