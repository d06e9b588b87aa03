use crate::models::review::{Reply, Review};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ReviewCard(
    review: Rc<Review>,
    on_helpful: Callback<String>,
    on_reply: Callback<(String, String)>,
    #[prop(default = true)] show_reply_button: bool,
) -> impl IntoView {
    let (replying, set_replying) = create_signal(false);
    let (reply_content, set_reply_content) = create_signal(String::new());

    let helpful_id = review.id.clone();
    let reply_id = review.id.clone();

    // The draft stays put until the reply is accepted. Success replaces this
    // review in the list, which renders a fresh card with an empty, closed form.
    let send_reply = move |_: ev::MouseEvent| {
        let content = reply_content.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        on_reply.call((reply_id.clone(), content));
    };

    let handle_input = move |e: web_sys::Event| set_reply_content.set(event_target_value(&e));

    view! {
        <article class="review-card">
            <header class="review-card__header">
                <div class="avatar">{ review.author_initials.clone() }</div>
                <div>
                    <div class="review-card__author">
                        { review.author.clone() }
                        {review.verified.then(|| view! { <span class="badge">{ "Verified" }</span> })}
                    </div>
                    <div class="review-card__meta">
                        { format!("{} · {}", review.role, review.date) }
                    </div>
                </div>
                <div class="review-card__stars" aria-label=format!("{} out of 5 stars", review.rating)>
                    {(1..=5u8).map(|star| {
                        let class = if star <= review.rating { "star star--filled" } else { "star" };
                        view! { <span class=class>{ "★" }</span> }
                    }).collect_view()}
                </div>
            </header>

            <p class="review-card__content">{ review.content.clone() }</p>

            <div class="review-card__actions">
                <button on:click=move |_| on_helpful.call(helpful_id.clone())>
                    { format!("Helpful ({})", review.helpful) }
                </button>
                {show_reply_button.then(|| view! {
                    <button
                        class="review-card__reply-toggle"
                        on:click=move |_| set_replying.update(|open| *open = !*open)
                    >
                        { "Reply" }
                    </button>
                })}
            </div>

            <Show when=move || replying.get()>
                <div class="review-card__reply-form">
                    <textarea
                        placeholder="Write a reply"
                        prop:value=move || reply_content.get()
                        on:input=handle_input
                    />
                    <button class="review-card__post-reply" on:click=send_reply.clone()>
                        { "Post Reply" }
                    </button>
                </div>
            </Show>

            <ul class="review-card__replies">
                {review.replies.iter().cloned().map(|reply| view! { <ReplyItem reply=reply /> }).collect_view()}
            </ul>
        </article>
    }
}

#[component]
fn ReplyItem(reply: Reply) -> impl IntoView {
    view! {
        <li class="reply">
            <div class="avatar avatar--small">{ reply.author_initials }</div>
            <div>
                <div class="reply__meta">{ format!("{} · {}", reply.author, reply.date) }</div>
                <p class="reply__content">{ reply.content }</p>
            </div>
        </li>
    }
}
