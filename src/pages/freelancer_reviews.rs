/// Review panel for one freelancer: stats, submission form and the review list.
use crate::app::use_services;
use crate::components::notices::{use_notices, Notice, Notices};
use crate::components::review_form::ReviewForm;
use crate::components::review_stats::ReviewStatsPanel;
use crate::components::reviews_list::ReviewsList;
use crate::error::ReviewError;
use crate::models::review::{Reply, Review};
use crate::state::review_list::{prepend, with_helpful_count, with_reply, ReviewList};
use crate::state::stats::ReviewStats;
use crate::utils::leptos_owner::{set_if_alive, update_if_alive};
use leptos::logging::{error, warn};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

/// Signals behind the review panel and how each API outcome lands in them.
/// A failed call never touches `reviews`; it only raises a notice.
#[derive(Clone, Copy)]
pub struct ReviewPanel {
    pub reviews: RwSignal<Vec<Rc<Review>>>,
    pub loading: RwSignal<bool>,
    /// Bumped after each accepted review so the form clears itself.
    pub submitted: RwSignal<usize>,
    notices: Notices,
}

impl ReviewPanel {
    pub fn new(notices: Notices) -> Self {
        Self {
            reviews: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            submitted: create_rw_signal(0),
            notices,
        }
    }

    pub fn apply_load(&self, freelancer_id: u64, result: Result<ReviewList, ReviewError>) {
        match result {
            Ok(list) => {
                set_if_alive(self.reviews, "reviews loaded", list);
            }
            Err(err) => {
                error!("[REVIEWS] Failed to load reviews for {}: {}", freelancer_id, err);
                self.notices.push(Notice::error("Error", "Failed to load reviews."));
            }
        }
        set_if_alive(self.loading, "reviews loading", false);
    }

    pub fn apply_submit(&self, result: Result<Review, ReviewError>) {
        match result {
            Ok(review) => {
                update_if_alive(self.reviews, "review submitted", |list| *list = prepend(list, review));
                update_if_alive(self.submitted, "review form reset", |n| *n += 1);
                self.notices
                    .push(Notice::info("Review submitted", "Thank you for your feedback!"));
            }
            Err(err) if err.is_local() => {
                self.notices.push(Notice::error("Error", err.to_string()));
            }
            Err(err) => {
                error!("[REVIEWS] Review error: {}", err);
                self.notices
                    .push(Notice::error("Error submitting review", err.to_string()));
            }
        }
    }

    pub fn apply_helpful(&self, review_id: &str, result: Result<u32, ReviewError>) {
        match result {
            Ok(count) => {
                update_if_alive(self.reviews, "helpful count", |list| {
                    *list = with_helpful_count(list, review_id, count)
                });
            }
            // Usually "already marked"; informational rather than an error.
            Err(err) => self.notices.push(Notice::info("Notice", err.to_string())),
        }
    }

    pub fn apply_reply(&self, review_id: &str, result: Result<Reply, ReviewError>) {
        match result {
            Ok(reply) => {
                update_if_alive(self.reviews, "reply added", |list| {
                    *list = with_reply(list, review_id, reply)
                });
            }
            Err(err) if err.is_local() => {
                self.notices.push(Notice::error("Error", err.to_string()));
            }
            Err(err) => {
                error!("[REVIEWS] Reply error: {}", err);
                self.notices.push(Notice::error("Error", "Failed to add reply"));
            }
        }
    }
}

#[component]
pub fn FreelancerReviews() -> impl IntoView {
    let params = use_params_map();
    let raw_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let freelancer_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
    });

    let service = use_services().review_service();
    let panel = ReviewPanel::new(use_notices());
    let ReviewPanel { reviews, loading, submitted, .. } = panel;
    let stats = Signal::derive(move || reviews.with(|list| ReviewStats::from_reviews(list)));

    // Re-runs whenever the route id changes. Responses are not matched against
    // the id they were requested for, so a slow earlier load can still win.
    create_effect({
        let service = service.clone();
        move |_| {
            let Some(id) = freelancer_id.get() else {
                warn!("[REVIEWS] No numeric freelancer id in route: {:?}", raw_id());
                loading.set(false);
                return;
            };
            loading.set(true);
            let service = service.clone();
            spawn_local(async move {
                panel.apply_load(id, service.load(id).await);
            });
        }
    });

    let on_submit = Callback::new({
        let service = service.clone();
        move |(rating, content): (u8, String)| {
            let service = service.clone();
            let freelancer = freelancer_id.get_untracked();
            spawn_local(async move {
                panel.apply_submit(service.submit(freelancer, rating, &content).await);
            });
        }
    });

    let on_helpful = Callback::new({
        let service = service.clone();
        move |review_id: String| {
            let service = service.clone();
            spawn_local(async move {
                panel.apply_helpful(&review_id, service.mark_helpful(&review_id).await);
            });
        }
    });

    let on_reply = Callback::new({
        let service = service.clone();
        move |(review_id, content): (String, String)| {
            let service = service.clone();
            spawn_local(async move {
                panel.apply_reply(&review_id, service.add_reply(&review_id, &content).await);
            });
        }
    });

    view! {
        <div class="freelancer-reviews">
            <A href=move || format!("/freelancer/{}", raw_id()) class="back-link">
                { "← Back to Profile" }
            </A>

            <div class="freelancer-reviews__intro">
                <h1>{ "Client Reviews" }</h1>
                <p>{ "Real feedback from clients who worked with this freelancer" }</p>
            </div>

            <div class="freelancer-reviews__grid">
                <aside class="freelancer-reviews__side">
                    <ReviewStatsPanel stats=stats />
                    <ReviewForm
                        on_submit=on_submit
                        submitted=submitted
                        disabled=Signal::derive(move || freelancer_id.get().is_none())
                    />
                </aside>
                <section class="freelancer-reviews__main">
                    <ReviewsList
                        reviews=reviews
                        loading=loading
                        on_helpful=on_helpful
                        on_reply=on_reply
                    />
                </section>
            </div>
        </div>
    }
}
