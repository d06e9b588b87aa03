/// Rotating carousel of approved testimonials.
/// Fetches once on mount, auto-advances every few seconds until the visitor
/// navigates manually, and releases its timer when unmounted.
use crate::api::MarketplaceApi;
use crate::app::use_services;
use crate::config::AUTO_ADVANCE_INTERVAL;
use crate::models::testimonial::Testimonial;
use crate::state::rotator::Rotator;
use crate::utils::leptos_owner::{set_if_alive, update_if_alive};
use gloo_timers::callback::Interval;
use leptos::logging::{error, log};
use leptos::*;
use std::time::Duration;

/// Fetches testimonials and keeps the approved ones. Failures yield an empty list.
pub async fn load_approved_testimonials(api: &dyn MarketplaceApi) -> Vec<Testimonial> {
    match api.fetch_testimonials().await {
        Ok(page) => {
            let received = page.results.len();
            let approved = page.into_approved();
            log!("[TESTIMONIALS] {} received, {} approved", received, approved.len());
            approved
        }
        Err(err) => {
            error!("[TESTIMONIALS] Failed to load testimonials: {}", err);
            Vec::new()
        }
    }
}

#[component]
pub fn Testimonials(
    /// Auto-advance period; defaults to `AUTO_ADVANCE_INTERVAL`.
    #[prop(optional)]
    interval: Option<Duration>,
    /// Called with the new index after each automatic advance.
    #[prop(optional)]
    on_advance: Option<Callback<usize>>,
) -> impl IntoView {
    let period = interval.unwrap_or(AUTO_ADVANCE_INTERVAL).as_millis() as u32;
    let services = use_services();
    let testimonials = create_rw_signal(Vec::<Testimonial>::new());
    let rotator = create_rw_signal(Rotator::default());
    let loading = create_rw_signal(true);

    // Effects only run in the browser, so the fetch is skipped during SSR.
    create_effect(move |_| {
        let api = services.api.clone();
        spawn_local(async move {
            let approved = load_approved_testimonials(api.as_ref()).await;
            let len = approved.len();
            if set_if_alive(testimonials, "testimonials loaded", approved) {
                update_if_alive(rotator, "rotator resized", |r| r.set_len(len));
            }
            set_if_alive(loading, "testimonials loading", false);
        });
    });

    // Only flips when auto-play or emptiness changes, not on every tick.
    let wants_timer = create_memo(move |_| rotator.with(Rotator::wants_timer));
    let timer = store_value(None::<Interval>);

    create_effect(move |_| {
        testimonials.track();
        let armed = wants_timer.get();
        // Dropping the previous Interval clears it.
        timer.update_value(|slot| *slot = None);
        if armed {
            let interval = Interval::new(period, move || {
                let mut advanced_to = None;
                update_if_alive(rotator, "auto-advance", |r| {
                    if r.advance() {
                        advanced_to = Some(r.index());
                    }
                });
                if let (Some(index), Some(on_advance)) = (advanced_to, on_advance) {
                    on_advance.call(index);
                }
            });
            timer.set_value(Some(interval));
        }
    });

    on_cleanup(move || {
        let _ = timer.try_update_value(|slot| slot.take());
    });

    move || {
        if loading.get() {
            view! {
                <section class="testimonials testimonials--status">
                    <p>{ "Loading testimonials..." }</p>
                </section>
            }.into_view()
        } else if testimonials.with(Vec::is_empty) {
            view! {
                <section class="testimonials testimonials--status">
                    <p>{ "No testimonials yet." }</p>
                </section>
            }.into_view()
        } else {
            view! { <Carousel testimonials=testimonials rotator=rotator /> }.into_view()
        }
    }
}

#[component]
fn Carousel(testimonials: RwSignal<Vec<Testimonial>>, rotator: RwSignal<Rotator>) -> impl IntoView {
    let track_style = move || {
        format!(
            "transform: translateX(-{}%);",
            rotator.with(Rotator::offset_percent)
        )
    };

    view! {
        <section class="testimonials">
            <div class="testimonials__header">
                <h2>{ "What Our Community Says" }</h2>
                <p>{ "Join thousands of satisfied clients and freelancers across Africa" }</p>
            </div>
            <div class="testimonials__viewport">
                <div class="testimonials__track" style=track_style>
                    <For
                        each=move || testimonials.get()
                        key=|t| t.id
                        children=move |t| view! { <Slide testimonial=t /> }
                    />
                </div>

                <button
                    class="testimonials__nav testimonials__nav--prev"
                    aria-label="Previous testimonial"
                    on:click=move |_| rotator.update(Rotator::prev)
                >
                    { "‹" }
                </button>
                <button
                    class="testimonials__nav testimonials__nav--next"
                    aria-label="Next testimonial"
                    on:click=move |_| rotator.update(Rotator::next)
                >
                    { "›" }
                </button>

                <div class="testimonials__dots">
                    {move || (0..testimonials.with(Vec::len)).map(|index| {
                        let class = move || {
                            if rotator.with(|r| r.index() == index) {
                                "testimonials__dot testimonials__dot--active"
                            } else {
                                "testimonials__dot"
                            }
                        };
                        view! {
                            <button
                                class=class
                                aria-label=format!("Go to testimonial {}", index + 1)
                                on:click=move |_| rotator.update(|r| r.go_to(index))
                            />
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Slide(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="testimonials__slide">
            <div class="testimonials__card">
                <div class="testimonials__stars">
                    {(0..testimonial.stars()).map(|_| view! { <span class="star star--filled">{ "★" }</span> }).collect_view()}
                </div>
                <p class="testimonials__content">{ format!("\"{}\"", testimonial.content) }</p>
                <div class="testimonials__author">
                    <div class="avatar">{ testimonial.avatar }</div>
                    <div class="testimonials__name">{ testimonial.name }</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{testimonial, FakeApi};

    #[tokio::test]
    async fn only_approved_testimonials_are_kept() {
        let api = FakeApi::default();
        api.set_testimonials(vec![testimonial(1, 5, true), testimonial(2, 3, false)]);

        let approved = load_approved_testimonials(&api).await;

        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, 1);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty() {
        let api = FakeApi::default();
        api.fail_with(ApiError::Network("connection refused".into()));

        assert!(load_approved_testimonials(&api).await.is_empty());
        assert_eq!(api.calls(), vec!["fetch_testimonials".to_string()]);
    }
}
