use crate::state::stats::ReviewStats;
use leptos::*;

#[component]
pub fn ReviewStatsPanel(#[prop(into)] stats: Signal<ReviewStats>) -> impl IntoView {
    view! {
        <div class="review-stats">
            <div class="review-stats__summary">
                <span class="review-stats__average">
                    {move || format!("{:.1}", stats.get().average)}
                </span>
                <span class="review-stats__total">
                    {move || {
                        let total = stats.get().total;
                        format!("{} review{}", total, if total == 1 { "" } else { "s" })
                    }}
                </span>
            </div>
            <ul class="review-stats__distribution">
                {(1..=5u8).rev().map(|star| view! {
                    <li>
                        <span>{ format!("{star} ★") }</span>
                        <div class="review-stats__bar">
                            <div
                                class="review-stats__fill"
                                style=move || format!("width: {:.0}%;", stats.get().percent_for(star))
                            />
                        </div>
                        <span>{move || stats.get().count_for(star)}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
