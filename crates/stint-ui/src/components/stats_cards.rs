//! Dashboard statistics strip.

use crate::logic::response_rate_label;
use stint_api_models::StatsSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatsCardsProps {
    /// Snapshot to render; `None` while the fetch is in flight.
    pub stats: Option<StatsSnapshot>,
}

#[function_component(StatsCards)]
pub(crate) fn stats_cards(props: &StatsCardsProps) -> Html {
    let Some(stats) = props.stats.as_ref() else {
        return html! { <section class="stats-cards loading" aria-busy="true"></section> };
    };

    html! {
        <section class="stats-cards">
            {card("Total", stats.total.to_string(), "total")}
            {card("Saved", stats.saved.to_string(), "saved")}
            {card("Applied", stats.applied.to_string(), "applied")}
            {card("Interviewing", stats.interviewing.to_string(), "interviewing")}
            {card("Offers", stats.offers.to_string(), "offer")}
            {card("Rejected", stats.rejected.to_string(), "rejected")}
            {card("Response rate", response_rate_label(stats.response_rate), "rate")}
        </section>
    }
}

fn card(label: &'static str, value: String, class: &'static str) -> Html {
    html! {
        <div class={classes!("stat-card", class)}>
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
