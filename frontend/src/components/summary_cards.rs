use shared::SummaryCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub cards: Vec<SummaryCard>,
}

/// Dashboard-style figures above a table. Renders nothing without cards.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    if props.cards.is_empty() {
        return html! {};
    }

    html! {
        <div class="summary-cards">
            {for props.cards.iter().map(|card| html! {
                <div class="summary-card">
                    <div class="summary-label">{card.label}</div>
                    <div class="summary-value">{&card.value}</div>
                </div>
            })}
        </div>
    }
}
