//! 食事カード

use leptos::prelude::*;
use mess_menu_common::{Location, MealCard};

#[component]
pub fn MealCards(location: Location, cards: Vec<MealCard>) -> impl IntoView {
    view! {
        <div class="meal-grid">
            {cards
                .into_iter()
                .map(|card| {
                    view! { <MealCardView location=location card=card /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MealCardView(location: Location, card: MealCard) -> impl IntoView {
    let id = format!("{}-{}", location.as_str(), card.meal.as_str());
    let title = card.title();
    let tag = card.tag();

    view! {
        <div class="meal-card" id=id>
            <div class="meal-card-header">
                <h2>{title}</h2>
                <span class="meal-tag">{tag}</span>
            </div>
            <ul class="meal-items">
                {card
                    .items
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
