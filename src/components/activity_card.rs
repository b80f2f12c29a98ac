use crate::components::ParticipantList;
use crate::model::ActivityCardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: ActivityCardView,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="roster-activity-card">
            <h4 class="roster-activity-card__title">{&card.title}</h4>
            <p class="roster-activity-card__description">{&card.description}</p>
            <p class="roster-activity-card__schedule">
                <strong>{"Schedule:"}</strong>{" "}{&card.schedule}
            </p>
            <p class="roster-activity-card__availability">
                <strong>{"Availability:"}</strong>{" "}{&card.availability}
            </p>
            <ParticipantList participants={card.participants.clone()} />
        </div>
    }
}
