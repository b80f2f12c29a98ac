use crate::model::{ParticipantsView, UNREGISTER_ACTION};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParticipantListProps {
    pub participants: ParticipantsView,
}

#[function_component(ParticipantList)]
pub fn participant_list(props: &ParticipantListProps) -> Html {
    match &props.participants {
        ParticipantsView::Placeholder(text) => html! {
            <div class="roster-participants">
                <p><strong>{"Current Participants:"}</strong>{" "}{*text}</p>
            </div>
        },
        ParticipantsView::Rows(rows) => html! {
            <div class="roster-participants">
                <p><strong>{"Current Participants:"}</strong></p>
                <ul class="roster-participants__list">
                    {for rows.iter().map(|row| html! {
                        <li key={row.email.clone()} class="roster-participants__item">
                            <span class="roster-participants__email">{&row.email}</span>
                            <button
                                type="button"
                                class="roster-participants__remove"
                                title="Remove participant"
                                aria-label={format!("Remove {}", row.email)}
                                data-action={UNREGISTER_ACTION}
                                data-activity={row.target.activity.clone()}
                                data-email={row.target.email.clone()}
                            />
                        </li>
                    })}
                </ul>
            </div>
        },
    }
}
