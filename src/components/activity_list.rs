use crate::components::{use_roster, ActivityCard};
use crate::model::{
    ActivityCardView, ListState, UnregisterTarget, DATA_ACTION, DATA_ACTIVITY, DATA_EMAIL,
    LOAD_FAILURE_NOTICE, UNREGISTER_ACTION,
};
use web_sys::Element;
use yew::prelude::*;

/// Renders every activity card and routes clicks on removal controls.
///
/// Cards only carry data attributes; the single listener on the container
/// reads them back from the clicked element.
#[function_component(ActivityList)]
pub fn activity_list() -> Html {
    let Some(roster) = use_roster() else {
        log::error!("ActivityList rendered outside of a RosterProvider");
        return html! {};
    };

    let onclick = {
        let on_unregister = roster.on_unregister.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(origin) = event.target_dyn_into::<Element>() else {
                return;
            };
            let selector = format!("[{DATA_ACTION}=\"{UNREGISTER_ACTION}\"]");
            let Ok(Some(control)) = origin.closest(&selector) else {
                return;
            };
            let action = control.get_attribute(DATA_ACTION);
            if let Some(target) = UnregisterTarget::from_attributes(
                action.as_deref(),
                control.get_attribute(DATA_ACTIVITY),
                control.get_attribute(DATA_EMAIL),
            ) {
                on_unregister.emit(target);
            }
        })
    };

    let content = match &roster.state.list {
        ListState::Loading => html! {
            <p class="roster-activity-list__loading">{"Loading activities..."}</p>
        },
        ListState::Failed => html! {
            <p class="roster-activity-list__error">{LOAD_FAILURE_NOTICE}</p>
        },
        ListState::Loaded(catalog) => html! {
            {for catalog.iter().map(|activity| {
                let card = ActivityCardView::from(activity);
                let key = card.title.clone();
                html! { <ActivityCard {key} {card} /> }
            })}
        },
    };

    html! {
        <div id="activities-list" class="roster-activity-list" {onclick}>
            {content}
        </div>
    }
}
