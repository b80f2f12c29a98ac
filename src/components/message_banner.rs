use crate::components::use_roster;
use yew::prelude::*;

#[function_component(MessageBanner)]
pub fn message_banner() -> Html {
    let Some(roster) = use_roster() else {
        return html! {};
    };

    match roster.state.message.message() {
        Some(message) => html! {
            <div id="message" class={classes!("message", message.severity.class())}>
                {&message.text}
            </div>
        },
        None => html! { <div id="message" class="message hidden"></div> },
    }
}
