use crate::components::use_roster;
use crate::model::{RosterAction, SELECT_PLACEHOLDER};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[function_component(SignupFormComp)]
pub fn signup_form_comp() -> Html {
    let Some(roster) = use_roster() else {
        log::error!("SignupFormComp rendered outside of a RosterProvider");
        return html! {};
    };
    let form = roster.state.form.clone();

    let oninput = {
        let roster = roster.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            roster.dispatch(RosterAction::SetEmail(input.value()));
        })
    };

    let onchange = {
        let roster = roster.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            roster.dispatch(RosterAction::SelectActivity(select.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_sign_up = roster.on_sign_up.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_complete() {
                on_sign_up.emit(form.clone());
            }
        })
    };

    html! {
        <form id="signup-form" class="roster-signup-form" {onsubmit}>
            <div class="roster-signup-form__group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={form.email.clone()}
                    {oninput}
                />
            </div>
            <div class="roster-signup-form__group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required=true {onchange}>
                    <option value="" selected={form.activity.is_empty()}>{SELECT_PLACEHOLDER}</option>
                    {for roster.state.options.iter().map(|name| html! {
                        <option
                            key={name.clone()}
                            value={name.clone()}
                            selected={*name == form.activity}
                        >
                            {name}
                        </option>
                    })}
                </select>
            </div>
            <button type="submit" class="roster-signup-form__submit">{"Sign Up"}</button>
        </form>
    }
}
