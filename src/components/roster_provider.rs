use crate::handler::ConfiguredApi;
use crate::model::{
    ActivityCatalog, Message, RegistrationController, RosterAction, RosterContext, RosterState,
    RosterView, SignupForm, UnregisterTarget,
};
use crate::Config;
use gloo::timers::callback::Timeout;
use instant::{Duration, Instant};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

impl Reducible for RosterState {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Writes renderer and controller output into the provider's state.
#[derive(Clone, PartialEq)]
pub struct YewRosterView {
    dispatcher: UseReducerDispatcher<RosterState>,
}

impl YewRosterView {
    pub fn new(dispatcher: UseReducerDispatcher<RosterState>) -> Self {
        Self { dispatcher }
    }
}

impl RosterView for YewRosterView {
    fn replace_activities(&self, catalog: ActivityCatalog) {
        self.dispatcher
            .dispatch(RosterAction::ActivitiesLoaded(catalog));
    }

    fn show_load_failure(&self) {
        self.dispatcher.dispatch(RosterAction::LoadFailed);
    }

    fn show_message(&self, message: Message, hide_after: Duration) {
        self.dispatcher.dispatch(RosterAction::ShowMessage {
            message,
            hide_after,
        });
    }

    fn reset_form(&self) {
        self.dispatcher.dispatch(RosterAction::ResetForm);
    }
}

pub type YewRegistrationController = RegistrationController<ConfiguredApi, YewRosterView>;

#[derive(Clone, PartialEq)]
pub struct RosterProviderContext {
    pub state: UseReducerHandle<RosterState>,
    pub on_sign_up: Callback<SignupForm>,
    pub on_unregister: Callback<UnregisterTarget>,
}

impl RosterProviderContext {
    pub fn dispatch(&self, action: RosterAction) {
        self.state.dispatch(action);
    }
}

#[derive(Properties, PartialEq)]
pub struct RosterProviderProps {
    pub config: Config,
    pub children: Children,
}

#[function_component(RosterProvider)]
pub fn roster_provider(props: &RosterProviderProps) -> Html {
    let state = use_reducer(RosterState::default);

    let controller = {
        let config = props.config.clone();
        let dispatcher = state.dispatcher();
        use_memo((), move |_| {
            let api = Rc::new(ConfiguredApi::from_config(&config));
            YewRegistrationController::new(RosterContext::new(api, YewRosterView::new(dispatcher)))
        })
    };

    {
        let renderer = controller.renderer().clone();
        use_effect_with((), move |_| {
            log::info!("Loading activities");
            spawn_local(async move {
                let _ = renderer.load_and_render().await;
            });
            || ()
        });
    }

    // One pending hide timer at a time: replacing the message drops the old
    // timer, which cancels it.
    {
        let dispatcher = state.dispatcher();
        let ticket = state.message.ticket();
        let remaining = state.message.remaining(Instant::now());
        use_effect_with((ticket, state.rearm), move |_| {
            let timeout = ticket.zip(remaining).map(|(ticket, remaining)| {
                let millis = u32::try_from(remaining.as_millis())
                    .unwrap_or(u32::MAX)
                    .saturating_add(1);
                Timeout::new(millis, move || {
                    dispatcher.dispatch(RosterAction::ExpireMessage(ticket));
                })
            });
            move || drop(timeout)
        });
    }

    let on_sign_up = {
        let controller = controller.clone();
        Callback::from(move |form: SignupForm| {
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.sign_up(form.email.trim(), &form.activity).await;
            });
        })
    };

    let on_unregister = {
        let controller = controller.clone();
        Callback::from(move |target: UnregisterTarget| {
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.unregister(&target.activity, &target.email).await;
            });
        })
    };

    let context = RosterProviderContext {
        state,
        on_sign_up,
        on_unregister,
    };

    html! {
        <ContextProvider<RosterProviderContext> {context}>
            {props.children.clone()}
        </ContextProvider<RosterProviderContext>>
    }
}

/// Roster state and actions, when rendered inside a [`RosterProvider`].
#[hook]
pub fn use_roster() -> Option<RosterProviderContext> {
    use_context::<RosterProviderContext>()
}
