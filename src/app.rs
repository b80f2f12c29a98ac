use crate::components::{ActivityList, MessageBanner, RosterProvider, SignupFormComp};
use crate::Config;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <RosterProvider config={props.config.clone()}>
            <header class="roster-header">
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>
            <main class="roster-main">
                <section class="roster-main__activities">
                    <h3>{"Available Activities"}</h3>
                    <ActivityList />
                </section>
                <section class="roster-main__signup">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupFormComp />
                    <MessageBanner />
                </section>
            </main>
        </RosterProvider>
    }
}
