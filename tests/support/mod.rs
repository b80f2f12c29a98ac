pub mod recording_view;
pub mod scripted_api;

use activity_roster::model::{RegistrationController, RosterContext};
use recording_view::RecordingView;
use scripted_api::ScriptedApi;
use std::rc::Rc;

/// Controller wired to a scripted api and a recording view.
pub struct RosterFixture {
    pub api: Rc<ScriptedApi>,
    pub view: RecordingView,
    pub controller: RegistrationController<ScriptedApi, RecordingView>,
}

impl RosterFixture {
    pub fn new() -> Self {
        let api = Rc::new(ScriptedApi::default());
        let view = RecordingView::default();
        let controller = RegistrationController::new(RosterContext::new(api.clone(), view.clone()));
        Self {
            api,
            view,
            controller,
        }
    }
}

pub const CHESS_CLUB: &str = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com"]}}"#;
