use activity_roster::model::{ActivityCatalog, Message, RosterAction, RosterState, RosterView};
use instant::Duration;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Replaced(Vec<String>),
    LoadFailed,
    Message(Message, Duration),
    FormReset,
}

/// Records every write and mirrors it into a `RosterState`, the same way
/// the page's provider does.
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
    state: Rc<RefCell<RosterState>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn state(&self) -> RosterState {
        self.state.borrow().clone()
    }

    pub fn apply(&self, action: RosterAction) {
        self.state.borrow_mut().apply(action);
    }

    pub fn last_message(&self) -> Option<(Message, Duration)> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Message(message, delay) => Some((message.clone(), *delay)),
            _ => None,
        })
    }
}

impl RosterView for RecordingView {
    fn replace_activities(&self, catalog: ActivityCatalog) {
        let names = catalog.names().map(str::to_string).collect();
        self.events.borrow_mut().push(ViewEvent::Replaced(names));
        self.apply(RosterAction::ActivitiesLoaded(catalog));
    }

    fn show_load_failure(&self) {
        self.events.borrow_mut().push(ViewEvent::LoadFailed);
        self.apply(RosterAction::LoadFailed);
    }

    fn show_message(&self, message: Message, hide_after: Duration) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Message(message.clone(), hide_after));
        self.apply(RosterAction::ShowMessage {
            message,
            hide_after,
        });
    }

    fn reset_form(&self) {
        self.events.borrow_mut().push(ViewEvent::FormReset);
        self.apply(RosterAction::ResetForm);
    }
}
