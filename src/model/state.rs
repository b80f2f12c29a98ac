use crate::model::{
    ActivityCatalog, Expiry, Message, MessageRegion, MessageTicket, SignupForm,
};
use instant::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    ActivitiesLoaded(ActivityCatalog),
    LoadFailed,
    ShowMessage {
        message: Message,
        hide_after: Duration,
    },
    ExpireMessage(MessageTicket),
    ResetForm,
    SetEmail(String),
    SelectActivity(String),
}

/// Everything the page displays between two renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    pub list: ListState,
    /// Options of the select control. Survives a failed reload.
    pub options: Vec<String>,
    pub message: MessageRegion,
    pub form: SignupForm,
    /// Bumped whenever a hide timer fired early and must be armed again.
    pub rearm: u32,
}

impl RosterState {
    pub fn apply(&mut self, action: RosterAction) {
        self.apply_at(action, Instant::now());
    }

    pub fn apply_at(&mut self, action: RosterAction, now: Instant) {
        match action {
            RosterAction::ActivitiesLoaded(catalog) => {
                self.options = catalog.names().map(str::to_string).collect();
                self.form.select_options(&catalog);
                self.list = ListState::Loaded(catalog);
            }
            RosterAction::LoadFailed => {
                self.list = ListState::Failed;
            }
            RosterAction::ShowMessage {
                message,
                hide_after,
            } => {
                self.message.show(message, hide_after, now);
            }
            RosterAction::ExpireMessage(ticket) => match self.message.expire(ticket, now) {
                Expiry::Hidden | Expiry::Stale => {}
                Expiry::Early(left) => {
                    log::debug!("Hide timer fired {:?} early, rearming", left);
                    self.rearm = self.rearm.wrapping_add(1);
                }
            },
            RosterAction::ResetForm => self.form.reset(),
            RosterAction::SetEmail(email) => self.form.email = email,
            RosterAction::SelectActivity(activity) => self.form.activity = activity,
        }
    }
}
