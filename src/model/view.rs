use crate::model::Activity;

pub const NO_PARTICIPANTS_PLACEHOLDER: &str = "None yet - be the first to sign up!";
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Attribute values carried by a participant's removal control.
pub const UNREGISTER_ACTION: &str = "unregister";
pub const DATA_ACTION: &str = "data-action";
pub const DATA_ACTIVITY: &str = "data-activity";
pub const DATA_EMAIL: &str = "data-email";

/// The (activity, email) pair a removal control is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnregisterTarget {
    pub activity: String,
    pub email: String,
}

impl UnregisterTarget {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Resolves the attributes read off a clicked element. Anything that is
    /// not an unregister control, or lacks either value, yields `None`.
    pub fn from_attributes(
        action: Option<&str>,
        activity: Option<String>,
        email: Option<String>,
    ) -> Option<Self> {
        if action != Some(UNREGISTER_ACTION) {
            return None;
        }
        match (activity, email) {
            (Some(activity), Some(email)) if !activity.is_empty() && !email.is_empty() => {
                Some(Self { activity, email })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub target: UnregisterTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsView {
    Placeholder(&'static str),
    Rows(Vec<ParticipantRow>),
}

/// Everything a card displays, derived from one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCardView {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    pub availability: String,
    pub participants: ParticipantsView,
}

impl ActivityCardView {
    pub fn rows(&self) -> &[ParticipantRow] {
        match &self.participants {
            ParticipantsView::Rows(rows) => rows,
            ParticipantsView::Placeholder(_) => &[],
        }
    }
}

impl From<&Activity> for ActivityCardView {
    fn from(activity: &Activity) -> Self {
        let participants = if activity.participants().is_empty() {
            ParticipantsView::Placeholder(NO_PARTICIPANTS_PLACEHOLDER)
        } else {
            ParticipantsView::Rows(
                activity
                    .participants()
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        target: UnregisterTarget::new(activity.name.clone(), email.clone()),
                    })
                    .collect(),
            )
        };

        Self {
            title: activity.name.clone(),
            description: activity.details.description.clone(),
            schedule: activity.details.schedule.clone(),
            spots_left: activity.spots_left(),
            availability: activity.availability(),
            participants,
        }
    }
}
