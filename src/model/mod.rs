mod activity;
mod api;
mod error;
mod form;
mod message;
mod roster;
mod state;
mod view;

pub use activity::{Activity, ActivityCatalog, ActivityDetails};
pub use api::{participant_path, Confirmation, FailureBody, RosterApi, ACTIVITIES_PATH};
pub use error::ApiError;
pub use form::{SignupForm, SELECT_PLACEHOLDER};
pub use message::{
    Expiry, Message, MessageRegion, MessageState, MessageTicket, Severity, SIGNUP_MESSAGE_DELAY,
    UNREGISTER_MESSAGE_DELAY,
};
pub use roster::{
    ActivityRenderer, RegistrationController, RosterContext, RosterView, SIGNUP_FALLBACK,
    SIGNUP_TRANSPORT_FAILURE, UNREGISTER_FALLBACK, UNREGISTER_TRANSPORT_FAILURE,
};
pub use state::{ListState, RosterAction, RosterState};
pub use view::{
    ActivityCardView, ParticipantRow, ParticipantsView, UnregisterTarget, DATA_ACTION,
    DATA_ACTIVITY, DATA_EMAIL, LOAD_FAILURE_NOTICE, NO_PARTICIPANTS_PLACEHOLDER,
    UNREGISTER_ACTION,
};
