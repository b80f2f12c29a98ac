mod activity_card;
mod activity_list;
mod message_banner;
mod participant_list;
mod roster_provider;
mod signup_form;

pub use activity_card::{ActivityCard, ActivityCardProps};
pub use activity_list::ActivityList;
pub use message_banner::MessageBanner;
pub use participant_list::{ParticipantList, ParticipantListProps};
pub use roster_provider::{
    use_roster, RosterProvider, RosterProviderContext, RosterProviderProps,
    YewRegistrationController, YewRosterView,
};
pub use signup_form::SignupFormComp;
