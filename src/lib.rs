#[cfg(feature = "yew")]
mod app;
#[cfg(feature = "yew")]
pub mod components;
mod config;
pub mod handler;
pub mod model;

#[cfg(feature = "yew")]
pub use app::{App, AppProps};
pub use config::{Backend, Config};

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    #[cfg(feature = "http")]
    pub use crate::handler::HttpRosterApi;
    pub use crate::handler::{ConfiguredApi, LocalRosterApi};
    pub use crate::model::Activity;
    pub use crate::model::ActivityCardView;
    pub use crate::model::ActivityCatalog;
    pub use crate::model::ActivityDetails;
    pub use crate::model::ActivityRenderer;
    pub use crate::model::ApiError;
    pub use crate::model::Confirmation;
    pub use crate::model::Message;
    pub use crate::model::MessageRegion;
    pub use crate::model::RegistrationController;
    pub use crate::model::RosterApi;
    pub use crate::model::RosterContext;
    pub use crate::model::RosterView;
    pub use crate::model::Severity;
    pub use crate::model::UnregisterTarget;
    pub use crate::{Backend, Config};
}
