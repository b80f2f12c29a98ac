mod configured;
#[cfg(feature = "http")]
mod http_handler;
mod local_handler;

pub use configured::ConfiguredApi;
#[cfg(feature = "http")]
pub use http_handler::HttpRosterApi;
pub use local_handler::{
    LocalRosterApi, ACTIVITY_NOT_FOUND, ALREADY_SIGNED_UP, NOT_SIGNED_UP,
};
