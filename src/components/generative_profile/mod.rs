mod component;
mod config;
mod flow_field;
mod ledger;
mod relations;
mod render;
mod seed;
mod seed_view;
mod types;
mod viewport;

pub use component::GenerativeProfile;
pub use types::{PrivacyMode, ViewMode};
