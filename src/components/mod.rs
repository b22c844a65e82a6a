pub mod animation;
pub mod generative_profile;
pub mod listener;
