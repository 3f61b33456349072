//! Social-network domain layer
//!
//! Profiles and the follow/unfollow service built on the graph core.

pub mod profile;
pub mod service;

pub use profile::{ParsePrivacyError, Privacy, Profile};
pub use service::SocialGraph;
