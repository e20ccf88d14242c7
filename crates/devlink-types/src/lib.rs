//! Shared data model for devlink (profiles, forms, alerts, auth state).

pub mod alert;
pub mod auth;
pub mod forms;
pub mod nullable;
pub mod profile;

pub use alert::{Alert, AlertSeverity};
pub use auth::AuthState;
pub use forms::{EducationForm, ExperienceForm, ProfileForm};
pub use nullable::Nullable;
pub use profile::{
    Education, Experience, GithubRepo, Profile, ProfileError, SocialLinks, UserRef, UserSummary,
};
