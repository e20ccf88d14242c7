//! Request bodies for the mutating profile endpoints.

use serde::{Deserialize, Serialize};

use crate::nullable::{self, Nullable};
use crate::profile::Profile;

/// Body of `POST /api/profile` (create or update).
///
/// `skills` is a comma separated list; the server splits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub status: String,
    pub skills: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl ProfileForm {
    /// Pre-fills an edit form from a cached profile.
    pub fn from_profile(profile: &Profile) -> Self {
        let text = |field: &Nullable<String>| nullable::get(field).cloned();
        let social = nullable::get(&profile.social).cloned().unwrap_or_default();
        Self {
            status: profile.status().unwrap_or_default().to_string(),
            skills: profile.skills().join(","),
            company: text(&profile.company),
            website: text(&profile.website),
            location: text(&profile.location),
            githubusername: text(&profile.githubusername),
            bio: text(&profile.bio),
            twitter: text(&social.twitter),
            facebook: text(&social.facebook),
            linkedin: text(&social.linkedin),
            youtube: text(&social.youtube),
            instagram: text(&social.instagram),
        }
    }
}

/// Body of `PUT /api/profile/experience`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceForm {
    pub title: String,
    pub company: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PUT /api/profile/education`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationForm {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
