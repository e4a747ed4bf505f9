use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PROFILE_FILE: &str = "profile.json";
pub const SKILL_COUNT: usize = 4;
pub const PROJECT_COUNT: usize = 3;

/// Site content, parsed once from the embedded profile document.
pub static PROFILE: LazyLock<Profile> =
    LazyLock::new(|| Profile::load().expect("Embedded profile should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile document not found")]
    NotFound,
    #[error("Couldn't parse profile: {0}")]
    ParseError(String),
    #[error("Expected {expected} {what}, found {found}")]
    WrongCount {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Terminal,
    Database,
    Cpu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub icon: SkillIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Email,
}

impl LinkKind {
    /// Icon font class for the link, same icon set as the rest of the site.
    pub fn icon_class(self) -> &'static str {
        match self {
            LinkKind::Github => "devicon-github-plain",
            LinkKind::Linkedin => "devicon-linkedin-plain",
            LinkKind::Email => "extra-email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: LinkKind,
    pub href: String,
    pub label: String,
}

impl SocialLink {
    /// `mailto:` links stay in the current tab, everything else opens a new one.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub resume: String,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub links: Vec<SocialLink>,
}

impl Profile {
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE).ok_or(ProfileError::NotFound)?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ProfileError> {
        let profile: Profile =
            serde_json::from_slice(data).map_err(|e| ProfileError::ParseError(e.to_string()))?;
        if profile.skills.len() != SKILL_COUNT {
            return Err(ProfileError::WrongCount {
                what: "skills",
                expected: SKILL_COUNT,
                found: profile.skills.len(),
            });
        }
        if profile.projects.len() != PROJECT_COUNT {
            return Err(ProfileError::WrongCount {
                what: "projects",
                expected: PROJECT_COUNT,
                found: profile.projects.len(),
            });
        }
        Ok(profile)
    }

    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), self.name)
    }
}
