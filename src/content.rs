use std::{sync::LazyLock, time::Duration};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::motion::{ScrollThresholds, TypewriterTimings};

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&data.data).map_err(|e| ContentError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn load_or_default<T: DeserializeOwned + Default>(file: &str) -> T {
    load(file).unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Simulated,
    Server,
}

/// Timing and geometry knobs for every animated component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub splash_ms: u64,
    pub type_ms: u64,
    pub hold_ms: u64,
    pub delete_ms: u64,
    pub carousel_interval_ms: u64,
    pub carousel_cooldown_ms: u64,
    pub submit_delay_ms: u64,
    pub status_clear_ms: u64,
    pub intersection_threshold: f64,
    pub scrolled_threshold_px: f64,
    pub reference_line_px: f64,
    pub header_offset_px: f64,
    pub transport: TransportKind,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            splash_ms: 2000,
            type_ms: 150,
            hold_ms: 2000,
            delete_ms: 100,
            carousel_interval_ms: 5000,
            carousel_cooldown_ms: 10_000,
            submit_delay_ms: 2000,
            status_clear_ms: 5000,
            intersection_threshold: 0.3,
            scrolled_threshold_px: 100.0,
            reference_line_px: 200.0,
            header_offset_px: 80.0,
            transport: TransportKind::Simulated,
        }
    }
}

impl SiteConfig {
    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn typewriter(&self) -> TypewriterTimings {
        TypewriterTimings {
            type_delay: Duration::from_millis(self.type_ms),
            hold_delay: Duration::from_millis(self.hold_ms),
            delete_delay: Duration::from_millis(self.delete_ms),
        }
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn carousel_cooldown(&self) -> Duration {
        Duration::from_millis(self.carousel_cooldown_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_clear(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }

    pub fn scroll(&self) -> ScrollThresholds {
        ScrollThresholds {
            scrolled_after: self.scrolled_threshold_px,
            reference_line: self.reference_line_px,
            header_offset: self.header_offset_px,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub title: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub headline: String,
    pub description: String,
    pub email: String,
    pub location: String,
    pub institution: String,
    pub resume: String,
    pub resume_download_name: String,
    pub photo: String,
    pub taglines: Vec<String>,
    pub contact_blurb: String,
    pub socials: Vec<SocialLink>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub text: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Current,
    Ongoing,
    Completed,
}

impl EntryKind {
    pub fn as_class(self) -> &'static str {
        match self {
            EntryKind::Current => "current",
            EntryKind::Ongoing => "ongoing",
            EntryKind::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub period: String,
    pub title: String,
    pub subtitle: String,
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub progress: u8,
    pub icon: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    pub image: String,
}

pub static CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| load_or_default("config.json"));
pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| load_or_default("profile.json"));
pub static ROLES: LazyLock<Vec<Role>> = LazyLock::new(|| load_or_default("roles.json"));
pub static EDUCATION: LazyLock<Vec<EducationEntry>> =
    LazyLock::new(|| load_or_default("education.json"));
pub static SKILLS: LazyLock<Vec<SkillCategory>> = LazyLock::new(|| load_or_default("skills.json"));
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| load_or_default("projects.json"));
