//! Data structures shared across views and storage

use serde::{Deserialize, Serialize};

// ============================================
// Persisted entities
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Editor => "Editor",
            UserRole::Viewer => "Viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub notifications: bool,
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub owner_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
    #[default]
    Draft,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Archived => "Archived",
            ProjectStatus::Draft => "Draft",
        }
    }
}

/// UI theme. Persisted as a raw string, separately from
/// `UserPreferences.theme` (the two are intentionally independent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Unknown input falls back to `System`.
    pub fn parse(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

// ============================================
// Guidance content (hardcoded, read-only)
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityBaseline {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub category: &'static str,
    pub summary: &'static str,
    pub controls: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Critical => "severity-critical",
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low => "severity-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGuide {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub read_minutes: u32,
    /// Markdown source rendered by `utils::markdown`.
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleProfile {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub responsibilities: Vec<&'static str>,
    pub permissions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapPhase {
    pub id: &'static str,
    pub name: &'static str,
    pub quarter: &'static str,
    pub status: PhaseStatus,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Done,
    InProgress,
    Planned,
}

impl PhaseStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            PhaseStatus::Done => "✓",
            PhaseStatus::InProgress => "◐",
            PhaseStatus::Planned => "○",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhaseStatus::Done => "Done",
            PhaseStatus::InProgress => "In progress",
            PhaseStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceChecklist {
    pub id: &'static str,
    pub name: &'static str,
    pub framework: &'static str,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
}

// ============================================
// Navigation
// ============================================

#[derive(Clone, Copy, PartialEq)]
pub enum Section {
    Dashboard,
    Guides,
    Baselines,
    Roles,
    Roadmap,
    Compliance,
    RoiCalculator,
    Settings,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Guides,
        Section::Baselines,
        Section::Roles,
        Section::Roadmap,
        Section::Compliance,
        Section::RoiCalculator,
        Section::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Guides => "Feature Guides",
            Section::Baselines => "Security Baselines",
            Section::Roles => "Role Profiles",
            Section::Roadmap => "Roadmap",
            Section::Compliance => "Compliance",
            Section::RoiCalculator => "ROI Calculator",
            Section::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_theme_unknown_falls_back_to_system() {
        assert_eq!(Theme::parse("solarized"), Theme::System);
        assert_eq!(Theme::parse(""), Theme::System);
    }

    #[test]
    fn test_user_tolerates_missing_optional_fields() {
        let json = r#"{"id":"u1","email":"a@example.com","name":"A"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Viewer);
        assert_eq!(user.avatar_url, None);
        assert_eq!(user.preferences.theme, Theme::System);
        assert!(!user.preferences.notifications);
    }

    #[test]
    fn test_project_status_wire_values() {
        let p: Project =
            serde_json::from_str(r#"{"id":"p1","name":"Pilot","status":"archived"}"#).unwrap();
        assert_eq!(p.status, ProjectStatus::Archived);
        let encoded = serde_json::to_string(&p).unwrap();
        assert!(encoded.contains(r#""status":"archived""#));
    }
}
