//! Section views

pub mod baselines;
pub mod compliance;
pub mod dashboard;
pub mod guides;
pub mod roadmap;
pub mod roi;
pub mod roles;
pub mod settings;

pub use baselines::BaselinesView;
pub use compliance::ComplianceView;
pub use dashboard::DashboardView;
pub use guides::GuidesView;
pub use roadmap::RoadmapView;
pub use roi::RoiCalculatorView;
pub use roles::RolesView;
pub use settings::SettingsView;
