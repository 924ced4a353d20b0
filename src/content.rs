//! Hardcoded guidance content
//!
//! Everything shown in the content sections lives here as static data;
//! there is no backend to fetch from.

use crate::models::{
    ChecklistItem, ComplianceChecklist, FeatureGuide, PhaseStatus, RoadmapPhase, RoleProfile,
    SecurityBaseline, Severity,
};

pub fn security_baselines() -> Vec<SecurityBaseline> {
    vec![
        SecurityBaseline {
            id: "sb-sso",
            title: "Single sign-on everywhere",
            severity: Severity::Critical,
            category: "Identity",
            summary: "Every internal tool authenticates through the company IdP. No local accounts, no shared logins.",
            controls: vec![
                "SAML or OIDC integration with the central IdP",
                "MFA enforced at the IdP, not per-application",
                "Local break-glass accounts documented and vaulted",
            ],
        },
        SecurityBaseline {
            id: "sb-secrets",
            title: "No secrets in source or chat",
            severity: Severity::Critical,
            category: "Secrets",
            summary: "API keys, tokens and credentials live in the secret manager. Anything pasted elsewhere is considered leaked.",
            controls: vec![
                "Pre-commit scanning on every repository",
                "Rotate within 24 hours of suspected exposure",
                "Service accounts scoped to one workload each",
            ],
        },
        SecurityBaseline {
            id: "sb-patching",
            title: "Patch windows",
            severity: Severity::High,
            category: "Endpoints",
            summary: "Workstations and servers apply security patches on a fixed cadence, tracked centrally.",
            controls: vec![
                "Critical CVEs patched within 72 hours",
                "Monthly patch window for everything else",
                "Out-of-support OS versions blocked from the VPN",
            ],
        },
        SecurityBaseline {
            id: "sb-data",
            title: "Data classification",
            severity: Severity::Medium,
            category: "Data",
            summary: "Documents carry one of three labels (public, internal, restricted) and storage location follows the label.",
            controls: vec![
                "Restricted data only in approved systems",
                "Labels applied at document creation",
                "Quarterly spot audit of shared drives",
            ],
        },
        SecurityBaseline {
            id: "sb-screens",
            title: "Screen lock and clean desk",
            severity: Severity::Low,
            category: "Workplace",
            summary: "Unattended sessions lock automatically; printed restricted material does not stay on desks overnight.",
            controls: vec![
                "Auto-lock at 5 minutes of inactivity",
                "Shred bins on every floor",
            ],
        },
    ]
}

pub fn feature_guides() -> Vec<FeatureGuide> {
    vec![
        FeatureGuide {
            slug: "getting-started",
            title: "Getting started with GuideHub",
            category: "Basics",
            read_minutes: 4,
            body: "\
# Getting started

GuideHub collects the guidance documents you used to hunt for in wikis,
drives and chat threads.

## What you can do

- Browse **security baselines** and see which controls apply to your team
- Read feature guides like this one without leaving the app
- Track the *deployment roadmap* phase by phase
- Estimate value with the [ROI calculator](#roi)

## Your profile

Open **Settings** to set your name, role and theme. Everything is stored in
your browser only; nothing leaves your machine.
",
        },
        FeatureGuide {
            slug: "project-tracking",
            title: "Tracking adoption projects",
            category: "Projects",
            read_minutes: 6,
            body: "\
# Tracking adoption projects

Each rollout you drive is a *project* with a status.

## Statuses

- `draft` - scoping, not yet announced
- `active` - in flight
- `archived` - done or abandoned

## Editing

Projects are edited in **Settings**. Saving a project with an existing id
updates it in place; a new id creates a new entry.

```text
id: pilot-finance
name: Finance team pilot
status: active
```

Keep ids short and stable. They never change after creation.
",
        },
        FeatureGuide {
            slug: "compliance-reviews",
            title: "Running a compliance review",
            category: "Compliance",
            read_minutes: 5,
            body: "\
# Running a compliance review

The **Compliance** section holds one checklist per framework.

## Process

- Walk the checklist top to bottom with the system owner
- Tick items as you verify them, required items first
- Use *copy as markdown* to paste the state into the review ticket

Unchecked required items block sign-off. Optional items are advisory.

## After the review

File findings in the tracker and link the ticket from the project record.
",
        },
    ]
}

pub fn role_profiles() -> Vec<RoleProfile> {
    vec![
        RoleProfile {
            id: "role-admin",
            title: "Workspace Admin",
            summary: "Owns tenant configuration, user lifecycle and security settings.",
            responsibilities: vec![
                "Provision and deprovision members",
                "Review audit trails monthly",
                "Approve third-party integrations",
            ],
            permissions: vec![
                "Manage all projects",
                "Edit tenant settings",
                "Export audit data",
            ],
        },
        RoleProfile {
            id: "role-editor",
            title: "Content Editor",
            summary: "Maintains guidance content and drives rollout projects.",
            responsibilities: vec![
                "Keep guides accurate and current",
                "Run adoption projects through their lifecycle",
                "Collect feedback from viewers",
            ],
            permissions: vec![
                "Create and update projects",
                "Publish guide revisions",
            ],
        },
        RoleProfile {
            id: "role-viewer",
            title: "Viewer",
            summary: "Consumes guidance; the default role for every employee.",
            responsibilities: vec![
                "Follow published baselines",
                "Complete assigned checklists",
            ],
            permissions: vec!["Read all published content"],
        },
    ]
}

pub fn roadmap_phases() -> Vec<RoadmapPhase> {
    vec![
        RoadmapPhase {
            id: "phase-pilot",
            name: "Pilot",
            quarter: "Q1",
            status: PhaseStatus::Done,
            items: vec![
                "Onboard two volunteer teams",
                "Baseline survey of current tooling",
                "Security review sign-off",
            ],
        },
        RoadmapPhase {
            id: "phase-dept",
            name: "Department rollout",
            quarter: "Q2",
            status: PhaseStatus::InProgress,
            items: vec![
                "Engineering and Finance onboarded",
                "Role profiles mapped to the IdP",
                "Weekly office hours",
            ],
        },
        RoadmapPhase {
            id: "phase-org",
            name: "Organization-wide",
            quarter: "Q3",
            status: PhaseStatus::Planned,
            items: vec![
                "Remaining departments migrated",
                "Legacy wiki set read-only",
                "Compliance checklists mandatory for new systems",
            ],
        },
        RoadmapPhase {
            id: "phase-optimize",
            name: "Optimize",
            quarter: "Q4",
            status: PhaseStatus::Planned,
            items: vec![
                "ROI review against pilot estimates",
                "Retire duplicated content sources",
            ],
        },
    ]
}

pub fn compliance_checklists() -> Vec<ComplianceChecklist> {
    vec![
        ComplianceChecklist {
            id: "cl-newsys",
            name: "New system intake",
            framework: "Internal policy IT-7",
            items: vec![
                ChecklistItem {
                    id: "ns-sso",
                    label: "Authenticates through the company IdP",
                    required: true,
                },
                ChecklistItem {
                    id: "ns-data",
                    label: "Data classification recorded for stored data",
                    required: true,
                },
                ChecklistItem {
                    id: "ns-owner",
                    label: "Named system owner and deputy",
                    required: true,
                },
                ChecklistItem {
                    id: "ns-backup",
                    label: "Backup and restore procedure tested",
                    required: false,
                },
            ],
        },
        ComplianceChecklist {
            id: "cl-quarterly",
            name: "Quarterly access review",
            framework: "SOC 2 CC6",
            items: vec![
                ChecklistItem {
                    id: "qa-admins",
                    label: "Admin list reviewed and confirmed",
                    required: true,
                },
                ChecklistItem {
                    id: "qa-leavers",
                    label: "Departed members removed from all roles",
                    required: true,
                },
                ChecklistItem {
                    id: "qa-service",
                    label: "Service account inventory up to date",
                    required: false,
                },
                ChecklistItem {
                    id: "qa-log",
                    label: "Review recorded in the audit log",
                    required: true,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_ids_are_unique() {
        let baselines = security_baselines();
        let mut ids: Vec<&str> = baselines.iter().map(|b| b.id).collect();
        ids.extend(feature_guides().iter().map(|g| g.slug));
        ids.extend(role_profiles().iter().map(|r| r.id));
        ids.extend(roadmap_phases().iter().map(|p| p.id));
        for checklist in compliance_checklists() {
            ids.push(checklist.id);
            ids.extend(checklist.items.iter().map(|i| i.id));
        }
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_guides_render_to_html() {
        for guide in feature_guides() {
            let html = crate::utils::markdown::markdown_to_html(guide.body);
            assert!(html.contains("<h1>"), "guide {} lost its title", guide.slug);
        }
    }
}
