//! # InfraPulse Site Content Model
//!
//! File: cli/src/core/content.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module holds the static display data the portfolio is rendered from:
//! the profile and hero copy, the headline stats, the skill groups, and the
//! project gallery. Everything is built once by [`SiteContent::new`] and
//! never mutated afterwards; the server, the exporter, and the JSON API all
//! read from the same immutable model.
//!
//! ## Architecture
//!
//! Plain serde-serializable structs, so one model feeds both the Tera
//! template context and the `/api/projects` responses. The only operations
//! are read-only queries:
//! - `projects_in(category)`: filter the gallery by category
//! - `categories()`: the filter-button list, derived from the project data
//!
//! The category list is intentionally derived rather than hard-coded. A
//! hand-maintained list drifts from the gallery the moment a project is
//! added or recategorized; deriving it makes the buttons and the grid agree
//! by construction.
//!
use serde::Serialize;

/// Category name that selects every project.
pub const ALL_CATEGORY: &str = "All";

/// Who the site is about: identity, hero copy, story, and contact links.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// "My Story" paragraphs in the about section, in display order.
    pub story: Vec<String>,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
}

/// One headline figure shown in the about section, e.g. "3+" years.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// A titled group of related skills, e.g. "Monitoring & Observability".
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One portfolio entry. `live_url` and `source_url` are `None` while a demo
/// or repository is still being prepared for public release.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub year: u16,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
}

/// The whole site: one immutable value, built at startup.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Builds the full content model. Display strings live here and nowhere
    /// else; templates and API responses only ever reflect this data.
    pub fn new() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            profile: Profile {
                name: "Kamal Raj".into(),
                headline: "DevOps & SRE Engineer, AI Enthusiast".into(),
                summary: "I am an experienced IT professional specializing in DevOps and Site \
                     Reliability Engineering (SRE) with a strong background in system \
                     operations, infrastructure management, and automation. My expertise \
                     spans virtualization, cloud operation, networking, storage, and \
                     monitoring."
                    .into(),
                story: vec![
                    "My journey started with blinking LEDs and bare-metal Linux boxes. Over \
                     the past 3+ years, I've been in the trenches of IT operations: \
                     monitoring enterprise networks, maintaining virtual environments, \
                     managing storage arrays, and ensuring uptime for mission-critical \
                     systems."
                        .into(),
                    "Today, I engineer robust, secure, and observable infrastructure, \
                     blending tools like Grafana, Prometheus, Kubernetes, and Wazuh to \
                     build real-time insights for infra and apps. I'm currently building \
                     VisionOps, a monitoring and security suite for SMBs that merges \
                     observability, compliance, and AI insights into one."
                        .into(),
                ],
                email: "techey.kamal@gmail.com".into(),
                github_url: "https://github.com/infrapulses".into(),
                linkedin_url: "https://linkedin.com".into(),
            },
            stats: vec![
                Stat { label: "Years Experience".into(), value: "3+".into() },
                Stat { label: "Environments Managed".into(), value: "20+".into() },
                Stat { label: "Monitoring Dashboards".into(), value: "100+".into() },
                Stat { label: "Infra Projects".into(), value: "10+".into() },
            ],
            skill_groups: vec![
                SkillGroup {
                    category: "Infrastructure & Ops".into(),
                    items: owned(&[
                        "Linux",
                        "Proxmox",
                        "VMware",
                        "SAN/NAS (Pure, Synology)",
                        "Cisco SAN Switches",
                    ]),
                },
                SkillGroup {
                    category: "Monitoring & Observability".into(),
                    items: owned(&[
                        "Grafana",
                        "Prometheus",
                        "InfluxDB",
                        "Blackbox Exporter",
                        "Entuity",
                    ]),
                },
                SkillGroup {
                    category: "Cloud & Container".into(),
                    items: owned(&[
                        "AWS",
                        "Kubernetes",
                        "Docker",
                        "Terraform (Basic)",
                        "CI/CD (GitHub Actions)",
                    ]),
                },
                SkillGroup {
                    category: "Security & Automation".into(),
                    items: owned(&[
                        "Wazuh SIEM",
                        "OWASP ZAP",
                        "Ansible (Learning)",
                        "System Hardening",
                        "DevSecOps",
                    ]),
                },
                SkillGroup {
                    category: "AI/ML (Infra-side)".into(),
                    items: owned(&[
                        "AI for Anomaly Detection",
                        "Performance Prediction",
                        "On-Prem Deployment",
                        "VisionOps (Project)",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    title: "VisionOps".into(),
                    category: "Web App".into(),
                    description: "Unified observability + security platform for SMBs with Grafana, \
                         Prometheus, and Wazuh. Deployed across hybrid Kubernetes clusters."
                        .into(),
                    technologies: owned(&[
                        "Grafana",
                        "Prometheus",
                        "Wazuh",
                        "Kubernetes",
                        "Jenkins",
                    ]),
                    year: 2025,
                    live_url: None,
                    source_url: Some(
                        "https://github.com/infrapulses/Vision-ops_project".into(),
                    ),
                },
                Project {
                    title: "FutureOps".into(),
                    category: "Prediction Power".into(),
                    description: "A predictive infrastructure platform that combines AI, \
                         observability, and automation. FutureOps empowers teams with custom \
                         forecasting, real-time alerts, and adaptive dashboards designed to \
                         grow with your infra."
                        .into(),
                    technologies: owned(&[
                        "Python",
                        "Grafana",
                        "Prometheus",
                        "Custom ML Models",
                        "Ansible",
                        "FastAPI",
                    ]),
                    year: 2025,
                    live_url: None,
                    source_url: Some("https://github.com/infrapulses/Futureops".into()),
                },
                Project {
                    title: "SIEM + Compliance Stack".into(),
                    category: "Security".into(),
                    description: "Deployed and customized Wazuh for real-time SIEM, log collection, \
                         and alerting. Added compliance report generation via custom scripting."
                        .into(),
                    technologies: owned(&["Wazuh", "Linux", "Logstash", "Shell Scripting"]),
                    year: 2023,
                    live_url: None,
                    source_url: None,
                },
                Project {
                    title: "Kubernetes Infra Automation".into(),
                    category: "CloudOps".into(),
                    description: "Built end-to-end Kubernetes infrastructure with Terraform, Docker, \
                         and GitHub Actions for CI/CD and app deployment."
                        .into(),
                    technologies: owned(&[
                        "Terraform",
                        "Kubernetes",
                        "GitHub Actions",
                        "Docker",
                    ]),
                    year: 2024,
                    live_url: None,
                    source_url: None,
                },
                Project {
                    title: "AI-Driven Anomaly Detection".into(),
                    category: "AI".into(),
                    description: "Integrated ML models in the Prometheus alert pipeline to detect \
                         anomalies in system performance. Deployed without GPU on-prem."
                        .into(),
                    technologies: owned(&["Python", "Scikit-learn", "Prometheus", "FastAPI"]),
                    year: 2024,
                    live_url: None,
                    source_url: None,
                },
                Project {
                    title: "Network Storage Monitoring".into(),
                    category: "Monitoring".into(),
                    description: "Monitored SAN, NAS, and switches using SNMP exporters and Entuity. \
                         Built Grafana dashboards for performance insight."
                        .into(),
                    technologies: owned(&[
                        "Grafana",
                        "SNMP Exporter",
                        "Cisco SAN",
                        "Entuity",
                    ]),
                    year: 2022,
                    live_url: None,
                    source_url: None,
                },
            ],
        }
    }

    /// # Filter Projects (`projects_in`)
    ///
    /// Returns the projects whose category matches `category`, preserving
    /// gallery order. The special [`ALL_CATEGORY`] filter returns every
    /// project. Matching is case-insensitive so query-string input doesn't
    /// have to reproduce display casing. An unknown category yields an empty
    /// list rather than an error.
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        if category.eq_ignore_ascii_case(ALL_CATEGORY) {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// # Filter Categories (`categories`)
    ///
    /// The filter-button list: [`ALL_CATEGORY`] first, then each distinct
    /// project category in order of first appearance in the gallery.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORY];
        for project in &self.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(project.category.as_str());
            }
        }
        categories
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::new()
    }
}
