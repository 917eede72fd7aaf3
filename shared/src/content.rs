use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph shown next to a skill. Rendered as a Font Awesome icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Video,
    PenTool,
    Lightbulb,
    MessageSquare,
    Code,
}

impl IconKind {
    /// Font Awesome class for the glyph
    pub fn css_class(&self) -> &'static str {
        match self {
            IconKind::Video => "fas fa-video",
            IconKind::PenTool => "fas fa-pen-nib",
            IconKind::Lightbulb => "fas fa-lightbulb",
            IconKind::MessageSquare => "fas fa-message",
            IconKind::Code => "fas fa-code",
        }
    }
}

/// A skill shown in the about section with its proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, expected in 0..=100 but not enforced
    pub progress: u8,
    pub icon: IconKind,
}

impl Skill {
    pub fn new(name: &str, progress: u8, icon: IconKind) -> Self {
        Self {
            name: name.to_string(),
            progress,
            icon,
        }
    }

    /// Portion of the progress track that is filled.
    pub fn fill_fraction(&self) -> f64 {
        f64::from(self.progress) / 100.0
    }

    /// Label shown at the end of the row, e.g. "90%"
    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Absolute URL of the cover image
    pub image: String,
}

impl Project {
    pub fn new(title: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Client(pub String);

impl Client {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub heading: String,
    pub intro: String,
    /// Text extruded in the 3D scene
    pub scene_label: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            heading: "Hi, I'm a Versatile Freelancer".to_string(),
            intro: "I'm a freelancer who can do many things\u{2014}editing, content creation, idea generation, and more.".to_string(),
            scene_label: "Freelancer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub copyright: String,
    pub social_links: Vec<SocialLink>,
}

impl Default for FooterContent {
    fn default() -> Self {
        let social = |label: &str| SocialLink {
            label: label.to_string(),
            href: "#".to_string(),
        };
        Self {
            copyright: "\u{a9} 2023 Freelancer Portfolio. All rights reserved.".to_string(),
            social_links: vec![social("Twitter"), social("LinkedIn"), social("GitHub")],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub title: String,
    pub description: String,
}

impl Default for ContactCopy {
    fn default() -> Self {
        Self {
            title: "Get in Touch".to_string(),
            description: "Fill out the form below to contact me about your project.".to_string(),
        }
    }
}

/// Everything the page displays. Built once at startup and shared
/// read-only for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub contact: ContactCopy,
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteContent {
    /// The portfolio's stock content: 5 skills, 3 projects, 5 clients.
    pub fn builtin() -> Self {
        Self {
            hero: HeroContent::default(),
            skills: vec![
                Skill::new("Video Editing", 90, IconKind::Video),
                Skill::new("Content Creation", 85, IconKind::PenTool),
                Skill::new("Idea Generation", 95, IconKind::Lightbulb),
                Skill::new("Freelance Writing", 80, IconKind::MessageSquare),
                Skill::new("Coding", 75, IconKind::Code),
            ],
            projects: vec![
                Project::new(
                    "Video Campaign",
                    "Created a viral video campaign for a tech startup",
                    "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
                ),
                Project::new(
                    "Content Strategy",
                    "Developed a comprehensive content strategy for a lifestyle brand",
                    "https://images.unsplash.com/photo-1512314889357-e157c22f938d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
                ),
                Project::new(
                    "Web Development",
                    "Built a responsive website for a local business",
                    "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
                ),
            ],
            clients: ["TechCorp", "LifestyleBrand", "LocalBiz", "StartupX", "MediaGroup"]
                .into_iter()
                .map(|name| Client(name.to_string()))
                .collect(),
            contact: ContactCopy::default(),
            footer: FooterContent::default(),
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Report content that will render oddly. Nothing here stops rendering.
    pub fn diagnose(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for skill in &self.skills {
            if skill.progress > 100 {
                issues.push(ContentIssue::ProgressOutOfRange {
                    skill: skill.name.clone(),
                    progress: skill.progress,
                });
            }
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                issues.push(ContentIssue::EmptyProjectTitle { index });
            }
        }

        for (index, client) in self.clients.iter().enumerate() {
            if client.name().trim().is_empty() {
                issues.push(ContentIssue::EmptyClientName { index });
            }
        }

        issues
    }
}

/// Non-fatal problem found in the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    ProgressOutOfRange { skill: String, progress: u8 },
    EmptyProjectTitle { index: usize },
    EmptyClientName { index: usize },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::ProgressOutOfRange { skill, progress } => {
                write!(f, "skill '{}' has progress {} outside 0-100", skill, progress)
            }
            ContentIssue::EmptyProjectTitle { index } => {
                write!(f, "project #{} has an empty title", index)
            }
            ContentIssue::EmptyClientName { index } => {
                write!(f, "client #{} has an empty name", index)
            }
        }
    }
}
