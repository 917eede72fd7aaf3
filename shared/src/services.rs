use std::fmt;
use std::str::FromStr;

/// The four services offered in the tabbed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceTab {
    #[default]
    VideoEditing,
    ContentCreation,
    IdeaGeneration,
    FreelanceWriting,
}

/// Fixed copy revealed by a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

impl ServiceTab {
    /// Tabs in display order
    pub const ALL: [ServiceTab; 4] = [
        ServiceTab::VideoEditing,
        ServiceTab::ContentCreation,
        ServiceTab::IdeaGeneration,
        ServiceTab::FreelanceWriting,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceTab::VideoEditing => "video-editing",
            ServiceTab::ContentCreation => "content-creation",
            ServiceTab::IdeaGeneration => "idea-generation",
            ServiceTab::FreelanceWriting => "freelance-writing",
        }
    }

    pub fn label(&self) -> &'static str {
        self.card().title
    }

    pub fn card(&self) -> ServiceCard {
        match self {
            ServiceTab::VideoEditing => ServiceCard {
                title: "Video Editing",
                description: "Professional video editing services for all your needs.",
                body: "From short clips to feature-length films, I can help bring your vision to life.",
            },
            ServiceTab::ContentCreation => ServiceCard {
                title: "Content Creation",
                description: "Engaging content for your brand across all platforms.",
                body: "I create compelling content that resonates with your audience and drives engagement.",
            },
            ServiceTab::IdeaGeneration => ServiceCard {
                title: "Idea Generation",
                description: "Innovative ideas to help your business stand out.",
                body: "I offer creative brainstorming sessions to generate unique ideas for your projects.",
            },
            ServiceTab::FreelanceWriting => ServiceCard {
                title: "Freelance Writing",
                description: "High-quality writing for various purposes.",
                body: "From blog posts to technical documentation, I deliver clear and engaging written content.",
            },
        }
    }
}

impl fmt::Display for ServiceTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ServiceTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceTab::ALL
            .into_iter()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| format!("Unknown service tab: {}", s))
    }
}

/// Which service tab is showing. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    active: ServiceTab,
}

impl TabSelection {
    pub fn new(active: ServiceTab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ServiceTab {
        self.active
    }

    pub fn is_active(&self, tab: ServiceTab) -> bool {
        self.active == tab
    }

    /// Transition to `tab`, whatever the current state.
    pub fn select(self, tab: ServiceTab) -> Self {
        Self { active: tab }
    }
}
