//! Data model and page logic for the freelancer portfolio.
//!
//! Everything here is plain Rust so it can be exercised on the host; the
//! `frontend` crate turns it into markup.

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod lifecycle;
pub mod motion;
pub mod navigation;
pub mod scene;
pub mod services;

pub use config::{LogLevel, SiteConfig};
pub use contact::ContactSubmission;
pub use content::{
    Client, ContactCopy, ContentIssue, FooterContent, HeroContent, IconKind, Project, SiteContent,
    Skill, SocialLink,
};
pub use error::{ContactError, ContentError};
pub use lifecycle::MountPhase;
pub use motion::{Entrance, Motion, MotionStyle};
pub use navigation::Section;
pub use scene::{Camera, OrbitControls, SceneSpec};
pub use services::{ServiceCard, ServiceTab, TabSelection};
