pub mod config;
pub mod contact;
pub mod logging;

pub use config::load_site_config;
pub use contact::{SubmissionBackend, UnwiredBackend};
pub use logging::Logger;
