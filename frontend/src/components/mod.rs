pub mod about_section;
pub mod clients_section;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod motion;
pub mod page;
pub mod projects_section;
pub mod scene_canvas;
pub mod services_section;
pub mod skill_row;

pub use page::PortfolioPage;
