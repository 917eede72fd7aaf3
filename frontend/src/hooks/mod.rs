pub mod use_mount_phase;
pub mod use_tab_selection;

pub use use_mount_phase::use_mount_phase;
pub use use_tab_selection::{use_tab_selection, UseTabSelectionResult};
