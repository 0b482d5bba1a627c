pub mod features;
pub mod footer;
pub mod hero;
pub mod motion;
pub mod projects_preview;
