//! URLs shared between front- and backend
//!
//! for consistency, all urls in this module always start with a /

/// Everything that belongs to the panel is mounted below this prefix
pub const PANEL_BASE_URL: &str = "/panel";
