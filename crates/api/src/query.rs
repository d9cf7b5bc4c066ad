//! Shared query parameter types for handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_inactive` flag.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// `?modal=true` renders the detail route as an image overlay.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub modal: bool,
}

/// `?add=true` opens the add-artwork dialog on the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub add: bool,
}
