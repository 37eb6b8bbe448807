//! The six v1 endpoint classes and their fixed dispatch order.

use std::fmt;

/// One of the six v1 scheduled-change endpoint classes.
///
/// `RequiredSignoffs` is parameterised by the path segment that follows
/// `required_signoffs/` in the admin service's URL space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V1Class {
    RequiredSignoffsProduct,
    RequiredSignoffsPermissions,
    Permissions,
    Rules,
    Releases,
    EmergencyShutoff,
}

impl V1Class {
    /// The fixed cross-class dispatch order mandated by the admin
    /// service's dependency chain: sign-off policy and permissions must
    /// change before the rules that depend on them, rules before releases,
    /// and emergency shutoffs last since they are terminal.
    pub const DISPATCH_ORDER: [Self; 6] = [
        Self::RequiredSignoffsProduct,
        Self::RequiredSignoffsPermissions,
        Self::Permissions,
        Self::Rules,
        Self::Releases,
        Self::EmergencyShutoff,
    ];

    /// The admin-service inventory path for this class.
    pub const fn inventory_path(self) -> &'static str {
        match self {
            Self::RequiredSignoffsProduct => "/scheduled_changes/required_signoffs/product",
            Self::RequiredSignoffsPermissions => "/scheduled_changes/required_signoffs/permissions",
            Self::Permissions => "/scheduled_changes/permissions",
            Self::Rules => "/scheduled_changes/rules",
            Self::Releases => "/scheduled_changes/releases",
            Self::EmergencyShutoff => "/scheduled_changes/emergency_shutoff",
        }
    }

    /// The path segment the admin service uses in enact URLs:
    /// `/scheduled_changes/<segment>/<sc_id>/enact`.
    pub const fn enact_segment(self) -> &'static str {
        match self {
            Self::RequiredSignoffsProduct => "required_signoffs/product",
            Self::RequiredSignoffsPermissions => "required_signoffs/permissions",
            Self::Permissions => "permissions",
            Self::Rules => "rules",
            Self::Releases => "releases",
            Self::EmergencyShutoff => "emergency_shutoff",
        }
    }

    /// Whether this class carries the `rules`-only `priority` tie-break
    /// in its within-class sort (see [`crate::services::v1_planner::sort_class`]).
    pub const fn is_rules(self) -> bool {
        matches!(self, Self::Rules)
    }
}

impl fmt::Display for V1Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.enact_segment())
    }
}
