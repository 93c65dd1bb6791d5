use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// User role, determining which dashboard set a user is intended to see.
///
/// The routing layer does not enforce reachability by role; the role only
/// drives which navigation links are rendered and where the auth pages
/// redirect after login.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Public,
    Donor,
    CampaignLeader,
    Admin,
}

impl Role {
    /// Roles selectable on the login/register forms.
    pub const SELECTABLE: [Role; 3] = [Role::Donor, Role::CampaignLeader, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Donor => "donor",
            Role::CampaignLeader => "campaign-leader",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Public => "Public",
            Role::Donor => "Donor",
            Role::CampaignLeader => "Campaign Leader",
            Role::Admin => "Admin",
        }
    }

    /// Fixed demo-account display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Donor => "John Donor",
            Role::CampaignLeader => "Sarah Leader",
            Role::Admin => "Admin User",
            Role::Public => "Public User",
        }
    }

    /// Landing page after a successful login with this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Donor => "/donor/dashboard",
            Role::CampaignLeader => "/leader/dashboard",
            Role::Admin => "/admin/dashboard",
            Role::Public => "/",
        }
    }

    /// Parses a role string, falling back to `Donor` for anything
    /// unrecognized. This is the defaulting rule for the login page's
    /// optional `role` query parameter.
    pub fn parse_or_donor(s: &str) -> Role {
        s.parse().unwrap_or(Role::Donor)
    }
}

impl FromStr for Role {
    type Err = crate::common::AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Role::Public),
            "donor" => Ok(Role::Donor),
            "campaign-leader" => Ok(Role::CampaignLeader),
            "admin" => Ok(Role::Admin),
            other => Err(crate::common::AuthError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
