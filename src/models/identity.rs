use serde::{Deserialize, Serialize};

use crate::models::Role;

/// The fabricated record representing a logged-in user. Exists only in the
/// session store; destroyed on logout or app reload.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

impl Identity {
    /// Avatar URL derived from a display name, matching the placeholder
    /// service the mock accounts use.
    pub fn avatar_for(name: &str) -> String {
        let encoded: String = name
            .chars()
            .map(|c| if c == ' ' { "%20".to_string() } else { c.to_string() })
            .collect();
        format!("https://ui-avatars.com/api/?name={encoded}&background=4F46E5&color=fff")
    }
}
