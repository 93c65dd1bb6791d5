/// A fundraising campaign as shown in the public listings. Pages embed
/// their own fixture arrays of these; there is no shared campaign store.
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub raised: u64,
    pub goal: u64,
    pub donors: u32,
    pub days_left: u32,
    pub image: &'static str,
}

impl Campaign {
    /// Funding progress in percent, capped at 100.
    pub fn progress(&self) -> u32 {
        if self.goal == 0 {
            return 0;
        }
        (((self.raised as f64 / self.goal as f64) * 100.0) as u32).min(100)
    }
}

/// A single donation row on the donor dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct Donation {
    pub campaign: &'static str,
    pub amount: u64,
    pub date: &'static str,
    pub status: &'static str,
}

/// Notification shown on the donor notifications page.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub read: bool,
}

/// Row on the donor leaderboard.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub total_donated: u64,
    pub campaigns_supported: u32,
}

/// Summary tile rendered at the top of each dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// A user row in the admin user-management table.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformUser {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub joined: &'static str,
    pub status: &'static str,
}

/// A flagged-content report row on the admin dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct FlaggedReport {
    pub title: &'static str,
    pub target: &'static str,
    pub severity: &'static str,
    pub reported: &'static str,
}
