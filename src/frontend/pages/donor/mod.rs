mod dashboard;
mod leaderboard;
mod notifications;
mod profile;

pub use dashboard::DonorDashboard;
pub use leaderboard::DonorLeaderboard;
pub use notifications::DonorNotifications;
pub use profile::DonorProfile;
