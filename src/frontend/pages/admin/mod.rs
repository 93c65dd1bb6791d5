mod campaigns;
mod dashboard;
mod reports;
mod users;

pub use campaigns::CampaignManagement;
pub use dashboard::AdminDashboard;
pub use reports::PlatformReports;
pub use users::UserManagement;
