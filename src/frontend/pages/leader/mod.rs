mod analytics;
mod create_campaign;
mod dashboard;
mod my_campaigns;

pub use analytics::LeaderAnalytics;
pub use create_campaign::CreateCampaign;
pub use dashboard::LeaderDashboard;
pub use my_campaigns::MyCampaigns;
