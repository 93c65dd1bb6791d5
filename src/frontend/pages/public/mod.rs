mod about;
mod campaign_details;
mod campaign_list;
mod contact;
mod donate;
mod donation_confirmation;
mod help;
mod home;
mod impact;
mod policies;

pub use about::AboutPage;
pub use campaign_details::CampaignDetailsPage;
pub use campaign_list::CampaignListPage;
pub use contact::ContactPage;
pub use donate::DonatePage;
pub use donation_confirmation::DonationConfirmationPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use impact::ImpactPage;
pub use policies::PoliciesPage;
