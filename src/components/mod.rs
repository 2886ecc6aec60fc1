//! UI Components
//!
//! Reusable Leptos components.

mod candidate_card;
mod home_page;
mod interview_page;
mod result_page;
mod service_panel;

pub use candidate_card::CandidateCard;
pub use home_page::HomePage;
pub use interview_page::InterviewPage;
pub use result_page::ResultPage;
pub use service_panel::ServicePanel;
