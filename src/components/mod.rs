//! UI Components
//!
//! Leptos components for the three pages and their building blocks.

mod page_tab_bar;
mod question_list;
mod pager_controls;
mod score_panel;
mod status_banner;
mod questionnaire_page;
mod detect_page;
mod model_info;

pub use page_tab_bar::PageTabBar;
pub use question_list::QuestionList;
pub use pager_controls::PagerControls;
pub use score_panel::ScorePanel;
pub use status_banner::StatusBanner;
pub use questionnaire_page::QuestionnairePage;
pub use detect_page::DetectPage;
pub use model_info::ModelInfo;
