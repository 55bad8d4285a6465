//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod empty_state;
mod layout;
mod loading;
mod login;
mod modal;
mod notice;
mod progress_bar;
mod project_card;
mod project_detail;
mod project_form;
mod project_list;
mod protected;
mod register;
mod task_form;
mod task_item;

pub use dashboard::Dashboard;
pub use empty_state::EmptyState;
pub use layout::Layout;
pub use loading::{CardSkeleton, Loading, PageLoading};
pub use login::Login;
pub use modal::Modal;
pub use notice::NoticeStrip;
pub use progress_bar::ProgressBar;
pub use project_card::ProjectCard;
pub use project_detail::ProjectDetail;
pub use project_form::ProjectForm;
pub use project_list::ProjectList;
pub use protected::Protected;
pub use register::Register;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
