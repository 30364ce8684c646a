//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod lists_page;
mod login_form;
mod nav_bar;
mod new_task_form;
mod progress_bar;
mod register_form;
mod task_list_view;
mod task_row;
mod toast_host;

pub use delete_confirm_button::DeleteConfirmButton;
pub use lists_page::ListsPage;
pub use login_form::LoginPage;
pub use nav_bar::NavBar;
pub use new_task_form::NewTaskForm;
pub use progress_bar::ProgressBar;
pub use register_form::RegisterPage;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use toast_host::ToastHost;
