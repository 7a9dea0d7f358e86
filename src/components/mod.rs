//! UI Components

mod dashboard;
mod error_banner;
mod login_form;
mod new_todo_form;
mod signup_form;
mod todo_item;
mod todo_list;

pub use dashboard::Dashboard;
pub use error_banner::ErrorBanner;
pub use login_form::LoginForm;
pub use new_todo_form::NewTodoForm;
pub use signup_form::SignupForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
