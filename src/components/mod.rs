//! UI Components
//!
//! Reusable Leptos components.

mod todo_item;
mod new_todo_form;
mod todo_list_view;
mod theme_toggle;
mod clear_all_button;
mod storage_warning;

pub use todo_item::TodoItem;
pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use theme_toggle::ThemeToggle;
pub use clear_all_button::ClearAllButton;
pub use storage_warning::StorageWarning;
