//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod json_widget;
mod modal;
mod model_picker;
mod nav_bar;
mod query_card;
mod question_card;
mod result_cell;
mod stat_cards;
mod tag_input;
mod track_button;

pub use delete_confirm_button::DeleteConfirmButton;
pub use json_widget::JsonWidget;
pub use modal::Modal;
pub use model_picker::ModelPicker;
pub use nav_bar::NavBar;
pub use query_card::QueryCardView;
pub use question_card::QuestionCard;
pub use result_cell::ResultCell;
pub use stat_cards::StatCardsView;
pub use tag_input::TagInput;
pub use track_button::TrackButton;
