//! Status Bar (Bottom)
//!
//! Displays the prediction endpoint and the current request state.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use iris_core::UiState;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(endpoint: &'a str, state: &UiState) -> Element<'a, Message> {
    row![
        text(endpoint).size(10),
        Space::new().width(Length::Fill),
        text(state.name()).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
