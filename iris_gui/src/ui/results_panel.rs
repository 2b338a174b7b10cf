//! Results Panel (Right)
//!
//! Shows exactly one of: idle hint, loading indicator, prediction, error.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use iris_core::render::{ErrorView, ResultView};
use iris_core::UiState;

use crate::Message;

/// Render the results panel for the current request state
pub fn view_results_panel(state: &UiState) -> Element<'_, Message> {
    let content: Column<'_, Message> = match state {
        UiState::Idle => column![
            text("Result").size(14),
            Space::new().height(8),
            text("Enter measurements or load a sample, then press Classify.")
                .size(11)
                .color([0.5, 0.5, 0.5]),
        ],
        UiState::Loading => column![
            text("Result").size(14),
            Space::new().height(8),
            text("Classifying...").size(12),
        ],
        UiState::ResultShown(result) => view_result(ResultView::from_result(result)),
        UiState::ErrorShown(error) => view_error(ErrorView::from_error(error)),
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(55))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_result(view: ResultView) -> Column<'static, Message> {
    let mut content = column![
        text("Result").size(14),
        Space::new().height(8),
        text(view.species_label.clone()).size(22).color([0.2, 0.6, 0.2]),
        text(view.confidence_text.clone()).size(13),
        Space::new().height(6),
        text(view.description.clone()).size(11).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);

    if !view.probabilities.is_empty() {
        content = content.push(Space::new().height(12)).push(text("Probabilities").size(12));
        for row in &view.probabilities {
            content = content.push(text(row.text.clone()).size(11));
        }
    }

    let metadata = view.metadata_lines();
    if !metadata.is_empty() {
        content = content.push(Space::new().height(12)).push(text("Details").size(12));
        for line in metadata {
            content = content.push(text(line.to_string()).size(10).color([0.5, 0.5, 0.5]));
        }
    }

    content
}

fn view_error(view: ErrorView) -> Column<'static, Message> {
    let mut content = column![
        text("Error").size(14),
        Space::new().height(8),
        text(view.headline).size(13).color([0.8, 0.2, 0.2]),
    ];
    if let Some(detail) = view.detail {
        content = content.push(text(detail).size(11).color([0.8, 0.2, 0.2]));
    }
    if let Some(hint) = view.retry_hint {
        content = content
            .push(Space::new().height(6))
            .push(text(hint).size(11).color([0.5, 0.5, 0.5]));
    }
    content
}
