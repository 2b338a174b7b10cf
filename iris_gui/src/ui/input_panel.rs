//! Input Panel (Left)
//!
//! Four measurement fields, one preset button per species, and the
//! classify button. The button is disabled while a request is in flight.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use iris_core::{ClassificationFlow, MeasurementField, Species};

use crate::Message;

/// Render the measurement form
pub fn view_input_panel(flow: &ClassificationFlow) -> Element<'_, Message> {
    let mut fields: Column<'_, Message> = Column::new().spacing(6);
    for field in MeasurementField::ALL {
        fields = fields.push(labeled_input(field, flow.inputs().get(field)));
    }

    let sample_row: Row<'_, Message> = Row::new().spacing(4);
    let samples = Species::ALL.iter().fold(sample_row, |r, species| {
        r.push(
            button(text(species.display_name()).size(11))
                .on_press(Message::LoadSample(*species))
                .padding(Padding::from([4, 8]))
                .style(button::secondary),
        )
    });

    let classify_label = if flow.is_loading() { "Classifying..." } else { "Classify" };
    let classify = button(text(classify_label).size(12))
        .on_press_maybe(flow.can_submit().then_some(Message::Submit))
        .padding(Padding::from([6, 16]))
        .style(button::primary);

    let panel = column![
        text("Flower Measurements").size(14),
        Space::new().height(8),
        fields,
        Space::new().height(12),
        text("Load sample:").size(11),
        samples,
        Space::new().height(15),
        classify,
    ]
    .padding(8);

    container(scrollable(panel))
        .width(Length::FillPortion(45))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled measurement input
fn labeled_input(field: MeasurementField, value: &str) -> Element<'_, Message> {
    row![
        text(format!("{} ({}):", field.label(), field.unit()))
            .size(11)
            .width(Length::Fixed(130.0)),
        text_input("0.0", value)
            .on_input(move |s| Message::FieldChanged(field, s))
            .on_submit(Message::Submit)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
