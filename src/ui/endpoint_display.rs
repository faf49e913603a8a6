use iced::alignment::Alignment;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Font, Length};

use crate::clipboard::{CopyFeedback, CopyTarget};
use crate::Message;

use super::style;

pub fn view<'a>(endpoint: &'a str, feedback: &CopyFeedback) -> Element<'a, Message> {
    let copy = button(text(feedback.label()).size(12))
        .on_press(Message::CopyPressed(CopyTarget::Endpoint))
        .padding([6, 12])
        .style(style::subtle_button);

    container(
        row![
            column![
                text("ENDPOINT").size(11).color(style::TEXT_MUTED),
                text(endpoint).size(14).font(Font::MONOSPACE),
            ]
            .spacing(4)
            .width(Length::Fill),
            copy,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 8.0))
    .into()
}
