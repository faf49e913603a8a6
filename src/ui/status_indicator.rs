use iced::alignment::Alignment;
use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::format::format_time;
use crate::status::StatusView;
use crate::Message;

use super::style;

pub fn view<'a>(status: StatusView) -> Element<'a, Message> {
    let color = style::outcome_color(status.outcome);

    let mut line = row![
        text(status.outcome.glyph()).size(14).color(color),
        text(status.outcome.label()).size(12).color(color),
        text(status.message).size(13),
        iced::widget::horizontal_space(),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    if let Some(time) = status.time {
        line = line.push(text(format_time(&time)).size(12).color(style::TEXT_MUTED));
    }

    line = line.push(
        button(text("Reset").size(11))
            .on_press(Message::StatusResetPressed)
            .padding([4, 8])
            .style(style::ghost_button),
    );

    container(line)
        .padding(10)
        .width(Length::Fill)
        .style(|_| style::surface_style(style::SURFACE_1, 8.0))
        .into()
}
