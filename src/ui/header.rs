use iced::alignment::Alignment;
use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::Message;

use super::style;

pub fn view<'a>() -> Element<'a, Message> {
    container(
        row![
            column![
                text("Worker Tester").size(20),
                text("Test your Cloudflare Worker API responses")
                    .size(12)
                    .color(style::TEXT_MUTED),
            ]
            .spacing(2),
            iced::widget::horizontal_space(),
            text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color(style::TEXT_MUTED),
        ]
        .spacing(8)
        .padding([12, 16])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 0.0))
    .into()
}
