use chrono::{DateTime, Local};
use iced::alignment::Alignment;
use iced::widget::{button, column, container, pick_list, row, text, text_editor, text_input};
use iced::{Element, Font, Length};

use crate::format::format_time;
use crate::http::method::HttpMethod;
use crate::{CategoryOption, Message};

use super::style;

pub struct RequestPanelState<'a> {
    pub method: HttpMethod,
    pub url: &'a str,
    pub category: CategoryOption,
    pub body_editor: &'a text_editor::Content,
    pub show_options: bool,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub last_tested: Option<&'a DateTime<Local>>,
}

pub fn view<'a>(state: RequestPanelState<'a>) -> Element<'a, Message> {
    let options_toggle = button(text(if state.show_options { "Hide Options" } else { "Show Options" }).size(12))
        .on_press(Message::OptionsToggled)
        .padding([6, 10])
        .style(style::ghost_button);

    let send_button = button(text(if state.loading { "Testing..." } else { "Test Worker" }).size(14))
        .on_press_maybe((!state.loading).then_some(Message::SendPressed))
        .padding([8, 16])
        .style(style::primary_button);

    let title_row = row![
        text("Test Your Worker").size(16),
        iced::widget::horizontal_space(),
        options_toggle,
        send_button,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let method_picklist = pick_list(&HttpMethod::ALL[..], Some(state.method), Message::MethodSelected)
        .width(120)
        .padding([8, 10])
        .style(style::pick_list_style);

    let url_input = text_input("Enter endpoint URL", state.url)
        .on_input(Message::UrlChanged)
        .padding(10)
        .size(14)
        .width(Length::Fill)
        .style(style::input_style);

    let mut panel = column![
        title_row,
        row![
            text(state.method.to_string()).size(12).color(style::method_color(state.method)),
            method_picklist,
            url_input
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    ]
    .spacing(12);

    if state.show_options {
        panel = panel.push(options_view(&state));
    }

    if state.loading {
        panel = panel.push(
            container(text("Fetching response...").size(13).color(style::TEXT_MUTED))
                .padding(12)
                .center_x(Length::Fill),
        );
    }

    if let Some(err) = state.error {
        panel = panel.push(error_banner(err));
    }

    if let Some(time) = state.last_tested {
        panel = panel.push(
            text(format!("Last tested at {}", format_time(time)))
                .size(11)
                .color(style::TEXT_MUTED),
        );
    }

    container(panel)
        .padding(12)
        .width(Length::Fill)
        .style(|_| style::surface_style(style::SURFACE_0, 8.0))
        .into()
}

fn options_view<'a>(state: &RequestPanelState<'a>) -> Element<'a, Message> {
    let category_picklist = pick_list(&CategoryOption::ALL[..], Some(state.category), Message::CategorySelected)
        .width(180)
        .padding([6, 8])
        .style(style::pick_list_style);

    let category_note = if state.category.category().is_some() {
        "Sends POST {\"type\": ...}; method and body are ignored"
    } else {
        "Pick a category to request vocabulary by type"
    };

    let body_disabled = !state.method.allows_body() || state.category.category().is_some();
    let body_label = if state.method.allows_body() {
        "Request Body".to_string()
    } else {
        "Request Body (not used for GET requests)".to_string()
    };

    let mut editor = text_editor(state.body_editor)
        .placeholder("Enter request body (JSON or plain text)")
        .font(Font::MONOSPACE)
        .height(120)
        .style(style::editor_style);
    if !body_disabled {
        editor = editor.on_action(Message::BodyEdited);
    }

    column![
        row![
            text("Category").size(12).color(style::TEXT_MUTED),
            category_picklist,
            text(category_note).size(11).color(style::TEXT_MUTED),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        text(body_label).size(12),
        editor,
        text("For JSON, the format is detected automatically and the Content-Type header is set to match.")
            .size(11)
            .color(style::TEXT_MUTED),
    ]
    .spacing(6)
    .into()
}

fn error_banner<'a>(err: &'a str) -> Element<'a, Message> {
    container(
        column![
            text("Error: Failed to fetch").size(13).color(style::DANGER),
            text(err).size(12).color(style::DANGER),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(|_| style::badge_style(style::DANGER))
    .into()
}
