use iced::alignment::Alignment;
use iced::widget::text::Span;
use iced::widget::{Column, button, column, container, rich_text, row, scrollable, span, text};
use iced::{Element, Font, Length};
use serde_json::Value;

use crate::clipboard::{CopyFeedback, CopyTarget};
use crate::highlight::tokenize;
use crate::http::response::{NormalizedResponse, Payload};
use crate::vocabulary::{self, VocabularyEntry};
use crate::Message;

use super::style;

pub fn view<'a>(
    response: &'a NormalizedResponse,
    show_headers: bool,
    copy_feedback: &CopyFeedback,
) -> Element<'a, Message> {
    let copy_button = button(text(copy_feedback.label()).size(12))
        .on_press(Message::CopyPressed(CopyTarget::Response))
        .padding([6, 12])
        .style(style::subtle_button);
    let download_button = button(text("Download").size(12))
        .on_press(Message::DownloadPressed)
        .padding([6, 12])
        .style(style::subtle_button);

    let status_color = style::status_code_color(response.http_status);
    let title = row![
        text("Response").size(16),
        container(text(response.status_line()).size(12).color(status_color))
            .padding([2, 8])
            .style(move |_| style::badge_style(status_color)),
        iced::widget::horizontal_space(),
        copy_button,
        download_button,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body = scrollable(
        container(body_view(&response.payload))
            .padding(12)
            .width(Length::Fill)
            .style(|_| style::surface_style(style::SURFACE_1, 8.0)),
    )
    .height(Length::Fixed(420.0));

    let summary = row![
        text(format!("Response time: {} ms", response.elapsed_ms)).size(12),
        text(format!("Size: {}", response.size_label)).size(12),
        iced::widget::horizontal_space(),
        text(content_type_label(response)).size(12).color(style::TEXT_MUTED),
    ]
    .spacing(16);

    column![title, body, summary, headers_view(&response.headers, show_headers)]
        .spacing(10)
        .into()
}

fn content_type_label(response: &NormalizedResponse) -> String {
    if response.content_type.is_empty() {
        "no content-type".to_string()
    } else {
        response.content_type.clone()
    }
}

fn body_view<'a>(payload: &'a Payload) -> Element<'a, Message> {
    match payload {
        Payload::Json(value) => match vocabulary::entries(value) {
            Some(entries) => entries_view(entries),
            None => json_view(value),
        },
        Payload::Text(raw) => plain_text_view(raw),
    }
}

fn entries_view<'a>(entries: Vec<VocabularyEntry>) -> Element<'a, Message> {
    Column::with_children(entries.into_iter().map(entry_view))
        .spacing(12)
        .into()
}

fn entry_view<'a>(entry: VocabularyEntry) -> Element<'a, Message> {
    let mut heading = row![text(entry.word).size(18).color(style::PRIMARY)]
        .spacing(8)
        .align_y(Alignment::Center);
    if let Some(kind) = entry.kind {
        heading = heading.push(tag(kind, style::TOKEN_KEY));
    }

    let mut card = column![
        heading,
        text("Meaning:").size(12).color(style::TEXT_MUTED),
        text(entry.meaning).size(14),
    ]
    .spacing(4);

    if !entry.examples.is_empty() {
        card = card.push(text("Examples:").size(12).color(style::TEXT_MUTED));
        for example in entry.examples {
            card = card.push(text(format!("•  {example}")).size(13));
        }
    }

    if !entry.synonyms.is_empty() {
        let mut tags = row![text("Synonyms:").size(12).color(style::TEXT_MUTED)]
            .spacing(6)
            .align_y(Alignment::Center);
        for synonym in entry.synonyms {
            tags = tags.push(tag(synonym, style::TOKEN_BOOLEAN));
        }
        card = card.push(tags);
    }

    container(card)
        .padding(12)
        .width(Length::Fill)
        .style(|_| style::surface_style(style::SURFACE_2, 8.0))
        .into()
}

fn tag<'a>(label: String, color: iced::Color) -> Element<'a, Message> {
    container(text(label).size(11).color(color))
        .padding([2, 8])
        .style(move |_| style::badge_style(color))
        .into()
}

fn json_view<'a>(value: &Value) -> Element<'a, Message> {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    let spans: Vec<Span<'a, Message>> = tokenize(&pretty)
        .into_iter()
        .map(|token| {
            span(token.text.to_string())
                .color(style::token_color(token.kind))
                .font(Font::MONOSPACE)
        })
        .collect();

    rich_text(spans).size(13).into()
}

fn plain_text_view<'a>(raw: &'a str) -> Element<'a, Message> {
    if raw.is_empty() {
        return text("(empty body)").size(13).color(style::TEXT_MUTED).into();
    }

    Column::with_children(
        plain_text_lines(raw)
            .into_iter()
            .map(|line| text(line).size(13).font(Font::MONOSPACE).into()),
    )
    .spacing(2)
    .into()
}

/// Splits on literal newlines; `- ` and `* ` prefixes become bullets.
fn plain_text_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
                Some(item) => format!("•  {item}"),
                None => line.to_string(),
            }
        })
        .collect()
}

fn headers_view<'a>(headers: &'a [(String, String)], expanded: bool) -> Element<'a, Message> {
    let label = if expanded {
        "Hide headers".to_string()
    } else {
        format!("Show headers ({})", headers.len())
    };
    let toggle = button(text(label).size(12))
        .on_press(Message::HeadersToggled)
        .padding([6, 10])
        .style(style::ghost_button);

    if !expanded {
        return toggle.into();
    }

    let rows = headers.iter().map(|(name, value)| {
        row![
            text(name.as_str()).size(12).color(style::TOKEN_KEY).width(Length::FillPortion(1)),
            text(value.as_str()).size(12).width(Length::FillPortion(2)),
        ]
        .spacing(8)
        .into()
    });

    column![
        toggle,
        container(Column::with_children(rows).spacing(4))
            .padding(10)
            .width(Length::Fill)
            .style(|_| style::surface_style(style::SURFACE_1, 8.0)),
    ]
    .spacing(6)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dash_and_star_lines_become_bullets() {
        assert_eq!(
            plain_text_lines("intro\n- a\n  * b\nplain"),
            vec!["intro", "•  a", "•  b", "plain"]
        );
    }

    #[test]
    fn crlf_endings_are_split_like_newlines() {
        assert_eq!(plain_text_lines("one\r\n- two\r\n"), vec!["one", "•  two"]);
    }

    #[test]
    fn markers_without_a_space_stay_as_text() {
        assert_eq!(plain_text_lines("-5 degrees\n*bold*"), vec!["-5 degrees", "*bold*"]);
    }

    #[test]
    fn empty_body_has_no_lines() {
        assert!(plain_text_lines("").is_empty());
    }
}
