use iced::widget::{button, container, pick_list, text_editor, text_input};
use iced::{Background, Border, Color, Theme};

use crate::highlight::TokenKind;
use crate::http::method::HttpMethod;
use crate::status::Outcome;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub const BG: Color = rgb(18, 21, 27);
pub const SURFACE_0: Color = rgb(20, 24, 32);
pub const SURFACE_1: Color = rgb(25, 30, 38);
pub const SURFACE_2: Color = rgb(31, 37, 46);
pub const SURFACE_3: Color = rgb(37, 45, 56);
pub const BORDER: Color = rgb(48, 58, 70);
pub const TEXT: Color = rgb(230, 236, 244);
pub const TEXT_MUTED: Color = rgb(132, 145, 160);
pub const PRIMARY: Color = rgb(58, 201, 111);
pub const PRIMARY_HOVER: Color = rgb(71, 214, 124);
pub const DANGER: Color = rgb(226, 92, 92);
const SELECTION: Color = Color { a: 0.35, ..PRIMARY };

pub const METHOD_GET: Color = rgb(73, 204, 144);
pub const METHOD_POST: Color = rgb(255, 176, 59);
pub const METHOD_PUT: Color = rgb(82, 167, 244);
pub const METHOD_PATCH: Color = rgb(180, 130, 240);
pub const METHOD_DELETE: Color = rgb(240, 92, 92);

pub const WARNING: Color = rgb(242, 196, 15);
pub const IDLE: Color = rgb(150, 158, 170);

pub const TOKEN_KEY: Color = rgb(137, 180, 250);
pub const TOKEN_STRING: Color = rgb(166, 218, 149);
pub const TOKEN_NUMBER: Color = rgb(245, 169, 127);
pub const TOKEN_BOOLEAN: Color = rgb(198, 160, 246);
pub const TOKEN_NULL: Color = rgb(237, 135, 150);

pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => METHOD_GET,
        HttpMethod::Post => METHOD_POST,
        HttpMethod::Put => METHOD_PUT,
        HttpMethod::Delete => METHOD_DELETE,
        HttpMethod::Patch => METHOD_PATCH,
    }
}

pub fn token_color(kind: TokenKind) -> Color {
    match kind {
        TokenKind::Key => TOKEN_KEY,
        TokenKind::String => TOKEN_STRING,
        TokenKind::Number => TOKEN_NUMBER,
        TokenKind::Boolean => TOKEN_BOOLEAN,
        TokenKind::Null => TOKEN_NULL,
        TokenKind::Punctuation | TokenKind::Whitespace | TokenKind::Other => TEXT_MUTED,
    }
}

pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Idle => IDLE,
        Outcome::Success => PRIMARY,
        Outcome::Error => DANGER,
    }
}

/// Badge colour by status class.
pub fn status_code_color(status: u16) -> Color {
    match status {
        200..=299 => PRIMARY,
        300..=399 => WARNING,
        400..=599 => DANGER,
        _ => TEXT,
    }
}

pub fn app_theme() -> Theme {
    Theme::custom(
        "Worker Tester".to_string(),
        iced::theme::Palette {
            background: BG,
            text: TEXT,
            primary: PRIMARY,
            success: PRIMARY,
            danger: DANGER,
        },
    )
}

pub fn surface_style(color: Color, border_radius: f32) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
        .border(Border {
            radius: border_radius.into(),
            width: 1.0,
            color: BORDER,
        })
}

pub fn flat_surface_style(color: Color) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => PRIMARY,
        button::Status::Hovered => PRIMARY_HOVER,
        button::Status::Pressed => PRIMARY,
        button::Status::Disabled => SURFACE_3,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            BG
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: bg,
        },
        shadow: Default::default(),
    }
}

pub fn subtle_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => SURFACE_2,
        button::Status::Hovered => SURFACE_3,
        button::Status::Pressed => SURFACE_3,
        button::Status::Disabled => SURFACE_1,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            TEXT
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Default::default(),
    }
}

pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => SURFACE_1,
        button::Status::Hovered => SURFACE_2,
        button::Status::Pressed => SURFACE_2,
        button::Status::Disabled => SURFACE_1,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: TEXT_MUTED,
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Default::default(),
    }
}

pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: SELECTION,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: SURFACE_3,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused => text_input::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn editor_style(_theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let base = text_editor::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: SELECTION,
    };

    match status {
        text_editor::Status::Active => base,
        text_editor::Status::Hovered => text_editor::Style {
            border: Border {
                color: SURFACE_3,
                ..base.border
            },
            ..base
        },
        text_editor::Status::Focused => text_editor::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_editor::Status::Disabled => text_editor::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn pick_list_style(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        text_color: TEXT,
        background: Background::Color(SURFACE_1),
        placeholder_color: TEXT_MUTED,
        handle_color: TEXT_MUTED,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered | pick_list::Status::Opened => pick_list::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
    }
}

/// Tinted pill used for status badges and vocabulary tags.
pub fn badge_style(color: Color) -> container::Style {
    container::Style::default()
        .background(Background::Color(Color { a: 0.15, ..color }))
        .color(color)
        .border(Border {
            radius: 10.0.into(),
            width: 1.0,
            color: Color { a: 0.4, ..color },
        })
}
