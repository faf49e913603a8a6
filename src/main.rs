mod clipboard;
mod config;
mod download;
mod format;
mod highlight;
mod http;
mod status;
mod ui;
mod vocabulary;

use std::fmt::{self, Display};
use std::path::PathBuf;

use chrono::{DateTime, Local};
use iced::widget::{column, container, scrollable, text_editor};
use iced::{Element, Length, Task};
use tracing::{debug, info, warn};
use ui::style;

use clipboard::{CopyFeedback, CopyTarget};
use config::AppConfig;
use http::client::send_request;
use http::error::RequestError;
use http::method::HttpMethod;
use http::request::{Category, RequestConfig};
use http::response::NormalizedResponse;
use status::{Outcome, StatusChannel, StatusIndicator, StatusNotification, StatusProps};

fn main() -> iced::Result {
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Some(err) = config_error {
        warn!("{err}; falling back to defaults");
    }
    info!(endpoint = %config.endpoint, "starting worker tester");

    let window_size = (config.window_width, config.window_height);
    iced::application("Worker Tester", update, view)
        .theme(|_| style::app_theme())
        .window_size(window_size)
        .run_with(move || (App::new(config), Task::none()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOption {
    None,
    Nouns,
    Verbs,
    Idioms,
}

impl CategoryOption {
    pub const ALL: [CategoryOption; 4] = [
        CategoryOption::None,
        CategoryOption::Nouns,
        CategoryOption::Verbs,
        CategoryOption::Idioms,
    ];

    pub fn category(self) -> Option<Category> {
        match self {
            CategoryOption::None => None,
            CategoryOption::Nouns => Some(Category::Nouns),
            CategoryOption::Verbs => Some(Category::Verbs),
            CategoryOption::Idioms => Some(Category::Idioms),
        }
    }
}

impl Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            Some(category) => write!(f, "{category}"),
            None => write!(f, "No Category"),
        }
    }
}

struct App {
    config: AppConfig,
    method: HttpMethod,
    url: String,
    category: CategoryOption,
    body_editor: text_editor::Content,
    show_options: bool,
    show_headers: bool,
    loading: bool,
    error: Option<String>,
    response: Option<NormalizedResponse>,
    last_tested: Option<DateTime<Local>>,
    endpoint_copy: CopyFeedback,
    response_copy: CopyFeedback,
    status_channel: StatusChannel,
    status: StatusIndicator,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let status_channel = StatusChannel::new();
        let status = StatusIndicator::new(&status_channel, StatusProps::default());

        Self {
            url: config.endpoint.clone(),
            config,
            method: HttpMethod::Get,
            category: CategoryOption::None,
            body_editor: text_editor::Content::new(),
            show_options: false,
            show_headers: false,
            loading: false,
            error: None,
            response: None,
            last_tested: None,
            endpoint_copy: CopyFeedback::default(),
            response_copy: CopyFeedback::default(),
            status_channel,
            status,
        }
    }

    fn request_config(&self) -> RequestConfig {
        RequestConfig {
            endpoint: self.url.clone(),
            method: self.method,
            body: self.body_editor.text(),
            selected_category: self.category.category(),
        }
    }

    fn copy_feedback_mut(&mut self, target: CopyTarget) -> &mut CopyFeedback {
        match target {
            CopyTarget::Endpoint => &mut self.endpoint_copy,
            CopyTarget::Response => &mut self.response_copy,
        }
    }

    fn fail(&mut self, err: &RequestError) {
        warn!("request failed: {err}");
        self.error = Some(err.to_string());
        self.status_channel
            .publish(StatusNotification::now(Outcome::Error, format!("Request failed: {err}")));
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    MethodSelected(HttpMethod),
    UrlChanged(String),
    CategorySelected(CategoryOption),
    BodyEdited(text_editor::Action),
    OptionsToggled,
    HeadersToggled,
    SendPressed,
    RequestFinished(Result<NormalizedResponse, RequestError>),
    CopyPressed(CopyTarget),
    CopyExpired { target: CopyTarget, generation: u64 },
    DownloadPressed,
    DownloadFinished(Result<Option<PathBuf>, String>),
    StatusResetPressed,
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::MethodSelected(method) => {
            app.method = method;
            Task::none()
        }
        Message::UrlChanged(url) => {
            app.url = url;
            Task::none()
        }
        Message::CategorySelected(category) => {
            app.category = category;
            Task::none()
        }
        Message::BodyEdited(action) => {
            app.body_editor.perform(action);
            Task::none()
        }
        Message::OptionsToggled => {
            app.show_options = !app.show_options;
            Task::none()
        }
        Message::HeadersToggled => {
            app.show_headers = !app.show_headers;
            Task::none()
        }
        Message::SendPressed => {
            if app.loading {
                return Task::none();
            }

            let prepared = match app.request_config().prepare() {
                Ok(prepared) => prepared,
                Err(err) => {
                    app.fail(&err);
                    return Task::none();
                }
            };

            app.loading = true;
            app.error = None;
            app.response = None;
            app.show_headers = false;

            Task::perform(send_request(prepared), Message::RequestFinished)
        }
        Message::RequestFinished(result) => {
            app.loading = false;
            app.last_tested = Some(Local::now());

            match result {
                Ok(response) => {
                    debug!(status = response.http_status, elapsed_ms = response.elapsed_ms, "request finished");
                    app.status_channel.publish(completion_status(&response));
                    app.response = Some(response);
                }
                Err(err) => app.fail(&err),
            }

            Task::none()
        }
        Message::CopyPressed(target) => {
            let contents = match target {
                CopyTarget::Endpoint => app.config.endpoint.clone(),
                CopyTarget::Response => match &app.response {
                    Some(response) => response.payload.display_text(),
                    None => return Task::none(),
                },
            };

            debug!(?target, bytes = contents.len(), "copying to clipboard");
            let generation = app.copy_feedback_mut(target).start();

            Task::batch([
                iced::clipboard::write(contents),
                Task::perform(clipboard::expire_after(generation), move |generation| {
                    Message::CopyExpired { target, generation }
                }),
            ])
        }
        Message::CopyExpired { target, generation } => {
            app.copy_feedback_mut(target).expire(generation);
            Task::none()
        }
        Message::DownloadPressed => {
            let Some(response) = &app.response else {
                return Task::none();
            };

            let file_name = download::suggested_file_name(&response.payload, &Local::now());
            let contents = response.payload.display_text();
            Task::perform(download::save_response(file_name, contents), Message::DownloadFinished)
        }
        Message::DownloadFinished(result) => {
            match result {
                Ok(Some(path)) => info!("saved response to {}", path.display()),
                Ok(None) => debug!("download cancelled"),
                Err(err) => warn!("{err}"),
            }
            Task::none()
        }
        Message::StatusResetPressed => {
            app.status.set_props(StatusProps::default());
            Task::none()
        }
    }
}

/// Status published once a response (of any HTTP status) has been received.
fn completion_status(response: &NormalizedResponse) -> StatusNotification {
    if !response.is_success() {
        return StatusNotification::now(Outcome::Error, format!("Error: {}", response.status_line()));
    }

    let message = match response.payload.item_count() {
        Some(1) => "Request successful: 1 item returned".to_string(),
        Some(count) => format!("Request successful: {count} items returned"),
        None => "Request successful".to_string(),
    };
    StatusNotification::now(Outcome::Success, message)
}

fn view(app: &App) -> Element<'_, Message> {
    let request_panel = ui::request_panel::view(ui::request_panel::RequestPanelState {
        method: app.method,
        url: &app.url,
        category: app.category,
        body_editor: &app.body_editor,
        show_options: app.show_options,
        loading: app.loading,
        error: app.error.as_deref(),
        last_tested: app.last_tested.as_ref(),
    });

    let mut content = column![
        ui::endpoint_display::view(&app.config.endpoint, &app.endpoint_copy),
        request_panel,
    ]
    .spacing(16)
    .padding(16);

    if let Some(response) = &app.response {
        content = content.push(ui::response_viewer::view(response, app.show_headers, &app.response_copy));
    }

    content = content.push(ui::status_indicator::view(app.status.snapshot()));

    let layout = column![ui::header::view(), scrollable(content).height(Length::Fill)]
        .spacing(1)
        .height(Length::Fill)
        .width(Length::Fill);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::BG))
        .into()
}
