use std::sync::Arc;

use iced::{
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous},
    Alignment, Length, Subscription, Task,
};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use prepwise_ui::{
    component::{button, card, notification, text::*},
    theme,
    widget::*,
};

use crate::{
    auth::{
        message::{Message as AuthMessage, NoticeKind, Route, ViewMessage},
        AuthPanel,
    },
    config,
    dir::PrepwiseDirectory,
    logger::setup_logger,
    services::identity::{AuthBackend, IdentityClient},
    VERSION,
};

/// One window, one page at a time. Moving between routes mounts a fresh
/// panel: form state never survives a flow switch.
enum Page {
    Auth(AuthPanel),
    Home { email: String },
}

struct Notice {
    kind: NoticeKind,
    message: String,
}

pub struct GUI {
    page: Page,
    backend: Arc<dyn AuthBackend + Send + Sync>,
    notices: Vec<Notice>,
}

#[derive(Debug, Clone)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    KeyPressed(Key),
    Auth(AuthMessage),
    DismissNotice(usize),
    SignOut,
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("PrepWise v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        if !config.prepwise_directory.exists() {
            if let Err(e) = config.prepwise_directory.init() {
                eprintln!("Failed to create the data directory: {}", e);
            }
        }

        let (file_config, config_error) =
            match config::Config::from_file(&config::Config::path(&config.prepwise_directory)) {
                Ok(cfg) => (cfg, None),
                Err(config::ConfigError::NotFound) => (config::Config::default(), None),
                Err(e) => (config::Config::default(), Some(e)),
            };

        let log_level = log_level
            .or_else(|| file_config.log_level())
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, config.prepwise_directory.clone()) {
            eprintln!("Failed to set up the logger: {}", e);
        }
        if let Some(e) = config_error {
            tracing::warn!("Configuration file ignored: {}", e);
        }

        let backend: Arc<dyn AuthBackend + Send + Sync> =
            Arc::new(IdentityClient::new(file_config.identity_api_url()));

        let route = config.start.unwrap_or(Route::SignIn);
        info!("Starting PrepWise v{} on {}", VERSION, route.path());
        (
            Self {
                page: Page::Auth(AuthPanel::new(route.mode(), backend.clone())),
                backend,
                notices: Vec::new(),
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    fn navigate(&mut self, route: Route) {
        info!("Navigating to {}", route.path());
        self.page = Page::Auth(AuthPanel::new(route.mode(), self.backend.clone()));
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::KeyPressed(Key::Tab(shift)) => {
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::DismissNotice(i) => {
                if i < self.notices.len() {
                    self.notices.remove(i);
                }
                Task::none()
            }
            Message::SignOut => {
                self.notices.clear();
                self.navigate(Route::SignIn);
                Task::none()
            }
            Message::Auth(AuthMessage::Notify(kind, message)) => {
                self.notices.push(Notice { kind, message });
                Task::none()
            }
            // The notice emitted just before stays visible on the new page.
            Message::Auth(AuthMessage::Navigate(route)) => {
                self.navigate(route);
                Task::none()
            }
            Message::Auth(AuthMessage::View(ViewMessage::GoTo(route))) => {
                self.notices.clear();
                self.navigate(route);
                Task::none()
            }
            Message::Auth(AuthMessage::SessionOpened(email)) => {
                self.page = Page::Home { email };
                Task::none()
            }
            Message::Auth(msg) => match &mut self.page {
                Page::Auth(panel) => panel.update(msg).map(Message::Auth),
                // A result for a form that was torn down is dropped.
                Page::Home { .. } => Task::none(),
            },
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<Message> {
        let mut col = Column::new();
        for (i, notice) in self.notices.iter().enumerate() {
            col = col.push(match notice.kind {
                NoticeKind::Success => {
                    notification::success(notice.message.clone(), Message::DismissNotice(i))
                }
                NoticeKind::Error => notification::error(
                    "Something went wrong".to_string(),
                    notice.message.clone(),
                    Message::DismissNotice(i),
                ),
            });
        }

        let content: Element<Message> = match &self.page {
            Page::Auth(panel) => panel.view().map(Message::Auth),
            Page::Home { email } => home(email),
        };

        Container::new(col.push(content))
            .style(theme::container::background)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn home(email: &str) -> Element<Message> {
    Container::new(card::simple(
        Column::new()
            .push(h4_bold("You're signed in"))
            .push(p1_regular(email).style(theme::text::secondary))
            .push(
                button::secondary(None, "Sign out")
                    .width(Length::Fixed(200.0))
                    .on_press(Message::SignOut),
            )
            .spacing(20)
            .align_x(Alignment::Center),
    ))
    .padding(50)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

pub struct Config {
    pub prepwise_directory: PrepwiseDirectory,
    start: Option<Route>,
}

impl Config {
    pub fn new(prepwise_directory: PrepwiseDirectory, start: Option<Route>) -> Self {
        Self {
            prepwise_directory,
            start,
        }
    }
}
