// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::sync::Arc;

use cosmic::app::context_drawer;
use cosmic::cosmic_config;
use cosmic::iced::keyboard::{Key, Modifiers};
use cosmic::iced::{Event, Length, Subscription};
use cosmic::iced_widget::column;
use cosmic::widget::about::About;
use cosmic::widget::menu::action::MenuAction as _;
use cosmic::widget::{self, container, menu, text};
use cosmic::{Application, ApplicationExt, Element, Task, theme};

use crate::app::app_menu::MenuAction;
use crate::app::context_page::ContextPage;
use crate::app::core::Catalog;
use crate::app::core::models::range;
use crate::app::core::session::Phase;
use crate::app::screen::{SessionScreen, session};
use crate::config::{AppTheme, WordflipConfig};
use crate::fl;
use crate::flags::Flags;
use crate::key_binds::key_binds;

pub mod app_menu;
mod context_page;
pub mod core;
mod screen;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// Chunk sizes the user can pick from in the settings
pub const CHUNK_SIZES: [usize; 4] = [100, 200, range::DEFAULT_CHUNK_SIZE, 500];

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// Application about page
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Handle used to persist configuration changes
    config_handler: Option<cosmic_config::Config>,
    /// Configuration data that persists between application runs.
    config: WordflipConfig,
    /// Labels of the theme dropdown
    app_themes: Vec<String>,
    /// Labels of the chunk size dropdown
    chunk_sizes: Vec<String>,
    /// Current state of the application
    state: State,
}

/// The catalog is loaded asynchronously at startup
enum State {
    Loading,
    Failed(String),
    Ready { screen: SessionScreen },
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Opens the given url on the browser
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(WordflipConfig),
    UpdateTheme(usize),
    UpdateChunkSize(usize),
    Key(Modifiers, Key),

    /// Callback after loading the bundled word catalog
    CatalogLoaded(Result<Arc<Catalog>, anywho::Error>),

    /// Messages of the study session screen
    Session(session::Message),
}

/// Create a COSMIC application from the app model
impl Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.mariinkys.Wordflip";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::Named::new(Self::APP_ID))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: key_binds(),
            config_handler: flags.config_handler,
            config: flags.config,
            app_themes: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            chunk_sizes: CHUNK_SIZES
                .iter()
                .map(|size| fl!("chunk-size-option", count = *size))
                .collect(),
            state: State::Loading,
        };

        let tasks = vec![
            app.update_title(),
            cosmic::command::set_theme(app.config.app_theme.theme()),
            Task::perform(Catalog::load(), |result| {
                cosmic::action::app(Message::CatalogLoaded(result))
            }),
        ];

        (app, Task::batch(tasks))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![
            menu::Tree::with_children(
                Element::from(menu::root(fl!("session"))),
                menu::items(
                    &self.key_binds,
                    vec![menu::Item::Button(
                        fl!("back-to-setup"),
                        None,
                        MenuAction::BackToSetup,
                    )],
                ),
            ),
            menu::Tree::with_children(
                Element::from(menu::root(fl!("view"))),
                menu::items(
                    &self.key_binds,
                    vec![
                        menu::Item::Button(fl!("about"), None, MenuAction::About),
                        menu::Item::Button(fl!("settings"), None, MenuAction::Settings),
                    ],
                ),
            ),
        ])
        .item_height(menu::ItemHeight::Dynamic(40))
        .item_width(menu::ItemWidth::Uniform(270))
        .spacing(4.0);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let spacing = theme::active().cosmic().spacing;

        let content: Element<'_, Message> = match &self.state {
            State::Loading => container(text(fl!("loading"))).center(Length::Fill).into(),
            State::Failed(error) => container(
                column![
                    text::title3(fl!("catalog-error")),
                    text::body(error.as_str()),
                ]
                .spacing(spacing.space_xs),
            )
            .center(Length::Fill)
            .into(),
            State::Ready { screen } => screen.view().map(Message::Session),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let mut subscriptions = vec![
            // Watch for key_bind inputs
            cosmic::iced::event::listen_with(|event, status, _| match event {
                Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                    key,
                    modifiers,
                    ..
                }) => match status {
                    cosmic::iced::event::Status::Ignored => Some(Message::Key(modifiers, key)),
                    cosmic::iced::event::Status::Captured => None,
                },
                _ => None,
            }),
            // Watch for application configuration changes.
            self.core()
                .watch_config::<WordflipConfig>(Self::APP_ID)
                .map(|update| {
                    for why in update.errors {
                        tracing::error!(?why, "app config error");
                    }

                    Message::UpdateConfig(update.config)
                }),
        ];

        if let State::Ready { screen } = &self.state {
            subscriptions.push(screen.subscription().map(Message::Session));
        }

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::LaunchUrl(url) => {
                if let Err(err) = open::that_detached(&url) {
                    tracing::error!("failed to open {url:?}: {err}");
                }
            }

            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                let theme_changed = config.app_theme != self.config.app_theme;
                self.config = config.sanitized();

                if let State::Ready { screen } = &mut self.state {
                    screen.set_chunk_size(self.config.chunk_size);
                    screen.set_default_set_size(self.config.set_size);
                }
                if theme_changed {
                    return cosmic::command::set_theme(self.config.app_theme.theme());
                }
            }

            Message::UpdateTheme(index) => {
                let app_theme = match index {
                    1 => AppTheme::Dark,
                    2 => AppTheme::Light,
                    _ => AppTheme::System,
                };

                if let Some(handler) = &self.config_handler {
                    if let Err(err) = self.config.set_app_theme(handler, app_theme) {
                        tracing::error!(?err, "failed to save app theme");
                    }
                } else {
                    self.config.app_theme = app_theme;
                }
                return cosmic::command::set_theme(self.config.app_theme.theme());
            }

            Message::UpdateChunkSize(index) => {
                let chunk_size = CHUNK_SIZES
                    .get(index)
                    .copied()
                    .unwrap_or(range::DEFAULT_CHUNK_SIZE);

                if let Some(handler) = &self.config_handler {
                    if let Err(err) = self.config.set_chunk_size(handler, chunk_size) {
                        tracing::error!(?err, "failed to save chunk size");
                    }
                } else {
                    self.config.chunk_size = chunk_size;
                }
                if let State::Ready { screen } = &mut self.state {
                    screen.set_chunk_size(self.config.chunk_size);
                }
            }

            Message::Key(modifiers, key) => {
                for (key_bind, action) in self.key_binds.iter() {
                    if key_bind.matches(modifiers, &key) {
                        return self.update(action.message());
                    }
                }

                if let State::Ready { screen } = &self.state {
                    if modifiers.is_empty() {
                        if let Some(message) = screen.key_input(&key) {
                            return self.update(Message::Session(message));
                        }
                    }
                }
            }

            Message::CatalogLoaded(result) => match result {
                Ok(catalog) => {
                    self.state = State::Ready {
                        screen: SessionScreen::new(
                            catalog,
                            self.config.set_size,
                            self.config.chunk_size,
                        ),
                    };
                    return self.update_title();
                }
                Err(err) => {
                    tracing::error!("failed to load the word catalog: {err}");
                    self.state = State::Failed(err.to_string());
                }
            },

            Message::Session(message) => {
                let State::Ready { screen } = &mut self.state else {
                    return Task::none();
                };

                match screen.update(message) {
                    session::Action::None => {}
                    session::Action::PhaseChanged(_) => return self.update_title(),
                    session::Action::RememberSetSize(set_size) => {
                        if let Some(handler) = &self.config_handler {
                            if let Err(err) = self.config.set_set_size(handler, set_size) {
                                tracing::warn!(?err, "failed to save set size");
                            }
                        }
                    }
                }
            }
        }

        Task::none()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        if let State::Ready { screen } = &self.state {
            let subtitle = match (screen.phase(), screen.selected_range()) {
                (Phase::Setup, _) => None,
                (Phase::Finished, _) => Some(fl!("finished-title")),
                (Phase::Playing, Some(range)) if range.is_full() => {
                    Some(fl!("full-range", range = range.label()))
                }
                (Phase::Playing, Some(range)) => Some(range.label()),
                (Phase::Playing, None) => None,
            };

            if let Some(subtitle) = subtitle {
                window_title.push_str(" - ");
                window_title.push_str(&subtitle);
            }
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Settings [`ContextPage`] of the application
    pub fn settings(&self) -> Element<'_, Message> {
        let app_theme_selected = match self.config.app_theme {
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
            AppTheme::System => 0,
        };

        let chunk_size_selected = CHUNK_SIZES
            .iter()
            .position(|size| *size == self.config.chunk_size);

        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(
                    widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                        &self.app_themes,
                        Some(app_theme_selected),
                        Message::UpdateTheme,
                    )),
                )
                .into(),
            widget::settings::section()
                .title(fl!("study"))
                .add(
                    widget::settings::item::builder(fl!("chunk-size"))
                        .description(fl!("chunk-size-description"))
                        .control(widget::dropdown(
                            &self.chunk_sizes,
                            chunk_size_selected,
                            Message::UpdateChunkSize,
                        )),
                )
                .into(),
        ])
        .into()
    }
}
