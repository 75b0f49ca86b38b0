// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the demo player.
//!
//! The `App` struct wires the simulated playback model to the "next up"
//! overlay: playlist items drive the candidate/duration/stream-type change
//! notifications, the clock tick drives position changes, and overlay
//! effects come back as Iced tasks (deferred content bind, thumbnail fetch)
//! or playlist advances.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_TICK_INTERVAL_MS};
use crate::i18n::fluent::I18n;
use crate::playback::{MediaState, Playlist, StreamType};
use crate::ui::nextup;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 540;

/// Root Iced application state bridging the playback simulation, the
/// overlay sub-component, and localized rendering.
pub struct App {
    pub i18n: I18n,
    config: Config,
    playlist: Option<Playlist>,
    nextup: nextup::State,
    /// Simulated playback position in seconds.
    position: f64,
    /// Duration of the current item in seconds.
    duration: f64,
    stream_type: StreamType,
    media_state: MediaState,
    /// Startup warning (config load failure), shown as a banner.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("media_state", &self.media_state)
            .field("overlay_visible", &self.nextup.is_visible())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let nextup = nextup::State::new(config.nextup_offset_secs(), config.nextup_bind_delay());
        Self {
            i18n: I18n::default(),
            config,
            playlist: None,
            nextup,
            position: 0.0,
            duration: 0.0,
            stream_type: StreamType::Vod,
            media_state: MediaState::Idle,
            startup_warning: None,
        }
    }
}

impl App {
    /// Initializes application state: loads the config, resolves the locale,
    /// loads the playlist (if given) and primes the first item.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let nextup = nextup::State::new(config.nextup_offset_secs(), config.nextup_bind_delay());

        let mut app = App {
            i18n,
            nextup,
            startup_warning: config_warning,
            ..Self::default()
        };
        app.config = config;

        let playlist = flags
            .playlist_path
            .as_deref()
            .and_then(|path| match Playlist::load_from_path(Path::new(path)) {
                Ok(playlist) => Some(playlist),
                Err(err) => {
                    app.startup_warning = Some(err.to_string());
                    None
                }
            });
        app.playlist = playlist;

        let task = app.load_current_item();
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Interval between simulated clock ticks.
    fn tick_interval(&self) -> Duration {
        let ms = self
            .config
            .playback
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .max(1);
        Duration::from_millis(ms)
    }

    /// Primes the playback model from the playlist's current item and routes
    /// the resulting change notifications into the overlay.
    fn load_current_item(&mut self) -> Task<Message> {
        let Some(playlist) = &self.playlist else {
            self.media_state = MediaState::Idle;
            return self.notify_overlay(nextup::Message::CandidateChanged(None));
        };

        let item = playlist.current().clone();
        let candidate = playlist.upcoming().map(crate::playback::PlaylistItem::as_candidate);

        self.position = 0.0;
        self.duration = item.duration_secs;
        self.stream_type = item.stream_type();
        self.media_state = if self.config.playback.autoplay.unwrap_or(true) {
            MediaState::Playing
        } else {
            MediaState::Paused
        };

        // Candidate first: it resets the overlay before the new duration and
        // stream type are applied.
        let tasks = vec![
            self.notify_overlay(nextup::Message::CandidateChanged(candidate)),
            self.notify_overlay(nextup::Message::DurationChanged(self.duration)),
            self.notify_overlay(nextup::Message::StreamTypeChanged(self.stream_type)),
            self.notify_overlay(nextup::Message::MediaStateChanged(self.media_state)),
        ];
        Task::batch(tasks)
    }

    /// Moves to the next playlist item, if any, and reloads the model.
    fn advance_playlist(&mut self) -> Task<Message> {
        let advanced = self
            .playlist
            .as_mut()
            .is_some_and(|playlist| playlist.advance().is_some());
        if advanced {
            self.load_current_item()
        } else {
            self.media_state = MediaState::Complete;
            self.notify_overlay(nextup::Message::MediaStateChanged(MediaState::Complete))
        }
    }

    /// Forwards one change notification to the overlay and turns the
    /// resulting effect into a task.
    fn notify_overlay(&mut self, message: nextup::Message) -> Task<Message> {
        let effect = self.nextup.handle(message);
        update::run_effect(self, effect)
    }

    #[must_use]
    pub fn overlay(&self) -> &nextup::State {
        &self.nextup
    }
}
