// SPDX-License-Identifier: MPL-2.0
use iced_nextup::config::{self, Config, GeneralConfig, NextUpConfig};
use iced_nextup::i18n::fluent::I18n;
use iced_nextup::playback::{MediaState, NextUpCandidate, Playlist, PlaylistItem, StreamType};
use iced_nextup::ui::nextup::{Effect, Message, State};
use std::time::Duration;
use tempfile::tempdir;

fn sample_candidate() -> NextUpCandidate {
    NextUpCandidate {
        title: Some("Episode 2".to_string()),
        image: Some("https://cdn.example/e2.jpg".to_string()),
        show_next_up: true,
    }
}

#[test]
fn overlay_lifecycle_show_dismiss_and_rearm() {
    let mut overlay = State::default();

    // A candidate arrives and the duration becomes known
    overlay.handle(Message::CandidateChanged(Some(sample_candidate())));
    overlay.handle(Message::DurationChanged(100.0));
    assert_eq!(overlay.offset(), Some(90.0));
    assert!(!overlay.is_visible());

    // Crossing the offset shows and pins the overlay
    let effect = overlay.handle(Message::PositionChanged(91.0));
    assert!(matches!(effect, Effect::VisibilityChanged(true)));
    assert!(overlay.is_visible());
    assert!(overlay.is_sticky());

    // The viewer closes it
    let effect = overlay.handle(Message::CloseRequested);
    assert!(matches!(effect, Effect::VisibilityChanged(false)));
    assert!(!overlay.is_visible());

    // Seeking back below the offset and re-crossing does not bring it back
    overlay.handle(Message::PositionChanged(10.0));
    overlay.handle(Message::PositionChanged(95.0));
    assert!(!overlay.is_visible());

    // Only a new candidate re-arms the automatic timing
    overlay.handle(Message::CandidateChanged(Some(sample_candidate())));
    overlay.handle(Message::DurationChanged(100.0));
    overlay.handle(Message::PositionChanged(95.0));
    assert!(overlay.is_visible());
}

#[test]
fn overlay_hides_when_stream_goes_live() {
    let mut overlay = State::default();
    overlay.handle(Message::CandidateChanged(Some(sample_candidate())));
    overlay.handle(Message::DurationChanged(100.0));
    overlay.handle(Message::PositionChanged(95.0));
    assert!(overlay.is_visible());

    let effect = overlay.handle(Message::StreamTypeChanged(StreamType::Live));
    assert!(matches!(effect, Effect::VisibilityChanged(false)));
    assert!(!overlay.is_visible());
    assert_eq!(overlay.sticky(), Some(false));
}

#[test]
fn overlay_hides_on_completion_regardless_of_sticky() {
    let mut overlay = State::default();
    overlay.handle(Message::CandidateChanged(Some(sample_candidate())));
    overlay.handle(Message::DurationChanged(100.0));
    overlay.handle(Message::PositionChanged(95.0));
    assert!(overlay.is_visible());

    overlay.handle(Message::MediaStateChanged(MediaState::Complete));
    assert!(!overlay.is_visible());
}

#[test]
fn configured_offset_flows_into_overlay() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let saved = Config {
        nextup: NextUpConfig {
            offset_secs: Some(30.0),
            bind_delay_ms: Some(0),
        },
        ..Config::default()
    };
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");

    let mut overlay = State::new(loaded.nextup_offset_secs(), loaded.nextup_bind_delay());
    overlay.handle(Message::CandidateChanged(Some(sample_candidate())));
    overlay.handle(Message::DurationChanged(120.0));

    // Non-negative offsets are absolute seconds from the start
    assert_eq!(overlay.offset(), Some(30.0));
    overlay.handle(Message::PositionChanged(30.0));
    assert!(overlay.is_visible());
}

#[test]
fn playlist_items_feed_the_overlay_as_candidates() {
    let items = vec![
        PlaylistItem {
            title: "Pilot".to_string(),
            image: None,
            duration_secs: 50.0,
            stream_type: None,
            show_next_up: true,
        },
        PlaylistItem {
            title: "Episode 2".to_string(),
            image: Some("e2.jpg".to_string()),
            duration_secs: 50.0,
            stream_type: None,
            show_next_up: true,
        },
    ];
    let mut playlist = Playlist::new(items).expect("non-empty playlist");

    let mut overlay = State::new(-10.0, Duration::from_millis(0));
    let candidate = playlist.upcoming().map(PlaylistItem::as_candidate);
    let effect = overlay.handle(Message::CandidateChanged(candidate));
    assert!(matches!(effect, Effect::ScheduleContentBind { .. }));

    overlay.handle(Message::DurationChanged(50.0));
    overlay.handle(Message::PositionChanged(45.0));
    assert!(overlay.is_visible());

    // Binding the content surfaces the upcoming title and its thumbnail URL
    let effect = overlay.handle(Message::ContentBindDue(overlay.generation()));
    match effect {
        Effect::LoadThumbnail { url, .. } => assert_eq!(url, "e2.jpg"),
        other => panic!("expected LoadThumbnail, got {:?}", other),
    }
    assert_eq!(overlay.content().unwrap().title, "Episode 2");

    // Advancing past the last item leaves no upcoming candidate
    playlist.advance();
    let candidate = playlist.upcoming().map(PlaylistItem::as_candidate);
    overlay.handle(Message::CandidateChanged(candidate));
    assert!(!overlay.is_enabled());
    overlay.handle(Message::DurationChanged(50.0));
    overlay.handle(Message::PositionChanged(45.0));
    assert!(!overlay.is_visible());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nextup-header"), "Next Up");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nextup-header"), "À suivre");
}
