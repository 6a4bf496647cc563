use super::*;
use crate::audio::AudioCmd;
use crate::catalog::{AssetResolver, Category, builtin_catalog};
use crate::error::{ClipboardError, PlaybackError};
use crate::filter::CategoryFilter;
use crate::notify::{DEFAULT_TIMEOUT, NotificationKind, NotificationQueue};
use crate::playback::PlayToken;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn app() -> App {
    App::new(
        Arc::new(builtin_catalog(false)),
        AssetResolver::new("sounds/"),
        NotificationQueue::new(DEFAULT_TIMEOUT, None),
    )
}

fn token(cmd: Option<AudioCmd>) -> PlayToken {
    match cmd {
        Some(AudioCmd::Play { token, .. }) => token,
        other => panic!("expected a play command, got {other:?}"),
    }
}

fn titles(app: &App) -> Vec<&str> {
    app.visible_sounds().iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn starts_with_every_record_visible() {
    let app = app();
    assert_eq!(app.visible_sounds().len(), 7);
    assert!(app.filter().is_default());
    assert_eq!(app.selected_sound().map(|s| s.id.as_str()), Some("1"));
}

#[test]
fn typing_refreshes_results_immediately() {
    let mut app = app();
    for c in "rain".chars() {
        app.push_query_char(c);
    }
    assert_eq!(titles(&app), vec!["Heavy Rain"]);

    app.pop_query_char();
    app.pop_query_char();
    assert_eq!(app.filter().search_query, "ra");
    assert!(titles(&app).contains(&"Heavy Rain"));
}

#[test]
fn category_and_query_combine() {
    let mut app = app();
    app.set_category(CategoryFilter::Only(Category::Game));
    assert_eq!(titles(&app), vec!["Coin Pickup", "Laser Blast"]);

    app.set_query("laser");
    assert_eq!(titles(&app), vec!["Laser Blast"]);
}

#[test]
fn empty_result_then_clear_filters_restores_catalog() {
    let mut app = app();
    app.set_category(CategoryFilter::Only(Category::Ui));
    app.set_query("rain");
    assert!(app.is_empty_result());
    assert!(app.selected_sound().is_none());

    app.clear_filters();
    assert!(app.filter().is_default());
    assert_eq!(app.visible_sounds().len(), 7);
}

#[test]
fn category_cycle_wraps_both_ways() {
    let mut app = app();
    app.prev_category();
    assert_eq!(
        app.filter().selected_category,
        CategoryFilter::Only(Category::Notification)
    );
    app.next_category();
    assert_eq!(app.filter().selected_category, CategoryFilter::All);
}

#[test]
fn cancel_search_drops_query_but_keeps_category() {
    let mut app = app();
    app.set_category(CategoryFilter::Only(Category::Ambience));
    app.enter_search_mode();
    app.push_query_char('x');
    app.cancel_search();

    assert!(!app.search_mode);
    assert_eq!(app.filter().search_query, "");
    assert_eq!(
        app.filter().selected_category,
        CategoryFilter::Only(Category::Ambience)
    );
    assert_eq!(titles(&app), vec!["Forest Morning", "Heavy Rain"]);
}

#[test]
fn selection_follows_record_across_refresh() {
    let mut app = app();
    app.select_last();
    assert_eq!(app.selected_sound().map(|s| s.id.as_str()), Some("7"));

    app.set_category(CategoryFilter::Only(Category::Ambience));
    assert_eq!(app.selected_sound().map(|s| s.id.as_str()), Some("7"));

    app.set_category(CategoryFilter::Only(Category::Game));
    assert_eq!(app.selected(), 0);
}

#[test]
fn cursor_wraps() {
    let mut app = app();
    app.prev();
    assert_eq!(app.selected(), 6);
    app.next();
    assert_eq!(app.selected(), 0);
}

#[test]
fn at_most_one_preview_is_active() {
    let mut app = app();
    let cmd = app.play("1");
    assert!(matches!(cmd, Some(AudioCmd::Play { ref id, .. }) if id == "1"));
    assert!(app.is_playing("1"));

    app.play("3");
    assert!(app.is_playing("3"));
    assert!(!app.is_playing("1"));

    let playing: Vec<_> = app
        .catalog
        .sounds()
        .iter()
        .filter(|s| app.is_playing(&s.id))
        .collect();
    assert_eq!(playing.len(), 1);
}

#[test]
fn play_resolves_url_through_base_path() {
    let mut app = app();
    match app.play("4") {
        Some(AudioCmd::Play { url, .. }) => assert_eq!(url, "sounds/coin_pickup.wav"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn play_unknown_id_does_nothing() {
    let mut app = app();
    assert!(app.play("missing").is_none());
    assert!(app.playback.active_id().is_none());
}

#[test]
fn toggle_selected_starts_then_stops() {
    let mut app = app();
    assert!(matches!(app.toggle_selected(), Some(AudioCmd::Play { .. })));
    assert!(app.is_playing("1"));

    assert!(matches!(app.toggle_selected(), Some(AudioCmd::Stop)));
    assert!(app.playback.active_id().is_none());
    assert!(app.stop().is_none());
}

#[test]
fn filtering_does_not_touch_active_preview() {
    let mut app = app();
    app.play("6");
    app.set_query("bell");
    assert!(app.is_playing("6"));
    app.clear_filters();
    assert!(app.is_playing("6"));
}

#[test]
fn playback_failure_resets_active_and_notifies() {
    let mut app = app();
    let now = Instant::now();
    let t = token(app.play("2"));

    let err = PlaybackError::Decode {
        url: "sounds/error_buzzer.mp3".into(),
        reason: "bad header".into(),
    };
    assert!(app.on_playback_failed(t, &err, now).is_some());
    assert!(app.playback.active_id().is_none());

    let entries = app.notifications.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, NotificationKind::Error);
    assert_eq!(entries[0].message, "Could not play Error Buzzer.");
}

#[test]
fn stale_failure_is_ignored() {
    let mut app = app();
    let now = Instant::now();
    let first = token(app.play("2"));
    app.play("5");

    let err = PlaybackError::NoOutputDevice("none".into());
    assert!(app.on_playback_failed(first, &err, now).is_none());
    assert!(app.is_playing("5"));
    assert!(app.notifications.is_empty());
}

#[test]
fn late_failure_does_not_clear_replay_of_same_clip() {
    let mut app = app();
    let now = Instant::now();
    let first = token(app.play("2"));
    app.stop();
    let second = token(app.play("2"));

    let err = PlaybackError::NoOutputDevice("none".into());
    assert!(app.on_playback_failed(first, &err, now).is_none());
    assert!(app.is_playing("2"));
    assert!(app.notifications.is_empty());

    app.on_playback_finished(first);
    assert!(app.is_playing("2"));
    app.on_playback_finished(second);
    assert!(app.playback.active_id().is_none());
}

#[test]
fn finished_clip_clears_only_itself() {
    let mut app = app();
    let bell = token(app.play("1"));
    let rain = token(app.play("7"));
    app.on_playback_finished(bell);
    assert!(app.is_playing("7"));
    app.on_playback_finished(rain);
    assert!(app.playback.active_id().is_none());
}

#[test]
fn copy_success_adds_one_notification_and_changes_nothing_else() {
    let mut app = app();
    let now = Instant::now();
    app.set_category(CategoryFilter::Only(Category::Game));
    app.play("4");
    let before = app.filter().clone();

    assert_eq!(app.selected_link().as_deref(), Some("sounds/coin_pickup.wav"));
    app.on_copy_finished(&Ok(()), now);

    let entries = app.notifications.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, COPY_SUCCESS_MESSAGE);
    assert_eq!(entries[0].kind, NotificationKind::Success);
    assert_eq!(app.filter(), &before);
    assert!(app.is_playing("4"));
}

#[test]
fn copy_failure_adds_error_notification() {
    let mut app = app();
    let now = Instant::now();
    app.on_copy_finished(&Err(ClipboardError::Unavailable("no display".into())), now);

    let entries = app.notifications.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, COPY_FAILURE_MESSAGE);
    assert_eq!(entries[0].kind, NotificationKind::Error);
}

#[test]
fn tick_reports_expiry() {
    let mut app = app();
    let now = Instant::now();
    app.on_copy_finished(&Ok(()), now);

    assert!(!app.tick(now + Duration::from_millis(2999)));
    assert!(app.tick(now + Duration::from_millis(3000)));
    assert!(app.notifications.is_empty());
}
