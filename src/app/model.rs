//! Application model: `App`.
//!
//! `App` holds the catalog, the current filter, the visible result list,
//! the cursor, the active preview and the notifications. Every mutator that
//! touches the filter recomputes the visible list before returning, so the
//! view never renders stale results.

use std::sync::Arc;
use std::time::Instant;

use crate::audio::AudioCmd;
use crate::catalog::{AssetResolver, Catalog, SoundRecord};
use crate::error::{ClipboardError, PlaybackError};
use crate::filter::{CategoryFilter, FilterState, filter};
use crate::notify::{NotificationId, NotificationKind, NotificationQueue};
use crate::playback::{PlayToken, PlaybackCoordinator};

pub const COPY_SUCCESS_MESSAGE: &str = "Direct link copied to clipboard!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy link.";

/// The main application model.
pub struct App {
    pub catalog: Arc<Catalog>,
    pub resolver: AssetResolver,
    pub playback: PlaybackCoordinator,
    pub notifications: NotificationQueue,
    pub search_mode: bool,

    filter: FilterState,
    /// Catalog positions of the records passing the current filter.
    visible: Vec<usize>,
    /// Cursor position within `visible`.
    selected: usize,
}

impl App {
    /// Create a new `App` over `catalog` with default filters.
    pub fn new(
        catalog: Arc<Catalog>,
        resolver: AssetResolver,
        notifications: NotificationQueue,
    ) -> Self {
        let mut app = Self {
            catalog,
            resolver,
            playback: PlaybackCoordinator::default(),
            notifications,
            search_mode: false,
            filter: FilterState::default(),
            visible: Vec::new(),
            selected: 0,
        };
        app.refresh();
        app
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Catalog positions currently shown, in catalog order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// The records currently shown, in catalog order.
    pub fn visible_sounds(&self) -> Vec<&SoundRecord> {
        let sounds = self.catalog.sounds();
        self.visible.iter().map(|&i| &sounds[i]).collect()
    }

    /// Cursor position within the visible list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_sound(&self) -> Option<&SoundRecord> {
        let i = *self.visible.get(self.selected)?;
        self.catalog.sounds().get(i)
    }

    /// True when the filter leaves nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Derived per-card flag.
    pub fn is_playing(&self, id: &str) -> bool {
        self.playback.is_active(id)
    }

    /// Resolved URL of `record`.
    pub fn url_for(&self, record: &SoundRecord) -> String {
        self.resolver.url_for(&self.catalog, record)
    }

    // Recompute the visible list and keep the cursor on the same record
    // when it survives the new filter.
    fn refresh(&mut self) {
        let previous = self.visible.get(self.selected).copied();

        self.visible = filter(
            self.catalog.sounds(),
            &self.filter.search_query,
            self.filter.selected_category,
        )
        .map(|(i, _)| i)
        .collect();

        self.selected = previous
            .and_then(|p| self.visible.iter().position(|&i| i == p))
            .unwrap_or(0);
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.refresh();
    }

    /// Append a character to the search query and refresh the view.
    pub fn push_query_char(&mut self, c: char) {
        self.filter.search_query.push(c);
        self.refresh();
    }

    /// Remove the last character from the search query and refresh the view.
    pub fn pop_query_char(&mut self) {
        self.filter.search_query.pop();
        self.refresh();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.selected_category = category;
        self.refresh();
    }

    pub fn next_category(&mut self) {
        self.set_category(self.filter.selected_category.next());
    }

    pub fn prev_category(&mut self) {
        self.set_category(self.filter.selected_category.prev());
    }

    /// Restore `query = ""` and `category = All`.
    pub fn clear_filters(&mut self) {
        self.filter.reset();
        self.search_mode = false;
        self.refresh();
    }

    /// Enter search mode: typed characters edit the query.
    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Leave search mode, keeping the query.
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Leave search mode and drop the query; the category is kept.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.set_query(String::new());
    }

    /// Move the cursor down, wrapping to the top.
    pub fn next(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1) % self.visible.len();
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn prev(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + self.visible.len() - 1) % self.visible.len();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    /// Make `id` the active preview. Returns the command for the audio thread.
    pub fn play(&mut self, id: &str) -> Option<AudioCmd> {
        let record = self.catalog.get(id)?;
        let url = self.url_for(record);
        let id = record.id.clone();
        let token = self.playback.play(id.clone());
        Some(AudioCmd::Play { id, url, token })
    }

    /// Clear the active preview, if any.
    pub fn stop(&mut self) -> Option<AudioCmd> {
        self.playback.stop().map(|_| AudioCmd::Stop)
    }

    /// Play/stop button on the selected card: stops it if it is the active
    /// preview, otherwise starts it.
    pub fn toggle_selected(&mut self) -> Option<AudioCmd> {
        let id = self.selected_sound()?.id.clone();
        if self.is_playing(&id) {
            self.stop()
        } else {
            self.play(&id)
        }
    }

    /// The audio thread could not start the request behind `token`.
    ///
    /// Clears the active preview so no card stays stuck on "playing". A
    /// failure for a request that was already replaced or stopped is
    /// ignored, even when a newer request plays the same clip.
    pub fn on_playback_failed(
        &mut self,
        token: PlayToken,
        error: &PlaybackError,
        now: Instant,
    ) -> Option<NotificationId> {
        let id = self.playback.clear_if_current(token)?;
        let title = self
            .catalog
            .get(&id)
            .map(|s| s.title.as_str())
            .unwrap_or(id.as_str());
        tracing::warn!(id = %id, error = %error, "preview failed");
        Some(self.notifications.push(
            format!("Could not play {title}."),
            NotificationKind::Error,
            now,
        ))
    }

    /// The request behind `token` played to its end.
    pub fn on_playback_finished(&mut self, token: PlayToken) {
        self.playback.clear_if_current(token);
    }

    /// URL to copy for the selected card, if any.
    pub fn selected_link(&self) -> Option<String> {
        self.selected_sound().map(|s| self.url_for(s))
    }

    /// Record the outcome of a clipboard write as a notification.
    pub fn on_copy_finished(
        &mut self,
        result: &Result<(), ClipboardError>,
        now: Instant,
    ) -> NotificationId {
        match result {
            Ok(()) => self
                .notifications
                .push(COPY_SUCCESS_MESSAGE, NotificationKind::Success, now),
            Err(_) => self
                .notifications
                .push(COPY_FAILURE_MESSAGE, NotificationKind::Error, now),
        }
    }

    /// Drop expired notifications. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        !self.notifications.expire(now).is_empty()
    }
}
