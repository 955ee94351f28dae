use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tracing::warn;

use crate::api::{ApiError, TodoApi};
use crate::config::Config;
use crate::model::{Tag, Task};
use crate::ops::{refresh, tag_query};

use super::theme::Theme;

pub use crate::model::tag::TAG_COLOR_PALETTE;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the entry field (new tasks)
    Insert,
    /// Inline rename of the cursor task
    Edit,
    /// A destructive action awaiting y/n
    Confirm,
}

/// Screen position an overlay hangs from: below-left of its trigger,
/// already adjusted for list scroll (recorded at render time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

/// Geometry of the cursor row's tag area, recorded each frame by the task
/// list renderer so overlays can anchor below their trigger.
#[derive(Debug, Clone, Default)]
pub struct RowAnchor {
    pub row_y: u16,
    /// x of each tag pill on the cursor row
    pub pill_x: Vec<u16>,
    /// x of the "+tag" affordance
    pub add_tag_x: u16,
}

/// Tag menu state while open.
#[derive(Debug)]
pub struct TagMenuState {
    pub task_id: i64,
    pub anchor: Anchor,
    /// `None` until the background fetch delivers its snapshot.
    pub tags: Option<Vec<Tag>>,
    pub filter: String,
    /// Byte cursor into `filter`
    pub filter_cursor: usize,
    /// `None` = filter field focused; `Some(i)` = result row i highlighted.
    pub cursor: Option<usize>,
    /// Matches the fetch that populated this menu; stale responses from a
    /// menu that has since closed or reopened are dropped.
    pub generation: u64,
}

impl TagMenuState {
    /// Snapshot entries matching the current filter, in snapshot order.
    pub fn matches(&self) -> Vec<&Tag> {
        match &self.tags {
            Some(tags) => tag_query::filter_tags(tags, &self.filter),
            None => Vec::new(),
        }
    }

    /// Whether the create affordance row is shown below the matches.
    pub fn offers_create(&self) -> bool {
        self.tags.is_some() && tag_query::offers_create(self.matches().len(), &self.filter)
    }

    /// Selectable rows: matches plus the create affordance.
    pub fn row_count(&self) -> usize {
        self.matches().len() + usize::from(self.offers_create())
    }
}

/// Color picker state while open.
#[derive(Debug)]
pub struct ColorPickerState {
    pub tag_id: i64,
    pub tag_name: String,
    pub anchor: Anchor,
    pub cursor: usize,
}

/// The single transient-overlay slot. Opening a new overlay replaces the
/// old one; the at-most-one invariant is the slot itself.
#[derive(Debug)]
pub enum Overlay {
    TagMenu(TagMenuState),
    ColorPicker(ColorPickerState),
}

/// A destructive action awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { task_id: i64 },
    RemoveTag { task_id: i64, tag_name: String },
    DeleteTag { tag_id: i64, tag_name: String },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

type TagFetchMessage = (u64, Result<Vec<Tag>, ApiError>);

/// Main application state
pub struct App {
    pub api: Arc<dyn TodoApi>,
    pub session_id: i64,
    pub tasks: Vec<Task>,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,

    /// Cursor index into `tasks`
    pub cursor: usize,
    /// First visible row (adjusted by the renderer)
    pub scroll_offset: usize,
    /// Pill selection on the cursor task; `None` selects the row itself
    pub tag_cursor: Option<usize>,

    /// New-task entry field
    pub entry: String,
    pub entry_cursor: usize,

    /// Inline rename target and buffer
    pub edit_task: Option<i64>,
    pub edit_buffer: String,
    pub edit_cursor: usize,

    pub overlay: Option<Overlay>,
    pub confirm: Option<ConfirmState>,

    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub show_help: bool,

    /// Cursor-row geometry from the last render
    pub row_anchor: Option<RowAnchor>,

    tag_rx: Option<mpsc::Receiver<TagFetchMessage>>,
    tag_generation: u64,

    /// Next full refresh, aligned to a 5-minute wall-clock boundary
    pub reload_at: Instant,
}

impl App {
    pub fn new(api: Arc<dyn TodoApi>, session_id: i64, config: &Config) -> Self {
        App {
            api,
            session_id,
            tasks: Vec::new(),
            theme: Theme::from_config(&config.ui),
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            tag_cursor: None,
            entry: String::new(),
            entry_cursor: 0,
            edit_task: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            overlay: None,
            confirm: None,
            status_message: None,
            status_is_error: false,
            show_help: false,
            row_anchor: None,
            tag_rx: None,
            tag_generation: 0,
            reload_at: Instant::now() + refresh::reload_delay(&chrono::Local::now()),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn cursor_task(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    /// The tag pill currently selected on the cursor task, if any.
    pub fn cursor_tag(&self) -> Option<&Tag> {
        let task = self.cursor_task()?;
        task.tags.get(self.tag_cursor?)
    }

    pub fn task_mut(&mut self, task_id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    pub fn clamp_cursor(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.tasks.len() - 1);
        }
        let tag_count = self.cursor_task().map_or(0, |t| t.tags.len());
        if let Some(tc) = self.tag_cursor
            && tc >= tag_count
        {
            self.tag_cursor = tag_count.checked_sub(1);
        }
    }

    /// Re-fetch the task list from the server (the client's equivalent of
    /// a full page reload) and schedule the next boundary-aligned one.
    pub fn refresh(&mut self) {
        match self.api.list_tasks(self.session_id) {
            Ok(tasks) => {
                self.tasks = tasks;
                self.clamp_cursor();
            }
            Err(e) => {
                warn!(error = %e, "task list refresh failed");
                self.set_error("refresh failed: server unreachable?");
            }
        }
        self.schedule_reload();
    }

    pub fn schedule_reload(&mut self) {
        self.reload_at = Instant::now() + refresh::reload_delay(&chrono::Local::now());
    }

    /// The periodic reload. Like the page reload it stands in for, it tears
    /// down transient surfaces and re-derives state from the server; only
    /// the entry field survives.
    pub fn timer_reload(&mut self) {
        self.overlay = None;
        self.confirm = None;
        self.edit_task = None;
        self.show_help = false;
        if self.mode != Mode::Insert {
            self.mode = Mode::Navigate;
        }
        self.refresh();
    }

    // -----------------------------------------------------------------
    // Overlay slot

    /// Open the tag menu for a task. Replaces any open overlay and kicks
    /// off a fresh background fetch of the tag list (never cached).
    pub fn open_tag_menu(&mut self, task_id: i64) {
        let anchor = self
            .row_anchor
            .as_ref()
            .map(|ra| Anchor {
                x: ra.add_tag_x,
                y: ra.row_y + 1,
            })
            .unwrap_or_default();

        self.tag_generation += 1;
        let generation = self.tag_generation;

        let (tx, rx) = mpsc::channel();
        let api = Arc::clone(&self.api);
        thread::spawn(move || {
            // The menu may be gone by the time this lands; send errors are
            // expected then and the generation check drops stale results.
            let _ = tx.send((generation, api.list_tags()));
        });
        self.tag_rx = Some(rx);

        self.overlay = Some(Overlay::TagMenu(TagMenuState {
            task_id,
            anchor,
            tags: None,
            filter: String::new(),
            filter_cursor: 0,
            cursor: None,
            generation,
        }));
    }

    /// Open the color picker for a tag. Replaces any open overlay.
    pub fn open_color_picker(&mut self, tag: &Tag) {
        let anchor = self
            .row_anchor
            .as_ref()
            .map(|ra| {
                let x = self
                    .tag_cursor
                    .and_then(|i| ra.pill_x.get(i).copied())
                    .unwrap_or(ra.add_tag_x);
                Anchor { x, y: ra.row_y + 1 }
            })
            .unwrap_or_default();

        // Pre-select the tag's current color when it is a palette entry
        let cursor = TAG_COLOR_PALETTE
            .iter()
            .position(|(_, hex)| hex.eq_ignore_ascii_case(&tag.color))
            .unwrap_or(0);

        self.overlay = Some(Overlay::ColorPicker(ColorPickerState {
            tag_id: tag.id,
            tag_name: tag.name.clone(),
            anchor,
            cursor,
        }));
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn tag_menu(&self) -> Option<&TagMenuState> {
        match &self.overlay {
            Some(Overlay::TagMenu(menu)) => Some(menu),
            _ => None,
        }
    }

    pub fn tag_menu_mut(&mut self) -> Option<&mut TagMenuState> {
        match &mut self.overlay {
            Some(Overlay::TagMenu(menu)) => Some(menu),
            _ => None,
        }
    }

    // -----------------------------------------------------------------
    // Background tag fetch

    /// Drain the fetch channel. Responses are applied only to the menu
    /// that requested them; anything else arrived after close and is
    /// dropped on the floor.
    pub fn poll_tag_fetch(&mut self) {
        let Some(rx) = &self.tag_rx else { return };
        let mut messages = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            messages.push(msg);
        }
        for (generation, result) in messages {
            self.apply_tag_fetch(generation, result);
        }
    }

    pub(crate) fn apply_tag_fetch(&mut self, generation: u64, result: Result<Vec<Tag>, ApiError>) {
        let Some(Overlay::TagMenu(menu)) = &mut self.overlay else {
            return;
        };
        if menu.generation != generation {
            return;
        }
        match result {
            Ok(tags) => menu.tags = Some(tags),
            Err(e) => {
                warn!(error = %e, "tag list fetch failed");
                // Menu stays usable: the create-on-enter path needs no list
                menu.tags = Some(Vec::new());
                self.set_error("failed to load tags");
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use pretty_assertions::assert_eq;

    pub(crate) fn test_app(api: Arc<FakeApi>) -> App {
        let mut app = App::new(api, 1, &Config::default());
        app.refresh();
        app
    }

    fn seeded_api() -> Arc<FakeApi> {
        let api = Arc::new(FakeApi::with_tags(vec![
            Tag::new(1, "work", "#3B82F6"),
            Tag::new(2, "home", "#EC4899"),
        ]));
        api.seed_tasks(vec![
            Task {
                id: 1,
                description: "First".to_string(),
                is_completed: false,
                tags: vec![Tag::new(1, "work", "#3B82F6")],
            },
            Task {
                id: 2,
                description: "Second".to_string(),
                is_completed: false,
                tags: Vec::new(),
            },
        ]);
        api
    }

    /// A menu state with a ready snapshot, bypassing the fetch thread.
    pub(crate) fn ready_menu(task_id: i64, tags: Vec<Tag>) -> TagMenuState {
        TagMenuState {
            task_id,
            anchor: Anchor::default(),
            tags: Some(tags),
            filter: String::new(),
            filter_cursor: 0,
            cursor: None,
            generation: 0,
        }
    }

    #[test]
    fn opening_menu_twice_keeps_one_overlay() {
        let mut app = test_app(seeded_api());
        app.open_tag_menu(1);
        app.open_tag_menu(2);
        match &app.overlay {
            Some(Overlay::TagMenu(menu)) => assert_eq!(menu.task_id, 2),
            other => panic!("expected one tag menu, got {other:?}"),
        }
    }

    #[test]
    fn picker_over_menu_leaves_only_picker() {
        let mut app = test_app(seeded_api());
        app.open_tag_menu(1);
        let tag = Tag::new(1, "work", "#3B82F6");
        app.open_color_picker(&tag);
        assert!(matches!(app.overlay, Some(Overlay::ColorPicker(_))));
    }

    #[test]
    fn picker_preselects_current_palette_color() {
        let mut app = test_app(seeded_api());
        app.open_color_picker(&Tag::new(2, "home", "#ec4899"));
        match &app.overlay {
            Some(Overlay::ColorPicker(picker)) => assert_eq!(picker.cursor, 9),
            other => panic!("expected picker, got {other:?}"),
        }
    }

    #[test]
    fn stale_fetch_response_is_dropped() {
        let mut app = test_app(seeded_api());
        app.overlay = Some(Overlay::TagMenu(ready_menu(1, Vec::new())));
        app.tag_menu_mut().unwrap().tags = None;
        app.tag_menu_mut().unwrap().generation = 2;

        // A response from an older open must not populate the new menu
        app.apply_tag_fetch(1, Ok(vec![Tag::new(9, "stale", "#EF4444")]));
        assert!(app.tag_menu().unwrap().tags.is_none());

        app.apply_tag_fetch(2, Ok(vec![Tag::new(1, "work", "#3B82F6")]));
        assert_eq!(app.tag_menu().unwrap().tags.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn fetch_response_after_close_is_ignored() {
        let mut app = test_app(seeded_api());
        app.overlay = Some(Overlay::TagMenu(ready_menu(1, Vec::new())));
        app.close_overlay();
        app.apply_tag_fetch(0, Ok(vec![Tag::new(1, "work", "#3B82F6")]));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn failed_fetch_leaves_menu_usable_with_empty_snapshot() {
        let mut app = test_app(seeded_api());
        let mut menu = ready_menu(1, Vec::new());
        menu.tags = None;
        app.overlay = Some(Overlay::TagMenu(menu));
        app.apply_tag_fetch(0, Err(ApiError::Status { status: 500 }));
        assert_eq!(app.tag_menu().unwrap().tags.as_deref(), Some(&[][..]));
        assert!(app.status_is_error);
    }

    #[test]
    fn timer_reload_tears_down_transient_surfaces() {
        let mut app = test_app(seeded_api());
        app.open_tag_menu(1);
        app.mode = Mode::Edit;
        app.edit_task = Some(1);
        app.timer_reload();
        assert!(app.overlay.is_none());
        assert!(app.edit_task.is_none());
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn menu_rows_follow_filter() {
        let menu = ready_menu(
            1,
            vec![
                Tag::new(1, "work", "#3B82F6"),
                Tag::new(2, "world", "#10B981"),
                Tag::new(3, "home", "#EC4899"),
            ],
        );
        let mut menu = menu;
        menu.filter = "wor".to_string();
        let names: Vec<&str> = menu.matches().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["work", "world"]);
        assert!(!menu.offers_create());
        assert_eq!(menu.row_count(), 2);

        menu.filter = "xyz".to_string();
        assert!(menu.matches().is_empty());
        assert!(menu.offers_create());
        assert_eq!(menu.row_count(), 1);
    }

    #[test]
    fn loading_menu_has_no_rows() {
        let mut menu = ready_menu(1, Vec::new());
        menu.tags = None;
        menu.filter = "xyz".to_string();
        assert_eq!(menu.row_count(), 0);
        assert!(!menu.offers_create());
    }
}
