// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the current notification snapshot and the loading flag,
//! hands both to the inbox, and turns the inbox's intents into calls on the
//! notification service followed by a snapshot refresh. The inbox itself is
//! rendered inside a containment boundary; the header and toasts are not, so
//! they stay usable when the inbox fails.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, REPORT_FILE_NAME};
use crate::error::Error;
use crate::feed::{JsonFileSource, MemoryStore, NotificationService, Snapshot};
use crate::i18n::fluent::I18n;
use crate::ui::boundary::{Boundary, ErrorSink};
use crate::ui::inbox::TimestampFormatter;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{self, Toast};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Name under which inbox render failures are logged.
pub const INBOX_BOUNDARY: &str = "inbox";

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Kept for reload.
    flags: Flags,
    theme_mode: ThemeMode,
    formatter: TimestampFormatter,
    /// External collaborator; survives reloads.
    service: Arc<dyn NotificationService>,
    snapshot: Snapshot,
    loading: bool,
    spinner_rotation: f32,
    /// Generation of the most recently started fetch.
    fetch_generation: u64,
    /// Generation of the most recently applied fetch result.
    applied_generation: u64,
    boundary: Boundary,
    /// Survives reloads so the failure that caused one stays on record.
    diagnostics: DiagnosticsCollector,
    /// Set once the current boundary failure has been written out.
    diagnostics_exported: bool,
    toasts: toast::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.snapshot.len())
            .field("loading", &self.loading)
            .field("boundary", &self.boundary)
            .finish_non_exhaustive()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot; flags are cloned per call
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn config_dir(flags: &Flags) -> Option<PathBuf> {
    flags.config_dir.as_ref().map(PathBuf::from)
}

/// Location of the diagnostics report, next to `settings.toml`.
fn diagnostics_report_path(flags: &Flags) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(config_dir(flags)).map(|dir| dir.join(REPORT_FILE_NAME))
}

/// Builds the notification service from `--feed` or `[inbox] feed_path`.
///
/// Without a feed the store reports `NotConfigured` on fetch.
pub fn notification_service(flags: &Flags, config: &Config) -> Arc<dyn NotificationService> {
    let feed_path = flags
        .feed_path
        .clone()
        .or_else(|| config.inbox.feed_path.clone());

    match feed_path {
        Some(path) => Arc::new(MemoryStore::seeded_from(JsonFileSource::new(path))),
        None => Arc::new(MemoryStore::new()),
    }
}

impl App {
    /// Loads config, builds the service and starts the first fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(config_dir(&flags));
        let service = notification_service(&flags, &config);
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity());
        Self::boot(flags, config, config_warning, service, diagnostics, 0)
    }

    /// Builds the application around an existing notification service.
    pub fn with_service(
        flags: Flags,
        config: Config,
        service: Arc<dyn NotificationService>,
    ) -> (Self, Task<Message>) {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity());
        Self::boot(flags, config, None, service, diagnostics, 0)
    }

    fn boot(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        service: Arc<dyn NotificationService>,
        diagnostics: DiagnosticsCollector,
        generation: u64,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let sink: Arc<dyn ErrorSink> = Arc::new(diagnostics.handle());

        let mut toasts = toast::Manager::new();
        toasts.set_diagnostics(diagnostics.handle());
        if let Some(key) = config_warning {
            toasts.push(Toast::warning(key));
        }
        if config.inbox.has_invalid_timestamp_format() {
            toasts.push(Toast::warning(config::INVALID_TIMESTAMP_FORMAT_KEY));
        }

        let mut app = App {
            i18n,
            flags,
            theme_mode: config.general.theme_mode,
            formatter: config.inbox.timestamp_formatter(),
            service,
            snapshot: Snapshot::empty(),
            loading: true,
            spinner_rotation: 0.0,
            fetch_generation: generation,
            applied_generation: generation,
            boundary: Boundary::new(INBOX_BOUNDARY, sink),
            diagnostics,
            diagnostics_exported: false,
            toasts,
        };
        let task = app.fetch_snapshot();
        (app, task)
    }

    /// Fetches a snapshot off the UI thread under a new generation.
    fn fetch_snapshot(&mut self) -> Task<Message> {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        let service = Arc::clone(&self.service);
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || service.fetch())
                    .await
                    .unwrap_or_else(|err| Err(Error::Io(err.to_string())))
            },
            move |result| Message::FeedLoaded(generation, result),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.loading, self.toasts.has_toasts())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snapshot: &self.snapshot,
            loading: self.loading,
            formatter: &self.formatter,
            spinner_rotation: self.spinner_rotation,
            boundary: &self.boundary,
            toasts: &self.toasts,
        })
    }

    /// Snapshot currently shown by the inbox.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation tag carried by the most recently started fetch.
    pub fn latest_fetch(&self) -> u64 {
        self.fetch_generation
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn toasts(&self) -> &toast::Manager {
        &self.toasts
    }

    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    pub fn service(&self) -> &Arc<dyn NotificationService> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, UserAction};
    use crate::domain::notification::{Notification, NotificationId, NotificationKind};
    use crate::error::FeedError;
    use crate::feed::{MutationService, NotificationSource};
    use crate::ui::boundary::RenderFailure;
    use crate::ui::{header, inbox};
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;
    use std::time::Instant;
    use tempfile::{tempdir, TempDir};

    #[derive(Default)]
    struct RecordingService {
        snapshot: Snapshot,
        marked: Mutex<Vec<NotificationId>>,
        deleted: Mutex<Vec<NotificationId>>,
    }

    impl RecordingService {
        fn with(snapshot: Snapshot) -> Arc<Self> {
            Arc::new(Self {
                snapshot,
                ..Self::default()
            })
        }

        fn marked(&self) -> Vec<NotificationId> {
            self.marked.lock().unwrap().clone()
        }

        fn deleted(&self) -> Vec<NotificationId> {
            self.deleted.lock().unwrap().clone()
        }
    }

    impl NotificationSource for RecordingService {
        fn fetch(&self) -> crate::error::Result<Snapshot> {
            Ok(self.snapshot.clone())
        }
    }

    impl MutationService for RecordingService {
        fn mark_read(&self, id: NotificationId) {
            self.marked.lock().unwrap().push(id);
        }

        fn delete(&self, id: NotificationId) {
            self.deleted.lock().unwrap().push(id);
        }
    }

    fn snapshot(ids: &[u64]) -> Snapshot {
        let created_at = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid date");
        Snapshot::new(
            ids.iter()
                .map(|id| {
                    Notification::new(*id, NotificationKind::Alert, "Low stock", "", created_at)
                })
                .collect(),
        )
        .expect("unique ids")
    }

    /// Boots an app whose config directory is an empty temp dir.
    fn boot(service: Arc<RecordingService>) -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _task) = App::with_service(flags, Config::default(), service);
        (app, dir)
    }

    fn loaded(service: &Arc<RecordingService>) -> (App, TempDir) {
        let (mut app, dir) = boot(Arc::clone(service));
        let generation = app.latest_fetch();
        let _ = app.update(Message::FeedLoaded(generation, Ok(service.snapshot.clone())));
        (app, dir)
    }

    fn recorded_actions(app: &mut App) -> Vec<UserAction> {
        app.diagnostics.process_pending();
        app.diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action } => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn boot_starts_loading_with_empty_snapshot() {
        let (app, _dir) = boot(RecordingService::with(snapshot(&[1])));
        assert!(app.is_loading());
        assert!(app.snapshot().is_empty());
        assert!(!app.boundary().is_failed());
    }

    #[test]
    fn title_is_localized() {
        let (app, _dir) = boot(RecordingService::with(Snapshot::empty()));
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        assert!(!app.title().starts_with("MISSING"));
    }

    #[test]
    fn feed_loaded_replaces_snapshot_and_stops_loading() {
        let service = RecordingService::with(snapshot(&[1, 2]));
        let (app, _dir) = loaded(&service);

        assert!(!app.is_loading());
        assert_eq!(app.snapshot(), &service.snapshot);
    }

    #[test]
    fn delete_calls_service_once_without_touching_displayed_list() {
        let service = RecordingService::with(snapshot(&[41, 42]));
        let (mut app, _dir) = loaded(&service);
        let before = app.snapshot().clone();

        let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(42))));

        assert_eq!(service.deleted(), vec![NotificationId::new(42)]);
        assert!(service.marked().is_empty());
        assert_eq!(app.snapshot(), &before);
        assert!(!app.is_loading());
    }

    #[test]
    fn mark_read_calls_service_once() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = loaded(&service);

        let _ = app.update(Message::Inbox(inbox::Message::MarkRead(NotificationId::new(1))));

        assert_eq!(service.marked(), vec![NotificationId::new(1)]);
        assert!(service.deleted().is_empty());
        assert!(app.snapshot().notifications()[0].is_unread());
    }

    #[test]
    fn intents_are_recorded_as_user_actions() {
        let service = RecordingService::with(snapshot(&[7]));
        let (mut app, _dir) = loaded(&service);

        let _ = app.update(Message::Inbox(inbox::Message::MarkRead(NotificationId::new(7))));
        let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(7))));

        assert_eq!(
            recorded_actions(&mut app),
            vec![UserAction::MarkRead { id: 7 }, UserAction::Delete { id: 7 }]
        );
    }

    #[test]
    fn failed_load_keeps_previous_snapshot_and_raises_error_toast() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = loaded(&service);

        let _ = app.update(Message::Header(header::Message::Refresh));
        assert!(app.is_loading());

        let generation = app.latest_fetch();
        let _ = app.update(Message::FeedLoaded(
            generation,
            Err(FeedError::DuplicateId(1).into()),
        ));

        assert!(!app.is_loading());
        assert_eq!(app.snapshot(), &service.snapshot);
        assert!(app
            .toasts()
            .visible()
            .any(|t| t.message_key() == "notification-feed-duplicate-id"));
    }

    #[test]
    fn successful_load_clears_feed_error_toasts() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = boot(Arc::clone(&service));

        let failed = app.latest_fetch();
        let _ = app.update(Message::FeedLoaded(failed, Err(FeedError::NotConfigured.into())));
        assert_eq!(app.toasts().visible_count(), 1);

        let _ = app.update(Message::Header(header::Message::Refresh));
        let generation = app.latest_fetch();
        let _ = app.update(Message::FeedLoaded(generation, Ok(service.snapshot.clone())));
        assert_eq!(app.toasts().visible_count(), 0);
    }

    #[test]
    fn refresh_while_loading_is_ignored() {
        let (mut app, _dir) = boot(RecordingService::with(snapshot(&[1])));

        let _ = app.update(Message::Header(header::Message::Refresh));

        assert!(recorded_actions(&mut app).is_empty());
    }

    #[test]
    fn reload_resets_boundary_and_keeps_service() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = loaded(&service);
        let service_before = Arc::clone(app.service());

        assert!(app.boundary().fail(RenderFailure::new("boom"), None));
        let _ = app.update(Message::Reload);

        assert!(!app.boundary().is_failed());
        assert!(app.is_loading());
        assert!(app.snapshot().is_empty());
        assert!(Arc::ptr_eq(app.service(), &service_before));
    }

    #[test]
    fn reload_keeps_diagnostic_history() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = loaded(&service);

        app.boundary().fail(RenderFailure::new("boom"), None);
        let _ = app.update(Message::Reload);
        let _ = app.update(Message::Tick(Instant::now()));

        let kinds: Vec<_> = app.diagnostics().iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.iter().any(|kind| matches!(
            kind,
            DiagnosticEventKind::RenderFailure { boundary, .. } if boundary == INBOX_BOUNDARY
        )));
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::Reload
        }));
    }

    #[test]
    fn tick_advances_spinner_only_while_loading() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = boot(Arc::clone(&service));

        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation > 0.0);

        let generation = app.latest_fetch();
        let _ = app.update(Message::FeedLoaded(generation, Ok(service.snapshot.clone())));
        let rotation = app.spinner_rotation;
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.spinner_rotation, rotation);
    }

    #[test]
    fn invalid_timestamp_format_raises_warning_toast() {
        let mut config = Config::default();
        config.inbox.timestamp_format = Some("%Q".to_string());

        let (app, _task) = App::with_service(
            Flags::default(),
            config,
            RecordingService::with(Snapshot::empty()),
        );

        assert!(app
            .toasts()
            .visible()
            .any(|t| t.message_key() == config::INVALID_TIMESTAMP_FORMAT_KEY));
    }

    #[test]
    fn cli_feed_path_wins_over_config() {
        let dir = tempdir().expect("temp dir");
        let cli_feed = dir.path().join("cli.json");
        std::fs::write(&cli_feed, "[]").expect("write feed");

        let flags = Flags {
            feed_path: Some(cli_feed),
            ..Flags::default()
        };
        let mut config = Config::default();
        config.inbox.feed_path = Some(dir.path().join("missing.json"));

        let service = notification_service(&flags, &config);
        assert_eq!(service.fetch(), Ok(Snapshot::empty()));
    }

    #[test]
    fn missing_feed_reports_not_configured() {
        let service = notification_service(&Flags::default(), &Config::default());
        assert_eq!(service.fetch(), Err(Error::Feed(FeedError::NotConfigured)));
    }

    #[test]
    fn out_of_order_results_keep_the_newest_snapshot() {
        let service = RecordingService::with(snapshot(&[1, 2]));
        let (mut app, _dir) = loaded(&service);

        let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(1))));
        let after_first = app.latest_fetch();
        let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(2))));
        let after_second = app.latest_fetch();
        assert!(after_second > after_first);

        let _ = app.update(Message::FeedLoaded(after_second, Ok(Snapshot::empty())));
        let _ = app.update(Message::FeedLoaded(after_first, Ok(snapshot(&[2]))));

        assert!(app.snapshot().is_empty());
    }

    #[test]
    fn older_result_does_not_end_a_newer_load() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = loaded(&service);

        let _ = app.update(Message::Inbox(inbox::Message::MarkRead(NotificationId::new(1))));
        let intent_fetch = app.latest_fetch();
        let _ = app.update(Message::Header(header::Message::Refresh));
        let refresh_fetch = app.latest_fetch();

        let _ = app.update(Message::FeedLoaded(intent_fetch, Ok(snapshot(&[1, 2]))));
        assert!(app.is_loading());
        assert_eq!(app.snapshot(), &snapshot(&[1, 2]));

        let _ = app.update(Message::FeedLoaded(refresh_fetch, Ok(snapshot(&[3]))));
        assert!(!app.is_loading());
        assert_eq!(app.snapshot(), &snapshot(&[3]));
    }

    #[test]
    fn results_started_before_reload_are_ignored() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, _dir) = loaded(&service);

        let _ = app.update(Message::Header(header::Message::Refresh));
        let before_reload = app.latest_fetch();
        let _ = app.update(Message::Reload);

        let _ = app.update(Message::FeedLoaded(before_reload, Ok(snapshot(&[9]))));
        assert!(app.is_loading());
        assert!(app.snapshot().is_empty());

        let generation = app.latest_fetch();
        let _ = app.update(Message::FeedLoaded(generation, Ok(snapshot(&[1]))));
        assert!(!app.is_loading());
        assert_eq!(app.snapshot(), &snapshot(&[1]));
    }

    #[test]
    fn boundary_failure_writes_diagnostics_report() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, dir) = loaded(&service);
        let report = dir.path().join(REPORT_FILE_NAME);

        app.boundary().fail(RenderFailure::new("row layout panicked"), None);
        assert!(!report.exists());

        let _ = app.update(Message::Tick(Instant::now()));

        let content = std::fs::read_to_string(&report).expect("report should be written");
        assert!(content.contains("\"type\": \"render_failure\""));
        assert!(content.contains("\"boundary\": \"inbox\""));
    }

    #[test]
    fn reload_rewrites_diagnostics_report() {
        let service = RecordingService::with(snapshot(&[1]));
        let (mut app, dir) = loaded(&service);
        let report = dir.path().join(REPORT_FILE_NAME);

        app.boundary().fail(RenderFailure::new("row layout panicked"), None);
        let _ = app.update(Message::Reload);

        let content = std::fs::read_to_string(&report).expect("report should be written");
        assert!(content.contains("\"type\": \"render_failure\""));
        assert!(content.contains("\"action\": \"reload\""));
    }
}
