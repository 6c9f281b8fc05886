// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{config_dir, diagnostics_report_path, App, Message};
use crate::config;
use crate::diagnostics::UserAction;
use crate::error::Error;
use crate::feed::Snapshot;
use crate::ui::toast::Toast;
use crate::ui::widgets::animated_spinner;
use crate::ui::{header, inbox};
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();
        if self.boundary.is_failed() && !self.diagnostics_exported {
            self.diagnostics_exported = true;
            self.export_diagnostics();
        }

        match message {
            Message::Header(message) => self.handle_header(message),
            Message::Inbox(intent) => self.handle_intent(intent),
            Message::Toast(message) => {
                self.toasts.handle_message(&message);
                Task::none()
            }
            Message::FeedLoaded(generation, result) => {
                self.handle_feed_loaded(generation, result);
                Task::none()
            }
            Message::Reload => self.reload(),
            Message::Tick(now) => {
                self.handle_tick(now);
                Task::none()
            }
        }
    }

    fn handle_header(&mut self, message: header::Message) -> Task<Message> {
        match header::update(message, self.loading) {
            header::Event::None => Task::none(),
            header::Event::Refresh => {
                self.diagnostics.handle().log_action(UserAction::Refresh);
                self.loading = true;
                self.fetch_snapshot()
            }
        }
    }

    /// Forwards an inbox intent to the service, then refetches.
    ///
    /// The displayed snapshot is left alone until the refetch lands.
    fn handle_intent(&mut self, intent: inbox::Message) -> Task<Message> {
        let handle = self.diagnostics.handle();
        match intent {
            inbox::Message::MarkRead(id) => {
                handle.log_action(UserAction::MarkRead { id: id.value() });
                self.service.mark_read(id);
            }
            inbox::Message::Delete(id) => {
                handle.log_action(UserAction::Delete { id: id.value() });
                self.service.delete(id);
            }
        }
        self.fetch_snapshot()
    }

    /// Applies a fetch result unless a newer one has already landed.
    fn handle_feed_loaded(&mut self, generation: u64, result: Result<Snapshot, Error>) {
        if generation <= self.applied_generation {
            return;
        }
        self.applied_generation = generation;
        if generation == self.fetch_generation {
            self.loading = false;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.toasts.clear_feed_errors();
            }
            Err(err) => {
                // Previous snapshot stays on screen
                self.toasts
                    .push(Toast::error(err.i18n_key()).with_arg("details", err.to_string()));
            }
        }
    }

    /// Rebuilds the application from a fresh config.
    ///
    /// The service and the diagnostics history carry over. Fetches still in
    /// flight from before the reload are ignored when they land.
    fn reload(&mut self) -> Task<Message> {
        self.diagnostics.handle().log_action(UserAction::Reload);
        self.diagnostics.process_pending();
        self.export_diagnostics();

        let (config, config_warning) = config::load_with_override(config_dir(&self.flags));
        let diagnostics = std::mem::take(&mut self.diagnostics);
        let (app, task) = App::boot(
            self.flags.clone(),
            config,
            config_warning,
            Arc::clone(&self.service),
            diagnostics,
            self.fetch_generation,
        );
        *self = app;
        task
    }

    /// Writes the diagnostics report next to the settings file.
    ///
    /// A failed write is recorded as a warning.
    fn export_diagnostics(&self) {
        let Some(path) = diagnostics_report_path(&self.flags) else {
            return;
        };
        if let Err(err) = self.diagnostics.export_to_file(&path) {
            self.diagnostics
                .handle()
                .log_warning(format!("diagnostics export failed: {err}"));
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        if self.loading {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
        }
        self.toasts.tick(now);
    }
}
