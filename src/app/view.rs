// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header on top, the contained inbox below, toasts stacked over both.

use super::Message;
use crate::feed::Snapshot;
use crate::i18n::fluent::I18n;
use crate::ui::boundary::{Boundary, Fallback};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::inbox::{self, TimestampFormatter, ViewContext as InboxViewContext};
use crate::ui::toast;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: &'a Snapshot,
    pub loading: bool,
    pub formatter: &'a TimestampFormatter,
    pub spinner_rotation: f32,
    pub boundary: &'a Boundary,
    pub toasts: &'a toast::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(HeaderViewContext {
        i18n: ctx.i18n,
        unread_count: ctx.snapshot.unread_count(),
        loading: ctx.loading,
    })
    .map(Message::Header);

    let column = Column::new()
        .push(header_view)
        .push(
            Container::new(view_inbox(&ctx))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = toast::view_overlay(ctx.toasts, ctx.i18n).map(Message::Toast);

    Stack::new()
        .push(column)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_inbox<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let fallback = Fallback {
        title: ctx.i18n.tr("boundary-title"),
        message: ctx.i18n.tr("boundary-message"),
        reload_label: ctx.i18n.tr("boundary-reload"),
        on_reload: Message::Reload,
    };
    let context = format!(
        "{} notifications, loading={}",
        ctx.snapshot.len(),
        ctx.loading
    );

    let i18n = ctx.i18n;
    let notifications = ctx.snapshot.notifications();
    let loading = ctx.loading;
    let formatter = ctx.formatter;
    let spinner_rotation = ctx.spinner_rotation;

    ctx.boundary.view_in_context(context, fallback, move || {
        inbox::view(InboxViewContext {
            i18n,
            notifications,
            loading,
            formatter,
            spinner_rotation,
        })
        .map(Message::Inbox)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::domain::notification::{Notification, NotificationKind};
    use crate::ui::boundary::{ErrorSink, RenderFailure};
    use chrono::Utc;
    use std::sync::Arc;

    struct Fixture {
        i18n: I18n,
        snapshot: Snapshot,
        formatter: TimestampFormatter,
        toasts: toast::Manager,
        collector: DiagnosticsCollector,
        boundary: Boundary,
    }

    impl Fixture {
        fn new() -> Self {
            let collector = DiagnosticsCollector::default();
            let sink: Arc<dyn ErrorSink> = Arc::new(collector.handle());
            let now = Utc::now();
            let snapshot = Snapshot::new(vec![
                Notification::new(1, NotificationKind::Alert, "Low stock", "Thai curry", now),
                Notification::new(2, NotificationKind::Delivery, "Courier", "", now).read(),
            ])
            .expect("unique ids");
            Self {
                i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
                snapshot,
                formatter: TimestampFormatter::default(),
                toasts: toast::Manager::new(),
                collector,
                boundary: Boundary::new("inbox", sink),
            }
        }

        fn render(&self) {
            let _element = view(ViewContext {
                i18n: &self.i18n,
                snapshot: &self.snapshot,
                loading: false,
                formatter: &self.formatter,
                spinner_rotation: 0.0,
                boundary: &self.boundary,
                toasts: &self.toasts,
            });
        }

        fn render_failures(&mut self) -> usize {
            self.collector.process_pending();
            self.collector.render_failure_count()
        }
    }

    #[test]
    fn healthy_inbox_renders_without_tripping_the_boundary() {
        let mut fixture = Fixture::new();

        fixture.render();

        assert!(!fixture.boundary.is_failed());
        assert_eq!(fixture.render_failures(), 0);
    }

    #[test]
    fn failed_boundary_renders_fallback_without_logging_again() {
        let mut fixture = Fixture::new();
        assert!(fixture.boundary.fail(RenderFailure::new("boom"), None));
        assert_eq!(fixture.render_failures(), 1);

        fixture.render();
        fixture.render();

        assert!(fixture.boundary.is_failed());
        assert_eq!(fixture.boundary.failure(), Some(RenderFailure::new("boom")));
        assert_eq!(fixture.render_failures(), 1);
    }
}
