// SPDX-License-Identifier: MPL-2.0
//! Fault containment for view subtrees.
//!
//! A [`Boundary`] wraps the view function of a subtree. While healthy it
//! renders the subtree unchanged. When rendering panics, or a fallible render
//! returns an error, the boundary records the failure once through its
//! [`ErrorSink`], switches to [`BoundaryState::Failed`] and from then on shows
//! a fixed fallback with a single reload action. The subtree is never
//! rendered again by that boundary instance.
//!
//! Only the render phase is covered. Failures in `update`, subscriptions or
//! tasks are handled where they occur.
//!
//! Recovery is a full reload: the host drops the boundary together with the
//! rest of its state and builds a fresh one.

use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use iced::Element;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Describes a failure caught while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    message: String,
}

impl RenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a failure from a `catch_unwind` payload.
    ///
    /// Panics raised with a string literal or a formatted message keep their
    /// text; any other payload gets a generic description.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "render panicked with a non-string payload".to_string()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render failure: {}", self.message)
    }
}

impl std::error::Error for RenderFailure {}

/// Error returned by a fallible render function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError(pub String);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for RenderFailure {
    fn from(err: RenderError) -> Self {
        Self::new(err.0)
    }
}

/// Where a failure was caught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticInfo {
    /// Name of the boundary.
    pub boundary: String,
    /// Host-provided description of what was being rendered.
    pub context: Option<String>,
}

impl DiagnosticInfo {
    pub fn new(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Destination for contained render failures.
///
/// Implementations must not fail. A panic escaping `record` is caught and
/// discarded by the boundary.
pub trait ErrorSink: Send + Sync {
    fn record(&self, failure: &RenderFailure, info: &DiagnosticInfo);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn record(&self, _failure: &RenderFailure, _info: &DiagnosticInfo) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    /// Terminal for this boundary instance.
    Failed(RenderFailure),
}

impl BoundaryState {
    pub fn has_error(&self) -> bool {
        matches!(self, BoundaryState::Failed(_))
    }

    pub fn error(&self) -> Option<&RenderFailure> {
        match self {
            BoundaryState::Healthy => None,
            BoundaryState::Failed(failure) => Some(failure),
        }
    }
}

/// Localized content of the fallback view.
#[derive(Debug, Clone)]
pub struct Fallback<Message> {
    pub title: String,
    pub message: String,
    pub reload_label: String,
    pub on_reload: Message,
}

impl<Message: Clone> Fallback<Message> {
    fn view<'a>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        centered_error_view(
            ErrorDisplay::new(ErrorSeverity::Error)
                .title(self.title)
                .message(self.message)
                .action(self.reload_label, self.on_reload),
        )
    }
}

/// Render-failure boundary around one view subtree.
///
/// The state lives in a `RefCell` because Iced renders through `&self`.
pub struct Boundary {
    name: String,
    state: RefCell<BoundaryState>,
    sink: Arc<dyn ErrorSink>,
}

impl fmt::Debug for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundary")
            .field("name", &self.name)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl Boundary {
    pub fn new(name: impl Into<String>, sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            name: name.into(),
            state: RefCell::new(BoundaryState::Healthy),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> BoundaryState {
        self.state.borrow().clone()
    }

    pub fn is_failed(&self) -> bool {
        self.state.borrow().has_error()
    }

    pub fn failure(&self) -> Option<RenderFailure> {
        self.state.borrow().error().cloned()
    }

    /// Renders the subtree, or the fallback once the boundary has failed.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        fallback: Fallback<Message>,
        render: impl FnOnce() -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        self.contain(fallback, None, || Ok(render()))
    }

    /// Like [`view`](Self::view), attaching `context` to any logged failure.
    pub fn view_in_context<'a, Message: Clone + 'a>(
        &self,
        context: impl Into<String>,
        fallback: Fallback<Message>,
        render: impl FnOnce() -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        self.contain(fallback, Some(context.into()), || Ok(render()))
    }

    /// Renders a subtree that can report failure without panicking.
    pub fn view_fallible<'a, Message: Clone + 'a>(
        &self,
        fallback: Fallback<Message>,
        render: impl FnOnce() -> Result<Element<'a, Message>, RenderError>,
    ) -> Element<'a, Message> {
        self.contain(fallback, None, render)
    }

    /// Moves the boundary to `Failed` and logs the failure.
    ///
    /// Returns `false` without logging when the boundary had already failed.
    pub fn fail(&self, failure: RenderFailure, context: Option<String>) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.has_error() {
                return false;
            }
            *state = BoundaryState::Failed(failure.clone());
        }

        let info = DiagnosticInfo {
            boundary: self.name.clone(),
            context,
        };
        let sink = &self.sink;
        // A failing sink must not take the fallback down with it
        let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.record(&failure, &info)));
        true
    }

    fn contain<'a, Message: Clone + 'a>(
        &self,
        fallback: Fallback<Message>,
        context: Option<String>,
        render: impl FnOnce() -> Result<Element<'a, Message>, RenderError>,
    ) -> Element<'a, Message> {
        if self.is_failed() {
            return fallback.view();
        }

        let failure = match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(element)) => return element,
            Ok(Err(err)) => RenderFailure::from(err),
            Err(payload) => RenderFailure::from_panic(payload.as_ref()),
        };

        self.fail(failure, context);
        fallback.view()
    }
}
