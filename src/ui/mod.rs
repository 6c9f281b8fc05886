// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! takes a borrowed `ViewContext` and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! # Views
//!
//! - [`inbox`] - Notification inbox and its pure projection
//! - [`header`] - Title bar with unread count and refresh
//! - [`boundary`] - Render-failure containment with a reload fallback
//! - [`toast`] - Host feedback toasts
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph icons

pub mod boundary;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod inbox;
pub mod styles;
pub mod theming;
pub mod toast;
pub mod widgets;
