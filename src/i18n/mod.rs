// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use Fluent. `.ftl` files under `assets/i18n/` are embedded at
//! compile time; the locale is picked from the CLI, the config file, then the
//! operating system, falling back to `en-US`. Missing keys render as
//! `MISSING: <key>` so they are easy to spot.

pub mod fluent;
