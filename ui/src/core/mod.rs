//! Platform-neutral plumbing shared by every section: configuration, timers,
//! browser/webview glue and small formatting helpers.

pub mod config;
pub mod format;
pub mod platform;
pub mod timing;
