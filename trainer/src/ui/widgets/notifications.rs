//! # Notifications Widget
//!
//! Toast notifications using egui-notify for confirmations and alerts.

use egui_notify::Toasts;

use crate::app::NotificationLevel;

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Show a notification raised by the application state
    pub fn push(&mut self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Success => self.success(message),
            NotificationLevel::Info => self.info(message),
            NotificationLevel::Warning => self.warning(message),
            NotificationLevel::Error => self.error(message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
