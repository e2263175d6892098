//! Window lifecycle rules of the desktop shell.
//!
//! The shell itself is a thin native wrapper; this module decides what it
//! does for each lifecycle event so the rules can be tested without a window
//! system.

use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

/// A window to open: what it loads and its initial size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowSpec {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl WindowSpec {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.server_url(),
            width: cfg.window_width,
            height: cfg.window_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Ready,
    /// The app was re-activated, e.g. by clicking its dock icon
    Activate { open_windows: usize },
    AllWindowsClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShellAction {
    OpenWindow(WindowSpec),
    Quit,
    /// Keep running with no windows open
    StayResident,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPolicy {
    platform: Platform,
    window: WindowSpec,
}

impl ShellPolicy {
    pub fn new(platform: Platform, window: WindowSpec) -> Self {
        Self { platform, window }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(Platform::current(), WindowSpec::from_config(cfg))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn on_event(&self, event: ShellEvent) -> ShellAction {
        let action = match event {
            ShellEvent::Ready => ShellAction::OpenWindow(self.window.clone()),
            ShellEvent::Activate { open_windows: 0 } => {
                ShellAction::OpenWindow(self.window.clone())
            }
            ShellEvent::Activate { .. } => ShellAction::Nothing,
            ShellEvent::AllWindowsClosed if self.platform == Platform::MacOs => {
                ShellAction::StayResident
            }
            ShellEvent::AllWindowsClosed => ShellAction::Quit,
        };

        info!(?event, ?action, platform = %self.platform, "Shell lifecycle event");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn policy(platform: Platform) -> ShellPolicy {
        ShellPolicy::new(platform, WindowSpec::from_config(&AppConfig::default()))
    }

    #[test]
    fn ready_opens_the_configured_window() {
        let action = policy(Platform::Linux).on_event(ShellEvent::Ready);
        assert_eq!(
            action,
            ShellAction::OpenWindow(WindowSpec {
                url: "http://127.0.0.1:5000".into(),
                width: 1800,
                height: 1200,
            })
        );
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(3, false)]
    fn activate_reopens_only_without_windows(#[case] open_windows: usize, #[case] opens: bool) {
        let action = policy(Platform::MacOs).on_event(ShellEvent::Activate { open_windows });
        assert_eq!(matches!(action, ShellAction::OpenWindow(_)), opens);
    }

    #[rstest]
    #[case(Platform::MacOs, ShellAction::StayResident)]
    #[case(Platform::Windows, ShellAction::Quit)]
    #[case(Platform::Linux, ShellAction::Quit)]
    #[case(Platform::Other, ShellAction::Quit)]
    fn closing_the_last_window(#[case] platform: Platform, #[case] expected: ShellAction) {
        assert_eq!(policy(platform).on_event(ShellEvent::AllWindowsClosed), expected);
    }
}
