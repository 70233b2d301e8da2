//! Dark/light theme service
//!
//! The first visit follows `prefers-color-scheme`; after the user toggles,
//! the choice is stored and wins over the system setting.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use super::storage::{self, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Label for the control that switches *away* from this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeService {
    pub mode: RwSignal<ThemeMode>,
    pub is_dark: Memo<bool>,
}

impl ThemeService {
    /// Start in light mode on both server and client so hydration matches;
    /// the stored or system preference is applied once mounted.
    pub fn new() -> Self {
        let mode = RwSignal::new(ThemeMode::Light);
        let is_dark = Memo::new(move |_| mode.get().is_dark());
        let service = Self { mode, is_dark };

        #[cfg(not(feature = "ssr"))]
        {
            Effect::new(move |_| {
                let initial = storage::load::<ThemeMode>(THEME_KEY).unwrap_or_else(|| {
                    if detect_system_prefers_dark() {
                        ThemeMode::Dark
                    } else {
                        ThemeMode::Light
                    }
                });
                mode.set(initial);
            });

            Effect::new(move |_| {
                let _ = is_dark.get();
                service.apply_theme_class();
            });
        }

        service
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        self.mode.set(next);
        storage::persist(THEME_KEY, &next);
        tracing::debug!(?next, "theme toggled");
    }

    /// Mirror the mode onto `<html class="dark">`
    #[cfg(not(feature = "ssr"))]
    fn apply_theme_class(&self) {
        let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = html.class_list();
        if self.is_dark.get_untracked() {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn test_stored_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
