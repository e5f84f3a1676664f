//! Browser Helpers
//!
//! Local storage, document head updates, theme and scrolling. Everything here
//! degrades to a no-op when the DOM API is unavailable.

use folio_core::auth::AuthSession;
use leptos::html;
use leptos::prelude::*;
use serde_json::Value;

const THEME_KEY: &str = "site-theme";
const VISITOR_KEY: &str = "visitorId";
const SESSION_KEY: &str = "folio-session";

// ========================
// Theme
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: the theme it switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

pub fn saved_theme() -> Theme {
    storage_get(THEME_KEY).map(|t| Theme::parse(&t)).unwrap_or(Theme::Light)
}

/// Set `data-theme` on `<html>` and remember the choice.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    storage_set(THEME_KEY, theme.as_str());
}

// ========================
// Local Storage
// ========================

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn storage_get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        if s.set_item(key, value).is_err() {
            log::warn!("could not persist {}", key);
        }
    }
}

pub fn storage_remove(key: &str) {
    if let Some(s) = storage() {
        let _ = s.remove_item(key);
    }
}

/// `visitor_` followed by nine base-36 characters.
pub fn visitor_id_from(mut random: impl FnMut() -> f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let suffix: String = (0..9)
        .map(|_| {
            let idx = ((random() * 36.0) as usize).min(35);
            DIGITS[idx] as char
        })
        .collect();
    format!("visitor_{}", suffix)
}

/// The persisted visitor id, created on first use.
pub fn visitor_id() -> String {
    if let Some(id) = storage_get(VISITOR_KEY) {
        return id;
    }
    let id = visitor_id_from(js_sys::Math::random);
    storage_set(VISITOR_KEY, &id);
    id
}

pub fn load_session() -> Option<AuthSession> {
    let raw = storage_get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("discarding stored session: {}", e);
            storage_remove(SESSION_KEY);
            None
        }
    }
}

pub fn save_session(session: Option<&AuthSession>) {
    match session.map(serde_json::to_string) {
        Some(Ok(raw)) => storage_set(SESSION_KEY, &raw),
        Some(Err(e)) => log::error!("could not serialize session: {}", e),
        None => storage_remove(SESSION_KEY),
    }
}

// ========================
// Document Head
// ========================

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn set_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

pub fn set_meta_description(content: &str) {
    let Some(doc) = document() else { return };
    let meta = match doc.query_selector(r#"meta[name="description"]"#).ok().flatten() {
        Some(meta) => meta,
        None => {
            let Ok(meta) = doc.create_element("meta") else { return };
            let _ = meta.set_attribute("name", "description");
            if let Some(head) = doc.head() {
                let _ = head.append_child(&meta);
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", content);
}

/// Insert or replace the JSON-LD script with the given element id.
pub fn set_json_ld(id: &str, data: &Value) {
    let Some(doc) = document() else { return };
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let Ok(script) = doc.create_element("script") else { return };
    script.set_id(id);
    let _ = script.set_attribute("type", "application/ld+json");
    script.set_text_content(Some(&data.to_string()));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&script);
    }
}

/// Remove JSON-LD scripts whose id starts with `prefix`.
pub fn clear_json_ld(prefix: &str) {
    let Some(doc) = document() else { return };
    let selector = format!(r#"script[type="application/ld+json"][id^="{}"]"#, prefix);
    if let Ok(nodes) = doc.query_selector_all(&selector) {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                if let Some(parent) = node.parent_node() {
                    let _ = parent.remove_child(&node);
                }
            }
        }
    }
}

// ========================
// Navigation
// ========================

pub fn scroll_to(id: &str) {
    let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else { return };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn current_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            log::warn!("popup blocked for {}", url);
        }
    }
}

// ========================
// Files
// ========================

/// First file chosen in `input`, if any.
pub fn selected_file(input: &NodeRef<html::Input>) -> Option<web_sys::File> {
    input.get_untracked().and_then(|el| el.files()).and_then(|files| files.get(0))
}

pub fn clear_file(input: &NodeRef<html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}

pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("anything"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
        assert_eq!(Theme::Light.icon(), "🌙");
    }

    #[test]
    fn test_visitor_id_shape() {
        let mut seq = [0.0, 0.5, 0.999_999, 0.1].into_iter().cycle();
        let id = visitor_id_from(move || seq.next().unwrap_or(0.0));
        assert!(id.starts_with("visitor_"));
        let suffix = &id["visitor_".len()..];
        assert_eq!(suffix.len(), 9);
        assert_eq!(&suffix[..4], "0iz3");
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
