//! Site Configuration
//!
//! Embedded at build time from `config/site.json`. Every field has a default,
//! so a partial or broken file still yields a working site.

use folio_core::seo::SeoContext;
use folio_core::view_model::ListConfig;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

const SITE_JSON: &str = include_str!("../config/site.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub author: String,
    pub site_url: String,
    pub logo_url: String,
    pub contact_email: String,
    pub firebase: FirebaseConfig,
    pub media: MediaConfig,
    pub lists: ListSettings,
    pub home: HomeSettings,
    pub log_level: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub blog_preset: String,
    pub project_preset: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    pub page_size: usize,
    pub recent_count: usize,
    /// Show drafts on the public pages too
    pub show_unpublished: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeSettings {
    /// Phrases cycled by the hero typing effect
    pub roles: Vec<String>,
    pub recent_projects: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Folio".to_string(),
            author: "Site Owner".to_string(),
            site_url: String::new(),
            logo_url: String::new(),
            contact_email: String::new(),
            firebase: FirebaseConfig::default(),
            media: MediaConfig::default(),
            lists: ListSettings::default(),
            home: HomeSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            blog_preset: "portfolio_blog".to_string(),
            project_preset: "portfolio_projects".to_string(),
        }
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        let list = ListConfig::default();
        Self {
            page_size: list.page_size,
            recent_count: list.recent_count,
            show_unpublished: false,
        }
    }
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            roles: vec!["Web Developer".to_string()],
            recent_projects: 3,
        }
    }
}

impl SiteConfig {
    /// The embedded configuration, or defaults if it does not parse.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config/site.json is invalid, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn list_config(&self) -> ListConfig {
        ListConfig {
            page_size: self.lists.page_size,
            recent_count: self.lists.recent_count,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn seo(&self) -> SeoContext<'_> {
        SeoContext {
            site_name: &self.site_name,
            author: &self.author,
            logo_url: &self.logo_url,
        }
    }

    /// Whether a post or project may appear on the public pages.
    pub fn is_public(&self, published: bool) -> bool {
        published || self.lists.show_unpublished
    }

    /// Absolute URL for a site path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), path)
    }
}
