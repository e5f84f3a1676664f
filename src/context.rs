//! Application Context
//!
//! Shared state provided via Leptos Context API: the site configuration and
//! the admin session. Store clients are built from these per call.

use std::rc::Rc;

use chrono::Utc;
use folio_core::auth::{AuthSession, Gate};
use folio_core::document::Record;
use folio_core::repository::Repository;
use leptos::prelude::*;

use crate::browser;
use crate::commands::FirestoreClient;
use crate::config::SiteConfig;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<SiteConfig>,
    /// Signed-in admin - read
    pub session: ReadSignal<Option<AuthSession>>,
    /// Signed-in admin - write
    set_session: WriteSignal<Option<AuthSession>>,
}

impl AppContext {
    pub fn new(
        config: SiteConfig,
        session: (ReadSignal<Option<AuthSession>>, WriteSignal<Option<AuthSession>>),
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            session: session.0,
            set_session: session.1,
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Store client, authenticated when an admin is signed in.
    pub fn store(&self) -> Rc<FirestoreClient> {
        let token = self.session.get_untracked().map(|s| s.id_token);
        let client = self.with_config(|c| FirestoreClient::new(&c.firebase.project_id, &c.firebase.api_key));
        Rc::new(client.with_token(token))
    }

    pub fn repo<T: Record>(&self) -> Repository<T, FirestoreClient> {
        Repository::new(self.store())
    }

    pub fn sign_in(&self, session: AuthSession) {
        browser::save_session(Some(&session));
        self.set_session.set(Some(session));
    }

    pub fn sign_out(&self) {
        browser::save_session(None);
        self.set_session.set(None);
        log::info!("signed out");
    }

    /// Redirect target for a gated route, tracked on the session signal.
    pub fn redirect_for(&self, gate: Gate) -> Option<&'static str> {
        self.session.with(|s| gate.redirect(s.as_ref(), Utc::now()))
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
