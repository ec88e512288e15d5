use leptos::prelude::*;
use site_core::session::{AdminUser, Session};

use crate::browser::storage::BrowserStorage;

/// Admin sign-in state shared through context.
#[derive(Clone, Copy)]
pub struct AdminSession {
    session: StoredValue<Session<BrowserStorage>>,
    pub user: RwSignal<Option<AdminUser>>,
    pub is_loading: RwSignal<bool>,
}

impl AdminSession {
    /// Create the session, restore any saved user, and provide it as context.
    pub fn provide() -> Self {
        let mut session = Session::new(BrowserStorage);
        let user = session.restore().cloned();
        let this = Self {
            is_loading: RwSignal::new(session.is_loading()),
            session: StoredValue::new(session),
            user: RwSignal::new(user),
        };
        provide_context(this);
        this
    }

    pub fn login(&self, email: &str, password: &str) -> bool {
        let mut signed_in = None;
        self.session.update_value(|s| signed_in = s.login(email, password).cloned());
        let ok = signed_in.is_some();
        if !ok {
            log::info!("Admin sign-in rejected for {email}");
        }
        self.user.set(signed_in);
        ok
    }

    pub fn logout(&self) {
        self.session.update_value(|s| s.logout());
        self.user.set(None);
    }
}

pub fn use_admin_session() -> AdminSession {
    expect_context::<AdminSession>()
}
