//! Page navigation state
//!
//! The shell owns the current page and the credential store; every transition
//! is a plain state set, except logout, which also clears the stored token.

use anyhow::Result;
use tracing::{debug, info};

use crate::auth::CredentialStore;

/// Top-level page shown by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Signup,
    Login,
    Admin,
}

pub struct Shell {
    page: Page,
    store: Box<dyn CredentialStore>,
}

impl Shell {
    /// Start on admin when a credential is already stored, else on landing.
    /// The token is not verified with the platform here.
    pub fn new(store: Box<dyn CredentialStore>) -> Result<Self> {
        let page = if store.load()?.is_some() {
            info!("Stored credential found, starting on admin");
            Page::Admin
        } else {
            Page::Landing
        };
        Ok(Self { page, store })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Whether a credential is currently stored
    pub fn has_credential(&self) -> Result<bool> {
        Ok(self.store.load()?.is_some())
    }

    /// Landing → signup
    pub fn start(&mut self) {
        self.set_page(Page::Signup);
    }

    /// Landing → login
    pub fn sign_in(&mut self) {
        self.set_page(Page::Login);
    }

    /// Signup/login → landing
    pub fn back(&mut self) {
        self.set_page(Page::Landing);
    }

    /// Signup finished; show the admin console
    pub fn complete_signup(&mut self) {
        self.set_page(Page::Admin);
    }

    /// Login finished; show the admin console
    pub fn complete_login(&mut self) {
        self.set_page(Page::Admin);
    }

    pub fn switch_to_login(&mut self) {
        self.set_page(Page::Login);
    }

    pub fn switch_to_signup(&mut self) {
        self.set_page(Page::Signup);
    }

    /// Clear the stored credential and return to landing
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        info!("Logged out, credential cleared");
        self.set_page(Page::Landing);
        Ok(())
    }

    /// Persist a token handed back by the gateway
    pub fn store_token(&mut self, token: &str) -> Result<()> {
        self.store.store(token)
    }

    fn set_page(&mut self, page: Page) {
        debug!(from = ?self.page, to = ?page, "Page transition");
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;

    fn fresh_shell() -> Shell {
        Shell::new(Box::new(MemoryTokenStore::new())).unwrap()
    }

    #[test]
    fn test_starts_on_landing_without_credential() {
        let shell = fresh_shell();
        assert_eq!(shell.page(), Page::Landing);
    }

    #[test]
    fn test_starts_on_admin_with_credential() {
        let shell = Shell::new(Box::new(MemoryTokenStore::with_token("tok-123"))).unwrap();
        assert_eq!(shell.page(), Page::Admin);
    }

    #[test]
    fn test_landing_transitions() {
        let mut shell = fresh_shell();
        shell.start();
        assert_eq!(shell.page(), Page::Signup);

        shell.back();
        assert_eq!(shell.page(), Page::Landing);

        shell.sign_in();
        assert_eq!(shell.page(), Page::Login);

        shell.back();
        assert_eq!(shell.page(), Page::Landing);
    }

    #[test]
    fn test_switching_between_forms() {
        let mut shell = fresh_shell();
        shell.start();
        shell.switch_to_login();
        assert_eq!(shell.page(), Page::Login);

        shell.switch_to_signup();
        assert_eq!(shell.page(), Page::Signup);
    }

    #[test]
    fn test_completion_lands_on_admin() {
        let mut shell = fresh_shell();
        shell.start();
        shell.complete_signup();
        assert_eq!(shell.page(), Page::Admin);

        let mut shell = fresh_shell();
        shell.sign_in();
        shell.complete_login();
        assert_eq!(shell.page(), Page::Admin);
    }

    #[test]
    fn test_logout_clears_credential() {
        let mut shell = Shell::new(Box::new(MemoryTokenStore::with_token("tok-123"))).unwrap();
        assert!(shell.has_credential().unwrap());

        shell.logout().unwrap();
        assert_eq!(shell.page(), Page::Landing);
        assert!(!shell.has_credential().unwrap());
    }

    #[test]
    fn test_store_token_persists() {
        let mut shell = fresh_shell();
        shell.store_token("tok-456").unwrap();
        assert!(shell.has_credential().unwrap());
    }
}
