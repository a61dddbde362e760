use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::pii::Masked;

/// Shown when an account carries no usable name at all.
const MEMBER_PLACEHOLDER: &str = "Membre CORE";

/// An authenticated studio member. The `login` is the partition key for all
/// per-member ledger data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Masked<String>,
}

impl Account {
    pub fn new(login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            first_name: None,
            last_name: None,
            email: Masked(email.into()),
        }
    }

    /// Full display name: composed first and last name, falling back to the
    /// login, falling back to the member placeholder.
    pub fn display_name(&self) -> String {
        let composed = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !composed.is_empty() {
            return composed;
        }
        if !self.login.is_empty() {
            return self.login.clone();
        }
        MEMBER_PLACEHOLDER.to_string()
    }

    /// Short salutation name: first name, falling back to the local part of
    /// an email-shaped login, falling back to "Membre".
    pub fn short_name(&self) -> String {
        if let Some(first) = self.first_name.as_deref() {
            if !first.is_empty() {
                return first.to_string();
            }
        }

        match self.login.split('@').next() {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => "Membre".to_string(),
        }
    }
}

/// Source of the currently authenticated account, if any.
pub trait AccountProvider: Send + Sync {
    fn current_account(&self) -> Option<Account>;

    /// Login of the current account, the partition key for ledger reads.
    fn current_login(&self) -> Option<String> {
        self.current_account().map(|account| account.login)
    }
}

/// In-memory account session. Clones share the same signed-in state.
#[derive(Clone, Default)]
pub struct AccountSession {
    current: Arc<Mutex<Option<Account>>>,
}

impl AccountSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(account: Account) -> Self {
        let session = Self::new();
        session.sign_in(account);
        session
    }

    pub fn sign_in(&self, account: Account) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(account);
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }
}

impl AccountProvider for AccountSession {
    fn current_account(&self) -> Option<Account> {
        self.current.lock().ok().and_then(|current| current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with_names(first: Option<&str>, last: Option<&str>) -> Account {
        Account {
            login: "marie.dupont@email.com".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email: Masked("marie.dupont@email.com".to_string()),
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        let full = account_with_names(Some("Marie"), Some("Dupont"));
        assert_eq!(full.display_name(), "Marie Dupont");

        let first_only = account_with_names(Some("Marie"), None);
        assert_eq!(first_only.display_name(), "Marie");

        let nameless = account_with_names(None, None);
        assert_eq!(nameless.display_name(), "marie.dupont@email.com");

        let mut empty = account_with_names(None, None);
        empty.login = String::new();
        assert_eq!(empty.display_name(), "Membre CORE");
    }

    #[test]
    fn test_short_name_uses_login_local_part() {
        let named = account_with_names(Some("Marie"), Some("Dupont"));
        assert_eq!(named.short_name(), "Marie");

        let nameless = account_with_names(None, None);
        assert_eq!(nameless.short_name(), "marie.dupont");

        let mut empty = account_with_names(None, None);
        empty.login = String::new();
        assert_eq!(empty.short_name(), "Membre");
    }

    #[test]
    fn test_session_sign_in_and_out() {
        let session = AccountSession::new();
        assert!(session.current_account().is_none());

        session.sign_in(Account::new("u1", "u1@email.com"));
        assert_eq!(session.current_login().as_deref(), Some("u1"));

        // Clones observe the same session
        let clone = session.clone();
        clone.sign_out();
        assert!(session.current_account().is_none());
    }

    #[test]
    fn test_account_debug_masks_email() {
        let account = Account::new("u1", "u1@email.com");
        let printed = format!("{:?}", account);
        assert!(!printed.contains("u1@email.com"));
        assert!(printed.contains("********"));
    }
}
