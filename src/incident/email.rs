use crate::store::LocalStore;

#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
    Empty,
}

/// E-mail addresses a user has saved for sending incident reports.
pub struct EmailBookmarks {
    key: String,
}

impl EmailBookmarks {
    pub fn new(user_id: &str) -> Self {
        Self {
            key: format!("savedEmails_{}", user_id),
        }
    }

    pub fn list(&self, store: &LocalStore) -> Vec<String> {
        let Some(raw) = store.get(&self.key) else {
            return vec![];
        };
        match serde_json::from_str(raw) {
            Ok(emails) => emails,
            Err(err) => {
                log::warn!("ignoring malformed {}: {}", self.key, err);
                vec![]
            }
        }
    }

    pub fn save(&self, store: &mut LocalStore, email: &str) -> Result<SaveOutcome, anyhow::Error> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(SaveOutcome::Empty);
        }

        let mut emails = self.list(store);
        if emails.iter().any(|e| e == email) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        emails.push(email.to_string());
        self.write(store, &emails)?;

        Ok(SaveOutcome::Saved)
    }

    /// Returns false if the address was not saved.
    pub fn delete(&self, store: &mut LocalStore, email: &str) -> Result<bool, anyhow::Error> {
        let email = email.trim();
        let emails = self.list(store);
        let remaining: Vec<String> = emails.iter().filter(|e| *e != email).cloned().collect();
        if remaining.len() == emails.len() {
            return Ok(false);
        }
        self.write(store, &remaining)?;

        Ok(true)
    }

    fn write(&self, store: &mut LocalStore, emails: &[String]) -> Result<(), anyhow::Error> {
        store.set(&self.key, serde_json::to_string(emails)?)
    }
}
