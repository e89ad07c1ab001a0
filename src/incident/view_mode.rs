use std::fmt::Display;

use crate::store::LocalStore;

const KEY: &str = "incidentViewPreference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

impl ViewMode {
    pub fn load(store: &LocalStore) -> ViewMode {
        match store.get(KEY) {
            Some("list") => ViewMode::List,
            _ => ViewMode::Card,
        }
    }

    pub fn toggle(self, store: &mut LocalStore) -> Result<ViewMode, anyhow::Error> {
        let mode = match self {
            ViewMode::Card => ViewMode::List,
            ViewMode::List => ViewMode::Card,
        };
        store.set(KEY, mode.as_str().to_string())?;
        Ok(mode)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Card => "card",
            ViewMode::List => "list",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
