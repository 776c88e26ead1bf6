use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::GitPort;

/// Git port returning a canned diff and recording requested ranges.
#[derive(Clone, Default)]
pub struct FakeGit {
    diff: Option<String>,
    pub requested: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeGit {
    pub fn with_diff(diff: impl Into<String>) -> Self {
        Self { diff: Some(diff.into()), ..Self::default() }
    }

    /// Repository whose range has nothing to show.
    pub fn without_diff() -> Self {
        Self::default()
    }
}

impl GitPort for FakeGit {
    fn diff(&self, from: &str, to: &str) -> Result<Option<String>, AppError> {
        self.requested.lock().unwrap().push((from.to_string(), to.to_string()));
        Ok(self.diff.clone())
    }
}
