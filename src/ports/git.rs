use crate::domain::AppError;

pub trait GitPort {
    /// Unified diff between two revisions.
    ///
    /// Returns `None` when `from` cannot be resolved (e.g. `HEAD~1` on a root commit).
    fn diff(&self, from: &str, to: &str) -> Result<Option<String>, AppError>;
}
