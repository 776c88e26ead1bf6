use std::path::PathBuf;

use git2::{DiffFormat, ErrorCode, Repository};

use crate::domain::AppError;
use crate::ports::GitPort;

/// Git access through libgit2, rooted at a working directory.
#[derive(Debug, Clone)]
pub struct GitRepositoryAdapter {
    root: PathBuf,
}

impl GitRepositoryAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.to_string(),
        })
    }
}

impl GitPort for GitRepositoryAdapter {
    fn diff(&self, from: &str, to: &str) -> Result<Option<String>, AppError> {
        let repo = self.repo()?;

        let from_tree = match repo.revparse_single(from).and_then(|obj| obj.peel_to_tree()) {
            Ok(tree) => tree,
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) => {
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::GitError {
                    command: format!("git2::Repository::revparse_single({})", from),
                    details: e.to_string(),
                });
            }
        };
        let to_tree = repo.revparse_single(to).and_then(|obj| obj.peel_to_tree()).map_err(|e| {
            AppError::GitError {
                command: format!("git2::Repository::revparse_single({})", to),
                details: e.to_string(),
            }
        })?;

        let diff = repo.diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None).map_err(|e| {
            AppError::GitError {
                command: "git2::Repository::diff_tree_to_tree".to_string(),
                details: e.to_string(),
            }
        })?;

        let mut patch = Vec::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                patch.push(line.origin() as u8);
            }
            patch.extend_from_slice(line.content());
            true
        })
        .map_err(|e| AppError::GitError {
            command: "git2::Diff::print".to_string(),
            details: e.to_string(),
        })?;

        let text = String::from_utf8_lossy(&patch).into_owned();
        if text.trim().is_empty() { Ok(None) } else { Ok(Some(text)) }
    }
}
