use std::path::Path;

use git2::{IndexAddOption, Repository, Signature};

use crate::domain::AppError;
use crate::ports::VersionControl;

const FALLBACK_AUTHOR: &str = "svcforge";
const FALLBACK_EMAIL: &str = "svcforge@localhost";

/// `VersionControl` backed by libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRepository;

impl GitRepository {
    /// Create a new libgit2-backed repository initializer.
    pub fn new() -> Self {
        Self
    }
}

fn git_error(command: &'static str) -> impl FnOnce(git2::Error) -> AppError {
    move |e| AppError::Git { command: command.to_string(), details: e.message().to_string() }
}

/// Use the configured identity when there is one; fresh machines often lack it.
fn signature(repo: &Repository) -> Result<Signature<'static>, AppError> {
    match repo.signature() {
        Ok(signature) => Ok(signature),
        Err(_) => Signature::now(FALLBACK_AUTHOR, FALLBACK_EMAIL)
            .map_err(git_error("git2::Signature::now")),
    }
}

impl VersionControl for GitRepository {
    fn initialize(&self, root: &Path, remote: &str, message: &str) -> Result<String, AppError> {
        let repo = Repository::init(root).map_err(git_error("git2::Repository::init"))?;

        let mut index = repo.index().map_err(git_error("git2::Repository::index"))?;
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .map_err(git_error("git2::Index::add_all"))?;
        index.write().map_err(git_error("git2::Index::write"))?;
        let tree_id = index.write_tree().map_err(git_error("git2::Index::write_tree"))?;
        let tree = repo.find_tree(tree_id).map_err(git_error("git2::Repository::find_tree"))?;

        let signature = signature(&repo)?;
        let commit = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[])
            .map_err(git_error("git2::Repository::commit"))?;

        repo.remote("origin", remote).map_err(git_error("git2::Repository::remote"))?;

        Ok(commit.to_string())
    }
}
