pub mod artifact_filesystem;
pub mod environment;
pub mod git_repository;
pub mod providers;
pub mod template;
