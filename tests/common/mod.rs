// Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// Initialise a repository in a fresh temp dir with a configured user
pub fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    (temp_dir, repo)
}

fn signature() -> Signature<'static> {
    Signature::now("Test User", "test@example.com").expect("Could not create signature")
}

/// Write `file_name` and commit it on top of HEAD
pub fn commit_file(repo: &Repository, file_name: &str, content: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("Repository has no workdir");
    fs::write(workdir.join(file_name), content).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new(file_name))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let sig = signature();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Could not create commit")
}

pub fn tag_lightweight(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Could not create tag");
}

pub fn tag_annotated(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag(name, &object, &signature(), &format!("Release {}", name), false)
        .expect("Could not create annotated tag");
}

/// Repository with one commit tagged `tag` and a pubspec.yaml holding `manifest`
pub fn tagged_project(tag: &str, manifest: &str) -> (TempDir, Repository) {
    let (temp_dir, repo) = init_repo();
    let oid = commit_file(&repo, "README.md", "demo\n", "Initial commit");
    tag_lightweight(&repo, tag, oid);
    fs::write(temp_dir.path().join("pubspec.yaml"), manifest).expect("Could not write manifest");
    (temp_dir, repo)
}
