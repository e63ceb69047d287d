#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use rstest::fixture;
use std::io::Write;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A 40-character hex object id filled with a single digit.
pub fn oid(fill: char) -> String {
    fill.to_string().repeat(40)
}

/// Compress `content` and store it at `.git/objects/<xx>/<rest>`.
pub fn write_object(dir: &Path, oid: &str, content: &str) {
    let object_path = dir
        .join(".git")
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..]);
    std::fs::create_dir_all(object_path.parent().unwrap())
        .unwrap_or_else(|e| panic!("Failed to create object directory: {}", e));

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    std::fs::write(&object_path, encoder.finish().unwrap())
        .unwrap_or_else(|e| panic!("Failed to write object file: {}", e));
}

/// Point HEAD at `refs/heads/<branch>` and store `oid` in that ref file.
pub fn write_symbolic_head(dir: &Path, branch: &str, oid: &str) {
    let git_dir = dir.join(".git");
    std::fs::create_dir_all(&git_dir).unwrap();
    std::fs::write(git_dir.join("HEAD"), format!("ref: refs/heads/{}\n", branch)).unwrap();
    write_branch_ref(dir, branch, oid);
}

/// Store a bare commit id in HEAD (detached head).
pub fn write_direct_head(dir: &Path, oid: &str) {
    let git_dir = dir.join(".git");
    std::fs::create_dir_all(&git_dir).unwrap();
    std::fs::write(git_dir.join("HEAD"), format!("{}\n", oid)).unwrap();
}

/// Store a commit id in `refs/heads/<branch>` without touching HEAD.
pub fn write_branch_ref(dir: &Path, branch: &str, oid: &str) {
    let heads_dir = dir.join(".git").join("refs").join("heads");
    std::fs::create_dir_all(&heads_dir).unwrap();
    std::fs::write(heads_dir.join(branch), format!("{}\n", oid)).unwrap();
}

pub fn run_gitviz_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitviz").expect("Failed to find gitviz binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "--allow-empty", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
    cmd
}
