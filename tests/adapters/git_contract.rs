use moviepub::adapters::GitCommandAdapter;
use moviepub::ports::GitPort;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn adapter(root: &TempDir) -> GitCommandAdapter {
    GitCommandAdapter::new(PathBuf::from("git"), root.path().to_path_buf())
}

#[test]
fn git_contract_tests() {
    let work = TempDir::new().unwrap();
    let remote = TempDir::new().unwrap();
    let git = adapter(&work);

    // 1. Init on the publish branch
    git.init_repository("main").expect("init");
    assert!(work.path().join(".git").is_dir());
    assert_eq!(git.run_command(&["symbolic-ref", "--short", "HEAD"]).unwrap(), "main");
    git.run_command(&["config", "user.name", "Test User"]).unwrap();
    git.run_command(&["config", "user.email", "test@example.com"]).unwrap();

    // 2. Remote
    assert!(!git.has_remote("origin").unwrap());
    let remote_git = GitCommandAdapter::new(PathBuf::from("git"), remote.path().to_path_buf());
    remote_git.run_command(&["init", "--bare"]).unwrap();
    git.add_remote("origin", &remote.path().display().to_string()).expect("add remote");
    assert!(git.has_remote("origin").unwrap());
    assert!(!git.has_remote("upstream").unwrap());

    // 3. Stage and commit
    fs::write(work.path().join("index.html"), "<html/>").unwrap();
    assert!(git.has_pending_changes().unwrap());
    git.stage_all().unwrap();
    git.commit("Update movie list 2024-01-01 00:00").expect("commit");
    assert!(!git.has_pending_changes().unwrap());

    // 4. Empty commit fails with git's explanation
    let err = git.commit("nothing here").expect_err("empty commit should fail");
    assert!(err.to_string().contains("git commit -m nothing here"));
    assert!(err.to_string().contains("nothing to commit"));

    // 5. Push with upstream, then a plain push succeeds
    git.push_set_upstream("origin", "main").expect("push -u");
    fs::write(work.path().join("index.html"), "<html>v2</html>").unwrap();
    git.stage_all().unwrap();
    git.commit("second").unwrap();
    git.push().expect("plain push after upstream is set");

    assert_eq!(
        remote_git.run_command(&["log", "-1", "--format=%s", "main"]).unwrap(),
        "second"
    );
}

#[test]
fn failing_command_reports_command_and_stderr() {
    let work = TempDir::new().unwrap();
    let git = adapter(&work);

    let err = git.run_command(&["rev-parse", "HEAD"]).unwrap_err();
    let message = err.to_string();

    assert!(message.starts_with("Git error running 'git rev-parse HEAD'"), "{}", message);
}

#[test]
fn missing_git_executable_is_git_error() {
    let work = TempDir::new().unwrap();
    let git = GitCommandAdapter::new(work.path().join("no-such-git"), work.path().to_path_buf());

    assert!(matches!(
        git.stage_all(),
        Err(moviepub::AppError::GitError { .. })
    ));
}
