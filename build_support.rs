use std::fs;
use std::path::{ Path, PathBuf };

/// Files whose contents change whenever the checked-out commit changes.
///
/// Empty outside a git checkout, so source tarballs don't rerun the build
/// script on every build.
pub fn git_watch_paths(git_dir: &Path) -> Vec<PathBuf> {
    let head = git_dir.join("HEAD");
    let Ok(contents) = fs::read_to_string(&head) else {
        return Vec::new();
    };

    let mut paths = vec![head];
    if let Some(reference) = contents.trim().strip_prefix("ref:") {
        let loose = git_dir.join(reference.trim());
        if loose.is_file() {
            paths.push(loose);
        }
        // Refs move here after `git gc`
        let packed = git_dir.join("packed-refs");
        if packed.is_file() {
            paths.push(packed);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn no_checkout_means_nothing_to_watch() {
        let dir = git_dir();
        assert!(git_watch_paths(&dir.path().join(".git")).is_empty());
    }

    #[test]
    fn branch_head_watches_its_ref() {
        let dir = git_dir();
        fs::create_dir_all(dir.path().join("refs/heads")).unwrap();
        fs::write(dir.path().join("HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(dir.path().join("refs/heads/main"), "abc1234\n").unwrap();

        assert_eq!(git_watch_paths(dir.path()), vec![dir.path().join("HEAD"), dir.path().join("refs/heads/main")]);
    }

    #[test]
    fn packed_refs_are_watched_when_present() {
        let dir = git_dir();
        fs::write(dir.path().join("HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(dir.path().join("packed-refs"), "abc1234 refs/heads/main\n").unwrap();

        assert_eq!(git_watch_paths(dir.path()), vec![dir.path().join("HEAD"), dir.path().join("packed-refs")]);
    }

    #[test]
    fn detached_head_watches_head_only() {
        let dir = git_dir();
        fs::write(dir.path().join("HEAD"), "abc1234def5678\n").unwrap();
        fs::write(dir.path().join("packed-refs"), "").unwrap();

        assert_eq!(git_watch_paths(dir.path()), vec![dir.path().join("HEAD")]);
    }
}
