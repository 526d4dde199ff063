use crate::result::Result;
use crate::utils;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file scheduled for the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Absolute path on disk
    pub path: PathBuf,

    /// Entry name inside the archive, relative to the source root
    pub name: String,
}

/// Collect every file under `source_dir` in archive order.
///
/// Each directory contributes its own files first, sorted by name, and then
/// its subdirectories in name order, depth first. Symbolic links are never
/// descended: a link to a directory is skipped, a link to a file is archived
/// with the target's contents. `exclude` drops one path, normally the output
/// archive when it lives inside the source tree.
pub fn collect_entries(source_dir: &Path, exclude: Option<&Path>) -> Result<Vec<SourceEntry>> {
    let walker = WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by(files_then_dirs);

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 || !is_archived(&entry) {
            continue;
        }

        let path = entry.into_path();
        if exclude == Some(path.as_path()) {
            continue;
        }

        let name = utils::entry_name(source_dir, &path)?;
        entries.push(SourceEntry { path, name });
    }

    Ok(entries)
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_archived(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    // links to directories are listed but never descended
    !(file_type.is_symlink() && entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(entries: &[SourceEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(collect_entries(temp.path(), None).unwrap().is_empty());
    }

    #[test]
    fn test_files_before_subdirectories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("c.txt"), b"c").unwrap();
        fs::write(root.join("a.txt"), b"a").unwrap();
        fs::write(root.join("b/z.txt"), b"z").unwrap();
        fs::write(root.join("b/inner/y.txt"), b"y").unwrap();
        fs::write(root.join("a/x.txt"), b"x").unwrap();

        let entries = collect_entries(root, None).unwrap();
        assert_eq!(
            names(&entries),
            ["a.txt", "c.txt", "a/x.txt", "b/z.txt", "b/inner/y.txt"]
        );
        assert_eq!(entries[0].path, root.join("a.txt"));
    }

    #[test]
    fn test_empty_subdirectories_are_not_entries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("empty/nested")).unwrap();
        fs::write(temp.path().join("only.txt"), b"1").unwrap();

        let entries = collect_entries(temp.path(), None).unwrap();
        assert_eq!(names(&entries), ["only.txt"]);
    }

    #[test]
    fn test_exclude_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"a").unwrap();
        fs::write(temp.path().join("out.vsix"), b"old").unwrap();

        let out = temp.path().join("out.vsix");
        let entries = collect_entries(temp.path(), Some(&out)).unwrap();
        assert_eq!(names(&entries), ["a.txt"]);
    }

    #[test]
    fn test_names_compare_bytewise() {
        let temp = TempDir::new().unwrap();
        for name in ["b.txt", "C.txt", "a.txt", "_.txt"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        let entries = collect_entries(temp.path(), None).unwrap();
        assert_eq!(names(&entries), ["C.txt", "_.txt", "a.txt", "b.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("src");
        let outside = temp.path().join("outside");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("hidden.txt"), b"h").unwrap();
        fs::write(outside.join("target.txt"), b"t").unwrap();

        symlink(&outside, root.join("linked-dir")).unwrap();
        symlink(outside.join("target.txt"), root.join("linked-file.txt")).unwrap();

        let entries = collect_entries(&root, None).unwrap();
        assert_eq!(names(&entries), ["linked-file.txt"]);
    }
}
