//! Walking a directory hierarchy. Both walkers go through a
//! [`DirectoryLister`], cap their output at `max_items`, and step around any
//! directory they aren't allowed to read. Any other listing error ends the
//! walk and is handed back to the caller.

use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

/// How many paths a walk returns unless told otherwise.
pub const DEFAULT_MAX_ITEMS: usize = 20;

/// The bits of a filesystem the walkers need.
pub trait DirectoryLister {
    /// Full paths of the entries directly inside `path`, in no particular
    /// order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Whether the walk should descend into `path`.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The real filesystem, through `std::fs`. Symbolic links are never
/// followed: a link to a directory is reported like any other entry and not
/// descended into, so a link cycle can't trap a walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl DirectoryLister for OsFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

fn permission_denied(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::PermissionDenied
}

/// Top down, a directory at a time, breadth first: each directory is followed
/// by its files in sorted order, and its subdirectories are queued (also
/// sorted) behind whatever was already waiting. A directory we may not read
/// is left out along with everything under it. A start that isn't a directory
/// yields nothing.
pub fn walk_top_down<L>(lister: &L, start: &Path, max_items: usize) -> io::Result<Vec<PathBuf>>
where
    L: DirectoryLister + ?Sized,
{
    let mut found = Vec::new();
    if !lister.is_dir(start) {
        return Ok(found);
    }

    let mut queue = VecDeque::new();
    queue.push_back(start.to_path_buf());

    while found.len() < max_items {
        let dir = match queue.pop_front() {
            Some(dir) => dir,
            None => break,
        };

        let mut entries = match lister.list_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if permission_denied(&e) => {
                debug!("Skipping {}: {}", dir.display(), e);
                continue;
            }
            Err(e) => return Err(e),
        };
        entries.sort();

        let (subdirs, files): (Vec<PathBuf>, Vec<PathBuf>) =
            entries.into_iter().partition(|p| lister.is_dir(p));

        found.push(dir);
        found.extend(files);
        queue.extend(subdirs);
    }

    found.truncate(max_items);
    Ok(found)
}

/// Depth first with an explicit stack. Entries are pushed in reverse sorted
/// order so they come off the stack sorted. A directory we may not read still
/// shows up itself; its contents are skipped.
pub fn walk_manual_stack<L>(lister: &L, start: &Path, max_items: usize) -> io::Result<Vec<PathBuf>>
where
    L: DirectoryLister + ?Sized,
{
    let mut found = Vec::new();
    let mut stack = vec![start.to_path_buf()];

    while found.len() < max_items {
        let path = match stack.pop() {
            Some(path) => path,
            None => break,
        };

        let mut children = Vec::new();
        if lister.is_dir(&path) {
            match lister.list_dir(&path) {
                Ok(entries) => children = entries,
                Err(e) if permission_denied(&e) => {
                    debug!("Skipping {}: {}", path.display(), e)
                }
                Err(e) => return Err(e),
            }
        }
        children.sort_by(|a, b| b.cmp(a));

        found.push(path);
        stack.extend(children);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{HashMap, HashSet},
        fs::{self, File},
        io,
        path::{Path, PathBuf},
    };

    use tempfile::TempDir;

    use super::{walk_manual_stack, walk_top_down, DirectoryLister, OsFileSystem, DEFAULT_MAX_ITEMS};
    use crate::logger::initialize_logger;

    /// An in-memory tree where some directories refuse to be listed.
    #[derive(Default)]
    struct MemoryFileSystem {
        dirs: HashMap<PathBuf, Vec<PathBuf>>,
        locked: HashSet<PathBuf>,
        broken: HashSet<PathBuf>,
    }

    impl MemoryFileSystem {
        fn dir(mut self, path: &str, entries: &[&str]) -> Self {
            let path = PathBuf::from(path);
            let entries = entries.iter().map(|e| path.join(e)).collect();
            self.dirs.insert(path, entries);
            self
        }

        fn locked_dir(mut self, path: &str) -> Self {
            self.dirs.insert(PathBuf::from(path), Vec::new());
            self.locked.insert(PathBuf::from(path));
            self
        }

        fn broken_dir(mut self, path: &str) -> Self {
            self.dirs.insert(PathBuf::from(path), Vec::new());
            self.broken.insert(PathBuf::from(path));
            self
        }
    }

    impl DirectoryLister for MemoryFileSystem {
        fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
            if self.locked.contains(path) {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            if self.broken.contains(path) {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }

            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
        }
    }

    fn paths(root: &Path, relative: &[&str]) -> Vec<PathBuf> {
        relative
            .iter()
            .map(|r| if r.is_empty() { root.to_path_buf() } else { root.join(r) })
            .collect()
    }

    // root/
    //   a.txt
    //   b/
    //     c.txt
    //     e/
    //       f.txt
    //   d.txt
    fn sample_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        File::create(root.join("a.txt")).unwrap();
        File::create(root.join("d.txt")).unwrap();
        fs::create_dir_all(root.join("b").join("e")).unwrap();
        File::create(root.join("b").join("c.txt")).unwrap();
        File::create(root.join("b").join("e").join("f.txt")).unwrap();

        dir
    }

    #[test]
    fn top_down_on_disk() {
        let dir = sample_dir();
        let root = dir.path();

        assert_eq!(
            paths(root, &["", "a.txt", "d.txt", "b", "b/c.txt", "b/e", "b/e/f.txt"]),
            walk_top_down(&OsFileSystem, root, DEFAULT_MAX_ITEMS).unwrap()
        );
    }

    #[test]
    fn manual_stack_on_disk() {
        let dir = sample_dir();
        let root = dir.path();

        assert_eq!(
            paths(root, &["", "a.txt", "b", "b/c.txt", "b/e", "b/e/f.txt", "d.txt"]),
            walk_manual_stack(&OsFileSystem, root, DEFAULT_MAX_ITEMS).unwrap()
        );
    }

    #[test]
    fn walks_stop_at_max_items() {
        let dir = sample_dir();
        let root = dir.path();

        assert_eq!(
            paths(root, &["", "a.txt"]),
            walk_top_down(&OsFileSystem, root, 2).unwrap()
        );
        assert_eq!(
            paths(root, &["", "a.txt", "b"]),
            walk_manual_stack(&OsFileSystem, root, 3).unwrap()
        );
        assert!(walk_top_down(&OsFileSystem, root, 0).unwrap().is_empty());
        assert!(walk_manual_stack(&OsFileSystem, root, 0).unwrap().is_empty());
    }

    #[test]
    fn walks_of_a_plain_file() {
        let dir = sample_dir();
        let file = dir.path().join("a.txt");

        // there's nothing to list, so the top-down walk has nothing to report
        assert!(walk_top_down(&OsFileSystem, &file, DEFAULT_MAX_ITEMS)
            .unwrap()
            .is_empty());
        assert_eq!(
            vec![file.clone()],
            walk_manual_stack(&OsFileSystem, &file, DEFAULT_MAX_ITEMS).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let dir = sample_dir();
        let root = dir.path();
        std::os::unix::fs::symlink(root, root.join("loop")).unwrap();

        assert_eq!(
            paths(root, &["", "a.txt", "d.txt", "loop", "b", "b/c.txt", "b/e", "b/e/f.txt"]),
            walk_top_down(&OsFileSystem, root, DEFAULT_MAX_ITEMS).unwrap()
        );
        assert_eq!(
            paths(root, &["", "a.txt", "b", "b/c.txt", "b/e", "b/e/f.txt", "d.txt", "loop"]),
            walk_manual_stack(&OsFileSystem, root, DEFAULT_MAX_ITEMS).unwrap()
        );
    }

    #[test]
    fn unreadable_directories_are_skipped() {
        initialize_logger();
        let lister = MemoryFileSystem::default()
            .dir("/root", &["open", "locked", "z.txt"])
            .locked_dir("/root/locked")
            .dir("/root/open", &["x.txt"]);

        assert_eq!(
            paths(Path::new("/root"), &["", "z.txt", "open", "open/x.txt"]),
            walk_top_down(&lister, Path::new("/root"), DEFAULT_MAX_ITEMS).unwrap()
        );
        assert_eq!(
            paths(Path::new("/root"), &["", "locked", "open", "open/x.txt", "z.txt"]),
            walk_manual_stack(&lister, Path::new("/root"), DEFAULT_MAX_ITEMS).unwrap()
        );
    }

    #[test]
    fn unreadable_start_directory() {
        let lister = MemoryFileSystem::default().locked_dir("/secret");

        assert!(walk_top_down(&lister, Path::new("/secret"), DEFAULT_MAX_ITEMS)
            .unwrap()
            .is_empty());
        assert_eq!(
            vec![PathBuf::from("/secret")],
            walk_manual_stack(&lister, Path::new("/secret"), DEFAULT_MAX_ITEMS).unwrap()
        );
    }

    #[test]
    fn other_listing_errors_end_the_walk() {
        let lister = MemoryFileSystem::default()
            .dir("/root", &["a.txt", "bad"])
            .broken_dir("/root/bad");

        let err = walk_top_down(&lister, Path::new("/root"), DEFAULT_MAX_ITEMS).unwrap_err();
        assert_eq!(io::ErrorKind::Other, err.kind());
        assert_eq!("disk on fire", err.to_string());

        let err = walk_manual_stack(&lister, Path::new("/root"), DEFAULT_MAX_ITEMS).unwrap_err();
        assert_eq!(io::ErrorKind::Other, err.kind());

        // a walk that stops short of the broken directory never notices it
        assert_eq!(
            paths(Path::new("/root"), &["", "a.txt"]),
            walk_manual_stack(&lister, Path::new("/root"), 2).unwrap()
        );
    }
}
