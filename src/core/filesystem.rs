use std::collections::HashMap;

use log::{debug, warn};

use crate::config::DIRECTORY_SIZE;
use crate::core::error::FsError;
use crate::models::Manifest;

/// Path of the root directory.
pub const ROOT: &str = "/";

/// Directory entry returned by [`VirtualFs::entries`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    /// Absolute path of the entry.
    pub path: String,
    pub is_dir: bool,
}

/// In-memory directory/file tree owned by a single session.
///
/// # Path Convention
///
/// - Paths are absolute and `/`-delimited: `"/"`, `"/home"`, `"/home/user"`
/// - No trailing slash except for the root
/// - Every public operation normalizes its argument first, so `"/a/./b/"`
///   and `"/a/b"` name the same entry
///
/// # Layout
///
/// Directories are keys of `dirs`, each mapped to its child names in
/// creation order. A child name without a `dirs` key of its own is a file;
/// its content lives in `contents` and a missing content entry means the file
/// is empty.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    dirs: HashMap<String, Vec<String>>,
    contents: HashMap<String, String>,
}

impl VirtualFs {
    /// Create a filesystem containing only the root directory.
    pub fn new() -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(ROOT.to_string(), Vec::new());
        Self {
            dirs,
            contents: HashMap::new(),
        }
    }

    /// Create the filesystem every session starts with.
    pub fn seeded() -> Self {
        Self::from_manifest(&Manifest::default_seed())
    }

    /// Build a filesystem from a seed manifest.
    ///
    /// Directories are created (with any missing ancestors) before files.
    /// Conflicting or malformed entries are skipped with a warning.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut fs = Self::new();

        for dir in &manifest.directories {
            let path = Self::normalize_path(&dir.path);
            fs.ensure_directory(&path);
            for child in &dir.children {
                if child.is_empty() || child.contains('/') || child == "." || child == ".." {
                    warn!("Seed conflict: invalid child name '{}' in '{}'", child, path);
                    continue;
                }
                fs.link(&path, child);
            }
        }

        for file in &manifest.files {
            let path = Self::normalize_path(&file.path);
            if fs.is_directory(&path) {
                warn!("Seed conflict: '{}' blocked by existing directory", path);
                continue;
            }
            let (parent, name) = Self::split_path(&path);
            fs.ensure_directory(parent);
            fs.link(parent, name);
            fs.contents.insert(path.clone(), file.content.clone());
        }

        debug!(
            "Seeded filesystem: {} directories, {} files with content",
            fs.dirs.len(),
            fs.contents.len()
        );
        fs
    }

    // =========================================================================
    // Path Resolution
    // =========================================================================

    /// Resolve `path` against the working directory `cwd`.
    ///
    /// Absolute paths ignore `cwd`. `.` segments are dropped and `..` moves
    /// up one level, stopping at the root. An empty path resolves to `cwd`.
    /// Never fails: the result need not exist.
    pub fn resolve(path: &str, cwd: &str) -> String {
        if path.starts_with('/') {
            Self::normalize_path(path)
        } else if path.is_empty() {
            Self::normalize_path(cwd)
        } else {
            Self::normalize_path(&format!("{}/{}", cwd, path))
        }
    }

    /// Normalize a path by resolving `.` and `..` components.
    ///
    /// Always returns an absolute path.
    pub fn normalize_path(path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                ".." => {
                    parts.pop();
                }
                "." => {}
                _ => parts.push(part),
            }
        }

        format!("/{}", parts.join("/"))
    }

    /// Get the parent directory of a normalized path. The root is its own
    /// parent.
    pub fn parent_path(path: &str) -> String {
        Self::split_path(path).0.to_string()
    }

    /// Join a directory path and a child name.
    pub fn join(dir: &str, name: &str) -> String {
        if dir == ROOT {
            format!("/{}", name)
        } else {
            format!("{}/{}", dir, name)
        }
    }

    /// Split a normalized path into parent directory and final name.
    fn split_path(path: &str) -> (&str, &str) {
        match path.rfind('/') {
            Some(0) => (ROOT, &path[1..]),
            Some(idx) => (&path[..idx], &path[idx + 1..]),
            None => (ROOT, path),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.dirs.contains_key(&Self::normalize_path(path))
    }

    /// Check if a path names any entry (file or directory).
    pub fn exists(&self, path: &str) -> bool {
        let path = Self::normalize_path(path);
        if path == ROOT {
            return true;
        }
        let (parent, name) = Self::split_path(&path);
        self.dirs
            .get(parent)
            .is_some_and(|children| children.iter().any(|c| c == name))
    }

    /// Child names of a directory, in creation order.
    pub fn list_dir(&self, path: &str) -> Result<&[String], FsError> {
        let path = Self::normalize_path(path);
        match self.dirs.get(&path) {
            Some(children) => Ok(children),
            None if self.exists(&path) => Err(FsError::NotADirectory),
            None => Err(FsError::PathNotFound),
        }
    }

    /// Children of a directory with their kind, in creation order.
    pub fn entries(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        let dir = Self::normalize_path(path);
        let children = self.list_dir(&dir)?;
        Ok(children
            .iter()
            .map(|name| {
                let path = Self::join(&dir, name);
                let is_dir = self.dirs.contains_key(&path);
                DirEntry {
                    name: name.clone(),
                    path,
                    is_dir,
                }
            })
            .collect())
    }

    /// Content of a file. Files created without content read as empty.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let path = Self::normalize_path(path);
        if self.dirs.contains_key(&path) {
            return Err(FsError::IsADirectory);
        }
        if !self.exists(&path) {
            return Err(FsError::PathNotFound);
        }
        Ok(self.contents.get(&path).map(String::as_str).unwrap_or(""))
    }

    /// Size shown in long listings: content length in bytes for files,
    /// [`DIRECTORY_SIZE`] for directories.
    pub fn size(&self, path: &str) -> Result<u64, FsError> {
        let path = Self::normalize_path(path);
        if self.dirs.contains_key(&path) {
            return Ok(DIRECTORY_SIZE);
        }
        if !self.exists(&path) {
            return Err(FsError::PathNotFound);
        }
        Ok(self.contents.get(&path).map_or(0, |c| c.len() as u64))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create an empty directory. The parent must already exist.
    pub fn create_dir(&mut self, path: &str) -> Result<(), FsError> {
        let path = Self::normalize_path(path);
        if self.exists(&path) {
            return Err(FsError::PathExists);
        }
        let (parent, name) = Self::split_path(&path);
        if !self.dirs.contains_key(parent) {
            return Err(FsError::ParentMissing);
        }

        self.link(parent, name);
        self.dirs.insert(path.clone(), Vec::new());
        debug!("mkdir {}", path);
        Ok(())
    }

    /// Create an empty file. Succeeds without change if the name already
    /// exists as a file or directory.
    pub fn create_file(&mut self, path: &str) -> Result<(), FsError> {
        let path = Self::normalize_path(path);
        if self.exists(&path) {
            return Ok(());
        }
        let (parent, name) = Self::split_path(&path);
        if !self.dirs.contains_key(parent) {
            return Err(FsError::ParentMissing);
        }

        self.link(parent, name);
        debug!("touch {}", path);
        Ok(())
    }

    /// Replace the content of a file, creating it if needed.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let path = Self::normalize_path(path);
        if self.dirs.contains_key(&path) {
            return Err(FsError::IsADirectory);
        }
        self.create_file(&path)?;
        self.contents.insert(path, content.to_string());
        Ok(())
    }

    /// Unlink an entry from its parent.
    ///
    /// Not guarded against non-empty directories: removing one drops the
    /// whole subtree along with it.
    pub fn remove(&mut self, path: &str) -> Result<(), FsError> {
        let path = Self::normalize_path(path);
        if path == ROOT || !self.exists(&path) {
            return Err(FsError::PathNotFound);
        }

        let (parent, name) = Self::split_path(&path);
        if let Some(children) = self.dirs.get_mut(parent) {
            children.retain(|c| c != name);
        }
        self.contents.remove(&path);

        if self.dirs.remove(&path).is_some() {
            let prefix = format!("{}/", path);
            self.dirs.retain(|key, _| !key.starts_with(&prefix));
            self.contents.retain(|key, _| !key.starts_with(&prefix));
        }

        debug!("rm {}", path);
        Ok(())
    }

    /// Ensure a directory exists at the given path, creating ancestors.
    fn ensure_directory(&mut self, path: &str) {
        let mut current = ROOT.to_string();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            let child = Self::join(&current, part);
            self.link(&current, part);
            if !self.dirs.contains_key(&child) {
                self.contents.remove(&child);
                self.dirs.insert(child.clone(), Vec::new());
            }
            current = child;
        }
    }

    /// Append `name` to a directory's child list unless already present.
    fn link(&mut self, dir: &str, name: &str) {
        if let Some(children) = self.dirs.get_mut(dir) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectorySeed, FileSeed};

    fn names(fs: &VirtualFs, path: &str) -> Vec<String> {
        fs.list_dir(path).unwrap().to_vec()
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::new();
        assert!(fs.is_directory("/"));
        assert!(fs.exists("/"));
        assert!(names(&fs, "/").is_empty());
    }

    #[test]
    fn test_seeded_tree() {
        let fs = VirtualFs::seeded();
        assert_eq!(names(&fs, "/"), vec!["home", "usr", "etc", "var"]);
        assert_eq!(
            names(&fs, "/home/user"),
            vec!["Documents", "Downloads", "Pictures", "projects"]
        );
        assert_eq!(
            fs.read_file("/home/user/Documents/notes.txt"),
            Ok("Some notes about cybersecurity...")
        );
        // Listed without content: an empty file, not a directory
        assert_eq!(fs.read_file("/home/user/Documents/report.pdf"), Ok(""));
        assert!(!fs.is_directory("/usr/bin"));
    }

    #[test]
    fn test_from_manifest_creates_ancestors() {
        let manifest = Manifest {
            directories: vec![DirectorySeed {
                path: "/srv/www".to_string(),
                children: vec!["index.html".to_string()],
            }],
            files: vec![FileSeed {
                path: "/opt/tool/README".to_string(),
                content: "readme".to_string(),
            }],
        };
        let fs = VirtualFs::from_manifest(&manifest);

        assert_eq!(names(&fs, "/"), vec!["srv", "opt"]);
        assert!(fs.is_directory("/srv"));
        assert!(fs.is_directory("/opt/tool"));
        assert_eq!(fs.read_file("/srv/www/index.html"), Ok(""));
        assert_eq!(fs.read_file("/opt/tool/README"), Ok("readme"));
    }

    #[test]
    fn test_from_manifest_skips_bad_children() {
        let manifest = Manifest {
            directories: vec![DirectorySeed {
                path: "/".to_string(),
                children: vec!["ok".to_string(), "a/b".to_string(), "..".to_string()],
            }],
            files: vec![],
        };
        let fs = VirtualFs::from_manifest(&manifest);
        assert_eq!(names(&fs, "/"), vec!["ok"]);
    }

    #[test]
    fn test_resolve() {
        // Absolute
        assert_eq!(VirtualFs::resolve("/etc", "/home/user"), "/etc");
        // Relative
        assert_eq!(
            VirtualFs::resolve("Documents", "/home/user"),
            "/home/user/Documents"
        );
        assert_eq!(VirtualFs::resolve("a", "/"), "/a");
        // Dot forms
        assert_eq!(VirtualFs::resolve(".", "/home/user"), "/home/user");
        assert_eq!(VirtualFs::resolve("..", "/home/user"), "/home");
        assert_eq!(VirtualFs::resolve("..", "/home"), "/");
        assert_eq!(VirtualFs::resolve("..", "/"), "/");
        assert_eq!(VirtualFs::resolve("../../etc/./hosts", "/home/user"), "/etc/hosts");
        // Empty path stays put
        assert_eq!(VirtualFs::resolve("", "/var"), "/var");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(VirtualFs::normalize_path("/home/./user/"), "/home/user");
        assert_eq!(VirtualFs::normalize_path("//a//b"), "/a/b");
        assert_eq!(VirtualFs::normalize_path("/../.."), "/");
        assert_eq!(VirtualFs::normalize_path(""), "/");
    }

    #[test]
    fn test_parent_path_and_join() {
        assert_eq!(VirtualFs::parent_path("/home/user"), "/home");
        assert_eq!(VirtualFs::parent_path("/home"), "/");
        assert_eq!(VirtualFs::parent_path("/"), "/");
        assert_eq!(VirtualFs::join("/", "etc"), "/etc");
        assert_eq!(VirtualFs::join("/etc", "hosts"), "/etc/hosts");
    }

    #[test]
    fn test_list_dir_errors() {
        let fs = VirtualFs::seeded();
        assert_eq!(fs.list_dir("/nope"), Err(FsError::PathNotFound));
        assert_eq!(fs.list_dir("/etc/hosts"), Err(FsError::NotADirectory));
    }

    #[test]
    fn test_entries_marks_directories() {
        let fs = VirtualFs::seeded();
        let entries = fs.entries("/home").unwrap();
        assert_eq!(
            entries,
            vec![DirEntry {
                name: "user".to_string(),
                path: "/home/user".to_string(),
                is_dir: true,
            }]
        );

        let etc = fs.entries("/etc").unwrap();
        assert!(etc.iter().all(|e| !e.is_dir));
        assert_eq!(etc[1].path, "/etc/hosts");
    }

    #[test]
    fn test_read_file_errors() {
        let fs = VirtualFs::seeded();
        assert_eq!(fs.read_file("/etc/shadow"), Err(FsError::PathNotFound));
        assert_eq!(fs.read_file("/etc"), Err(FsError::IsADirectory));
        assert_eq!(fs.read_file("/"), Err(FsError::IsADirectory));
    }

    #[test]
    fn test_create_dir() {
        let mut fs = VirtualFs::seeded();
        assert_eq!(fs.create_dir("/home/user/newdir"), Ok(()));
        assert!(fs.is_directory("/home/user/newdir"));
        assert_eq!(names(&fs, "/home/user").last().unwrap(), "newdir");

        assert_eq!(fs.create_dir("/home/user/newdir"), Err(FsError::PathExists));
        assert_eq!(fs.create_dir("/etc/hosts"), Err(FsError::PathExists));
        assert_eq!(fs.create_dir("/"), Err(FsError::PathExists));
        assert_eq!(fs.create_dir("/missing/dir"), Err(FsError::ParentMissing));
        // A file is not a valid parent
        assert_eq!(fs.create_dir("/etc/hosts/x"), Err(FsError::ParentMissing));
    }

    #[test]
    fn test_create_file_is_idempotent() {
        let mut fs = VirtualFs::new();
        assert_eq!(fs.create_file("/f"), Ok(()));
        assert_eq!(fs.create_file("/f"), Ok(()));
        assert_eq!(names(&fs, "/"), vec!["f"]);
        assert_eq!(fs.read_file("/f"), Ok(""));
    }

    #[test]
    fn test_create_file_keeps_content_and_dirs() {
        let mut fs = VirtualFs::seeded();
        fs.create_file("/etc/hosts").unwrap();
        assert!(fs.read_file("/etc/hosts").unwrap().starts_with("127.0.0.1"));

        fs.create_file("/home").unwrap();
        assert!(fs.is_directory("/home"));
        assert_eq!(fs.create_file("/nope/f"), Err(FsError::ParentMissing));
    }

    #[test]
    fn test_write_file() {
        let mut fs = VirtualFs::new();
        fs.write_file("/draft.txt", "one\ntwo").unwrap();
        assert_eq!(fs.read_file("/draft.txt"), Ok("one\ntwo"));
        assert_eq!(names(&fs, "/"), vec!["draft.txt"]);

        fs.write_file("/draft.txt", "X").unwrap();
        assert_eq!(fs.read_file("/draft.txt"), Ok("X"));
        assert_eq!(names(&fs, "/").len(), 1);

        assert_eq!(fs.write_file("/", "x"), Err(FsError::IsADirectory));
        assert_eq!(fs.write_file("/a/b", "x"), Err(FsError::ParentMissing));
    }

    #[test]
    fn test_remove_file() {
        let mut fs = VirtualFs::seeded();
        assert_eq!(fs.remove("/etc/hosts"), Ok(()));
        assert_eq!(names(&fs, "/etc"), vec!["passwd", "resolv.conf"]);
        assert_eq!(fs.read_file("/etc/hosts"), Err(FsError::PathNotFound));
        assert_eq!(fs.remove("/etc/hosts"), Err(FsError::PathNotFound));
    }

    #[test]
    fn test_remove_directory_drops_subtree() {
        let mut fs = VirtualFs::seeded();
        fs.remove("/home/user").unwrap();
        assert!(names(&fs, "/home").is_empty());
        assert!(!fs.is_directory("/home/user"));
        assert!(!fs.is_directory("/home/user/Documents"));
        assert_eq!(
            fs.read_file("/home/user/Documents/notes.txt"),
            Err(FsError::PathNotFound)
        );

        // Recreating the name starts from an empty directory
        fs.create_dir("/home/user").unwrap();
        assert!(names(&fs, "/home/user").is_empty());
    }

    #[test]
    fn test_remove_root_is_not_found() {
        let mut fs = VirtualFs::seeded();
        assert_eq!(fs.remove("/"), Err(FsError::PathNotFound));
        assert_eq!(fs.remove("/nonexistent.txt"), Err(FsError::PathNotFound));
    }

    #[test]
    fn test_size() {
        let mut fs = VirtualFs::seeded();
        assert_eq!(fs.size("/etc"), Ok(DIRECTORY_SIZE));
        assert_eq!(
            fs.size("/home/user/Documents/notes.txt"),
            Ok("Some notes about cybersecurity...".len() as u64)
        );
        assert_eq!(fs.size("/home/user/Documents/report.pdf"), Ok(0));
        assert_eq!(fs.size("/nope"), Err(FsError::PathNotFound));

        fs.write_file("/tmp.txt", "héllo").unwrap();
        assert_eq!(fs.size("/tmp.txt"), Ok(6));
    }

    #[test]
    fn test_listing_tracks_creation_order() {
        let mut fs = VirtualFs::new();
        fs.create_dir("/b").unwrap();
        fs.create_file("/a").unwrap();
        fs.create_dir("/c").unwrap();
        fs.remove("/a").unwrap();
        fs.create_file("/a").unwrap();
        assert_eq!(names(&fs, "/"), vec!["b", "c", "a"]);
    }
}
