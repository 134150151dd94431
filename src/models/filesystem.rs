//! Seed data for the virtual filesystem.
//!
//! A [`Manifest`] describes the tree a session starts with. The built-in
//! seed is [`Manifest::default_seed`]; alternative trees can be loaded from
//! TOML or JSON.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::ConfigError;

/// A directory and the names it contains, in listing order.
///
/// Children without their own [`DirectorySeed`] are plain (empty) files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DirectorySeed {
    pub path: String,
    #[serde(default)]
    pub children: Vec<String>,
}

/// A file with initial content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FileSeed {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// Filesystem seed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub directories: Vec<DirectorySeed>,
    #[serde(default)]
    pub files: Vec<FileSeed>,
}

impl Manifest {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a manifest from disk. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// The tree every session starts with unless told otherwise.
    pub fn default_seed() -> Self {
        let dir = |path: &str, children: &[&str]| DirectorySeed {
            path: path.to_string(),
            children: children.iter().map(|c| c.to_string()).collect(),
        };
        let file = |path: &str, content: &str| FileSeed {
            path: path.to_string(),
            content: content.to_string(),
        };

        Self {
            directories: vec![
                dir("/", &["home", "usr", "etc", "var"]),
                dir("/home", &["user"]),
                dir(
                    "/home/user",
                    &["Documents", "Downloads", "Pictures", "projects"],
                ),
                dir("/home/user/Documents", &["notes.txt", "report.pdf"]),
                dir("/home/user/Downloads", &["image.jpg", "file.zip"]),
                dir("/home/user/Pictures", &["screenshot.png", "avatar.jpg"]),
                dir("/home/user/projects", &["websec-browser", "test-project"]),
                dir("/usr", &["bin", "local", "share"]),
                dir("/etc", &["passwd", "hosts", "resolv.conf"]),
                dir("/var", &["log", "www", "cache"]),
            ],
            files: vec![
                file(
                    "/home/user/Documents/notes.txt",
                    "Some notes about cybersecurity...",
                ),
                file(
                    "/etc/passwd",
                    "root:x:0:0:root:/root:/bin/bash\nuser:x:1000:1000:user:/home/user:/bin/bash",
                ),
                file(
                    "/etc/hosts",
                    "127.0.0.1 localhost\n::1 localhost ip6-localhost ip6-loopback",
                ),
            ],
        }
    }
}
