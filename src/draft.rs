// src/draft.rs

//! Dated blog drafts with a Jekyll-style front-matter header.
//!
//! A draft for "Hello World" created on 2024-01-15 lands in
//! `<drafts>/2024-01-15-hello-world.md`. Existing drafts are never overwritten.

use chrono::{DateTime, FixedOffset};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::constants::DRAFTS_DIR_NAME;
use crate::error::DraftError;
use crate::types::DraftResult;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Lower-cases and trims the title, then joins its words with single hyphens.
pub fn slugify(title: &str) -> DraftResult<String> {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        return Err(DraftError::EmptyTitle);
    }
    if slug.contains('/') || slug.contains('\\') {
        return Err(DraftError::InvalidTitle(title.to_string()));
    }
    Ok(slug)
}

/// A draft rendered from one title and one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDocument {
    pub title: String,
    pub slug: String,
    /// `YYYY-MM-DD`, used in the file name.
    pub date_stamp: String,
    /// `YYYY-MM-DD HH:MM:SS +ZZZZ`, used in the front matter.
    pub timestamp: String,
}

impl DraftDocument {
    pub fn new(title: &str, now: &DateTime<FixedOffset>) -> DraftResult<Self> {
        Ok(Self {
            title: title.to_string(),
            slug: slugify(title)?,
            date_stamp: now.format(DATE_FORMAT).to_string(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date_stamp, self.slug)
    }

    /// Front matter with the literal title; categories are left for manual editing.
    pub fn contents(&self) -> String {
        format!(
            "---\nlayout: post\ntitle:  \"{}\"\ndate: {}\ncategories: \n---",
            self.title, self.timestamp
        )
    }
}

/// Drafts directory for an executable: `_drafts` next to the binary itself.
pub fn drafts_dir_for_executable(executable: &Path) -> PathBuf {
    executable
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DRAFTS_DIR_NAME)
}

/// Writes a new draft into `drafts_dir` and returns its path.
///
/// Fails with `DraftError::AlreadyExists` when the target file is already there;
/// the existing file is left untouched.
pub fn create_draft(
    drafts_dir: &Path,
    title: &str,
    now: &DateTime<FixedOffset>,
) -> DraftResult<PathBuf> {
    let document = DraftDocument::new(title, now)?;
    let file_path = drafts_dir.join(document.file_name());

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(DraftError::AlreadyExists(file_path));
        }
        Err(source) => {
            return Err(DraftError::Io {
                path: file_path,
                source,
            });
        }
    };

    file
        .write_all(document.contents().as_bytes())
        .map_err(|source| DraftError::Io {
            path: file_path.clone(),
            source,
        })?;
    log::info!("Draft saved as '{}'.", file_path.display());
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, hour, 30, 5)
            .unwrap()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World").unwrap(), "hello-world");
        assert_eq!(slugify("  Padded Title \n").unwrap(), "padded-title");
        assert_eq!(slugify("many   spaces\tand tabs").unwrap(), "many-spaces-and-tabs");
        assert_eq!(slugify("Already-Hyphenated").unwrap(), "already-hyphenated");
    }

    #[test]
    fn test_slugify_rejects_empty_and_separators() {
        assert!(matches!(slugify("   "), Err(DraftError::EmptyTitle)));
        assert!(matches!(
            slugify("../escape attempt"),
            Err(DraftError::InvalidTitle(_))
        ));
    }

    #[test]
    fn test_document_fields() {
        let document = DraftDocument::new("Hello World", &at(9)).unwrap();
        assert_eq!(document.file_name(), "2024-01-15-hello-world.md");
        assert_eq!(document.timestamp, "2024-01-15 09:30:05 +0200");
        assert_eq!(
            document.contents(),
            "---\nlayout: post\ntitle:  \"Hello World\"\ndate: 2024-01-15 09:30:05 +0200\ncategories: \n---"
        );
    }

    #[test]
    fn test_drafts_dir_for_executable() {
        assert_eq!(
            drafts_dir_for_executable(Path::new("/opt/blog/bin/make_draft")),
            PathBuf::from("/opt/blog/bin/_drafts")
        );
    }

    #[test]
    fn test_missing_drafts_dir_is_io_error() {
        let err = create_draft(Path::new("/definitely/not/a/dir"), "Title", &at(9)).unwrap_err();
        match &err {
            DraftError::Io { path, .. } => assert_eq!(
                path,
                &PathBuf::from("/definitely/not/a/dir/2024-01-15-title.md")
            ),
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(err
            .to_string()
            .starts_with("cannot write /definitely/not/a/dir/2024-01-15-title.md: "));
    }
}

// src/draft.rs
