//! Documentation binder: archive images attached to parsed work groups.
//!
//! # Responsibility
//! - Expand one archive source per group into a per-group directory.
//! - Inspect each extracted file and keep the ones that decode as images.
//! - Attach the resulting references to exactly that group.
//!
//! # Invariants
//! - Extraction directories are unique per `bind` call, so groups sharing a
//!   name never overwrite each other's files.
//! - A file that is not an image, or a zip entry that cannot be read, is
//!   skipped with a warning; only whole-archive failures are errors.
//! - Task lists are never touched.

use crate::model::documentation::{DisplaySize, ImageRef};
use crate::model::work_group::WorkGroup;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;
use zip::result::ZipError;
use zip::ZipArchive;

const ZIP_EXTENSION: &str = ".zip";
// Declared entry sizes come from the archive header and are not trusted.
const MAX_ENTRY_PREALLOC_BYTES: u64 = 16 * 1024 * 1024;

pub type BindResult<T> = Result<T, BindError>;

/// Whole-archive failures raised by the binder.
#[derive(Debug)]
pub enum BindError {
    /// Filesystem access failed while reading or extracting.
    Io(std::io::Error),
    /// The archive exists but is not a readable zip file.
    Archive(ZipError),
    /// The archive path does not exist.
    MissingArchive(PathBuf),
}

impl Display for BindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Archive(err) => write!(f, "unreadable archive: {err}"),
            Self::MissingArchive(path) => write!(f, "archive not found: {}", path.display()),
        }
    }
}

impl Error for BindError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Archive(err) => Some(err),
            Self::MissingArchive(_) => None,
        }
    }
}

impl From<std::io::Error> for BindError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ZipError> for BindError {
    fn from(value: ZipError) -> Self {
        match value {
            ZipError::Io(err) => Self::Io(err),
            other => Self::Archive(other),
        }
    }
}

/// One file of an archive source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the file inside the archive, `/`-separated.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A collection of files the binder can expand.
pub trait ArchiveSource {
    /// Short label used in diagnostics.
    fn describe(&self) -> String;
    /// Returns every file entry in archive order.
    fn entries(&mut self) -> BindResult<Vec<ArchiveEntry>>;
}

/// In-memory archive, mostly for callers that already hold the bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    entries: Vec<ArchiveEntry>,
}

impl MemoryArchive {
    pub fn new(entries: Vec<ArchiveEntry>) -> Self {
        Self { entries }
    }
}

impl ArchiveSource for MemoryArchive {
    fn describe(&self) -> String {
        format!("memory({} entries)", self.entries.len())
    }

    fn entries(&mut self) -> BindResult<Vec<ArchiveEntry>> {
        Ok(self.entries.clone())
    }
}

/// Zip file on disk.
pub struct ZipArchiveSource {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl ZipArchiveSource {
    /// Opens a zip archive, failing early when the path is missing.
    pub fn open(path: impl AsRef<Path>) -> BindResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BindError::MissingArchive(path.to_path_buf()));
        }
        let archive = ZipArchive::new(File::open(path)?)?;
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }
}

impl ArchiveSource for ZipArchiveSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn entries(&mut self) -> BindResult<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for index in 0..self.archive.len() {
            let mut file = match self.archive.by_index(index) {
                Ok(file) => file,
                Err(err) => {
                    warn!(
                        "event=entry_skipped module=binder reason=unreadable archive={} index={} error={}",
                        self.path.display(),
                        index,
                        err
                    );
                    continue;
                }
            };
            if file.is_dir() {
                continue;
            }
            let Some(name) = file.enclosed_name().map(|path| path.to_path_buf()) else {
                warn!(
                    "event=entry_skipped module=binder reason=unsafe_path archive={}",
                    self.path.display()
                );
                continue;
            };

            let mut bytes = Vec::with_capacity(prealloc_hint(file.size()));
            if let Err(err) = file.read_to_end(&mut bytes) {
                warn!(
                    "event=entry_skipped module=binder reason=unreadable archive={} index={} error={}",
                    self.path.display(),
                    index,
                    err
                );
                continue;
            }
            entries.push(ArchiveEntry::new(
                name.to_string_lossy().replace('\\', "/"),
                bytes,
            ));
        }
        Ok(entries)
    }
}

/// Appends `.zip` unless the name already ends with it (any case).
pub fn resolve_zip_path(name: &str) -> PathBuf {
    let trimmed = name.trim();
    if trimmed.to_lowercase().ends_with(ZIP_EXTENSION) {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(format!("{trimmed}{ZIP_EXTENSION}"))
    }
}

/// Expands archives below one extraction root and builds image references.
#[derive(Debug, Clone)]
pub struct DocumentationBinder {
    extraction_root: PathBuf,
}

impl DocumentationBinder {
    /// Creates a binder rooted at `extraction_root` without touching disk.
    pub fn new(extraction_root: impl Into<PathBuf>) -> Self {
        Self {
            extraction_root: extraction_root.into(),
        }
    }

    /// Recreates `extraction_root` empty and returns a binder over it.
    pub fn prepare(extraction_root: impl Into<PathBuf>) -> BindResult<Self> {
        let binder = Self::new(extraction_root);
        if binder.extraction_root.exists() {
            fs::remove_dir_all(&binder.extraction_root)?;
        }
        fs::create_dir_all(&binder.extraction_root)?;
        Ok(binder)
    }

    pub fn extraction_root(&self) -> &Path {
        &self.extraction_root
    }

    /// Extracts `source` for `group_name` and returns its images in archive
    /// order.
    pub fn bind<S: ArchiveSource + ?Sized>(
        &self,
        group_name: &str,
        source: &mut S,
    ) -> BindResult<Vec<ImageRef>> {
        let entries = source.entries()?;
        let group_dir = self.extraction_root.join(group_dir_name(group_name));
        fs::create_dir_all(&group_dir)?;

        let mut images = Vec::new();
        let mut skipped = 0usize;
        for entry in entries {
            let Some(relative) = safe_relative_path(&entry.name) else {
                warn!(
                    "event=entry_skipped module=binder reason=unsafe_path source={}",
                    source.describe()
                );
                skipped += 1;
                continue;
            };

            let target = group_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &entry.bytes)?;

            match read_dimensions(&entry.bytes) {
                Ok((width, height)) => images.push(ImageRef {
                    path: target,
                    width,
                    height,
                    display: DisplaySize::from_dimensions(width, height),
                }),
                Err(err) => {
                    warn!(
                        "event=image_skipped module=binder status=warn entry={} error={}",
                        entry.name, err
                    );
                    skipped += 1;
                }
            }
        }

        info!(
            "event=bind_done module=binder status=ok source={} images={} skipped={}",
            source.describe(),
            images.len(),
            skipped
        );
        Ok(images)
    }

    /// Binds `source` and attaches the images to `group`.
    ///
    /// Returns the number of images attached.
    pub fn bind_group<S: ArchiveSource + ?Sized>(
        &self,
        group: &mut WorkGroup,
        source: &mut S,
    ) -> BindResult<usize> {
        let images = self.bind(&group.name, source)?;
        let count = images.len();
        group.attach_documentation(images);
        Ok(count)
    }
}

/// Directory name for one group's extraction: the group name with
/// whitespace and path separators replaced by `_`, plus a unique suffix.
pub fn group_dir_name(group_name: &str) -> String {
    let base: String = group_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | '\\' | ':' | '.') {
                '_'
            } else {
                c
            }
        })
        .collect();
    let base = if base.is_empty() { "group".to_string() } else { base };
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{base}_{}", &suffix[..8])
}

fn prealloc_hint(declared_size: u64) -> usize {
    declared_size.min(MAX_ENTRY_PREALLOC_BYTES) as usize
}

fn read_dimensions(bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}

fn safe_relative_path(name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(&name.replace('\\', "/")).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
