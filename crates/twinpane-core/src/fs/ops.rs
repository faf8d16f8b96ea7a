//! File operations: create, copy, move, delete.
//!
//! Every function takes fully resolved paths and either succeeds completely
//! or returns a [`CoreError`] describing what went wrong. Nothing here
//! touches pane state; refreshing is the caller's job.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Creates an empty file at `path`.
///
/// # Errors
///
/// - [`CoreError::AlreadyExists`] if anything exists at `path`.
/// - [`CoreError::OperationFailed`] for any other failure (missing parent,
///   permissions, invalid name).
pub fn create_file(path: &Path) -> CoreResult<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| creation_error(path, e))?;
    tracing::info!(path = %path.display(), "created file");
    Ok(())
}

/// Creates a single directory at `path`. Missing parents are **not** created.
///
/// # Errors
///
/// Same as [`create_file`].
pub fn create_directory(path: &Path) -> CoreResult<()> {
    fs::create_dir(path).map_err(|e| creation_error(path, e))?;
    tracing::info!(path = %path.display(), "created directory");
    Ok(())
}

fn creation_error(path: &Path, err: std::io::Error) -> CoreError {
    if err.kind() == std::io::ErrorKind::AlreadyExists {
        CoreError::AlreadyExists(path.to_path_buf())
    } else {
        CoreError::failed(path, err)
    }
}

/// Copies `source` into `target_dir`, returning the created path
/// (`target_dir/<file name of source>`).
///
/// Files are copied byte for byte. Directories are copied recursively;
/// symlinks inside the tree are recreated as symlinks rather than followed.
/// An existing destination is never merged into or overwritten. If the copy
/// fails halfway, whatever was written at the destination is removed.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `source` or `target_dir` does not exist.
/// - [`CoreError::NotADirectory`] if `target_dir` is not a directory.
/// - [`CoreError::AlreadyExists`] if the destination already exists.
/// - [`CoreError::IntoItself`] if a directory would be copied into its own subtree.
/// - [`CoreError::OperationFailed`] for any I/O failure during the copy.
pub fn copy_to(source: &Path, target_dir: &Path) -> CoreResult<PathBuf> {
    let dest = prepare_transfer(source, target_dir)?;
    copy_new(source, &dest)?;
    tracing::info!(from = %source.display(), to = %dest.display(), "copied");
    Ok(dest)
}

/// Moves `source` into `target_dir`, returning the new path.
///
/// A plain `rename` is tried first. Only when the target is on another
/// device is the entry copied and the source deleted afterwards, once the
/// copy is complete. A failed copy leaves the source untouched and nothing
/// at the destination.
///
/// # Errors
///
/// Same as [`copy_to`]; a refused `rename` is reported as is and leaves
/// both sides untouched. If the cross-device copy succeeds but the source
/// cannot be removed, [`CoreError::OperationFailed`] is returned and the
/// complete copy is kept at the destination.
pub fn move_to(source: &Path, target_dir: &Path) -> CoreResult<PathBuf> {
    move_with(source, target_dir, |from, to| fs::rename(from, to))
}

fn move_with(
    source: &Path,
    target_dir: &Path,
    rename: impl FnOnce(&Path, &Path) -> std::io::Result<()>,
) -> CoreResult<PathBuf> {
    let dest = prepare_transfer(source, target_dir)?;

    match rename(source, &dest) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            tracing::debug!(from = %source.display(), "rename crosses devices, copying instead");
            move_by_copy(source, &dest)?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(CoreError::AlreadyExists(dest));
        }
        Err(e) => return Err(CoreError::from_io(source, e)),
    }

    tracing::info!(from = %source.display(), to = %dest.display(), "moved");
    Ok(dest)
}

fn move_by_copy(source: &Path, dest: &Path) -> CoreResult<()> {
    copy_new(source, dest)?;
    delete(source)
}

/// Deletes a file, symlink, or directory tree.
///
/// Symlinks are removed themselves; their targets are left alone.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::OperationFailed`] for any I/O failure during deletion.
pub fn delete(path: &Path) -> CoreResult<()> {
    let meta = fs::symlink_metadata(path).map_err(|e| CoreError::from_io(path, e))?;

    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|e| CoreError::from_io(path, e))?;
    } else {
        fs::remove_file(path).map_err(|e| CoreError::from_io(path, e))?;
    }

    tracing::info!(path = %path.display(), "deleted");
    Ok(())
}

/// Checks that `name` can be used as a single path component.
///
/// Rejects empty names, `.`, `..`, and names containing path separators
/// or NUL bytes.
pub fn validate_name(name: &str) -> CoreResult<()> {
    if is_valid_filename(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidName(name.to_string()))
    }
}

fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}

/// Shared checks for copy and move. Returns the destination path.
fn prepare_transfer(source: &Path, target_dir: &Path) -> CoreResult<PathBuf> {
    let meta = fs::symlink_metadata(source).map_err(|e| CoreError::from_io(source, e))?;

    match fs::metadata(target_dir) {
        Ok(m) if m.is_dir() => {}
        Ok(_) => return Err(CoreError::NotADirectory(target_dir.to_path_buf())),
        Err(e) => return Err(CoreError::from_io(target_dir, e)),
    }

    let name = source
        .file_name()
        .ok_or_else(|| CoreError::InvalidName(source.display().to_string()))?;
    let dest = target_dir.join(name);

    if meta.is_dir() && is_within(target_dir, source) {
        return Err(CoreError::IntoItself {
            dir: source.to_path_buf(),
            target: dest,
        });
    }
    if fs::symlink_metadata(&dest).is_ok() {
        return Err(CoreError::AlreadyExists(dest));
    }

    Ok(dest)
}

/// Returns `true` if `path` is `ancestor` or lies beneath it.
fn is_within(path: &Path, ancestor: &Path) -> bool {
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let ancestor = ancestor
        .canonicalize()
        .unwrap_or_else(|_| ancestor.to_path_buf());
    path.starts_with(&ancestor)
}

/// Copies `source` to the not-yet-existing `dest`, cleaning up on failure.
fn copy_new(source: &Path, dest: &Path) -> CoreResult<()> {
    let result = copy_entry(source, dest);
    if let Err(e) = &result {
        // The destination was claimed by someone else; it is not ours to remove.
        let lost_race = matches!(e, CoreError::AlreadyExists(p) if p == dest);
        if !lost_race && fs::symlink_metadata(dest).is_ok() {
            if let Err(cleanup) = delete(dest) {
                tracing::warn!(path = %dest.display(), "could not remove partial copy: {cleanup}");
            }
        }
    }
    result
}

fn copy_entry(source: &Path, dest: &Path) -> CoreResult<()> {
    let file_type = fs::symlink_metadata(source)
        .map_err(|e| CoreError::from_io(source, e))?
        .file_type();

    if file_type.is_symlink() {
        copy_symlink(source, dest)
    } else if file_type.is_dir() {
        copy_dir_recursive(source, dest)
    } else {
        copy_regular(source, dest)
    }
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> CoreResult<()> {
    fs::create_dir(dest).map_err(|e| CoreError::from_io(dest, e))?;

    let read_dir = fs::read_dir(src).map_err(|e| CoreError::failed(src, e))?;
    for entry in read_dir {
        let entry = entry.map_err(|e| CoreError::failed(src, e))?;
        copy_entry(&entry.path(), &dest.join(entry.file_name()))?;
    }

    Ok(())
}

fn copy_regular(src: &Path, dest: &Path) -> CoreResult<()> {
    let mut reader = File::open(src).map_err(|e| CoreError::from_io(src, e))?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(|e| CoreError::from_io(dest, e))?;

    std::io::copy(&mut reader, &mut writer).map_err(|e| CoreError::failed(dest, e))?;

    if let Ok(meta) = reader.metadata() {
        if let Err(e) = fs::set_permissions(dest, meta.permissions()) {
            tracing::debug!(path = %dest.display(), "could not copy permissions: {e}");
        }
    }

    Ok(())
}

fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    let link_target = fs::read_link(src).map_err(|e| CoreError::failed(src, e))?;

    #[cfg(unix)]
    std::os::unix::fs::symlink(&link_target, dest).map_err(|e| CoreError::from_io(dest, e))?;

    #[cfg(windows)]
    {
        let resolved = src.parent().map(|p| p.join(&link_target));
        let is_dir_link = resolved.is_some_and(|p| p.is_dir());
        let created = if is_dir_link {
            std::os::windows::fs::symlink_dir(&link_target, dest)
        } else {
            std::os::windows::fs::symlink_file(&link_target, dest)
        };
        created.map_err(|e| CoreError::from_io(dest, e))?;
    }

    Ok(())
}

/// What a user-triggered operation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    CreateFile,
    CreateDirectory,
    Copy,
    Move,
    Delete,
}

impl OperationKind {
    /// Human-readable verb phrase, e.g. for error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::CreateFile => "create the file",
            Self::CreateDirectory => "create the directory",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Delete => "delete",
        }
    }
}

/// A fully resolved operation, built from pane state just before it runs.
///
/// Requests are never stored, queued, or retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    CreateFile { dir: PathBuf, name: String },
    CreateDirectory { dir: PathBuf, name: String },
    Copy { source: PathBuf, target_dir: PathBuf },
    Move { source: PathBuf, target_dir: PathBuf },
    Delete { path: PathBuf },
}

impl OperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::CreateFile { .. } => OperationKind::CreateFile,
            Self::CreateDirectory { .. } => OperationKind::CreateDirectory,
            Self::Copy { .. } => OperationKind::Copy,
            Self::Move { .. } => OperationKind::Move,
            Self::Delete { .. } => OperationKind::Delete,
        }
    }

    /// The path the user acted on: the new entry for creations, the source
    /// otherwise.
    pub fn subject(&self) -> PathBuf {
        match self {
            Self::CreateFile { dir, name } | Self::CreateDirectory { dir, name } => dir.join(name),
            Self::Copy { source, .. } | Self::Move { source, .. } => source.clone(),
            Self::Delete { path } => path.clone(),
        }
    }

    /// Runs the operation against the filesystem.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns; creations additionally
    /// fail with [`CoreError::InvalidName`] for unusable names.
    pub fn execute(&self) -> CoreResult<()> {
        match self {
            Self::CreateFile { dir, name } => {
                validate_name(name)?;
                create_file(&dir.join(name))
            }
            Self::CreateDirectory { dir, name } => {
                validate_name(name)?;
                create_directory(&dir.join(name))
            }
            Self::Copy { source, target_dir } => copy_to(source, target_dir).map(|_| ()),
            Self::Move { source, target_dir } => move_to(source, target_dir).map(|_| ()),
            Self::Delete { path } => delete(path),
        }
    }
}
