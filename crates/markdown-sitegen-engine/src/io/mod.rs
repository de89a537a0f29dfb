use crate::page::{PageError, Template, render_page};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

pub const MARKDOWN_EXTENSION: &str = "md";
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(PathBuf),
    #[error("Path {path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
    move |source| IoError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a whole file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(io_err(path))
}

/// Write content to a file, creating parent directories
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::write(path, content).map_err(io_err(path))
}

/// Replace `public_dir` with a byte-for-byte copy of `static_dir`.
///
/// Returns the copied file paths relative to `static_dir`, sorted.
pub fn copy_static(static_dir: &Path, public_dir: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !static_dir.is_dir() {
        return Err(IoError::NotFound(static_dir.to_path_buf()));
    }

    if public_dir.exists() {
        log::info!("Removing directory '{}'", public_dir.display());
        fs::remove_dir_all(public_dir).map_err(io_err(public_dir))?;
    }
    log::info!("Creating directory '{}'", public_dir.display());
    fs::create_dir_all(public_dir).map_err(io_err(public_dir))?;

    let mut copied = Vec::new();
    copy_directory_recursive(static_dir, static_dir, public_dir, &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_directory_recursive(
    dir: &Path,
    static_root: &Path,
    public_root: &Path,
    copied: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for path in sorted_entries(dir)? {
        let relative = relative_to(&path, static_root)?;
        let destination = relative.to_path(public_root);

        if path.is_dir() {
            if !destination.exists() {
                log::info!("Creating directory '{}'", destination.display());
                fs::create_dir_all(&destination).map_err(io_err(&destination))?;
            }
            copy_directory_recursive(&path, static_root, public_root, copied)?;
        } else {
            log::info!("Copying {} to {}", path.display(), destination.display());
            fs::copy(&path, &destination).map_err(io_err(&path))?;
            copied.push(relative);
        }
    }
    Ok(())
}

/// Generate a single page from `from` into `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    let template = Template::new(read_file(template_path)?);
    write_page(from, &template, dest, base_path)
}

fn write_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());
    let markdown = read_file(from)?;
    let html = render_page(&markdown, template, base_path).map_err(|source| IoError::Page {
        path: from.to_path_buf(),
        source,
    })?;
    write_file(dest, &html)
}

/// Mirror every `.md` file under `content_dir` into `dest_dir` as `.html`.
///
/// The template is read once. Other files in the content tree are skipped.
/// Returns the written page paths in sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_dir)?;
    let template = Template::new(read_file(template_path)?);

    let mut written = Vec::new();
    for relative in scan_files(content_dir)? {
        if relative.extension() != Some(MARKDOWN_EXTENSION) {
            log::debug!("Skipping non-markdown file {relative}");
            continue;
        }
        let from = relative.to_path(content_dir);
        let dest = page_destination(&relative).to_path(dest_dir);
        write_page(&from, &template, &dest, base_path)?;
        written.push(dest);
    }
    Ok(written)
}

/// `blog/post.md` → `blog/post.html`
pub fn page_destination(relative: &RelativePath) -> RelativePathBuf {
    relative.with_extension(HTML_EXTENSION)
}

/// All files below `root`, relative to it, sorted
pub fn scan_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    let mut files = Vec::new();
    scan_directory_recursive(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    root: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            scan_directory_recursive(&path, root, files)?;
        } else {
            files.push(relative_to(&path, root)?);
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut paths = fs::read_dir(dir)
        .map_err(io_err(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err(dir))?;
    paths.sort();
    Ok(paths)
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    let outside = || IoError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let stripped = path.strip_prefix(root).map_err(|_| outside())?;
    RelativePathBuf::from_path(stripped).map_err(|_| outside())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(path.to_path_buf()));
    }

    Ok(())
}
