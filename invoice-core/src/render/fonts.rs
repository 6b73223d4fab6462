//! Invoice font loading.
//!
//! The document embeds a regular/bold TrueType pair, DejaVu Sans by
//! convention. Fonts are loaded once at startup; a missing or unusable
//! file is fatal there, so the render path never has to cope with a
//! half-loaded face.

use std::fs;
use std::path::{Path, PathBuf};

use rusttype::Font;
use thiserror::Error;
use tracing::{debug, warn};

/// Directories searched for the DejaVu pair when no explicit path is given.
const SEARCH_DIRS: &[&str] = &[
    ".",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
];

const REGULAR_FILE: &str = "DejaVuSans.ttf";

#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' is not a usable TrueType font")]
    Malformed(PathBuf),

    #[error("no DejaVu Sans font found; pass --font <path-to-regular-ttf>")]
    NotFound,
}

/// The embedded font pair plus the raw bytes the PDF writer needs.
pub struct InvoiceFonts {
    pub regular: Font<'static>,
    pub bold: Font<'static>,
    pub regular_bytes: Vec<u8>,
    pub bold_bytes: Vec<u8>,
}

impl InvoiceFonts {
    /// Loads the pair from explicit paths.
    ///
    /// # Errors
    ///
    /// [`FontError::Io`] when a file cannot be read, [`FontError::Malformed`]
    /// when the bytes do not parse as a TrueType font.
    pub fn load(regular: &Path, bold: &Path) -> Result<Self, FontError> {
        let regular_bytes = read_font(regular)?;
        let bold_bytes = read_font(bold)?;
        let regular_font = parse_font(regular, regular_bytes.clone())?;
        let bold_font = parse_font(bold, bold_bytes.clone())?;

        debug!(
            regular = %regular.display(),
            bold = %bold.display(),
            "fonts loaded"
        );
        Ok(Self {
            regular: regular_font,
            bold: bold_font,
            regular_bytes,
            bold_bytes,
        })
    }

    /// Resolves and loads the pair.
    ///
    /// An explicit regular-face path wins; otherwise the conventional font
    /// directories are searched for `DejaVuSans.ttf`. The bold face is the
    /// sibling `-Bold` file; when that file is absent the regular face is
    /// reused for bold runs.
    ///
    /// # Errors
    ///
    /// [`FontError::NotFound`] when no candidate regular face exists, plus
    /// the [`InvoiceFonts::load`] errors.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, FontError> {
        let regular = match explicit {
            Some(path) => path.to_path_buf(),
            None => find_regular().ok_or(FontError::NotFound)?,
        };

        let bold = bold_sibling(&regular);
        if bold.is_file() {
            Self::load(&regular, &bold)
        } else {
            warn!(
                regular = %regular.display(),
                missing = %bold.display(),
                "bold face not found, headings will use the regular face"
            );
            Self::load(&regular, &regular)
        }
    }
}

/// The `-Bold` sibling of a regular face: `DejaVuSans.ttf` maps to
/// `DejaVuSans-Bold.ttf` in the same directory.
pub fn bold_sibling(regular: &Path) -> PathBuf {
    let stem = regular
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = regular
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ttf".to_string());
    regular.with_file_name(format!("{stem}-Bold.{ext}"))
}

fn find_regular() -> Option<PathBuf> {
    SEARCH_DIRS
        .iter()
        .map(|dir| Path::new(dir).join(REGULAR_FILE))
        .find(|candidate| candidate.is_file())
}

fn read_font(path: &Path) -> Result<Vec<u8>, FontError> {
    fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_font(path: &Path, bytes: Vec<u8>) -> Result<Font<'static>, FontError> {
    Font::try_from_vec(bytes).ok_or_else(|| FontError::Malformed(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bold_sibling_keeps_directory_and_extension() {
        let bold = bold_sibling(Path::new("/fonts/DejaVuSans.ttf"));

        assert_eq!(bold, PathBuf::from("/fonts/DejaVuSans-Bold.ttf"));
    }

    #[test]
    fn bold_sibling_of_bare_filename() {
        assert_eq!(
            bold_sibling(Path::new("DejaVuSans.ttf")),
            PathBuf::from("DejaVuSans-Bold.ttf")
        );
    }

    #[test]
    fn missing_file_reports_io_error_with_path() {
        let path = Path::new("/definitely/not/here/DejaVuSans.ttf");

        match InvoiceFonts::load(path, path) {
            Err(FontError::Io { path: p, .. }) => assert_eq!(p, path.to_path_buf()),
            Err(other) => panic!("expected Io error, got {other:?}"),
            Ok(_) => panic!("expected Io error, got loaded fonts"),
        }
    }

    #[test]
    fn garbage_bytes_report_malformed() {
        let path = std::env::temp_dir().join("tutor-invoice-not-a-font.ttf");
        fs::write(&path, b"this is not a font at all").unwrap();

        let result = InvoiceFonts::load(&path, &path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(FontError::Malformed(_))));
    }
}
