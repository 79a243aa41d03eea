/// Coarse file-kind buckets selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileKind {
    #[default]
    All,
    Pdf,
    Image,
    Document,
    Archive,
}

impl FileKind {
    /// Lenient parse of user input; anything unrecognized selects all files.
    pub fn parse(input: &str) -> Self {
        match input.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "image" | "img" | "jpg" | "jpeg" | "png" | "gif" => Self::Image,
            "docs" | "doc" | "docx" | "txt" => Self::Document,
            "archive" | "zip" | "tar" | "rar" | "7z" => Self::Archive,
            _ => Self::All,
        }
    }

    fn matches_extension(self, ext: &str) -> bool {
        match self {
            Self::All => true,
            Self::Pdf => ext == ".pdf",
            Self::Image => matches!(ext, ".jpg" | ".jpeg" | ".png" | ".gif"),
            Self::Document => matches!(ext, ".pdf" | ".doc" | ".docx" | ".txt"),
            Self::Archive => matches!(ext, ".zip" | ".tar" | ".rar" | ".7z"),
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::All => "All Files",
            Self::Pdf => "PDFs",
            Self::Image => "Images",
            Self::Document => "Documents",
            Self::Archive => "Archives",
        };
        write!(f, "{label}")
    }
}

/// Inclusion/exclusion policy shared by scan and sweep.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub kind: FileKind,
    /// Case-insensitive substring matched against the file name.
    pub exclude_pattern: Option<String>,
    /// Lower size bound in whole megabytes; 0 disables the bound.
    pub min_size_mb: i64,
    /// Upper size bound in whole megabytes; 0 disables the bound.
    pub max_size_mb: i64,
}

impl FilterConfig {
    pub fn accepts(&self, path: &str, size_bytes: i64) -> bool {
        self.matches_kind(path) && !self.excludes(path) && self.size_within(size_bytes)
    }

    pub fn matches_kind(&self, path: &str) -> bool {
        self.kind
            .matches_extension(&extension(file_name(path)).to_ascii_lowercase())
    }

    pub fn excludes(&self, path: &str) -> bool {
        let Some(pattern) = self.exclude_pattern.as_deref() else {
            return false;
        };
        if pattern.is_empty() {
            return false;
        }
        file_name(path)
            .to_ascii_lowercase()
            .contains(&pattern.to_ascii_lowercase())
    }

    pub fn size_within(&self, size_bytes: i64) -> bool {
        if self.min_size_mb == 0 && self.max_size_mb == 0 {
            return true;
        }
        let size_mb = size_bytes / (1024 * 1024);
        if self.min_size_mb > 0 && size_mb < self.min_size_mb {
            return false;
        }
        if self.max_size_mb > 0 && size_mb > self.max_size_mb {
            return false;
        }
        true
    }
}

/// Final component of `path`; the tool reports Windows-style separators, so
/// both kinds are honored.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

/// Extension of `filename` including the dot, or `""` when there is none.
pub fn extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[idx..],
        None => "",
    }
}

/// Coarse human-facing type label recorded with each deletion.
pub fn coarse_type(path: &str) -> &'static str {
    let lower = path.to_ascii_lowercase();
    if lower.contains(".pdf") {
        "PDF"
    } else if lower.contains(".doc") {
        "Document"
    } else if lower.contains(".txt") {
        "Text"
    } else if lower.contains(".jpg") || lower.contains(".png") {
        "Image"
    } else if lower.contains(".mp4") || lower.contains(".avi") {
        "Video"
    } else {
        "Unknown"
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
