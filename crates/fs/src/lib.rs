mod filter;
mod metadata;
mod platform;
mod trash;

pub use filter::{FileKind, FilterConfig, coarse_type, extension, file_name};
pub use metadata::FileMetadata;
pub use platform::{NativeProbe, PlatformProbe};
pub use trash::{NativeTrash, ReversibleDelete};
