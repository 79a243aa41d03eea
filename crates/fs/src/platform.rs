use std::fs;

/// Attribute queries answered by the platform rather than the tool process.
///
/// Cloud-sync systems surface placeholder entries whose size and content are
/// unreliable through ordinary filesystem calls; both classifier predicates
/// consult this probe before trusting a tool-reported size.
pub trait PlatformProbe {
    /// On-disk size the platform reports for `path`, if the path resolves.
    fn true_size(&self, path: &str) -> Option<i64>;

    /// Whether `path` is a cloud placeholder whose content is not local yet.
    fn is_cloud_placeholder(&self, path: &str) -> bool;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProbe;

impl PlatformProbe for NativeProbe {
    fn true_size(&self, path: &str) -> Option<i64> {
        let meta = fs::metadata(path).ok()?;
        i64::try_from(meta.len()).ok()
    }

    fn is_cloud_placeholder(&self, path: &str) -> bool {
        #[cfg(windows)]
        {
            use std::os::windows::fs::MetadataExt;

            // OneDrive and friends mark not-yet-downloaded entries with the
            // recall attributes; reading such a file would trigger a fetch.
            const FILE_ATTRIBUTE_RECALL_ON_OPEN: u32 = 0x0004_0000;
            const FILE_ATTRIBUTE_RECALL_ON_DATA_ACCESS: u32 = 0x0040_0000;

            match fs::metadata(path) {
                Ok(meta) => {
                    meta.file_attributes()
                        & (FILE_ATTRIBUTE_RECALL_ON_OPEN | FILE_ATTRIBUTE_RECALL_ON_DATA_ACCESS)
                        != 0
                }
                Err(_) => false,
            }
        }
        #[cfg(not(windows))]
        {
            let _ = path;
            false
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
