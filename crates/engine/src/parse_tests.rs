use super::*;
use std::collections::HashMap;

#[derive(Default)]
struct FakeProbe {
    sizes: HashMap<String, i64>,
}

impl FakeProbe {
    fn with_size(path: &str, size: i64) -> Self {
        let mut probe = Self::default();
        probe.sizes.insert(path.to_owned(), size);
        probe
    }
}

impl PlatformProbe for FakeProbe {
    fn true_size(&self, path: &str) -> Option<i64> {
        self.sizes.get(path).copied()
    }

    fn is_cloud_placeholder(&self, _path: &str) -> bool {
        false
    }
}

fn text_reply(text: &str) -> Vec<u8> {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {"content": [{"type": "text", "text": text}]}
    })
    .to_string()
    .into_bytes()
}

#[test]
fn listing_extracts_paths_up_to_whitespace_or_paren() {
    let raw = text_reply(
        "Contents:\n- a.pdf (file://C:\\a.pdf) 12 KB\n- b.txt (file://C:\\b.txt) 0 B\n",
    );
    let paths = parse_listing(&raw).expect("parse listing");
    assert_eq!(paths, vec!["C:\\a.pdf", "C:\\b.txt"]);
}

#[test]
fn listing_preserves_order_and_duplicates() {
    let raw = text_reply("file://C:\\dup.txt file://C:\\other.txt file://C:\\dup.txt");
    let paths = parse_listing(&raw).expect("parse listing");
    assert_eq!(paths, vec!["C:\\dup.txt", "C:\\other.txt", "C:\\dup.txt"]);
}

#[test]
fn listing_without_matches_is_empty_not_an_error() {
    let raw = text_reply("nothing to see here");
    assert!(parse_listing(&raw).expect("parse listing").is_empty());
}

#[test]
fn malformed_envelope_is_fatal() {
    assert!(matches!(
        parse_listing(b"not json at all"),
        Err(ParseError::Envelope(_))
    ));
    assert!(matches!(
        parse_file_info(b"{", "C:\\a.pdf", &FakeProbe::default()),
        Err(ParseError::Envelope(_))
    ));
}

#[test]
fn file_info_populates_known_fields() {
    let raw = text_reply(
        "Size: 2048 bytes\n\
         Created: 2024-01-02 03:04:05\n\
         Modified: 2024-02-03T04:05:06Z\n\
         Accessed: 2024-03-04 05:06:07\n\
         IsFile: true\n\
         IsDirectory: false\n\
         MIME Type: application/pdf",
    );
    let probe = FakeProbe::with_size("C:\\a.pdf", 2048);
    let meta = parse_file_info(&raw, "C:\\a.pdf", &probe).expect("parse info");

    assert_eq!(meta.path, "C:\\a.pdf");
    assert_eq!(meta.size_bytes, 2048);
    assert_eq!(
        meta.created_at.expect("created").to_rfc3339(),
        "2024-01-02T03:04:05+00:00"
    );
    assert_eq!(
        meta.modified_at.expect("modified").to_rfc3339(),
        "2024-02-03T04:05:06+00:00"
    );
    assert!(meta.accessed_at.is_some());
    assert!(meta.is_file);
    assert!(!meta.is_dir);
    assert_eq!(meta.mime_type, "application/pdf");
}

#[test]
fn unparseable_fields_stay_at_zero_values() {
    let raw = text_reply("Size: lots\nModified: yesterday\nIsFile: yes\nNonsense line");
    let meta =
        parse_file_info(&raw, "C:\\a.pdf", &FakeProbe::default()).expect("lenient parse");

    assert_eq!(meta.size_bytes, 0);
    assert!(meta.modified_at.is_none());
    assert!(!meta.is_file);
    assert!(meta.mime_type.is_empty());
}

#[test]
fn verified_size_overrides_tool_reported_size() {
    let raw = text_reply("Size: 0 bytes\nIsFile: true\nIsDirectory: false");
    let probe = FakeProbe::with_size("C:\\report.pdf", 1200);
    let meta = parse_file_info(&raw, "C:\\report.pdf", &probe).expect("parse info");
    assert_eq!(meta.size_bytes, 1200);
}

#[test]
fn unresolvable_path_retries_document_extensions_in_order() {
    let raw = text_reply("Size: 5 bytes\nIsFile: true\nIsDirectory: false");

    // .docx resolves; .pdf and .doc are tried first and miss.
    let probe = FakeProbe::with_size("C:\\report.docx", 900);
    let meta = parse_file_info(&raw, "C:\\report", &probe).expect("parse info");
    assert_eq!(meta.path, "C:\\report.docx");
    assert_eq!(meta.size_bytes, 900);

    // .pdf also resolves and comes first in the candidate order.
    let mut probe = FakeProbe::with_size("C:\\report.docx", 900);
    probe.sizes.insert("C:\\report.pdf".to_owned(), 700);
    let meta = parse_file_info(&raw, "C:\\report", &probe).expect("parse info");
    assert_eq!(meta.path, "C:\\report.pdf");
    assert_eq!(meta.size_bytes, 700);
}

#[test]
fn unresolvable_path_with_no_candidate_keeps_tool_values() {
    let raw = text_reply("Size: 5 bytes\nIsFile: true\nIsDirectory: false");
    let meta = parse_file_info(&raw, "C:\\gone", &FakeProbe::default()).expect("parse info");
    assert_eq!(meta.path, "C:\\gone");
    assert_eq!(meta.size_bytes, 5);
}

#[test]
fn directories_skip_platform_reconciliation() {
    let raw = text_reply("Size: 0 bytes\nIsFile: false\nIsDirectory: true");
    let probe = FakeProbe::with_size("C:\\folder", 4096);
    let meta = parse_file_info(&raw, "C:\\folder", &probe).expect("parse info");
    assert!(meta.is_dir);
    assert_eq!(meta.size_bytes, 0);
}
