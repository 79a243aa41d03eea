use super::*;

#[test]
fn file_name_handles_both_separators() {
    assert_eq!(file_name("C:\\Users\\skush\\report.pdf"), "report.pdf");
    assert_eq!(file_name("/home/skush/report.pdf"), "report.pdf");
    assert_eq!(file_name("report.pdf"), "report.pdf");
}

#[test]
fn extension_includes_the_dot() {
    assert_eq!(extension("a.pdf"), ".pdf");
    assert_eq!(extension("archive.tar.gz"), ".gz");
    assert_eq!(extension("Makefile"), "");
}

#[test]
fn kind_parse_is_lenient() {
    assert_eq!(FileKind::parse("pdf"), FileKind::Pdf);
    assert_eq!(FileKind::parse("JPEG"), FileKind::Image);
    assert_eq!(FileKind::parse("docx"), FileKind::Document);
    assert_eq!(FileKind::parse("7z"), FileKind::Archive);
    assert_eq!(FileKind::parse("whatever"), FileKind::All);
}

#[test]
fn kind_filter_matches_by_extension() {
    let pdf_only = FilterConfig {
        kind: FileKind::Pdf,
        ..FilterConfig::default()
    };
    assert!(pdf_only.accepts("C:\\docs\\a.PDF", 10));
    assert!(!pdf_only.accepts("C:\\docs\\a.txt", 10));

    let docs = FilterConfig {
        kind: FileKind::Document,
        ..FilterConfig::default()
    };
    for path in ["a.pdf", "a.doc", "a.docx", "a.txt"] {
        assert!(docs.accepts(path, 0), "{path} should match Documents");
    }
    assert!(!docs.accepts("a.png", 0));
}

#[test]
fn exclude_pattern_is_case_insensitive_substring() {
    let cfg = FilterConfig {
        exclude_pattern: Some("Backup".into()),
        ..FilterConfig::default()
    };
    assert!(cfg.excludes("C:\\x\\old-BACKUP-2020.zip"));
    assert!(!cfg.excludes("C:\\x\\notes.txt"));

    let empty = FilterConfig {
        exclude_pattern: Some(String::new()),
        ..FilterConfig::default()
    };
    assert!(!empty.excludes("anything"));
}

#[test]
fn size_bounds_are_in_whole_megabytes_and_zero_disables() {
    let unbounded = FilterConfig::default();
    assert!(unbounded.size_within(0));
    assert!(unbounded.size_within(i64::MAX));

    let cfg = FilterConfig {
        min_size_mb: 1,
        max_size_mb: 10,
        ..FilterConfig::default()
    };
    assert!(!cfg.size_within(1024 * 1024 - 1));
    assert!(cfg.size_within(1024 * 1024));
    assert!(cfg.size_within(10 * 1024 * 1024));
    assert!(!cfg.size_within(11 * 1024 * 1024));
}

#[test]
fn coarse_type_labels() {
    assert_eq!(coarse_type("C:\\a\\report.PDF"), "PDF");
    assert_eq!(coarse_type("notes.docx"), "Document");
    assert_eq!(coarse_type("readme.txt"), "Text");
    assert_eq!(coarse_type("photo.png"), "Image");
    assert_eq!(coarse_type("clip.mp4"), "Video");
    assert_eq!(coarse_type("data.bin"), "Unknown");
}
