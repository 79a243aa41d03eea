use super::*;

#[test]
fn human_size_below_one_kilobyte_is_exact() {
    assert_eq!(human_size(0), "0 B");
    assert_eq!(human_size(1023), "1023 B");
}

#[test]
fn human_size_scales_through_binary_units() {
    assert_eq!(human_size(1024), "1.0 KB");
    assert_eq!(human_size(1536), "1.5 KB");
    assert_eq!(human_size(1024 * 1024), "1.0 MB");
    assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.0 GB");
}

#[test]
fn color_choice_parse_defaults_to_auto() {
    assert_eq!(ColorChoice::parse("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::parse("never"), ColorChoice::Never);
    assert_eq!(ColorChoice::parse("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::parse("sometimes"), ColorChoice::Auto);
}
