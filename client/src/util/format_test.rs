use super::*;

#[test]
fn display_date_handles_dates_and_timestamps() {
    assert_eq!(display_date(Some("2026-10-17")), "10/17/2026");
    assert_eq!(display_date(Some("2026-01-05T09:30:00")), "1/5/2026");
}

#[test]
fn display_date_dashes_missing_values() {
    assert_eq!(display_date(None), "-");
    assert_eq!(display_date(Some("  ")), "-");
}

#[test]
fn display_date_passes_through_unknown_formats() {
    assert_eq!(display_date(Some("next week")), "next week");
}

#[test]
fn truncate_appends_ellipsis_past_limit() {
    let long = "a".repeat(DESCRIPTION_PREVIEW_CHARS + 1);
    let cut = truncate(&long, DESCRIPTION_PREVIEW_CHARS);
    assert_eq!(cut.len(), DESCRIPTION_PREVIEW_CHARS + 3);
    assert!(cut.ends_with("..."));

    let exact = "b".repeat(DESCRIPTION_PREVIEW_CHARS);
    assert_eq!(truncate(&exact, DESCRIPTION_PREVIEW_CHARS), exact);
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("équipement", 3), "équ...");
}

#[test]
fn or_dash_fills_blanks() {
    assert_eq!(or_dash(None), "-");
    assert_eq!(or_dash(Some("")), "-");
    assert_eq!(or_dash(Some("Broken strap")), "Broken strap");
}
