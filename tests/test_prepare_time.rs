use drinkit::prepare_time::{estimate, format_duration, keyword_breakdown, KEYWORD_WEIGHTS};

#[test]
fn test_missing_instructions_are_zero() {
    assert_eq!(estimate(None), 0);
}

/// Known quirk: missing instructions give 0, but empty text is still text and
/// gets the 30 second floor.
#[test]
fn test_missing_and_empty_instructions_differ() {
    assert_eq!(estimate(None), 0);
    assert_eq!(estimate(Some("")), 30);
}

#[test]
fn test_present_text_never_below_floor() {
    for text in ["", "x", "Enjoy!", "stop", "Serve.", "ADD"] {
        assert!(estimate(Some(text)) >= 30, "{text:?}");
    }
}

#[test]
fn test_every_keyword_alone() {
    for &(keyword, weight) in KEYWORD_WEIGHTS {
        let hits = keyword_breakdown(keyword);
        let own = hits.iter().find(|h| h.keyword == keyword).unwrap();
        assert_eq!(own.occurrences, 1, "{keyword}");
        assert_eq!(own.seconds, weight, "{keyword}");
    }
}

#[test]
fn test_properties_from_examples() {
    assert_eq!(estimate(Some("SHAKE well")), estimate(Some("shake WELL")));
    assert_eq!(estimate(Some("shakeshake")), 60);
    assert_eq!(estimate(Some("shake and stir")), 50);
}

#[test]
fn test_long_text_is_linear_not_wrong() {
    let text = "shake ".repeat(10_000);
    assert_eq!(estimate(Some(&text)), 300_000);
}

#[test]
fn test_format_examples() {
    assert_eq!(format_duration(45), "45 seconds");
    assert_eq!(format_duration(60), "1 minutes");
    assert_eq!(format_duration(90), "1 minutes 30 seconds");
    assert_eq!(format_duration(0), "0 seconds");
}

#[test]
fn test_estimate_then_format() {
    let instructions = "Pour the gin, top with tonic and garnish with lime.";
    // pour 10, top 15, garnish 20
    assert_eq!(format_duration(estimate(Some(instructions))), "45 seconds");
}
