use super::*;

fn catalog() -> ItemCatalog {
    [
        (0_i64, "Hand Axe"),
        (1, "Potion"),
        (2, "Scroll"),
        (306, "Elixir"),
        (508, "Ring"),
        (509, "Amulet"),
    ]
    .into_iter()
    .collect()
}

fn convert_one(line: &str) -> Result<ConvertedEntry, ConvertError> {
    let cat = catalog();
    let record = parse_line(line).expect("line should parse");
    convert_record(&record, &cat)
}

// -- Flag tests --

#[test]
fn test_flag_hidden_when_marker_disabled() {
    assert_eq!(derive_flag(&["3", "-1"]).unwrap(), FLAG_HIDDEN);
    assert_eq!(derive_flag(&["3", " -1 "]).unwrap(), FLAG_HIDDEN);
}

#[test]
fn test_flag_shown_with_marker() {
    assert_eq!(derive_flag(&["3", "5"]).unwrap(), FLAG_SHOWN);
}

#[test]
fn test_flag_single_value() {
    assert_eq!(derive_flag(&["3"]).unwrap(), FLAG_HIDDEN);
}

#[test]
fn test_flag_malformed_value() {
    assert!(matches!(
        derive_flag(&["3", "red"]),
        Err(ConvertError::InvalidNumber { .. })
    ));
}

// -- Record tests --

#[test]
fn test_output_record_display() {
    let record = OutputRecord {
        primary: "1-2".to_string(),
        plus: Some("0".to_string()),
        star: Some("4".to_string()),
        hash: Some("2".to_string()),
        flag: FLAG_SHOWN,
    };
    assert_eq!(record.to_string(), "1-2+0*4#2 = 3");
}

#[test]
fn test_end_to_end_example() {
    let entry = convert_one("Item Colours[2-3][1][0,1]: 5,-1 // test").unwrap();
    assert_eq!(entry.lines(), vec!["; test", "; Potion, Scroll", "1-2+0 = 0"]);
}

#[test]
fn test_hash_group_kept_unless_default() {
    let entry = convert_one("Item Colours[2][1][3]: 5,2").unwrap();
    assert_eq!(entry.record.hash.as_deref(), Some("2"));
    assert_eq!(entry.record.to_string(), "1+0#2 = 3");

    // `1,2` plain-offsets to the default `0,1` and is dropped.
    let entry = convert_one("Item Colours[2][1][1,2]: 5").unwrap();
    assert_eq!(entry.record.hash, None);
}

#[test]
fn test_spaced_default_hash_group_dropped() {
    let entry = convert_one("Item Colours[2][1][0, 1]: 5").unwrap();
    assert_eq!(entry.record.hash, None);
    assert_eq!(entry.lines(), vec!["; Potion", "1+0 = 0"]);

    let entry = convert_one("Item Colours[2][1][1 , 2]: 5").unwrap();
    assert_eq!(entry.record.hash, None);
}

#[test]
fn test_hash_group_with_extra_token_kept() {
    let entry = convert_one("Item Colours[2][1][0,1,2]: 5").unwrap();
    assert_eq!(entry.record.hash.as_deref(), Some("-1,0,1"));
}

#[test]
fn test_unbounded_aux_group_keeps_separator() {
    let entry = convert_one("Item Colours[2][0+][2][3]: 5, 2").unwrap();
    assert_eq!(entry.record.plus.as_deref(), Some(""));
    assert_eq!(entry.record.hash.as_deref(), Some("1"));
    assert_eq!(entry.record.star.as_deref(), Some("2"));
    assert_eq!(entry.record.to_string(), "1+*2#1 = 3");
}

#[test]
fn test_fourth_group_is_star() {
    let entry = convert_one("Item Colours[2][1][3][5-6]: 5,0").unwrap();
    assert_eq!(entry.record.plus.as_deref(), Some("0"));
    assert_eq!(entry.record.hash.as_deref(), Some("2"));
    assert_eq!(entry.record.star.as_deref(), Some("4-5"));
    assert_eq!(entry.record.to_string(), "1+0*4-5#2 = 3");
}

#[test]
fn test_extra_groups_ignored() {
    let entry = convert_one("Item Colours[2][1][3][5][9]: 5").unwrap();
    assert_eq!(entry.record.to_string(), "1+0*4#2 = 0");
}

#[test]
fn test_item_bands() {
    let entry = convert_one("Item Colours[2001-2002,1001]: 1").unwrap();
    assert_eq!(entry.record.primary, "508-509,306");
    assert_eq!(entry.names, vec!["Ring", "Amulet", "Elixir"]);
    assert_eq!(entry.item_ids, vec![508, 509, 306]);
}

#[test]
fn test_unbounded_primary() {
    let entry = convert_one("Item Colours[0+][2]: 1, 4").unwrap();
    assert!(entry.names.is_empty());
    assert_eq!(entry.lines(), vec!["+1 = 3"]);
}

#[test]
fn test_empty_comment_not_emitted() {
    let entry = convert_one("Item Colours[1]: 1 //   ").unwrap();
    assert_eq!(entry.comment, None);
    assert_eq!(entry.lines(), vec!["; Hand Axe", "0 = 0"]);
}

#[test]
fn test_missing_item_name() {
    assert!(matches!(
        convert_one("Item Colours[5]: 1"),
        Err(ConvertError::KeyLookup { id: 4 })
    ));
}

// -- Converter tests --

#[test]
fn test_converter_skips_and_preserves_order() {
    let cat = catalog();
    let mut converter = Converter::new(&cat);
    let input = "\
// Item colour settings
Show Item Level: 1

Item Colours[2]: 1, 5 // scroll
Item Colours[2001]: 2
Rune Colours[1]: 3
";
    let out = converter.convert_str(input).unwrap();
    assert_eq!(
        out,
        vec!["; scroll", "; Potion", "1 = 3", "; Ring", "508 = 0"]
    );

    let stats = converter.stats();
    assert_eq!(stats.lines_read, 6);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.skipped, 4);
    assert_eq!(stats.covered_ranges(), "1,508");
}

#[test]
fn test_converter_error_names_line() {
    let cat = catalog();
    let mut converter = Converter::new(&cat);
    let err = converter
        .convert_str("Item Colours[1]: 1\nItem Colours[x]: 1\n")
        .unwrap_err();
    match err {
        ConvertError::AtLine { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(*source, ConvertError::InvalidNumber { .. }));
        }
        other => panic!("expected AtLine, got {other:?}"),
    }
}

#[test]
fn test_convert_to_writer() {
    let cat = catalog();
    let mut converter = Converter::new(&cat);
    let input = "Item Colours[2-3][1][0,1]: 5,-1 // test\n";
    let mut out = Vec::new();
    converter.convert_to(input.as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "; test\n; Potion, Scroll\n1-2+0 = 0\n"
    );
}
