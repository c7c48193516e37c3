#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;

#[test]
fn test_parser_basic_document() {
    let input = r#"
# deployment profile
name := 'demo';
value := { 2 3 + };

begin
  flag := true;
end
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());

    let keys: Vec<&str> = outcome.mapping.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["name", "value", "flag"]);
    assert_eq!(outcome.mapping["name"], Value::Str("demo".to_string()));
    assert_eq!(outcome.mapping["value"], Value::Int(5));
    assert_eq!(outcome.mapping["flag"], Value::Bool(true));
}

#[test]
fn test_scalar_coercions() {
    let input = r#"
enabled := true;
disabled := false;
label := 'alpha';
retries := 12;
endpoint := 10.0.0.1:8080;
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    assert_eq!(outcome.mapping["enabled"], Value::Bool(true));
    assert_eq!(outcome.mapping["disabled"], Value::Bool(false));
    assert_eq!(outcome.mapping["label"], Value::Str("alpha".to_string()));
    assert_eq!(outcome.mapping["retries"], Value::Int(12));
    assert_eq!(
        outcome.mapping["endpoint"],
        Value::Str("10.0.0.1:8080".to_string())
    );
}

#[test]
fn test_oversized_digit_run_stays_string() {
    let outcome = parse_str("big := 99999999999999999999;");
    assert_eq!(
        outcome.mapping["big"],
        Value::Str("99999999999999999999".to_string())
    );
}

#[test]
fn test_blank_value_becomes_empty_string() {
    let outcome = parse_str("hollow := ;");
    assert_eq!(outcome.mapping["hollow"], Value::Str(String::new()));
}

#[test]
fn test_constants_feed_expressions() {
    let input = r#"
(def BASE 100);
(def STEP 7);
total := { BASE STEP + };
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    assert_eq!(outcome.mapping["total"], Value::Int(107));
    // Definitions bind names only; they never land in the mapping.
    assert!(!outcome.mapping.contains_key("BASE"));
}

#[test]
fn test_outer_constants_invisible_inside_blocks() {
    let input = r#"
(def LIMIT 50);
outer := { LIMIT 5 };
begin
inner := { LIMIT 5 };
end
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    // Outside the block LIMIT resolves and the leftover 5 is discarded.
    assert_eq!(outcome.mapping["outer"], Value::Int(50));
    // Inside, the name is unknown, so only the literal remains.
    assert_eq!(outcome.mapping["inner"], Value::Int(5));
}

#[test]
fn test_block_constants_do_not_leak_out() {
    let input = r#"
begin
(def SEED 9);
grain := { SEED };
end
after := { SEED 2 };
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    assert_eq!(outcome.mapping["grain"], Value::Int(9));
    // SEED is gone once the block closes; the literal survives alone.
    assert_eq!(outcome.mapping["after"], Value::Int(2));
}

#[test]
fn test_block_entries_overwrite_on_merge() {
    let input = r#"
mode := 'dev';
begin
mode := 'prod';
port := 8080;
end
"#;

    let outcome = parse_str(input);
    let keys: Vec<&str> = outcome.mapping.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["mode", "port"]);
    assert_eq!(outcome.mapping["mode"], Value::Str("prod".to_string()));
    assert_eq!(outcome.mapping["port"], Value::Int(8080));
}

#[test]
fn test_comments_and_blanks_never_reach_blocks() {
    let input = r#"
begin
# interior note

ratio := 4;
end
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    assert_eq!(outcome.mapping["ratio"], Value::Int(4));
}

#[test]
fn test_diagnostics_carry_absolute_line_numbers() {
    let input = r#"
# header comment
bad := { + };

(def BROKEN mystery);
"#;

    let outcome = parse_str(input);
    assert_eq!(outcome.diagnostics.len(), 2);

    let first = &outcome.diagnostics[0];
    assert_eq!(first.line, 3);
    assert_eq!(first.message, "Error in expression: stack underflow at '+'");
    assert_eq!(first.snippet, "bad := { + };");

    let second = &outcome.diagnostics[1];
    assert_eq!(second.line, 5);
    assert_eq!(
        second.message,
        "Error in constant definition: expression produced no result"
    );
    assert_eq!(second.snippet, "(def BROKEN mystery);");

    // Failed lines bind nothing.
    assert!(outcome.mapping.is_empty());
}

#[test]
fn test_nested_frame_diagnostics_keep_absolute_lines() {
    let input = r#"
title := 'nested';
begin
broken := { + };
port := 80;
end
"#;

    let outcome = parse_str(input);
    assert_eq!(outcome.diagnostics.len(), 1);

    // Line 4 of the document, not line 1 of the block buffer.
    let diag = &outcome.diagnostics[0];
    assert_eq!(diag.line, 4);
    assert_eq!(diag.message, "Error in expression: stack underflow at '+'");
    assert_eq!(diag.snippet, "broken := { + };");

    // The block's healthy line still merges out.
    assert_eq!(outcome.mapping["port"], Value::Int(80));
}

#[test]
fn test_unmatched_lines_are_dropped_silently() {
    let input = r#"
just some prose
name = 'wrong operator';
port := 9090
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    assert!(outcome.mapping.is_empty());
}

#[test]
fn test_begin_inside_block_restarts_collection() {
    let input = r#"
begin
lost := 1;
begin
kept := 2;
end
"#;

    let outcome = parse_str(input);
    let keys: Vec<&str> = outcome.mapping.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["kept"]);
    assert_eq!(outcome.mapping["kept"], Value::Int(2));
}

#[test]
fn test_stray_end_is_ignored() {
    let input = r#"
end
left := 3;
"#;

    let outcome = parse_str(input);
    assert!(outcome.is_clean());
    assert_eq!(outcome.mapping["left"], Value::Int(3));
}

#[test]
fn test_unterminated_block_discards_its_lines() {
    let input = r#"
seen := 1;
begin
never := 2;
"#;

    let outcome = parse_str(input);
    let keys: Vec<&str> = outcome.mapping.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["seen"]);
}

#[test]
fn test_braced_payload_is_an_expression_not_a_string() {
    let outcome = parse_str("speed := { 6 7 mod() };");
    assert_eq!(outcome.mapping["speed"], Value::Int(6));
}

#[test]
fn test_reassignment_keeps_first_position() {
    let input = r#"
alpha := 1;
beta := 2;
alpha := 3;
"#;

    let outcome = parse_str(input);
    let keys: Vec<&str> = outcome.mapping.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["alpha", "beta"]);
    assert_eq!(outcome.mapping["alpha"], Value::Int(3));
}

#[test]
fn test_sqrt_expression_binds_float() {
    let outcome = parse_str("root := { 16 sqrt() };");
    assert_eq!(outcome.mapping["root"], Value::Float(4.0));
}

#[test]
fn test_expression_without_semicolon_still_parses() {
    let outcome = parse_str("area := { 3 4 + }");
    assert_eq!(outcome.mapping["area"], Value::Int(7));
}

#[test]
fn test_spacing_around_walrus_is_flexible() {
    let outcome = parse_str("tight:=9;");
    assert_eq!(outcome.mapping["tight"], Value::Int(9));
}
