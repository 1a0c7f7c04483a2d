use cmdpat::command::{MatchError, Pattern, match_pattern};
use rstest::rstest;

use super::{map, to_map};

// ========================================
// Mandatory-only patterns
// ========================================

#[rstest]
#[case::exact("list streams", "list streams")]
#[case::with_trailing_text("list streams", "list streams in namespace default")]
#[case::single_word("help", "help me")]
fn literal_patterns_bind_nothing(#[case] pattern: &str, #[case] input: &str) {
    let args = match_pattern(pattern, input).unwrap();
    assert!(args.is_empty());
}

#[test]
fn single_placeholder() {
    let args = match_pattern("create stream <id>", "create stream mystream").unwrap();
    assert_eq!(to_map(&args), map(&[("id", "mystream")]));
}

#[test]
fn empty_key_is_rejected() {
    let err = match_pattern("set <key> to <value>", "set  to x").unwrap_err();
    assert_eq!(err.to_string(), "expected format: set <key> to <value>");
}

#[test]
fn empty_value_before_optional_clause_is_rejected() {
    let err = match_pattern("create stream <id> [ttl <ttl>]", "create stream  ttl 5").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected format: create stream <id> [ttl <ttl>]"
    );
}

// ========================================
// Optional clause
// ========================================

#[rstest]
#[case::present(
    "create stream mystream ttl 3600",
    &[("id", "mystream"), ("ttl", "3600")]
)]
#[case::absent("create stream mystream", &[("id", "mystream")])]
fn create_stream_with_optional_ttl(#[case] input: &str, #[case] expected: &[(&str, &str)]) {
    let args = match_pattern("create stream <id> [ttl <ttl>]", input).unwrap();
    assert_eq!(to_map(&args), map(expected));
}

#[rstest]
#[case::declared_order("send events partition 3 key user-1")]
#[case::reverse_order("send events key user-1 partition 3")]
fn optional_groups_in_any_order(#[case] input: &str) {
    let args = match_pattern("send <stream> [partition <p>] [key <k>]", input).unwrap();
    assert_eq!(
        to_map(&args),
        map(&[("stream", "events"), ("p", "3"), ("k", "user-1")])
    );
}

#[test]
fn absent_optional_delimiter_keeps_mandatory_bindings() {
    let args = match_pattern(
        "truncate stream <id> [before <offset>]",
        "truncate stream logs",
    )
    .unwrap();
    assert_eq!(to_map(&args), map(&[("id", "logs")]));
}

#[test]
fn typed_access_to_optional_value() {
    let args = match_pattern("create stream <id> [ttl <ttl>]", "create stream s ttl 90").unwrap();
    assert_eq!(args.get_parsed_optional::<u64>("ttl"), Ok(Some(90)));

    let args = match_pattern("create stream <id> [ttl <ttl>]", "create stream s").unwrap();
    assert_eq!(args.get_parsed_optional::<u64>("ttl"), Ok(None));
    assert_eq!(args.get_or("ttl", "forever"), "forever");
}

// ========================================
// Purity
// ========================================

#[test]
fn parsed_pattern_is_reusable_and_idempotent() {
    let pattern = Pattern::parse("send <stream> [partition <p>] [key <k>]").unwrap();
    let inputs = [
        "send a key x partition 1",
        "send b",
        "send a key x partition 1",
    ];
    let results: Vec<_> = inputs.iter().map(|i| pattern.match_input(i)).collect();
    assert_eq!(results[0], results[2]);
    assert_eq!(to_map(results[1].as_ref().unwrap()), map(&[("stream", "b")]));
}

#[test]
fn matching_from_many_threads() {
    let pattern = Pattern::parse("create stream <id> [ttl <ttl>]").unwrap();
    std::thread::scope(|scope| {
        for n in 0..4 {
            let pattern = &pattern;
            scope.spawn(move || {
                let input = format!("create stream s{n} ttl {n}");
                let args = pattern.match_input(&input).unwrap();
                assert_eq!(args.get("id"), Ok(format!("s{n}").as_str()));
            });
        }
    });
}

#[test]
fn mismatch_exposes_pattern_for_users() {
    let pattern = Pattern::parse("delete stream <id>").unwrap();
    let err = pattern.match_input("delete table t").unwrap_err();
    assert_eq!(
        err,
        MatchError::PatternMismatch {
            pattern: "delete stream <id>".to_string()
        }
    );
    assert_eq!(err.pattern(), "delete stream <id>");
}
