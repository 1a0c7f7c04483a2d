use cmdpat::command::{Command, CommandError, CommandMatch};
use cmdpat::config::parse_config;
use indoc::indoc;
use rstest::rstest;

use super::{map, to_map};

#[rstest]
#[case::first_command(0, "create stream orders ttl 30", &[("stream-id", "orders"), ("ttl", "30")])]
#[case::second_command(1, "describe stream orders", &[("stream-id", "orders")])]
fn configured_command_extracts_arguments(
    #[case] index: usize,
    #[case] input: &str,
    #[case] expected: &[(&str, &str)],
) {
    let config = parse_config(indoc! {"
        commands:
          - pattern: 'create stream <stream-id> [ttl <ttl>]'
            description: Create a stream
          - pattern: 'describe stream <stream-id>'
    "})
    .unwrap();

    let command = &config.commands()[index];
    let command_match = CommandMatch::new(command, input);
    assert_eq!(command_match.command().pattern(), command.pattern);
    assert_eq!(to_map(&command_match.arguments().unwrap()), map(expected));
}

#[test]
fn configured_command_reports_expected_format() {
    let config = parse_config("commands:\n  - pattern: 'describe stream <stream-id>'\n").unwrap();
    let err = CommandMatch::new(&config.commands()[0], "describe stream")
        .arguments()
        .unwrap_err();
    assert!(matches!(err, CommandError::Mismatch(_)));
    assert_eq!(err.to_string(), "expected format: describe stream <stream-id>");
}
