mod command_match_flow;
mod config_to_completion;
mod pattern_matching;

use std::collections::HashMap;

use cmdpat::command::Arguments;

/// Collect bound arguments into an owned map for comparison.
fn to_map(arguments: &Arguments) -> HashMap<String, String> {
    arguments
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
