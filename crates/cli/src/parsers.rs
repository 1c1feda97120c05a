use count_uniq_engine::cap::MaxLines;

/// Parse the `--max` value (`100`, `5k`, `2M`; empty disables the cap).
///
/// # Errors
/// Returns an error if the value is neither a number nor a number with a
/// `K`/`M` suffix.
pub fn parse_max_lines(s: &str) -> Result<MaxLines, String> {
    s.parse::<MaxLines>().map_err(|err| err.to_string())
}
