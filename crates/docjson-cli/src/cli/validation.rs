/// Parse `--max-parallel`: a positive integer.
pub fn parse_parallelism(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("max-parallel must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a positive integer", s)),
    }
}

/// Parse `--separator`: any non-empty string, with `\n` and `\t` escapes
/// expanded.
pub fn parse_separator(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("separator cannot be empty".to_string());
    }
    Ok(s.replace("\\n", "\n").replace("\\t", "\t"))
}
