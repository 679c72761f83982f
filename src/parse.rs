// Loose scalar parsing for variable values. Each parser returns None when the
// text is not a value of its kind; the caller decides what that means.

pub fn parse_int(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" => return Some(true),
        "0" => return Some(false),
        _ => {}
    }

    match s.to_ascii_lowercase().as_str() {
        "t" | "true" => Some(true),
        "f" | "false" => Some(false),
        _ => None,
    }
}

/// Parses a 64-bit float. Finite literals too large to represent are rejected
/// rather than silently becoming infinity.
pub fn parse_float(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    if v.is_infinite() && !spells_infinity(s) {
        return None;
    }
    Some(v)
}

fn spells_infinity(s: &str) -> bool {
    let unsigned = s.trim_start_matches(&['+', '-'][..]);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
