use regex::Regex;
use std::sync::LazyLock;

// CSI sequences (ESC [ ... final byte) used for styling and cursor movement.
static ANSI_CSI: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;?]*[ -/]*[@-~]").ok());

/// Make untrusted feed text safe to print: strip ANSI escapes and control
/// characters, and fold all whitespace runs (newlines included) to one space.
pub fn sanitize_for_terminal(s: &str) -> String {
    let no_ansi = match ANSI_CSI.as_ref() {
        Some(re) => re.replace_all(s, ""),
        None => s.into(),
    };

    let mut cleaned = String::with_capacity(no_ansi.len());
    for ch in no_ansi.chars() {
        if ch.is_whitespace() {
            cleaned.push(' ');
        } else if !ch.is_control() {
            cleaned.push(ch);
        }
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
