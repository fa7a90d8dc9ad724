use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without a tilde prefix, and `~user` forms, are returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Render lines with a trailing newline after each entry; empty input stays empty.
pub fn render_lines<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for entry in entries {
        text.push_str(entry.as_ref());
        text.push('\n');
    }
    text
}
