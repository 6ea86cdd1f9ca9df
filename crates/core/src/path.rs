//! Path expansion for user-supplied source locations.

use std::path::{Component, Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}`, make the result absolute and strip
/// `.`/`..` components lexically. Never fails; unresolvable variables are
/// left as written.
pub fn expand(raw: &str) -> PathBuf {
    let expanded = expand_vars(&expand_home(raw));
    absolutize(Path::new(&expanded))
}

fn expand_home(raw: &str) -> String {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return raw.to_string(),
    };
    match dirs::home_dir() {
        Some(home) => format!("{}{}", home.display(), rest),
        None => raw.to_string(),
    }
}

fn expand_vars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let braced = matches!(chars.peek(), Some((_, '{')));
        let start = if braced {
            chars.next();
            i + 2
        } else {
            i + 1
        };

        let mut end = start;
        while let Some(&(j, n)) = chars.peek() {
            if n.is_ascii_alphanumeric() || n == '_' {
                end = j + n.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let closed = !braced || matches!(chars.peek(), Some((_, '}')));
        if braced && closed {
            chars.next();
        }

        let name = &raw[start..end];
        match std::env::var(name) {
            Ok(value) if !name.is_empty() && closed => out.push_str(&value),
            _ => {
                let literal_end = if braced && closed { end + 1 } else { end };
                out.push_str(&raw[i..literal_end]);
            }
        }
    }

    out
}

fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    normalize(&joined)
}

/// Lexical normalization: drops `.` and folds `..` into its parent.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
