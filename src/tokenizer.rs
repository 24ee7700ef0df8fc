use crate::errors::MeldError;
use std::path::Path;
use tracing::{debug, trace};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Quote {
    None,
    Single,
    Double,
}

/// Splits one input string into file path tokens using POSIX shell quoting.
///
/// A leading unquoted `~` expands to the current user's home directory.
/// Empty tokens such as `''` name no file and are dropped.
pub fn split_arguments(input: &str) -> Result<Vec<String>, MeldError> {
    let home = dirs::home_dir();
    split_arguments_with_home(input, home.as_deref())
}

/// Same as [`split_arguments`], with an explicit home directory for `~`.
/// When `home` is `None` a leading `~` is kept literally.
pub fn split_arguments_with_home(
    input: &str,
    home: Option<&Path>,
) -> Result<Vec<String>, MeldError> {
    debug!("Tokenizing input of {} bytes", input.len());
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.peek() {
                    Some(&next) if next == '"' || next == '\\' => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push(c),
                },
                _ => current.push(c),
            },
            Quote::None => match c {
                c if is_separator(c) => {
                    if in_word {
                        push_token(&mut tokens, std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => {
                    let escaped = chars.next().ok_or(MeldError::TrailingEscape)?;
                    current.push(escaped);
                    in_word = true;
                }
                '~' if !in_word && ends_tilde_prefix(chars.peek().copied()) => {
                    match home {
                        Some(home) => current.push_str(&home.to_string_lossy()),
                        None => current.push('~'),
                    }
                    in_word = true;
                }
                _ => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    match quote {
        Quote::Single => return Err(MeldError::UnclosedQuote('\'')),
        Quote::Double => return Err(MeldError::UnclosedQuote('"')),
        Quote::None => {}
    }
    if in_word {
        push_token(&mut tokens, current);
    }

    debug!("Tokenized {} path(s)", tokens.len());
    Ok(tokens)
}

fn ends_tilde_prefix(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c == '/' || is_separator(c),
    }
}

// Same word separators as shlex; other Unicode spaces stay inside a token.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn push_token(tokens: &mut Vec<String>, token: String) {
    if token.is_empty() {
        trace!("Dropping empty token");
        return;
    }
    trace!("Token: {}", token);
    tokens.push(token);
}
