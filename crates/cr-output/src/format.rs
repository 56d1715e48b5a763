//! `{name}` placeholder substitution.
//!
//! `{{` and `}}` produce literal braces. Any placeholder without a matching
//! parameter, or an unbalanced brace, is an error.

use crate::params::Params;

/// Why a template could not be filled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A placeholder has no matching parameter.
    #[error("no value for placeholder '{0}'")]
    UnknownPlaceholder(String),

    /// A `{` is never closed.
    #[error("unclosed placeholder at byte {0}")]
    Unclosed(usize),

    /// A lone `}` outside any placeholder.
    #[error("stray '}}' at byte {0}")]
    StrayBrace(usize),
}

/// Fill every placeholder in `template` from `params`.
pub fn substitute(template: &str, params: &Params) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, ch)) => name.push(ch),
                        None => return Err(FormatError::Unclosed(start)),
                    }
                }
                let value = params
                    .get(&name)
                    .ok_or(FormatError::UnknownPlaceholder(name))?;
                out.push_str(value);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::StrayBrace(start));
                }
                out.push('}');
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_placeholders() {
        let p = Params::new().with("name", "Ayla").with("total", 9);
        assert_eq!(
            substitute("{name} rolls {total}.", &p).unwrap(),
            "Ayla rolls 9."
        );
    }

    #[test]
    fn repeated_placeholder() {
        let p = Params::new().with("d", 4);
        assert_eq!(substitute("{d}+{d}", &p).unwrap(), "4+4");
    }

    #[test]
    fn escaped_braces() {
        let p = Params::new().with("x", 1);
        assert_eq!(substitute("{{x}} = {x}", &p).unwrap(), "{x} = 1");
    }

    #[test]
    fn missing_parameter() {
        let p = Params::new();
        assert_eq!(
            substitute("hello {name}", &p),
            Err(FormatError::UnknownPlaceholder("name".to_string()))
        );
    }

    #[test]
    fn unbalanced_braces() {
        let p = Params::new().with("a", 1);
        assert_eq!(substitute("oops {a", &p), Err(FormatError::Unclosed(5)));
        assert_eq!(substitute("oops }", &p), Err(FormatError::StrayBrace(5)));
    }

    #[test]
    fn unicode_passes_through() {
        let p = Params::new().with("n", "骰子");
        assert_eq!(substitute("«{n}» ✓", &p).unwrap(), "«骰子» ✓");
    }
}
