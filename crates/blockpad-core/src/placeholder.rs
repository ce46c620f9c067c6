//! Placeholder visibility for block surfaces.
//!
//! A block shows its placeholder hint when its markup contains nothing but
//! line breaks and whitespace. Browsers leave a lone `<br>` behind when the
//! last character of a `contenteditable` is deleted, so that case must still
//! count as empty.

/// Whether a block surface currently shows its placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderState {
    /// Content is effectively empty; placeholder is shown.
    Empty,
    /// Content has visible text; placeholder is hidden.
    HasContent,
}

impl PlaceholderState {
    /// Compute the state for the given markup.
    pub fn for_content(content: &str) -> Self {
        if is_visually_empty(content) {
            Self::Empty
        } else {
            Self::HasContent
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Line-break tags that do not count as content.
const LINE_BREAK_TAGS: [&str; 3] = ["<br>", "<br/>", "<br />"];

/// Strip line-break markup and surrounding whitespace; empty result means empty.
pub fn is_visually_empty(content: &str) -> bool {
    strip_line_breaks(content).trim().is_empty()
}

/// Remove every line-break tag (ASCII case-insensitive) from `content`.
fn strip_line_breaks(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    'outer: while !rest.is_empty() {
        if rest.starts_with('<') {
            for tag in LINE_BREAK_TAGS {
                if rest.len() >= tag.len()
                    && rest.is_char_boundary(tag.len())
                    && rest[..tag.len()].eq_ignore_ascii_case(tag)
                {
                    rest = &rest[tag.len()..];
                    continue 'outer;
                }
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        assert!(is_visually_empty(""));
        assert!(is_visually_empty("   "));
        assert!(is_visually_empty("<br>"));
        assert!(is_visually_empty("<br><br>\n"));
        assert!(is_visually_empty(" <BR/> <br /> "));
    }

    #[test]
    fn test_non_empty_content() {
        assert!(!is_visually_empty("hello"));
        assert!(!is_visually_empty("<br>x"));
        assert!(!is_visually_empty("<b>bold</b>"));
        // Other tags are content, even if they render nothing.
        assert!(!is_visually_empty("<div></div>"));
    }

    #[test]
    fn test_multibyte_content() {
        assert!(!is_visually_empty("<br>你好"));
        assert!(!is_visually_empty("<ü"));
    }

    #[test]
    fn test_state_for_content() {
        assert_eq!(PlaceholderState::for_content("<br>"), PlaceholderState::Empty);
        assert_eq!(
            PlaceholderState::for_content("hello"),
            PlaceholderState::HasContent
        );
        assert!(PlaceholderState::Empty.is_visible());
        assert!(!PlaceholderState::HasContent.is_visible());
    }
}
