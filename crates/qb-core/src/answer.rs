//! Answer segmentation.
//!
//! Answers are free text that may embed fenced code blocks:
//!
//! ````text
//! Binary search halves the interval each step.
//! ```rust
//! fn search(xs: &[i32], t: i32) -> Option<usize> { xs.binary_search(&t).ok() }
//! ```
//! ````
//!
//! [`segment_answer`] splits such a body into ordered text and code segments
//! so a renderer can highlight the code parts.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language label used when a fence carries none.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```([\w-]+)?\n((?s:.*?))```").expect("fence pattern is valid")
});

/// One piece of a segmented answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerSegment {
    Text { content: String },
    Code { language: String, content: String },
}

/// Split an answer into text and fenced code segments, in order.
///
/// Text between fences is kept verbatim. Code content is trimmed. An
/// unterminated fence is left as text.
#[must_use]
pub fn segment_answer(text: &str) -> Vec<AnswerSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            segments.push(AnswerSegment::Text {
                content: text[last..whole.start()].to_string(),
            });
        }
        let language = caps
            .get(1)
            .map_or(DEFAULT_LANGUAGE, |m| m.as_str())
            .to_string();
        let content = caps
            .get(2)
            .map_or("", |m| m.as_str())
            .trim()
            .to_string();
        segments.push(AnswerSegment::Code { language, content });
        last = whole.end();
    }

    if last < text.len() {
        segments.push(AnswerSegment::Text {
            content: text[last..].to_string(),
        });
    }

    segments
}

/// The part of an answer before its first blank line.
#[must_use]
pub fn first_paragraph(text: &str) -> &str {
    text.split("\n\n").next().unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(s: &str) -> AnswerSegment {
        AnswerSegment::Text {
            content: s.to_string(),
        }
    }

    fn code(lang: &str, s: &str) -> AnswerSegment {
        AnswerSegment::Code {
            language: lang.to_string(),
            content: s.to_string(),
        }
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(segment_answer("just words"), vec![text("just words")]);
    }

    #[test]
    fn empty_answer_has_no_segments() {
        assert!(segment_answer("").is_empty());
    }

    #[test]
    fn code_block_between_text() {
        let body = "Before\n```rust\nfn main() {}\n```\nAfter";
        assert_eq!(
            segment_answer(body),
            vec![text("Before\n"), code("rust", "fn main() {}"), text("\nAfter")]
        );
    }

    #[test]
    fn missing_language_defaults_to_plaintext() {
        let body = "```\n  indented  \n```";
        assert_eq!(segment_answer(body), vec![code("plaintext", "indented")]);
    }

    #[test]
    fn hyphenated_language_label() {
        let body = "```objective-c\n[obj run];\n```";
        assert_eq!(segment_answer(body), vec![code("objective-c", "[obj run];")]);
    }

    #[test]
    fn multiple_blocks_keep_order() {
        let body = "```js\na()\n```\nthen\n```py\nb()\n```";
        assert_eq!(
            segment_answer(body),
            vec![code("js", "a()"), text("\nthen\n"), code("py", "b()")]
        );
    }

    #[test]
    fn unterminated_fence_stays_text() {
        let body = "intro\n```js\nnever closed";
        assert_eq!(segment_answer(body), vec![text(body)]);
    }

    #[test]
    fn first_paragraph_stops_at_blank_line() {
        assert_eq!(first_paragraph("one\ntwo\n\nthree"), "one\ntwo");
        assert_eq!(first_paragraph("single"), "single");
    }
}
