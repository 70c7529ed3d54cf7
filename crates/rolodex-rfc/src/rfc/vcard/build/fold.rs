//! vCard line folding.

use crate::rfc::vcard::core::{VCardError, VCardResult};

/// Maximum line length in octets (not characters) per RFC 6350.
pub const MAX_LINE_OCTETS: usize = 75;

/// Smallest usable limit: a continuation line must fit its leading space and
/// one four-octet UTF-8 sequence.
pub const MIN_FOLD_LIMIT: usize = 6;

const LINE_BREAKS: [&str; 6] = ["\r\n", "\n", "\r", "\u{85}", "\u{2028}", "\u{2029}"];

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space.
/// Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    fold_at(line, MAX_LINE_OCTETS)
}

/// Folds `text` so no physical line exceeds `limit` octets.
///
/// A trailing line break is not folded; it is re-appended after the last
/// physical line.
///
/// ## Errors
/// Returns [`VCardError::FoldLimit`] if `limit` is below [`MIN_FOLD_LIMIT`].
pub fn fold(text: &str, limit: usize) -> VCardResult<String> {
    if limit < MIN_FOLD_LIMIT {
        return Err(VCardError::FoldLimit {
            limit,
            min: MIN_FOLD_LIMIT,
        });
    }
    Ok(fold_at(text, limit))
}

fn split_terminator(text: &str) -> (&str, &str) {
    LINE_BREAKS
        .iter()
        .find_map(|brk| {
            text.strip_suffix(brk)
                .map(|body| (body, &text[body.len()..]))
        })
        .unwrap_or((text, ""))
}

fn fold_at(text: &str, limit: usize) -> String {
    let (body, terminator) = split_terminator(text);

    if body.len() <= limit {
        return text.to_string();
    }

    let mut result = String::with_capacity(body.len() + body.len() / (limit - 1) * 3);
    // Octets on the current physical line, including a continuation space.
    let mut current_len = 0;

    for c in body.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > limit {
            result.push_str("\r\n ");
            current_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result.push_str(terminator);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::unfold;

    fn physical_lines(folded: &str) -> Vec<&str> {
        folded.trim_end_matches("\r\n").split("\r\n").collect()
    }

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);
        assert!(folded.contains("\r\n "));

        let lines = physical_lines(&folded);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], format!(" {}", "X".repeat(5)));
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30)); // 5 + 90 bytes
        let folded = fold_line(&line);

        for part in physical_lines(&folded) {
            assert!(part.len() <= MAX_LINE_OCTETS);
            assert!(part.trim_start().chars().all(|c| c == '日' || "NOTE:".contains(c)));
        }
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn fold_multiple_times() {
        let line = "X".repeat(200);
        let folded = fold_line(&line);

        let fold_count = folded.matches("\r\n ").count();
        assert_eq!(fold_count, 2);
        assert!(physical_lines(&folded).iter().all(|l| l.len() <= 75));
    }

    #[test]
    fn trailing_terminator_is_not_folded() {
        let line = format!("{}\r\n", "Y".repeat(75));
        assert_eq!(fold_line(&line), line);

        let long = format!("{}\r\n", "Y".repeat(76));
        let folded = fold_line(&long);
        assert!(folded.ends_with("Y\r\n"));
        assert!(!folded.ends_with("\r\n \r\n"));
        assert_eq!(folded.matches("\r\n").count(), 2);
    }

    #[test]
    fn small_limits() {
        assert!(fold("abc", 5).is_err());

        let text = "😀😀😀aé";
        let folded = fold(text, 6).unwrap();
        for line in physical_lines(&folded) {
            assert!(line.len() <= 6, "{line:?}");
        }
        assert_eq!(unfold(&folded), text);
    }

    #[test]
    fn unfold_reverses_fold_for_many_limits() {
        let samples = [
            String::new(),
            "plain ascii text that goes on and on and on and on and on and on and on".to_string(),
            "Ünïcödé ÷ 漢字かな交じり文 😀😃😄 mixed with ascii".repeat(4),
            format!("{}\r\n", "z".repeat(300)),
        ];

        for sample in &samples {
            for limit in MIN_FOLD_LIMIT..=80 {
                let folded = fold(sample, limit).unwrap();
                assert_eq!(&unfold(&folded), sample, "limit {limit}");
                for line in physical_lines(&folded) {
                    assert!(line.len() <= limit, "limit {limit}: {line:?}");
                }
            }
        }
    }
}
