pub mod chat;
pub mod modals;
pub mod results;
pub mod search;

use unicode_width::UnicodeWidthChar;

/// Greedy word wrap to a display width. Long unbreakable words are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for word in raw_line.split_whitespace() {
            let word_width: usize = word.chars().filter_map(|c| c.width()).sum();
            if current_width == 0 {
                if word_width <= width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    // Hard-split an overlong word.
                    let mut piece_width = 0;
                    for c in word.chars() {
                        let w = c.width().unwrap_or(0);
                        if piece_width + w > width {
                            lines.push(std::mem::take(&mut current));
                            piece_width = 0;
                        }
                        current.push(c);
                        piece_width += w;
                    }
                    current_width = piece_width;
                }
            } else if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                if word_width <= width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let mut piece_width = 0;
                    for c in word.chars() {
                        let w = c.width().unwrap_or(0);
                        if piece_width + w > width {
                            lines.push(std::mem::take(&mut current));
                            piece_width = 0;
                        }
                        current.push(c);
                        piece_width += w;
                    }
                    current_width = piece_width;
                }
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        out.push(c);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn splits_overlong_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Acme Industrial", 8), "Acme In…");
        assert_eq!(truncate("Acme", 8), "Acme");
    }
}
