//! Terminal layout for narration.

use std::io::{self, Write};

use colored::Colorize;
use ra_fiction::Narration;

/// Greedy word wrap. Existing line breaks are kept; each line is wrapped on
/// its own so headings and underlines survive.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut column = 0;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            if column > 0 && column + 1 + len > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += len;
        }
    }

    out
}

/// Print each paragraph wrapped, with a blank line before it.
pub fn print_narration<W: Write>(out: &mut W, narration: &Narration, width: usize) -> io::Result<()> {
    for paragraph in narration.paragraphs() {
        let text = wrap(paragraph, width);
        if paragraph == ra_fiction::narrator::THE_END {
            writeln!(out, "\n{}", text.bold())?;
        } else {
            writeln!(out, "\n{text}")?;
        }
    }
    out.flush()
}

/// Print a soft error the way narration is printed, highlighted.
pub fn print_soft_error<W: Write>(out: &mut W, message: &str, width: usize) -> io::Result<()> {
    writeln!(out, "\n{}", wrap(message, width).yellow())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_long_lines() {
        let wrapped = wrap("one two three four five", 9);
        assert_eq!(wrapped, "one two\nthree\nfour five");
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 9);
        }
    }

    #[test]
    fn wrap_keeps_line_breaks() {
        let text = "Glimmering Pool\n---------------\nWater mirrors the sky.";
        assert_eq!(wrap(text, 80), text);
    }

    #[test]
    fn wrap_collapses_runs_of_spaces() {
        assert_eq!(wrap("a   b", 80), "a b");
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        assert_eq!(wrap("a supercalifragilistic b", 5), "a\nsupercalifragilistic\nb");
    }

    #[test]
    fn narration_paragraphs_are_spaced() {
        colored::control::set_override(false);
        let mut narration = Narration::from("First.");
        narration.say("Second.");
        let mut out = Vec::new();
        print_narration(&mut out, &narration, 80).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nFirst.\n\nSecond.\n");
    }
}
