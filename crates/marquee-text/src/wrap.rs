#![forbid(unsafe_code)]

//! Width-measured word wrapping with grapheme-safe hard splits.
//!
//! Wrapping is greedy: words accumulate onto the current line until the
//! next word would exceed the limits, then the line is flushed. A single
//! token wider than the limits is hard-split at grapheme boundaries (an
//! emoji or ZWJ sequence is never broken apart), and the tail of the
//! split rejoins the greedy flow so following words can share its line.
//!
//! Limits combine a measured pixel budget with an optional grapheme
//! count cap; a line is full when either is exceeded.

use unicode_segmentation::UnicodeSegmentation;

/// Limits for one wrapped line.
#[derive(Debug, Clone, Copy)]
pub struct WrapLimits {
    /// Maximum measured width in pixels.
    pub max_px: u32,
    /// Optional cap on graphemes per line.
    pub max_graphemes: Option<usize>,
}

impl WrapLimits {
    fn admits(&self, candidate: &str, measure: &impl Fn(&str) -> u32) -> bool {
        if measure(candidate) > self.max_px {
            return false;
        }
        match self.max_graphemes {
            Some(cap) => candidate.graphemes(true).count() <= cap,
            None => true,
        }
    }
}

/// Wrap one source line (no `'\n'` inside) into display lines.
///
/// Total over all inputs: blank input produces a single empty line, and
/// every output line carries at least one grapheme otherwise.
pub fn wrap_line(line: &str, limits: WrapLimits, measure: &impl Fn(&str) -> u32) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if limits.admits(&candidate, measure) {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if limits.admits(word, measure) {
            current = word.to_string();
        } else {
            current = hard_split(word, limits, measure, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split an overlong token at grapheme boundaries, pushing full chunks
/// into `out` and returning the unflushed tail.
fn hard_split(
    word: &str,
    limits: WrapLimits,
    measure: &impl Fn(&str) -> u32,
    out: &mut Vec<String>,
) -> String {
    let mut chunk = String::new();
    for grapheme in word.graphemes(true) {
        let mut candidate = chunk.clone();
        candidate.push_str(grapheme);
        if limits.admits(&candidate, measure) || chunk.is_empty() {
            // A lone grapheme over the budget still gets its own line.
            chunk = candidate;
        } else {
            out.push(chunk);
            chunk = grapheme.to_string();
        }
    }
    chunk
}
