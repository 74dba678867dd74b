//! Text measurement, truncation, and greedy line wrapping.

use super::types::{TextElement, Tspan};

/// Vertical distance between wrapped lines, in ems.
pub const LINE_HEIGHT_EM: f64 = 1.1;

/// Measures the rendered width of a single line of text, in pixels.
///
/// Plotters cannot measure text without a registered font, so layout goes
/// through this trait; plug in a real shaper where one is available.
pub trait TextMeasurer {
    fn width_px(&self, text: &str, font_px: u32) -> f64;
}

/// Average-glyph heuristic: every char is 0.6em wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl TextMeasurer for HeuristicMeasurer {
    fn width_px(&self, text: &str, font_px: u32) -> f64 {
        estimate_text_width_px(text, font_px) as f64
    }
}

impl<F: Fn(&str, u32) -> f64> TextMeasurer for F {
    fn width_px(&self, text: &str, font_px: u32) -> f64 {
        self(text, font_px)
    }
}

/// Heuristic: estimate pixel width of text.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    (text.chars().count() as u32 * font_px * 6).div_ceil(10)
}

/// Greedily break `text` into lines no wider than `width_px`.
///
/// Words are split on whitespace and never broken; a word wider than
/// `width_px` sits alone on its own line. Whitespace-only input yields no lines.
pub fn wrap_lines(
    text: &str,
    width_px: f64,
    font_px: u32,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line: Vec<&str> = Vec::new();
    for word in text.split_whitespace() {
        line.push(word);
        if line.len() > 1 && measurer.width_px(&line.join(" "), font_px) > width_px {
            line.pop();
            lines.push(line.join(" "));
            line.clear();
            line.push(word);
        }
    }
    if !line.is_empty() {
        lines.push(line.join(" "));
    }
    lines
}

/// Reflow each node's text into tspans constrained to `width_px`.
///
/// Tspan `i` sits at `x = 0`, the node's `y`, and `dy = node.dy + i * 1.1` em.
/// The node's own text is cleared. Already-wrapped nodes are re-wrapped from
/// their current lines.
pub fn wrap(nodes: &mut [TextElement], width_px: f64, measurer: &dyn TextMeasurer) {
    for node in nodes.iter_mut() {
        let source = node.lines().join(" ");
        let lines = wrap_lines(&source, width_px, node.font_px, measurer);
        log::debug!("wrapped {:?} into {} lines", source, lines.len());
        node.tspans = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| Tspan {
                x: 0.0,
                y: node.y,
                dy: node.dy + i as f64 * LINE_HEIGHT_EM,
                text,
            })
            .collect();
        node.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: HeuristicMeasurer = HeuristicMeasurer;

    #[test]
    fn heuristic_width() {
        assert_eq!(estimate_text_width_px("abcde", 10), 30);
        assert_eq!(estimate_text_width_px("", 10), 0);
        assert_eq!(estimate_text_width_px("abc", 7), 13);
    }

    #[test]
    fn text_exactly_as_wide_as_the_limit_stays_on_one_line() {
        // "ab cd" is 5 chars * 6px = 30px at font 10.
        assert_eq!(wrap_lines("ab cd", 30.0, 10, &M), vec!["ab cd"]);
        assert_eq!(wrap_lines("ab cd", 29.0, 10, &M), vec!["ab", "cd"]);
    }

    #[test]
    fn narrow_width_puts_each_word_on_its_own_line() {
        let text = "alpha beta gamma delta";
        let lines = wrap_lines(text, 1.0, 14, &M);
        assert_eq!(lines, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn wide_width_keeps_one_line() {
        let text = "alpha  beta\tgamma";
        let lines = wrap_lines(text, 10_000.0, 14, &M);
        assert_eq!(lines, vec!["alpha beta gamma"]);
    }

    #[test]
    fn greedy_break() {
        // 10px per char at font 10 with a width-per-char closure.
        let per_char = |s: &str, _: u32| s.chars().count() as f64 * 10.0;
        let lines = wrap_lines("aa bb cc dddd e", 50.0, 10, &per_char);
        assert_eq!(lines, vec!["aa bb", "cc", "dddd", "e"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_lines("   ", 100.0, 14, &M).is_empty());
    }

    #[test]
    fn wrap_emits_tspans_with_em_offsets() {
        let mut node = TextElement::new(5.0, 30.0, "one two three");
        node.dy = 0.35;
        let mut nodes = [node];
        wrap(&mut nodes, 1.0, &M);
        let n = &nodes[0];
        assert!(n.text.is_empty());
        assert_eq!(n.tspans.len(), 3);
        for (i, t) in n.tspans.iter().enumerate() {
            assert_eq!(t.x, 0.0);
            assert_eq!(t.y, 30.0);
            assert!((t.dy - (0.35 + i as f64 * LINE_HEIGHT_EM)).abs() < 1e-9);
        }
        assert_eq!(n.lines(), vec!["one", "two", "three"]);
    }
}
