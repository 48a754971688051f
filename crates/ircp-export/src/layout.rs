//! Minimal A4 text layout on top of lopdf content operations: wrapped
//! paragraphs, bullets, automatic page breaks and a footer on every page.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

const MM: f32 = 72.0 / 25.4;
pub const MARGIN: f32 = 14.0 * MM;

const FOOTER_SIZE: f32 = 8.0;
const FOOTER_BAND: f32 = 18.0;
const LEADING: f32 = 1.35;
/// Average Helvetica advance width, in em.
const AVG_CHAR_EM: f32 = 0.52;
const BULLET_INDENT: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name the page dictionary registers the font under.
    pub fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }
}

/// Replacement text for characters the standard fonts cannot draw.
fn fallback(c: char) -> Option<&'static str> {
    Some(match c {
        '●' => "[Shutdown]",
        '◯' => "[Holding in]",
        '◉' => "[Activated]",
        '◑' => "[Tipping point]",
        '⊜' => "[Steady]",
        '⊕' => "[Connected]",
        '→' => "->",
        '≠' => "!=",
        _ => return None,
    })
}

/// WinAnsi byte for the handful of non-Latin-1 characters it covers.
fn win_ansi_extra(c: char) -> Option<u8> {
    Some(match c {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => return None,
    })
}

/// Encode `text` for a WinAnsiEncoding Type1 font. State glyphs become
/// bracketed names; anything else unsupported becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        if let Some(byte) = win_ansi_extra(c) {
            out.push(byte);
        } else if let Some(replacement) = fallback(c) {
            out.extend_from_slice(replacement.as_bytes());
        } else if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) {
            out.push(c as u32 as u8);
        } else {
            out.push(b'?');
        }
    }
    out
}

fn max_chars(size: f32, width: f32) -> usize {
    ((width / (size * AVG_CHAR_EM)) as usize).max(8)
}

/// Greedy word wrap by estimated width. Explicit newlines start new lines;
/// words longer than a line are split.
pub fn wrap(text: &str, size: f32, width: f32) -> Vec<String> {
    let limit = max_chars(size, width);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > limit {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(limit);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let word: String = word.into_iter().collect();
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > limit && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    lines
}

/// Accumulates page content streams top to bottom.
pub struct PageBuilder {
    pages: Vec<Vec<Operation>>,
    y: f32,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: A4_HEIGHT - MARGIN,
        }
    }

    fn content_width() -> f32 {
        A4_WIDTH - 2.0 * MARGIN
    }

    fn bottom() -> f32 {
        MARGIN + FOOTER_BAND
    }

    fn break_if_needed(&mut self, height: f32) {
        if self.y - height < Self::bottom() {
            self.pages.push(Vec::new());
            self.y = A4_HEIGHT - MARGIN;
        }
    }

    fn draw(&mut self, x: f32, font: Font, size: f32, text: &str) {
        let height = size * LEADING;
        self.break_if_needed(height);
        self.y -= height;
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.extend(text_ops(x, y, font, size, text));
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    pub fn paragraph(&mut self, text: &str, font: Font, size: f32) {
        for line in wrap(text, size, Self::content_width()) {
            self.draw(MARGIN, font, size, &line);
        }
    }

    pub fn bullet(&mut self, text: &str, size: f32) {
        let width = Self::content_width() - BULLET_INDENT;
        for (i, line) in wrap(text, size, width).into_iter().enumerate() {
            if i == 0 {
                self.draw(MARGIN, Font::Regular, size, &format!("• {line}"));
            } else {
                self.draw(MARGIN + BULLET_INDENT, Font::Regular, size, &line);
            }
        }
    }

    /// Close the document: stamps `footer` at the bottom of every page.
    pub fn finish(mut self, footer: &str) -> Vec<Vec<Operation>> {
        for page in &mut self.pages {
            page.extend(text_ops(MARGIN, MARGIN, Font::Regular, FOOTER_SIZE, footer));
        }
        self.pages
    }
}

fn text_ops(x: f32, y: f32, font: Font, size: f32, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.resource().into(), size.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_typographic_punctuation() {
        assert_eq!(encode_win_ansi("I’m — ok"), b"I\x92m \x97 ok".to_vec());
        assert_eq!(encode_win_ansi("• café"), b"\x95 caf\xe9".to_vec());
    }

    #[test]
    fn state_glyphs_become_names() {
        assert_eq!(encode_win_ansi("◉ + ●"), b"[Activated] + [Shutdown]".to_vec());
        assert_eq!(encode_win_ansi("Meaning → Next"), b"Meaning -> Next".to_vec());
        assert_eq!(encode_win_ansi("漢"), b"?".to_vec());
    }

    #[test]
    fn wrap_respects_limit_and_newlines() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap(text, 10.0, 60.0);
        let limit = max_chars(10.0, 60.0);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= limit));
        assert_eq!(lines.join(" "), text);

        assert_eq!(wrap("a\nb", 10.0, 500.0), vec!["a", "b"]);
        assert_eq!(wrap("", 10.0, 500.0), vec![""]);
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let word = "x".repeat(50);
        let lines = wrap(&word, 10.0, 60.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn long_content_breaks_pages() {
        let mut builder = PageBuilder::new();
        for i in 0..200 {
            builder.paragraph(&format!("line {i}"), Font::Regular, 11.0);
        }
        assert!(builder.page_count() > 1);
        let pages = builder.finish("footer");
        assert!(pages.iter().all(|ops| ops.len() >= 5));
    }
}
