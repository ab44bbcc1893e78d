//! Block letter font for the nulai center title.

/// Height of every glyph in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Width of the blank glyph used for spaces and unsupported characters.
pub const BLANK_WIDTH: usize = 4;

type Glyph = [&'static str; GLYPH_HEIGHT];

const BLANK: Glyph = ["    ", "    ", "    ", "    ", "    ", "    ", "    "];

const LETTER_A: Glyph = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

const LETTER_B: Glyph = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
];

const LETTER_C: Glyph = [
    " ████ ",
    "██  ██",
    "██    ",
    "██    ",
    "██    ",
    "██  ██",
    " ████ ",
];

const LETTER_D: Glyph = [
    "█████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "█████ ",
];

const LETTER_E: Glyph = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

const LETTER_F: Glyph = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██    ",
];

const LETTER_G: Glyph = [
    " ████ ",
    "██  ██",
    "██    ",
    "██ ███",
    "██  ██",
    "██  ██",
    " █████",
];

const LETTER_H: Glyph = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

const LETTER_I: Glyph = [
    "████",
    " ██ ",
    " ██ ",
    " ██ ",
    " ██ ",
    " ██ ",
    "████",
];

const LETTER_J: Glyph = [
    "  ████",
    "    ██",
    "    ██",
    "    ██",
    "    ██",
    "██  ██",
    " ████ ",
];

const LETTER_K: Glyph = [
    "██  ██",
    "██ ██ ",
    "████  ",
    "███   ",
    "████  ",
    "██ ██ ",
    "██  ██",
];

const LETTER_L: Glyph = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

const LETTER_M: Glyph = [
    "██   ██",
    "███ ███",
    "███████",
    "██ █ ██",
    "██   ██",
    "██   ██",
    "██   ██",
];

const LETTER_N: Glyph = [
    "██   ██",
    "███  ██",
    "████ ██",
    "██ ████",
    "██  ███",
    "██   ██",
    "██   ██",
];

const LETTER_O: Glyph = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

const LETTER_P: Glyph = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██    ",
    "██    ",
    "██    ",
];

const LETTER_Q: Glyph = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██ ███",
    "██  ██",
    " ███ █",
];

const LETTER_R: Glyph = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "████  ",
    "██ ██ ",
    "██  ██",
];

const LETTER_S: Glyph = [
    " ████ ",
    "██  ██",
    "██    ",
    " ████ ",
    "    ██",
    "██  ██",
    " ████ ",
];

const LETTER_T: Glyph = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

const LETTER_U: Glyph = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

const LETTER_V: Glyph = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
];

const LETTER_W: Glyph = [
    "██   ██",
    "██   ██",
    "██   ██",
    "██ █ ██",
    "███████",
    "███ ███",
    "██   ██",
];

const LETTER_X: Glyph = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    " ████ ",
    "██  ██",
    "██  ██",
];

const LETTER_Y: Glyph = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

const LETTER_Z: Glyph = [
    "██████",
    "    ██",
    "   ██ ",
    "  ██  ",
    " ██   ",
    "██    ",
    "██████",
];

const EXCLAMATION: Glyph = ["██", "██", "██", "██", "██", "  ", "██"];

const PERIOD: Glyph = ["  ", "  ", "  ", "  ", "  ", "  ", "██"];

const DASH: Glyph = ["    ", "    ", "    ", "████", "    ", "    ", "    "];

/// Look up the glyph for `ch`. Lowercase letters map to uppercase, anything
/// without a glyph renders as blank space.
fn glyph(ch: char) -> Glyph {
    match ch.to_ascii_uppercase() {
        'A' => LETTER_A,
        'B' => LETTER_B,
        'C' => LETTER_C,
        'D' => LETTER_D,
        'E' => LETTER_E,
        'F' => LETTER_F,
        'G' => LETTER_G,
        'H' => LETTER_H,
        'I' => LETTER_I,
        'J' => LETTER_J,
        'K' => LETTER_K,
        'L' => LETTER_L,
        'M' => LETTER_M,
        'N' => LETTER_N,
        'O' => LETTER_O,
        'P' => LETTER_P,
        'Q' => LETTER_Q,
        'R' => LETTER_R,
        'S' => LETTER_S,
        'T' => LETTER_T,
        'U' => LETTER_U,
        'V' => LETTER_V,
        'W' => LETTER_W,
        'X' => LETTER_X,
        'Y' => LETTER_Y,
        'Z' => LETTER_Z,
        '!' => EXCLAMATION,
        '.' => PERIOD,
        '-' => DASH,
        _ => BLANK,
    }
}

/// Build large block letter art for `text`.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, one per row, all of equal width.
/// Empty text yields rows of zero width.
pub fn build_title_art(text: &str) -> Vec<String> {
    let glyphs: Vec<Glyph> = text.chars().map(glyph).collect();
    let mut lines = Vec::with_capacity(GLYPH_HEIGHT);

    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (i, g) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(g[row]);
        }
        lines.push(line);
    }

    lines
}

/// Width in terminal columns of the art produced by [`build_title_art`].
pub fn title_art_width(text: &str) -> usize {
    let glyphs = text.chars().count();
    let letters: usize = text.chars().map(|c| glyph(c)[0].chars().count()).sum();
    letters + glyphs.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_have_equal_width() {
        let art = build_title_art("NULAI");
        assert_eq!(art.len(), GLYPH_HEIGHT);
        let width = art[0].chars().count();
        assert!(art.iter().all(|l| l.chars().count() == width));
        assert_eq!(width, title_art_width("NULAI"));
    }

    #[test]
    fn test_every_glyph_is_rectangular() {
        for ch in ('A'..='Z').chain(['!', '.', '-', ' ']) {
            let g = glyph(ch);
            let w = g[0].chars().count();
            assert!(g.iter().all(|r| r.chars().count() == w), "glyph {ch}");
        }
    }

    #[test]
    fn test_lowercase_and_unknown() {
        assert_eq!(build_title_art("nulai"), build_title_art("NULAI"));
        assert_eq!(title_art_width("?"), BLANK_WIDTH);
        assert_eq!(title_art_width(""), 0);
        assert!(build_title_art("").iter().all(|l| l.is_empty()));
    }
}
