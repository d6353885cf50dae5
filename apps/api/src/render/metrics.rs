//! Static Helvetica width tables and greedy word wrap for the hand-drawn PDF.
//!
//! Widths are the standard Type 1 AFM advance widths divided by 1000, so they
//! are exact for the PDF built-in fonts the renderer draws with. All tables
//! cover ASCII 0x20..=0x7E (95 printable characters); index = `c as usize - 32`.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// The three faces the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    /// Helvetica-Oblique shares the regular advance widths.
    Italic,
}

/// Static character-width table for one face, in em units.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Rendered width in millimetres at `size_pt`.
    pub fn width_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt * MM_PER_PT
    }

    /// Greedy word wrap to `max_width_mm`.
    ///
    /// Explicit newlines always break; blank input lines are dropped. A word
    /// wider than the line is split between characters.
    pub fn wrap(&self, text: &str, max_width_mm: f32, size_pt: f32) -> Vec<String> {
        let max_width = max_width_mm / (size_pt * MM_PER_PT);
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            let mut current = String::new();
            let mut current_width = 0.0_f32;

            for word in paragraph.split_whitespace() {
                for piece in self.split_long_word(word, max_width) {
                    let word_w = self.measure_str(&piece);
                    if current.is_empty() {
                        current = piece;
                        current_width = word_w;
                    } else if current_width + self.space_width + word_w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current = piece;
                        current_width = word_w;
                    } else {
                        current.push(' ');
                        current.push_str(&piece);
                        current_width += self.space_width + word_w;
                    }
                }
            }

            if !current.is_empty() {
                lines.push(current);
            }
        }
        lines
    }

    fn split_long_word(&self, word: &str, max_width: f32) -> Vec<String> {
        if self.measure_str(word) <= max_width {
            return vec![word.to_string()];
        }
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0_f32;
        for c in word.chars() {
            let w = self.measure_str(c.encode_utf8(&mut [0; 4]));
            if !piece.is_empty() && width + w > max_width {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(c);
            width += w;
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A     B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N     O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a     b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n     o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {     |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.52,
    space_width: 0.278,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A     B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N     O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a     b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n     o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {     |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.56,
    space_width: 0.278,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Regular | FontFace::Italic => &HELVETICA_TABLE,
        FontFace::Bold => &HELVETICA_BOLD_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontFace::Regular).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::Regular);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "Analytical Engine";
        assert!(
            get_metrics(FontFace::Bold).measure_str(text)
                > get_metrics(FontFace::Regular).measure_str(text)
        );
        assert_eq!(
            get_metrics(FontFace::Italic).measure_str(text),
            get_metrics(FontFace::Regular).measure_str(text)
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFace::Regular);
        assert!((metrics.measure_str("é") - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_width_mm_scales_with_size() {
        let metrics = get_metrics(FontFace::Regular);
        // 10 em-units of "m"-ish text at 12pt
        let w12 = metrics.width_mm("mmmm", 12.0);
        let w6 = metrics.width_mm("mmmm", 6.0);
        assert!((w12 - 2.0 * w6).abs() < 1e-4);
        assert!((w12 - 4.0 * 0.833 * 12.0 * MM_PER_PT).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(FontFace::Regular).wrap("Built things", 170.0, 11.0);
        assert_eq!(lines, vec!["Built things".to_string()]);
    }

    #[test]
    fn test_wrap_respects_width_and_newlines() {
        let metrics = get_metrics(FontFace::Regular);
        let text = "word ".repeat(60) + "\n\nsecond paragraph";
        let lines = metrics.wrap(&text, 80.0, 11.0);
        assert!(lines.len() > 2);
        assert_eq!(lines.last().unwrap(), "second paragraph");
        for line in &lines {
            assert!(metrics.width_mm(line, 11.0) <= 80.0 + 1e-3, "{line:?} too wide");
        }
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let metrics = get_metrics(FontFace::Regular);
        let word = "x".repeat(200);
        let lines = metrics.wrap(&word, 30.0, 11.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_wrap_empty_is_empty() {
        assert!(get_metrics(FontFace::Bold).wrap("  \n ", 100.0, 11.0).is_empty());
    }
}
