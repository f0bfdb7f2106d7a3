use ratatui::prelude::*;
use ratatui::widgets::Widget;

const GLYPH_ROWS: usize = 5;

/// Renders a short string as 5-row block glyphs. Only digits and ':' have
/// glyphs; anything else renders as a blank cell of digit width.
pub struct BigText<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> BigText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rendered width in cells, including inter-glyph spacing.
    pub fn width(text: &str) -> u16 {
        text.chars()
            .map(|ch| glyph(ch)[0].len() as u16 + 1)
            .sum::<u16>()
            .saturating_sub(1)
    }
}

impl Widget for BigText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut x_offset = 0u16;

        for ch in self.text.chars() {
            let rows = glyph(ch);
            let width = rows[0].len() as u16;

            if x_offset + width > area.width {
                break;
            }

            for (y, row) in rows.iter().enumerate() {
                if y as u16 >= area.height {
                    break;
                }

                for (x, mark) in row.bytes().enumerate() {
                    if mark != b'#' {
                        continue;
                    }
                    let gx = area.left() + x_offset + x as u16;
                    let gy = area.top() + y as u16;
                    if let Some(cell) = buf.cell_mut((gx, gy)) {
                        cell.set_style(self.style).set_symbol("█");
                    }
                }
            }

            x_offset += width + 1;
        }
    }
}

fn glyph(ch: char) -> [&'static str; GLYPH_ROWS] {
    match ch {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => [" ", "#", " ", "#", " "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_of_countdown_text() {
        // 3 digits of width 3 plus a 1-wide colon, with 1-cell spacing.
        assert_eq!(BigText::width("3:00"), 13);
        assert_eq!(BigText::width("0:00"), 13);
    }

    #[test]
    fn test_glyphs_are_uniform_height() {
        for ch in "0123456789:".chars() {
            let rows = glyph(ch);
            let width = rows[0].len();
            assert!(rows.iter().all(|r| r.len() == width), "ragged glyph {ch}");
        }
    }
}
