use linecode::{Level, Signal};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::styles::{
    plot::{LineStyle, LineWeight, Marker, PlotStyle},
    plot_viewer::{BIT_LABEL_STYLE, GRID_STYLE, LEVEL_LABEL_STYLE},
};

/// Step plot of a `Signal`: one row per level, transitions drawn at the tick
/// where the new level starts, and the input bits under each bit period.
pub struct StepPlot<'a> {
    signal: &'a Signal,
    style: PlotStyle,
    bit_width: u16,
    offset: usize,
}

struct Glyphs {
    horizontal: char,
    vertical: char,
    down_from: char,
    down_to: char,
    up_from: char,
    up_to: char,
}

type Canvas = Vec<Vec<Option<(char, Style)>>>;

impl<'a> StepPlot<'a> {
    pub const HEIGHT: u16 = 6;
    pub const GUTTER_WIDTH: u16 = 3;

    const LEVEL_ROWS: usize = 5;
    const AXIS_ROW: usize = 5;
    const GRID: char = '⋮';

    pub fn new(signal: &'a Signal) -> Self {
        Self {
            signal,
            style: PlotStyle::default(),
            bit_width: 6,
            offset: 0,
        }
    }

    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Columns per bit period. Rounded up to an even number so half-bit
    /// ticks land on a column.
    pub fn bit_width(mut self, bit_width: u16) -> Self {
        self.bit_width = Self::normalize_bit_width(bit_width);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn content_width(signal: &Signal, bit_width: u16) -> usize {
        signal.bit_count() * Self::normalize_bit_width(bit_width) as usize
    }

    /// Columns per bit as actually drawn: at least 2 and even.
    pub fn normalize_bit_width(bit_width: u16) -> u16 {
        let bit_width = bit_width.max(2);
        bit_width + bit_width % 2
    }

    fn row(level: Level) -> usize {
        match level {
            Level::Positive => 0,
            Level::Zero => 2,
            Level::Negative => 4,
        }
    }

    fn column(&self, half_units: usize) -> usize {
        half_units * self.bit_width as usize / 2
    }

    fn segment_bounds(&self) -> Vec<(usize, usize)> {
        let ticks = self.signal.axis.ticks();
        let end = Self::content_width(self.signal, self.bit_width);
        ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let start = self.column(tick.half_units());
                let stop = ticks
                    .get(i + 1)
                    .map_or(end, |next| self.column(next.half_units()));
                (start, stop)
            })
            .collect()
    }

    fn draw(&self) -> Canvas {
        let width = Self::content_width(self.signal, self.bit_width);
        let mut canvas: Canvas = vec![vec![None; width]; Self::AXIS_ROW + 1];
        self.draw_levels(&mut canvas);
        self.draw_grid(&mut canvas);
        self.draw_bit_labels(&mut canvas);
        canvas
    }

    fn draw_levels(&self, canvas: &mut Canvas) {
        let glyphs = Glyphs::from(&self.style);
        let style = self.style.style();
        let mut previous_row = None;
        for (level, (start, stop)) in self.signal.levels.iter().zip(self.segment_bounds()) {
            let row = Self::row(*level);
            let mut x = start;
            if let Some(previous_row) = previous_row.filter(|r| *r != row) {
                Self::draw_transition(canvas, &glyphs, style, start, previous_row, row);
                x += 1;
            }
            for column in x..stop {
                canvas[row][column] = Some((glyphs.horizontal, style));
            }
            if let Some(marker) = self.style.marker.filter(|_| x < stop) {
                canvas[row][x] = Some((marker.glyph(), style));
            }
            previous_row = Some(row);
        }
    }

    fn draw_transition(
        canvas: &mut Canvas,
        glyphs: &Glyphs,
        style: Style,
        column: usize,
        from: usize,
        to: usize,
    ) {
        let (top, bottom, top_glyph, bottom_glyph) = if from < to {
            (from, to, glyphs.down_from, glyphs.down_to)
        } else {
            (to, from, glyphs.up_to, glyphs.up_from)
        };
        canvas[top][column] = Some((top_glyph, style));
        for row in canvas.iter_mut().take(bottom).skip(top + 1) {
            row[column] = Some((glyphs.vertical, style));
        }
        canvas[bottom][column] = Some((bottom_glyph, style));
    }

    fn draw_grid(&self, canvas: &mut Canvas) {
        let bit_width = self.bit_width as usize;
        for bit in 0..self.signal.bit_count() {
            let column = bit * bit_width;
            for row in canvas.iter_mut().take(Self::LEVEL_ROWS) {
                if row[column].is_none() {
                    row[column] = Some((Self::GRID, GRID_STYLE));
                }
            }
        }
    }

    fn draw_bit_labels(&self, canvas: &mut Canvas) {
        let bit_width = self.bit_width as usize;
        for (i, bit) in self.signal.bits.iter().enumerate() {
            let label = if bit { '1' } else { '0' };
            canvas[Self::AXIS_ROW][i * bit_width + bit_width / 2] = Some((label, BIT_LABEL_STYLE));
        }
    }

    fn level_label(row: usize) -> &'static str {
        match row {
            0 => "+1 ",
            2 => " 0 ",
            4 => "-1 ",
            _ => "   ",
        }
    }
}

impl Widget for StepPlot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let canvas = self.draw();
        let gutter = Self::GUTTER_WIDTH.min(area.width);
        let visible = (area.width - gutter) as usize;
        for (i, row) in canvas.iter().enumerate().take(area.height as usize) {
            let y = area.y + i as u16;
            let label = Self::level_label(i);
            buf.set_stringn(area.x, y, label, gutter as usize, LEVEL_LABEL_STYLE);
            for (x, cell) in row.iter().skip(self.offset).take(visible).enumerate() {
                if let (Some((symbol, style)), Some(target)) =
                    (cell, buf.cell_mut((area.x + gutter + x as u16, y)))
                {
                    target.set_char(*symbol).set_style(*style);
                }
            }
        }
    }
}

impl From<&PlotStyle> for Glyphs {
    fn from(style: &PlotStyle) -> Self {
        let heavy = style.weight == LineWeight::Heavy;
        let (horizontal, vertical) = match (style.line, heavy) {
            (LineStyle::Solid, false) => ('─', '│'),
            (LineStyle::Solid, true) => ('━', '┃'),
            (LineStyle::Dashed, false) => ('╌', '╎'),
            (LineStyle::Dashed, true) => ('╍', '╏'),
            (LineStyle::DashDot, false) => ('┄', '┆'),
            (LineStyle::DashDot, true) => ('┅', '┇'),
            (LineStyle::Dotted, false) => ('┈', '┊'),
            (LineStyle::Dotted, true) => ('┉', '┋'),
        };
        let (down_from, down_to, up_from, up_to) = if heavy {
            ('┓', '┗', '┛', '┏')
        } else {
            ('┐', '└', '┘', '┌')
        };
        Self {
            horizontal,
            vertical,
            down_from,
            down_to,
            up_from,
            up_to,
        }
    }
}

impl Marker {
    fn glyph(self) -> char {
        match self {
            Marker::Circle => 'o',
            Marker::Square => '■',
            Marker::Cross => 'x',
            Marker::Diamond => '◆',
        }
    }
}


#[cfg(test)]
mod test {
    use linecode::{Scheme, Signal};
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    use super::StepPlot;
    use crate::styles::plot::{plot_style, PlotStyle};

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect()
            })
            .collect()
    }

    fn render(plot: StepPlot, width: u16) -> Vec<String> {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, StepPlot::HEIGHT));
        plot.render(buf.area, &mut buf);
        rows(&buf)
    }

    fn signal(scheme: Scheme, bits: &str) -> Signal {
        Signal::plot(Some(scheme), bits).unwrap()
    }

    #[test]
    fn test_render_nrz_l() {
        let signal = signal(Scheme::NrzL, "10");
        let plot = StepPlot::new(&signal).bit_width(4);

        assert_eq!(
            render(plot, 11),
            vec![
                "+1 ────┐   ",
                "   ⋮   │   ",
                " 0 ⋮   │   ",
                "   ⋮   │   ",
                "-1 ⋮   └───",
                "     1   0 ",
            ]
        );
    }

    #[test]
    fn test_render_markers() {
        let signal = signal(Scheme::NrzL, "10");
        let plot = StepPlot::new(&signal)
            .bit_width(4)
            .style(plot_style(Scheme::NrzL));

        let rows = render(plot, 11);

        assert_eq!(rows[0], "+1 o───┐   ");
        assert_eq!(rows[4], "-1 ⋮   └o──");
    }

    #[test]
    fn test_render_bipolar_ami() {
        let signal = signal(Scheme::BipolarAmi, "101");
        let plot = StepPlot::new(&signal).bit_width(2);

        assert_eq!(
            render(plot, 9),
            vec![
                "+1 ──┐ ⋮ ",
                "   ⋮ │ ⋮ ",
                " 0 ⋮ └─┐ ",
                "   ⋮ ⋮ │ ",
                "-1 ⋮ ⋮ └─",
                "    1 0 1",
            ]
        );
    }

    #[test]
    fn test_render_half_bit_transition() {
        let signal = signal(Scheme::Manchester, "1");
        let plot = StepPlot::new(&signal).bit_width(4);

        assert_eq!(
            render(plot, 7),
            vec![
                "+1 ──┐ ",
                "   ⋮ │ ",
                " 0 ⋮ │ ",
                "   ⋮ │ ",
                "-1 ⋮ └─",
                "     1 ",
            ]
        );
    }

    #[test]
    fn test_render_heavy_rising_edge() {
        let signal = signal(Scheme::Manchester, "0");
        let plot = StepPlot::new(&signal).bit_width(4).style(PlotStyle {
            marker: None,
            ..plot_style(Scheme::Manchester)
        });

        let rows = render(plot, 7);

        assert_eq!(rows[0], "+1 ⋮ ┏━");
        assert_eq!(rows[4], "-1 ━━┛ ");
    }

    #[test]
    fn test_render_scrolled() {
        let signal = signal(Scheme::NrzL, "10");
        let plot = StepPlot::new(&signal).bit_width(4).offset(4);

        assert_eq!(
            render(plot, 7),
            vec![
                "+1 ┐   ",
                "   │   ",
                " 0 │   ",
                "   │   ",
                "-1 └───",
                "     0 ",
            ]
        );
    }

    #[test]
    fn test_odd_bit_width_rounds_up() {
        let signal = signal(Scheme::Manchester, "11");
        assert_eq!(StepPlot::content_width(&signal, 5), 12);
        assert_eq!(StepPlot::content_width(&signal, 0), 4);
    }
}
