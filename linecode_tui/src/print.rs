use linecode::{Level, Scheme, Signal};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{error::LinecodeTuiResult, styles::plot::plot_style, widgets::StepPlot};

/// Validates and encodes `bits`, then renders the plot as plain text.
pub fn print(scheme: Option<Scheme>, bits: Option<&str>, bit_width: u16) -> LinecodeTuiResult<String> {
    let signal = Signal::plot(scheme, bits.unwrap_or(""))?;
    tracing::info!(scheme = %signal.scheme, bits = %signal.bits, "printing signal");
    Ok(render_to_string(&signal, bit_width))
}

/// Columns drawn per off-screen buffer. Long signals are drawn in slices
/// of this width and stitched together row by row.
const SLICE_WIDTH: usize = 4096;

/// Draws the full signal, however long, with no scrolling.
pub fn render_to_string(signal: &Signal, bit_width: u16) -> String {
    let content_width = StepPlot::content_width(signal, bit_width);
    let mut rows = vec![String::new(); StepPlot::HEIGHT as usize];
    for offset in (0..content_width).step_by(SLICE_WIDTH) {
        let slice_width = SLICE_WIDTH.min(content_width - offset) as u16;
        let area = Rect::new(0, 0, StepPlot::GUTTER_WIDTH + slice_width, StepPlot::HEIGHT);
        let mut buf = Buffer::empty(area);
        StepPlot::new(signal)
            .style(plot_style(signal.scheme))
            .bit_width(bit_width)
            .offset(offset)
            .render(area, &mut buf);
        let first_column = if offset == 0 { 0 } else { StepPlot::GUTTER_WIDTH };
        for (y, row) in (0..area.height).zip(rows.iter_mut()) {
            row.extend(
                (first_column..area.width).map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol())),
            );
        }
    }

    let mut out = format!("{}\n", signal.scheme);
    for row in rows {
        out.push_str(row.trim_end());
        out.push('\n');
    }
    let levels: Vec<String> = signal.levels.iter().map(Level::to_string).collect();
    let ticks: Vec<String> = signal.axis.ticks().iter().map(|t| t.to_string()).collect();
    out.push_str(&format!("levels: {}\n", levels.join(" ")));
    out.push_str(&format!("time:   {}\n", ticks.join(" ")));
    out
}

#[cfg(test)]
mod test {
    use linecode::{LinecodeError, Scheme};

    use super::print;
    use crate::error::LinecodeTuiError;

    #[test]
    fn test_print_nrz_l() {
        let output = print(Some(Scheme::NrzL), Some("10"), 4).unwrap();
        let expected = [
            "NRZ-L",
            "+1 o───┐",
            "   ⋮   │",
            " 0 ⋮   │",
            "   ⋮   │",
            "-1 ⋮   └o──",
            "     1   0",
            "levels: 1 -1",
            "time:   0 1",
            "",
        ];
        assert_eq!(output, expected.join("\n"));
    }

    #[test]
    fn test_print_manchester_time_axis() {
        let output = print(Some(Scheme::Manchester), Some("10"), 4).unwrap();
        assert!(output.starts_with("Manchester\n"));
        assert!(output.ends_with("levels: 1 -1 -1 1\ntime:   0 0.5 1 1.5\n"));
    }

    #[test]
    fn test_print_long_signal_is_not_truncated() {
        let bits = "10".repeat(6000);
        let output = print(Some(Scheme::NrzL), Some(&bits), 6).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        let labels: String = lines[6].chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(labels, bits);
        assert_eq!(lines[5].chars().count(), 3 + bits.len() * 6);
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_print_reports_validation_error() {
        let result = print(None, Some("1011"), 4);
        assert!(matches!(
            result,
            Err(LinecodeTuiError::Linecode(LinecodeError::NoSchemeSelected))
        ));

        let result = print(Some(Scheme::NrzI), None, 4);
        assert!(matches!(
            result,
            Err(LinecodeTuiError::Linecode(LinecodeError::EmptyInput))
        ));
    }
}
