use ratatui::style::{Color, Modifier, Style};

pub mod global {
    use super::*;

    pub const SELECTED_ITEM_STYLE: Style =
        Style::new().bg(Color::Blue).add_modifier(Modifier::BOLD);
    pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(Color::Green);
    pub const NORMAL_BORDER_STYLE: Style = Style::new().fg(Color::Reset);
}

pub mod root {
    use super::*;

    pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
}

pub mod scheme_selector {
    use super::*;

    pub const CHOSEN_ITEM_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
}

pub mod text_input {
    use super::*;

    pub const HEADER_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
    pub const LINE_STYLE: Style = Style::new().bg(Color::Blue).fg(Color::Reset);
    pub const FIELD_STYLE: Style = Style::new().bg(Color::Reset).fg(Color::Reset);
    pub const CURSOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);
}

pub mod command_line {
    use super::*;

    pub const NORMAL_OUTPUT_STYLE: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);
    pub const ERROR_OUTPUT_STYLE: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);
    pub const IDLE_STYLE: Style = Style::new().bg(Color::DarkGray);
}

pub mod dialog {
    use super::*;

    pub const WARNING_BORDER_STYLE: Style = Style::new().fg(Color::Yellow);
    pub const INFO_BORDER_STYLE: Style = Style::new().fg(Color::Cyan);
    pub const BUTTON_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);
}

pub mod key_maps_help_bar {
    use super::*;

    pub const KEY_ID_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
    pub const DESCRIPTION_STYLE: Style =
        Style::new().fg(Color::Green).add_modifier(Modifier::ITALIC);
}

pub mod plot_viewer {
    use super::*;

    pub const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub const LEVEL_LABEL_STYLE: Style = Style::new().fg(Color::DarkGray);
    pub const BIT_LABEL_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
    pub const SEQUENCE_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::ITALIC);
    pub const PLACEHOLDER_STYLE: Style = Style::new().fg(Color::DarkGray);
}

pub mod plot {
    use linecode::Scheme;

    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum LineStyle {
        Solid,
        Dashed,
        DashDot,
        Dotted,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum LineWeight {
        Normal,
        Heavy,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Marker {
        Circle,
        Square,
        Cross,
        Diamond,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PlotStyle {
        pub color: Color,
        pub line: LineStyle,
        pub marker: Option<Marker>,
        pub weight: LineWeight,
    }

    pub fn plot_style(scheme: Scheme) -> PlotStyle {
        use LineStyle::*;
        use LineWeight::*;
        let (color, line, marker, weight) = match scheme {
            Scheme::NrzL => (Color::Blue, Solid, Some(Marker::Circle), Normal),
            Scheme::NrzI => (Color::Green, Dashed, Some(Marker::Square), Normal),
            Scheme::BipolarAmi => (Color::Red, DashDot, Some(Marker::Cross), Normal),
            Scheme::Pseudoternary => (Color::Magenta, Dotted, Some(Marker::Diamond), Normal),
            Scheme::Manchester => (Color::Rgb(255, 165, 0), Solid, None, Heavy),
            Scheme::DifferentialManchester => (Color::Rgb(0, 128, 128), Dashed, None, Heavy),
        };
        PlotStyle {
            color,
            line,
            marker,
            weight,
        }
    }

    impl PlotStyle {
        pub fn style(&self) -> Style {
            let style = Style::new().fg(self.color);
            match self.weight {
                LineWeight::Normal => style,
                LineWeight::Heavy => style.add_modifier(Modifier::BOLD),
            }
        }
    }

    impl Default for PlotStyle {
        fn default() -> Self {
            Self {
                color: Color::Reset,
                line: LineStyle::Solid,
                marker: None,
                weight: LineWeight::Normal,
            }
        }
    }
}
