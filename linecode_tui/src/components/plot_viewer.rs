use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent};
use linecode::{Level, Signal};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::Message,
    component::{Component, HandleResult},
    styles::{
        plot::plot_style,
        plot_viewer::{PLACEHOLDER_STYLE, SEQUENCE_STYLE},
    },
    widgets::{KeyId, KeyMaps, StepPlot},
};

pub struct PlotViewer {
    message_tx: Sender<Message>,
    signal: Option<Signal>,
    bit_width: u16,
    offset: usize,
    viewport_width: usize,
    key_maps: KeyMaps,
}

impl PlotViewer {
    const MIN_BIT_WIDTH: u16 = 2;
    const MAX_BIT_WIDTH: u16 = 32;

    pub fn new(message_tx: Sender<Message>, bit_width: u16) -> Self {
        Self {
            message_tx,
            signal: None,
            bit_width: Self::fit_bit_width(bit_width),
            offset: 0,
            viewport_width: 0,
            key_maps: Self::create_key_maps(),
        }
    }

    pub fn signal(&self) -> Option<&Signal> {
        self.signal.as_ref()
    }

    pub fn set_signal(&mut self, signal: Signal) {
        self.signal = Some(signal);
        self.offset = 0;
    }

    pub fn bit_width(&self) -> u16 {
        self.bit_width
    }

    pub fn set_bit_width(&mut self, bit_width: u16) {
        self.bit_width = Self::fit_bit_width(bit_width);
        self.clamp_offset();
    }

    pub fn scroll_right(&mut self) {
        self.offset += self.scroll_step();
        self.clamp_offset();
    }

    pub fn scroll_left(&mut self) {
        self.offset = self.offset.saturating_sub(self.scroll_step());
    }

    fn fit_bit_width(bit_width: u16) -> u16 {
        StepPlot::normalize_bit_width(bit_width.clamp(Self::MIN_BIT_WIDTH, Self::MAX_BIT_WIDTH))
    }

    fn scroll_step(&self) -> usize {
        (self.bit_width as usize / 2).max(1)
    }

    fn max_offset(&self) -> usize {
        self.signal.as_ref().map_or(0, |signal| {
            StepPlot::content_width(signal, self.bit_width).saturating_sub(self.viewport_width)
        })
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::new()
            .with(
                &[
                    KeyId::from('h'),
                    KeyId::from(KeyCode::Left),
                    KeyId::from('l'),
                    KeyId::from(KeyCode::Right),
                ],
                "Scroll",
            )
            .with(&[KeyId::from('+'), KeyId::from('-')], "Zoom")
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(Message::Render);
    }

    fn sequence_line<'a>(label: &'a str, values: Vec<String>) -> Line<'a> {
        Line::from(vec![
            Span::from(label),
            Span::from(values.join(" ")).style(SEQUENCE_STYLE),
        ])
    }

    fn render_signal(f: &mut Frame, rect: Rect, signal: &Signal, bit_width: u16, offset: usize) {
        let chunks = Layout::vertical(vec![
            Constraint::Length(StepPlot::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(rect);
        let plot = StepPlot::new(signal)
            .style(plot_style(signal.scheme))
            .bit_width(bit_width)
            .offset(offset);
        f.render_widget(plot, chunks[0]);

        let levels = signal.levels.iter().map(Level::to_string).collect();
        let ticks = signal.axis.ticks().iter().map(|t| t.to_string()).collect();
        f.render_widget(Self::sequence_line("levels: ", levels), chunks[2]);
        f.render_widget(Self::sequence_line("time:   ", ticks), chunks[3]);
    }
}

impl Component for PlotViewer {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.viewport_width = rect.width.saturating_sub(StepPlot::GUTTER_WIDTH) as usize;
        self.clamp_offset();
        match &self.signal {
            Some(signal) => Self::render_signal(f, rect, signal, self.bit_width, self.offset),
            None => {
                let hint = Paragraph::new(
                    "Choose a scheme, enter binary data (e.g. 1011001101) and press Enter.",
                )
                .style(PLACEHOLDER_STYLE);
                f.render_widget(hint, rect);
            }
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => self.scroll_left(),
            KeyCode::Right | KeyCode::Char('l') => self.scroll_right(),
            KeyCode::Char('+') => self.set_bit_width(self.bit_width + 2),
            KeyCode::Char('-') => self.set_bit_width(self.bit_width.saturating_sub(2)),
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_resize_event(&mut self, _columns: u16, _rows: u16) -> HandleResult {
        self.clamp_offset();
        HandleResult::NotHandled
    }

    fn get_key_mappings(&self) -> KeyMaps {
        self.key_maps.clone()
    }
}
