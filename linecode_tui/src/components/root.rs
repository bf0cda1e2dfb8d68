use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linecode::{Scheme, Signal};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Block,
    Frame,
};

use crate::{
    app::Message,
    backend::interpreter::{self, Command},
    component::{Component, HandleResult},
    styles::{
        global::{FOCUSED_BORDER_STYLE, NORMAL_BORDER_STYLE},
        plot::plot_style,
        root::TITLE_STYLE,
    },
    widgets::{KeyId, KeyMapHelpBar, KeyMaps},
};

use super::{BitsInput, CommandLine, Dialog, PlotViewer, SchemeSelector, Severity};

pub struct Root {
    message_tx: Sender<Message>,
    scheme_selector: SchemeSelector,
    bits_input: BitsInput,
    plot_viewer: PlotViewer,
    command_line: CommandLine,
    dialog: Dialog,
    focus: Panel,
    overlay: Option<Overlay>,
    key_maps: KeyMaps,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    SchemeSelector,
    BitsInput,
    PlotViewer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Overlay {
    CommandLine,
    Dialog,
}

impl Root {
    const LEFT_PANEL_WIDTH: u16 = 32;

    pub fn new(message_tx: Sender<Message>, bit_width: u16) -> Self {
        let mut root = Self {
            scheme_selector: SchemeSelector::new(message_tx.clone()),
            bits_input: BitsInput::new(message_tx.clone()),
            plot_viewer: PlotViewer::new(message_tx.clone(), bit_width),
            command_line: CommandLine::new(message_tx.clone()),
            dialog: Dialog::new(message_tx.clone()),
            message_tx,
            focus: Panel::SchemeSelector,
            overlay: None,
            key_maps: Self::create_key_maps(),
        };
        root.set_focus(Panel::SchemeSelector);
        root
    }

    /// Applies values given on the command line. Plots right away when both
    /// are present.
    pub fn preset(&mut self, scheme: Option<Scheme>, bits: Option<&str>) {
        if let Some(scheme) = scheme {
            self.scheme_selector.select(scheme);
        }
        if let Some(bits) = bits {
            self.bits_input.set_text(bits);
            self.set_focus(Panel::BitsInput);
        }
        if scheme.is_some() && bits.is_some() {
            self.plot();
        }
    }

    pub fn plot(&mut self) {
        let scheme = self.scheme_selector.selected();
        let text = self.bits_input.text().to_string();
        match Signal::plot(scheme, &text) {
            Ok(signal) => {
                tracing::info!(scheme = %signal.scheme, bits = %signal.bits, "plotting signal");
                self.plot_viewer.set_signal(signal);
            }
            Err(e) => {
                tracing::warn!(error = %e, input = %text, "plot request rejected");
                self.show_dialog(Severity::Warning, "Input Error", &e.to_string());
            }
        }
        self.notify_render();
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Plot(scheme, bits) => {
                self.scheme_selector.select(scheme);
                self.bits_input.set_text(&bits);
                self.plot();
            }
            Command::Select(scheme) => self.scheme_selector.select(scheme),
            Command::Bits(bits) => self.bits_input.set_text(&bits),
            Command::Zoom(bit_width) => self.plot_viewer.set_bit_width(bit_width),
            Command::Help => self.show_dialog(Severity::Info, "Help", interpreter::help()),
            Command::Quit => self.notify_quit(),
            Command::Noop => (),
        }
        self.notify_render();
    }

    pub fn focus(&self) -> Panel {
        self.focus
    }

    pub fn plotted_signal(&self) -> Option<&Signal> {
        self.plot_viewer.signal()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        (self.overlay == Some(Overlay::Dialog)).then_some(&self.dialog)
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::new()
            .with(&[KeyId::from(KeyCode::Tab)], "Next panel")
            .with(&[KeyId::from(KeyCode::Enter), KeyId::from('p')], "Plot signal")
            .with(&[KeyId::from(':')], "Command")
            .with(&[KeyId::from('?')], "Help")
            .with(
                &[
                    KeyId::from('q'),
                    KeyId::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
                ],
                "Quit",
            )
    }

    fn show_dialog(&mut self, severity: Severity, title: &str, text: &str) {
        self.dialog.set_message(severity, title, text);
        self.overlay = Some(Overlay::Dialog);
    }

    fn set_focus(&mut self, panel: Panel) {
        self.focus = panel;
        self.bits_input.set_focused(panel == Panel::BitsInput);
    }

    fn focus_next(&mut self) {
        let next = match self.focus {
            Panel::SchemeSelector => Panel::BitsInput,
            Panel::BitsInput => Panel::PlotViewer,
            Panel::PlotViewer => Panel::SchemeSelector,
        };
        self.set_focus(next);
    }

    fn focus_previous(&mut self) {
        let previous = match self.focus {
            Panel::SchemeSelector => Panel::PlotViewer,
            Panel::BitsInput => Panel::SchemeSelector,
            Panel::PlotViewer => Panel::BitsInput,
        };
        self.set_focus(previous);
    }

    fn notify_render(&self) {
        let _ = self.message_tx.send(Message::Render);
    }

    fn notify_quit(&self) {
        let _ = self.message_tx.send(Message::Quit);
    }

    fn panel_block<'a>(&self, panel: Panel, title: Line<'a>) -> Block<'a> {
        let border_style = if self.focus == panel && self.overlay.is_none() {
            FOCUSED_BORDER_STYLE
        } else {
            NORMAL_BORDER_STYLE
        };
        Block::bordered().title(title).border_style(border_style)
    }

    fn plot_title<'a>(&self) -> Line<'a> {
        match self.plot_viewer.signal() {
            Some(signal) => Line::from(format!(" {} ", signal.scheme))
                .style(plot_style(signal.scheme).style()),
            None => Line::from(" Signal ").style(TITLE_STYLE),
        }
    }
}

impl Component for Root {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let main_layout_v = Layout::vertical(vec![
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(rect);
        let body_layout_h = Layout::horizontal(vec![
            Constraint::Length(Self::LEFT_PANEL_WIDTH),
            Constraint::Min(0),
        ])
        .split(main_layout_v[0]);
        let input_layout_v = Layout::vertical(vec![
            Constraint::Length(Scheme::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(body_layout_h[0]);

        let block = self.panel_block(Panel::SchemeSelector, Line::from(" Encoding ").style(TITLE_STYLE));
        self.scheme_selector.render_with_block(f, input_layout_v[0], block);

        let block = self.panel_block(Panel::BitsInput, Line::from(" Binary data ").style(TITLE_STYLE));
        self.bits_input.render_with_block(f, input_layout_v[1], block);

        let block = self.panel_block(Panel::PlotViewer, self.plot_title());
        self.plot_viewer.render_with_block(f, body_layout_h[1], block);

        let key_maps = self.get_key_mappings();
        f.render_widget(KeyMapHelpBar::new(&key_maps), main_layout_v[1]);
        self.command_line.render(f, main_layout_v[2]);

        if self.overlay == Some(Overlay::Dialog) {
            self.dialog.render(f, main_layout_v[0]);
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Tab, _) => self.focus_next(),
            (KeyCode::BackTab, _) => self.focus_previous(),
            (KeyCode::Enter, _) | (KeyCode::Char('p'), _) => self.plot(),
            (KeyCode::Char(':'), _) => {
                self.command_line.activate();
                self.overlay = Some(Overlay::CommandLine);
            }
            (KeyCode::Char('?'), _) => {
                self.show_dialog(Severity::Info, "Help", interpreter::help());
            }
            (KeyCode::Char('q'), _) => self.notify_quit(),
            (KeyCode::Char('c'), modifier) if modifier.contains(KeyModifiers::CONTROL) => {
                self.notify_quit()
            }
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_resize_event(&mut self, _columns: u16, _rows: u16) -> HandleResult {
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_focus_gained(&mut self) {
        self.overlay = None;
    }

    fn get_focused_child(&mut self) -> Option<&mut dyn Component> {
        match (self.overlay, self.focus) {
            (Some(Overlay::Dialog), _) => Some(&mut self.dialog),
            (Some(Overlay::CommandLine), _) => Some(&mut self.command_line),
            (None, Panel::SchemeSelector) => Some(&mut self.scheme_selector),
            (None, Panel::BitsInput) => Some(&mut self.bits_input),
            (None, Panel::PlotViewer) => Some(&mut self.plot_viewer),
        }
    }

    fn get_key_mappings(&self) -> KeyMaps {
        let child_key_maps = match (self.overlay, self.focus) {
            (Some(Overlay::Dialog), _) => return self.dialog.get_key_mappings(),
            (Some(Overlay::CommandLine), _) => return self.command_line.get_key_mappings(),
            (None, Panel::SchemeSelector) => self.scheme_selector.get_key_mappings(),
            (None, Panel::BitsInput) => self.bits_input.get_key_mappings(),
            (None, Panel::PlotViewer) => self.plot_viewer.get_key_mappings(),
        };
        KeyMaps::merge_mappings(&child_key_maps, &self.key_maps)
    }
}

#[cfg(test)]
mod test {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{Event, KeyCode, KeyEvent};
    use linecode::{level, Scheme};

    use super::{Panel, Root};
    use crate::{app::Message, backend::interpreter::Command, component::Component};

    fn setup() -> (Root, Receiver<Message>) {
        let (tx, rx) = mpsc::channel();
        (Root::new(tx, 4), rx)
    }

    fn press(root: &mut Root, code: KeyCode) {
        root.handle_event(&Event::Key(KeyEvent::from(code)));
    }

    fn type_text(root: &mut Root, text: &str) {
        for c in text.chars() {
            press(root, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_plot_without_scheme_warns() {
        let (mut root, _rx) = setup();

        press(&mut root, KeyCode::Char('p'));

        let dialog = root.dialog().unwrap();
        assert_eq!(dialog.title(), "Input Error");
        assert_eq!(dialog.text(), "Please select an encoding technique.");
        assert!(root.plotted_signal().is_none());
    }

    #[test]
    fn test_warning_is_dismissed_and_ui_stays_usable() {
        let (mut root, _rx) = setup();

        press(&mut root, KeyCode::Char(' '));
        press(&mut root, KeyCode::Tab);
        press(&mut root, KeyCode::Enter);
        assert_eq!(root.dialog().unwrap().text(), "Please enter binary data.");

        press(&mut root, KeyCode::Esc);
        assert!(root.dialog().is_none());
        assert_eq!(root.focus(), Panel::BitsInput);

        type_text(&mut root, "1011");
        press(&mut root, KeyCode::Enter);

        let signal = root.plotted_signal().unwrap();
        assert_eq!(signal.scheme, Scheme::NrzL);
        assert_eq!(level::values(&signal.levels), vec![1, -1, 1, 1]);
    }

    #[test]
    fn test_invalid_bits_warn() {
        let (mut root, _rx) = setup();
        root.preset(Some(Scheme::Manchester), Some("102"));

        let dialog = root.dialog().unwrap();
        assert!(dialog.text().starts_with("Please enter a valid binary sequence"));
        assert!(root.plotted_signal().is_none());
    }

    #[test]
    fn test_typing_q_in_bits_input_does_not_quit() {
        let (mut root, rx) = setup();
        press(&mut root, KeyCode::Tab);

        type_text(&mut root, "q");

        assert!(rx.try_iter().all(|m| !matches!(m, Message::Quit)));
    }

    #[test]
    fn test_q_quits_from_selector() {
        let (mut root, rx) = setup();
        press(&mut root, KeyCode::Char('q'));
        assert!(rx.try_iter().any(|m| matches!(m, Message::Quit)));
    }

    #[test]
    fn test_execute_plot_command() {
        let (mut root, _rx) = setup();

        root.execute(Command::Plot(Scheme::Pseudoternary, "0010".to_string()));

        let signal = root.plotted_signal().unwrap();
        assert_eq!(level::values(&signal.levels), vec![1, 0, -1, 0]);
    }

    #[test]
    fn test_command_line_takes_focus_until_done() {
        let (mut root, rx) = setup();

        type_text(&mut root, ":zoom 8");
        press(&mut root, KeyCode::Enter);

        let executed: Vec<Command> = rx
            .try_iter()
            .filter_map(|m| match m {
                Message::Execute(command) => Some(command),
                _ => None,
            })
            .collect();
        assert_eq!(executed, vec![Command::Zoom(8)]);
        assert!(root.plotted_signal().is_none());
        assert!(root.dialog().is_none());
    }
}
