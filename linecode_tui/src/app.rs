use std::{sync::mpsc::Receiver, time::Duration};

use crossterm::event::{Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::{
    backend::interpreter::Command,
    component::Component,
    components::Root,
    error::LinecodeTuiResult,
};

#[derive(Debug, PartialEq)]
pub enum Message {
    Render,
    Quit,
    Execute(Command),
}

/// Single-threaded event loop: read one terminal event, dispatch it through
/// the component tree, then act on whatever the components sent back.
pub struct App<B: Backend> {
    terminal: Terminal<B>,
    root: Root,
    message_rx: Receiver<Message>,
}

impl<B: Backend> App<B> {
    const POLL_INTERVAL: Duration = Duration::from_millis(250);

    pub fn new(terminal: Terminal<B>, root: Root, message_rx: Receiver<Message>) -> Self {
        Self {
            terminal,
            root,
            message_rx,
        }
    }

    pub fn run(&mut self) -> LinecodeTuiResult<()> {
        self.draw()?;
        loop {
            if crossterm::event::poll(Self::POLL_INTERVAL)? {
                let event = crossterm::event::read()?;
                if !is_key_release(&event) {
                    self.root.handle_event(&event);
                }
            }
            if !self.process_messages()? {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Drains pending messages. Returns `false` once a quit was requested.
    pub fn process_messages(&mut self) -> LinecodeTuiResult<bool> {
        let mut render = false;
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                Message::Render => render = true,
                Message::Quit => return Ok(false),
                Message::Execute(command) => self.root.execute(command),
            }
        }
        if render {
            self.draw()?;
        }
        Ok(true)
    }

    fn draw(&mut self) -> LinecodeTuiResult<()> {
        let root = &mut self.root;
        self.terminal.draw(|f| {
            let area = f.area();
            root.render(f, area);
        })?;
        Ok(())
    }
}

fn is_key_release(event: &Event) -> bool {
    matches!(event, Event::Key(key_event) if key_event.kind == KeyEventKind::Release)
}

#[cfg(test)]
mod test {
    use std::sync::mpsc;

    use linecode::{level, Scheme};
    use ratatui::{backend::TestBackend, Terminal};

    use super::{App, Message};
    use crate::{backend::interpreter::Command, components::Root};

    fn screen(app: &App<TestBackend>) -> String {
        let buffer = app.terminal().backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_execute_message_plots_and_redraws() {
        let (tx, rx) = mpsc::channel();
        let terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut app = App::new(terminal, Root::new(tx.clone(), 4), rx);

        tx.send(Message::Execute(Command::Plot(Scheme::BipolarAmi, "1101".to_string())))
            .unwrap();

        assert!(app.process_messages().unwrap());
        let signal = app.root().plotted_signal().unwrap();
        assert_eq!(level::values(&signal.levels), vec![1, -1, 0, 1]);
        let screen = screen(&app);
        assert!(screen.contains("Bipolar AMI"));
        assert!(screen.contains("levels: 1 -1 0 1"));
    }

    #[test]
    fn test_quit_message_stops_loop() {
        let (tx, rx) = mpsc::channel();
        let terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut app = App::new(terminal, Root::new(tx.clone(), 4), rx);

        tx.send(Message::Render).unwrap();
        tx.send(Message::Quit).unwrap();

        assert!(!app.process_messages().unwrap());
    }
}
