//! The event loop: key input, fetch completions and spinner ticks.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::Event;
use crossterm::event::EventStream;
use futures::StreamExt;
use log::debug;
use log::info;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use artic_lib::api::Page;
use artic_lib::api::PageSource;
use artic_lib::error::Error;
use artic_lib::list::AccumulateRequest;
use artic_lib::list::Accumulation;
use artic_lib::list::ListConfig;
use artic_lib::list::ListState;
use artic_lib::list::LoadRequest;
use artic_lib::list::PageChange;
use artic_lib::list::Ticket;
use artic_lib::list::accumulate;

use crate::error::Result;
use crate::input::Action;
use crate::input::action_for;
use crate::terminal::Terminal;
use crate::view;
use crate::widgets::RowInput;
use crate::widgets::Spinner;

/// Completion of a spawned fetch.
#[derive(Debug)]
pub enum Message {
    Loaded(Ticket, std::result::Result<Page, Error>),
    Accumulated(Ticket, Accumulation),
}

/// What woke the event loop.
enum Step {
    Input(Option<std::io::Result<Event>>),
    Message(Message),
    Tick,
}

pub struct App<S> {
    source: Arc<S>,
    state: ListState,
    cursor: usize,
    overlay_open: bool,
    row_input: RowInput,
    spinner: Spinner,
    spinner_tick: usize,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    accumulate_cancel: Option<CancellationToken>,
    quit: bool,
}

impl<S> App<S>
where
    S: PageSource + 'static,
{
    pub fn new(source: S, config: ListConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            state: ListState::new(&config),
            cursor: 0,
            overlay_open: false,
            row_input: RowInput::default(),
            spinner: Spinner::new(),
            spinner_tick: 0,
            tx,
            rx,
            accumulate_cancel: None,
            quit: false,
        }
    }

    /// Runs until the user quits or the input stream ends.
    pub async fn run(mut self, terminal: &mut Terminal) -> Result<()> {
        self.mount();

        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(Duration::from_millis(Spinner::FRAME_MS));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw(terminal)?;

        while !self.quit {
            let loading = self.state.is_loading();
            let step = tokio::select! {
                event = events.next() => Step::Input(event),
                Some(message) = self.rx.recv() => Step::Message(message),
                _ = ticker.tick(), if loading => Step::Tick,
            };

            match step {
                Step::Input(None) => break,
                Step::Input(Some(Err(e))) => return Err(e.into()),
                Step::Input(Some(Ok(Event::Key(key)))) => {
                    if let Some(action) = action_for(&key, self.overlay_open) {
                        self.handle(action);
                    }
                }
                // Resizes just need the redraw below.
                Step::Input(Some(Ok(_))) => {}
                Step::Message(message) => self.apply(message),
                Step::Tick => self.spinner_tick = self.spinner_tick.wrapping_add(1),
            }

            self.draw(terminal)?;
        }

        self.cancel_accumulation();
        info!("Shutting down");
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal) -> Result<()> {
        let view = view::View {
            state: &self.state,
            cursor: self.cursor,
            overlay: self.overlay_open.then_some(&self.row_input),
            spinner: &self.spinner,
            tick: self.spinner_tick,
        };
        terminal.draw(|buf| view::render(&view, buf))?;
        Ok(())
    }

    /// Loads the initial page.
    pub fn mount(&mut self) {
        let request = self.state.begin_load();
        self.spawn_load(request);
    }

    pub fn handle(&mut self, action: Action) {
        if action == Action::Quit {
            self.quit = true;
            return;
        }
        // The spinner replaces the table, so there is nothing to act on.
        if self.state.is_loading() {
            return;
        }

        let page = *self.state.page();
        match action {
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                if self.cursor + 1 < self.state.displayed().len() {
                    self.cursor += 1;
                }
            }
            Action::ToggleRow => {
                if let Some(artwork) = self.state.displayed().get(self.cursor) {
                    let id = artwork.id;
                    self.state.toggle_selected(id);
                }
            }
            Action::PrevPage => {
                if page.current_page > 1 {
                    self.change_page(PageChange::to_page(&page, page.current_page - 1));
                }
            }
            Action::NextPage => {
                if u64::from(page.current_page) < page.total_pages() {
                    self.change_page(PageChange::to_page(&page, page.current_page + 1));
                }
            }
            Action::FirstPage => self.change_page(PageChange::to_page(&page, 1)),
            Action::LastPage => {
                let last = u32::try_from(page.total_pages()).unwrap_or(u32::MAX);
                if last > 0 {
                    self.change_page(PageChange::to_page(&page, last));
                }
            }
            Action::CycleRows => {
                let options = self.state.page_size_options();
                let next = options
                    .iter()
                    .position(|&size| size == page.page_size)
                    .and_then(|i| options.get(i + 1))
                    .or_else(|| options.first())
                    .copied();
                if let Some(rows) = next {
                    self.change_page(PageChange::with_rows(rows));
                }
            }
            Action::ToggleOverlay => self.overlay_open = !self.overlay_open,
            Action::CloseOverlay => self.overlay_open = false,
            Action::SubmitOverlay => self.submit_row_count(),
            Action::InputChar(c) => {
                self.row_input.insert(c);
            }
            Action::InputBackspace => self.row_input.backspace(),
            Action::InputDelete => self.row_input.delete(),
            Action::InputLeft => self.row_input.move_left(),
            Action::InputRight => self.row_input.move_right(),
            Action::InputHome => self.row_input.home(),
            Action::InputEnd => self.row_input.end(),
            Action::Quit => {}
        }
    }

    /// Applies a fetch completion.
    pub fn apply(&mut self, message: Message) {
        let applied = match message {
            Message::Loaded(ticket, result) => self.state.finish_load(ticket, result),
            Message::Accumulated(ticket, accumulation) => {
                self.state.finish_accumulate(ticket, accumulation)
            }
        };
        if applied {
            self.cursor = self.cursor.min(self.state.displayed().len().saturating_sub(1));
        }
    }

    fn change_page(&mut self, change: PageChange) {
        if let Some(request) = self.state.change_page(change) {
            self.cancel_accumulation();
            self.cursor = 0;
            self.spawn_load(request);
        }
    }

    fn submit_row_count(&mut self) {
        // The overlay hides before the input is looked at.
        self.overlay_open = false;
        match self.state.begin_accumulate(self.row_input.text()) {
            Ok(request) => self.spawn_accumulate(request),
            Err(e) => debug!("Ignoring row count {:?}: {}", self.row_input.text(), e),
        }
    }

    fn cancel_accumulation(&mut self) {
        if let Some(token) = self.accumulate_cancel.take() {
            token.cancel();
        }
    }

    fn spawn_load(&self, request: LoadRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_page(request.page, request.page_size).await;
            let _ = tx.send(Message::Loaded(request.ticket, result));
        });
    }

    fn spawn_accumulate(&mut self, request: AccumulateRequest) {
        self.cancel_accumulation();
        let token = CancellationToken::new();
        self.accumulate_cancel = Some(token.clone());

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let accumulation = accumulate(source.as_ref(), &request, &token).await;
            let _ = tx.send(Message::Accumulated(request.ticket, accumulation));
        });
    }

    #[cfg(test)]
    async fn next_message(&mut self) -> Option<Message> {
        self.rx.recv().await
    }

    #[cfg(test)]
    fn has_pending_message(&mut self) -> bool {
        !self.rx.is_empty()
    }
}
