//! The interactive application: an explicit state container driven by
//! messages, with network requests running as background tasks.

mod input;
mod message;
mod state;
mod update;
mod view;

pub use input::{parse_input, Input, HELP};
pub use message::{Command, Message};
pub use state::{AppState, DetailState, DetailStatus, SearchState, SearchStatus};
pub use update::update;
pub use view::{render, CardView, DetailView, FavoriteView, ViewModel};

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::detail::DetailLoader;
use crate::favorites::Favorites;
use crate::model::SearchMode;
use crate::search::SearchController;
use crate::service::RecipeService;

pub struct App {
    state: AppState,
    search: SearchController,
    details: DetailLoader,
    default_query: String,
    default_mode: SearchMode,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
    /// Requests spawned whose completion has not been received yet
    pending: usize,
}

impl App {
    pub(crate) fn new(
        service: Arc<dyn RecipeService>,
        favorites: Favorites,
        default_query: String,
        default_mode: SearchMode,
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        App {
            state: AppState::new(favorites),
            search: SearchController::new(service.clone()),
            details: DetailLoader::new(service),
            default_query,
            default_mode,
            tx,
            rx,
            pending: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        render(&self.state)
    }

    pub fn is_idle(&self) -> bool {
        self.pending == 0
    }

    /// Issue the default search. Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        debug!(
            "Startup search: {:?} by {}",
            self.default_query,
            self.default_mode.as_str()
        );
        self.dispatch(Message::QueryChanged(self.default_query.clone()));
        self.dispatch(Message::ModeChanged(self.default_mode));
        self.dispatch(Message::SubmitSearch);
    }

    /// Apply a message and spawn the request it asks for
    pub fn dispatch(&mut self, message: Message) {
        if let Some(command) = update(&mut self.state, message) {
            self.spawn(command);
        }
    }

    fn spawn(&mut self, command: Command) {
        let tx = self.tx.clone();
        self.pending += 1;
        match command {
            Command::Search { seq, query, mode } => {
                let search = self.search.clone();
                tokio::spawn(async move {
                    let result = search.search(&query, mode).await;
                    // Receiver only goes away when the app is dropped
                    let _ = tx.send(Message::SearchCompleted { seq, result });
                });
            }
            Command::LoadDetail { seq, id } => {
                let details = self.details.clone();
                tokio::spawn(async move {
                    let result = details.load_detail(&id).await;
                    let _ = tx.send(Message::DetailCompleted { seq, result });
                });
            }
        }
    }

    /// Wait for the next finished request
    pub async fn next_message(&mut self) -> Option<Message> {
        let message = self.rx.recv().await;
        self.pending = self.pending.saturating_sub(1);
        message
    }

    /// Receive and apply completions until nothing is in flight
    pub async fn run_until_idle(&mut self) {
        while !self.is_idle() {
            match self.next_message().await {
                Some(message) => self.dispatch(message),
                None => break,
            }
        }
    }

    /// Translate a typed line into messages.
    ///
    /// Returns a line of feedback for inputs that do not change state.
    pub fn handle_input(&mut self, input: Input) -> Option<String> {
        match input {
            Input::Search(query) => {
                self.dispatch(Message::QueryChanged(query));
                self.dispatch(Message::SubmitSearch);
                None
            }
            Input::Mode(mode) => {
                self.dispatch(Message::ModeChanged(mode));
                None
            }
            Input::View(position) => match self.state.result_at(position).map(|m| m.id.clone()) {
                Some(id) => {
                    self.dispatch(Message::ViewMeal(id));
                    None
                }
                None => Some(format!("No result #{position}")),
            },
            Input::Open(position) => match self.state.favorite_at(position).map(|m| m.id.clone()) {
                Some(id) => {
                    self.dispatch(Message::ViewMeal(id));
                    None
                }
                None => Some(format!("No favorite #{position}")),
            },
            Input::Favorite(Some(position)) => match self.state.result_at(position).cloned() {
                Some(meal) => {
                    self.dispatch(Message::ToggleFavorite(meal));
                    None
                }
                None => Some(format!("No result #{position}")),
            },
            Input::Favorite(None) => match self.state.detail.meal.as_ref().map(|m| m.summary()) {
                Some(meal) => {
                    self.dispatch(Message::ToggleFavorite(meal));
                    None
                }
                None => Some("No meal selected".to_string()),
            },
            Input::Favorites => {
                let names: Vec<String> = self
                    .state
                    .favorites
                    .list()
                    .iter()
                    .enumerate()
                    .map(|(i, meal)| format!("{:>2}. {} ({})", i + 1, meal.name, meal.id))
                    .collect();
                if names.is_empty() {
                    Some("No favorites yet".to_string())
                } else {
                    Some(names.join("\n"))
                }
            }
            Input::Help => Some(HELP.to_string()),
            Input::Quit => None,
            Input::Invalid(line) => Some(format!("Unknown command: {line} (try /help)")),
        }
    }
}
