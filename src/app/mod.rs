//! Application state and the message loop plumbing.
//!
//! [`App`] owns every piece of UI state. Network work runs in spawned tasks
//! (see [`actions`]) which report back through the [`AppMessage`] channel;
//! [`App::handle_message`] applies the results on the UI task.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::ROUTE_KEY;
pub use types::{AuthMode, BreedPicker, Focus, LoginField, LoginForm, Screen};

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::FetchClient;
use crate::favorites::{favorites_page_count, FavoriteDogs, Favorites};
use crate::matching::MatchFlow;
use crate::models::Dog;
use crate::notifications::Snackbar;
use crate::route::Route;
use crate::search::{PageIndicator, SearchOrchestrator};
use crate::session::Session;
use crate::traits::KeyValueStore;

/// Main application state
pub struct App {
    /// Current route; the screen follows from it and the session state
    pub route: Route,
    /// Who is signed in
    pub session: Session,
    /// Bumped whenever signed-in state is dropped; results tagged with an
    /// older epoch belong to a previous session
    pub session_epoch: u64,
    /// Favorite dog ids (persisted)
    pub favorites: Favorites,
    /// Records of the favorite dogs
    pub favorite_dogs: FavoriteDogs,
    /// Dog search state and results
    pub search: SearchOrchestrator,
    /// Page indicator of the search results
    pub page_indicator: PageIndicator,
    /// Page indicator of the favorites panel
    pub favorites_indicator: PageIndicator,
    /// All known breeds, loaded once per signed-in session
    pub breeds: Vec<String>,
    /// True while the breed list is being fetched
    pub breeds_loading: bool,
    /// Breed filter overlay
    pub breed_picker: BreedPicker,
    /// Match request and its modal
    pub match_flow: MatchFlow,
    /// Transient notification
    pub snackbar: Snackbar,
    /// Credentials form for login and signup
    pub login_form: LoginForm,
    /// True while a logout request is in flight
    pub logging_out: bool,
    /// Current focus panel on the search screen
    pub focus: Focus,
    /// Selected index in the result grid
    pub selected_dog: usize,
    /// Selected index on the visible favorites page
    pub selected_favorite: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// API client (shared across async tasks)
    pub client: Arc<FetchClient>,
    /// Local key/value storage shared with the client and favorites
    pub storage: Arc<dyn KeyValueStore>,
}

impl App {
    /// Create a new App starting at `route`.
    ///
    /// Without an explicit route the last stored search route is restored,
    /// falling back to the first search page.
    pub fn new(
        client: Arc<FetchClient>,
        storage: Arc<dyn KeyValueStore>,
        route: Option<Route>,
    ) -> Self {
        let route = route
            .or_else(|| navigation::restore_route(storage.as_ref()))
            .unwrap_or_else(|| Route::search(1));
        let start_page = match route {
            Route::Search { page, .. } => page,
            _ => 1,
        };

        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let favorites = Favorites::load(Arc::clone(&storage));

        Self {
            route,
            session: Session::new(),
            session_epoch: 0,
            favorites,
            favorite_dogs: FavoriteDogs::new(),
            search: SearchOrchestrator::new(start_page),
            page_indicator: PageIndicator::default(),
            favorites_indicator: PageIndicator::default(),
            breeds: Vec::new(),
            breeds_loading: false,
            breed_picker: BreedPicker::default(),
            match_flow: MatchFlow::new(),
            snackbar: Snackbar::new(),
            login_form: LoginForm::new(),
            logging_out: false,
            focus: Focus::default(),
            selected_dog: 0,
            selected_favorite: 0,
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,  // Updated on first resize
            terminal_height: 24, // Updated on first resize
            message_rx: Some(message_rx),
            message_tx,
            client,
            storage,
        }
    }

    /// Kick off startup: check a stored session or show the start route.
    pub fn start(&mut self) {
        tracing::info!("Starting at {}", self.route);
        if self.session.needs_check(&self.route) {
            self.check_session();
        } else {
            let route = self.route;
            self.navigate(route);
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Periodic housekeeping driven by the event loop.
    pub fn tick(&mut self, now: Instant) {
        if self.snackbar.tick(now) {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Screen for the current route and session state.
    pub fn screen(&self) -> Screen {
        if self.session.is_loading() {
            return Screen::Loading;
        }
        match self.route {
            Route::Login { .. } => Screen::Login,
            Route::Signup => Screen::Signup,
            Route::Search { .. } => Screen::Search,
        }
    }

    /// Flavor of the credentials form on the current screen.
    pub fn auth_mode(&self) -> AuthMode {
        match self.route {
            Route::Signup => AuthMode::Signup,
            _ => AuthMode::Login,
        }
    }

    /// 1-based favorites page from the route.
    pub fn favorites_page(&self) -> usize {
        match self.route {
            Route::Search { favorites_page, .. } => favorites_page,
            _ => 1,
        }
    }

    pub fn favorites_page_count(&self) -> usize {
        favorites_page_count(self.favorites.len())
    }

    /// Favorite dogs shown on the current favorites page.
    pub fn visible_favorites(&self) -> &[Dog] {
        self.favorite_dogs.page(self.favorites_page())
    }

    pub fn selected_dog(&self) -> Option<&Dog> {
        self.search.dogs().get(self.selected_dog)
    }

    pub fn selected_favorite_dog(&self) -> Option<&Dog> {
        self.visible_favorites().get(self.selected_favorite)
    }

    /// Keep selections inside the lists they index.
    pub(crate) fn clamp_selection(&mut self) {
        let dogs = self.search.dogs().len();
        self.selected_dog = self.selected_dog.min(dogs.saturating_sub(1));
        let favorites = self.visible_favorites().len();
        self.selected_favorite = self.selected_favorite.min(favorites.saturating_sub(1));
    }
}
