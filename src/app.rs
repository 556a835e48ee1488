use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::action::{Action, IoEvent};
use crate::error::ApiError;
use crate::model::Film;

/// Literal shown in the list panel when the fetch itself fails.
pub const FETCH_ERROR_TEXT: &str = "Error fetching data.";
/// Literal shown when the backend answers with something other than an array.
pub const INVALID_FORMAT_TEXT: &str = "Invalid JSON format. Expected an array of movies.";

pub struct App {
    pub running: bool,
    pub show_help: bool,

    /// Ordered collection, in the order the server returned it.
    pub films: Vec<Film>,
    /// The film shown in the details panel.
    pub current: Option<Film>,
    /// List cursor; independent of `current` until Enter selects.
    pub selected: usize,

    pub list_error: Option<String>,
    /// Buy/delete keys only act after a successful initial fetch,
    /// mirroring buttons that never got their handlers attached.
    pub controls_wired: bool,
    pub loading: bool,
    pub last_refreshed: Option<DateTime<Local>>,

    io_tx: mpsc::UnboundedSender<IoEvent>,
}

impl App {
    pub fn new(io_tx: mpsc::UnboundedSender<IoEvent>) -> Self {
        Self {
            running: true,
            show_help: false,
            films: Vec::new(),
            current: None,
            selected: 0,
            list_error: None,
            controls_wired: false,
            loading: false,
            last_refreshed: None,
            io_tx,
        }
    }

    pub fn dispatch_io(&self, event: IoEvent) {
        let _ = self.io_tx.send(event);
    }

    pub fn init(&mut self) {
        self.refresh();
    }

    /// Re-fetch the whole collection. Also the only way to converge again
    /// after a buy/delete completion was lost.
    pub fn refresh(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.dispatch_io(IoEvent::FetchFilms);
    }

    /// Single state-transition function for network completions.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::FilmsLoaded(films) => {
                self.loading = false;
                self.list_error = None;
                self.films = films;
                self.selected = 0;
                self.current = self.films.first().cloned();
                self.controls_wired = true;
                self.last_refreshed = Some(Local::now());
            }
            Action::FilmsFailed(err) => {
                self.loading = false;
                log::error!("fetch failed: {}", err);
                self.list_error = Some(
                    match err {
                        ApiError::InvalidFormat => INVALID_FORMAT_TEXT,
                        _ => FETCH_ERROR_TEXT,
                    }
                    .to_string(),
                );
                self.films.clear();
                self.current = None;
                self.selected = 0;
                self.controls_wired = false;
            }
            Action::FilmUpdated(film) => {
                // Server is authoritative: its record replaces both the
                // details panel and the collection entry, even if the user
                // moved on while the request was in flight.
                if let Some(entry) = self.films.iter_mut().find(|f| f.id == film.id) {
                    *entry = film.clone();
                }
                self.current = Some(film);
            }
            Action::UpdateFailed(id, err) => {
                // Deliberately no rollback of the local increment.
                log::error!("update for film {} failed: {}", id, err);
            }
            Action::FilmDeleted(id) => {
                if let Some(pos) = self.films.iter().position(|f| f.id == id) {
                    self.films.remove(pos);
                }
                self.current = None;
                self.selected = 0;
                if let Some(first) = self.films.first() {
                    self.current = Some(first.clone());
                }
            }
            Action::DeleteFailed(id, err) => {
                // Collection keeps the stale entry until the next refresh.
                log::error!("delete for film {} failed: {}", id, err);
            }
        }
    }

    // Navigation

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if !self.films.is_empty() && self.selected < self.films.len() - 1 {
            self.selected += 1;
        }
    }

    /// Enter on a list row: that film becomes current.
    pub fn select_highlighted(&mut self) {
        if let Some(film) = self.films.get(self.selected) {
            self.current = Some(film.clone());
        }
    }

    // Actions

    /// Guarded no-op unless a non-sold-out film is current. Mutates local
    /// state first, then dispatches the full-record update.
    pub fn buy_ticket(&mut self) {
        if !self.controls_wired {
            return;
        }
        let Some(current) = self.current.as_mut() else {
            return;
        };
        if current.sold_out() {
            return;
        }
        current.tickets_sold += 1;
        let payload = current.clone();
        if let Some(entry) = self.films.iter_mut().find(|f| f.id == payload.id) {
            entry.tickets_sold = payload.tickets_sold;
        }
        self.dispatch_io(IoEvent::UpdateFilm(payload));
    }

    pub fn delete_current(&mut self) {
        if !self.controls_wired {
            return;
        }
        let Some(current) = &self.current else {
            return;
        };
        self.dispatch_io(IoEvent::DeleteFilm(current.id));
    }

    // Render-time derivations

    /// Buy control label and enabled state, derived purely from the
    /// sold/capacity invariant of the current film.
    pub fn buy_control(&self) -> (&'static str, bool) {
        match &self.current {
            Some(film) if film.sold_out() => ("Sold Out", false),
            Some(_) => ("Buy Ticket", true),
            None => ("Buy Ticket", false),
        }
    }

    pub fn delete_enabled(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(id: u64, title: &str, capacity: u32, tickets_sold: u32) -> Film {
        Film {
            id,
            title: title.to_string(),
            poster: format!("https://example.com/{}.jpg", id),
            runtime: 90,
            description: "desc".to_string(),
            showtime: "09:00PM".to_string(),
            capacity,
            tickets_sold,
        }
    }

    fn app() -> (App, mpsc::UnboundedReceiver<IoEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(tx), rx)
    }

    fn loaded_app() -> (App, mpsc::UnboundedReceiver<IoEvent>) {
        let (mut app, rx) = app();
        app.update(Action::FilmsLoaded(vec![
            film(1, "A", 10, 10),
            film(2, "B", 5, 0),
        ]));
        (app, rx)
    }

    #[test]
    fn load_selects_first_film_and_derives_sold_out() {
        let (app, _rx) = loaded_app();
        assert_eq!(app.films.len(), 2);
        assert_eq!(app.current.as_ref().unwrap().id, 1);
        assert_eq!(app.buy_control(), ("Sold Out", false));
        assert!(app.controls_wired);
        assert!(app.last_refreshed.is_some());
    }

    #[test]
    fn load_with_empty_list_leaves_no_current() {
        let (mut app, _rx) = app();
        app.update(Action::FilmsLoaded(Vec::new()));
        assert!(app.films.is_empty());
        assert!(app.current.is_none());
        assert!(app.controls_wired);
        assert_eq!(app.buy_control(), ("Buy Ticket", false));
    }

    #[test]
    fn buy_sends_payload_with_one_more_ticket() {
        let (mut app, mut rx) = loaded_app();
        app.move_down();
        app.select_highlighted();
        app.buy_ticket();

        match rx.try_recv().unwrap() {
            IoEvent::UpdateFilm(payload) => {
                assert_eq!(payload.id, 2);
                assert_eq!(payload.tickets_sold, 1);
            }
            other => panic!("unexpected io event: {:?}", other),
        }
        // Local state moves before the request resolves.
        assert_eq!(app.current.as_ref().unwrap().tickets_sold, 1);
        assert_eq!(app.films[1].tickets_sold, 1);

        // Server response is authoritative for the details panel.
        app.update(Action::FilmUpdated(film(2, "B", 5, 1)));
        assert_eq!(app.current.as_ref().unwrap().tickets_remaining(), 4);
    }

    #[test]
    fn buy_on_sold_out_film_is_a_no_op() {
        let (mut app, mut rx) = loaded_app();
        app.buy_ticket();
        assert!(rx.try_recv().is_err());
        assert_eq!(app.current.as_ref().unwrap().tickets_sold, 10);
        assert_eq!(app.films[0].tickets_sold, 10);
    }

    #[test]
    fn buy_without_current_film_is_a_no_op() {
        let (mut app, mut rx) = app();
        app.update(Action::FilmsLoaded(Vec::new()));
        app.buy_ticket();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn failed_update_is_not_rolled_back() {
        let (mut app, mut rx) = loaded_app();
        app.move_down();
        app.select_highlighted();
        app.buy_ticket();
        let _ = rx.try_recv();

        app.update(Action::UpdateFailed(
            2,
            ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        ));
        // Known divergence from the server: the increment stays.
        assert_eq!(app.current.as_ref().unwrap().tickets_sold, 1);
        assert_eq!(app.films[1].tickets_sold, 1);
    }

    #[test]
    fn delete_removes_one_entry_and_promotes_the_next_first() {
        let (mut app, mut rx) = loaded_app();
        app.delete_current();
        match rx.try_recv().unwrap() {
            IoEvent::DeleteFilm(id) => assert_eq!(id, 1),
            other => panic!("unexpected io event: {:?}", other),
        }

        app.update(Action::FilmDeleted(1));
        assert_eq!(app.films.len(), 1);
        assert_eq!(app.current.as_ref().unwrap().id, 2);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn deleting_the_last_film_resets_the_panel() {
        let (mut app, _rx) = app();
        app.update(Action::FilmsLoaded(vec![film(7, "Only", 3, 1)]));
        app.delete_current();
        app.update(Action::FilmDeleted(7));

        assert!(app.films.is_empty());
        assert!(app.current.is_none());
        assert_eq!(app.buy_control(), ("Buy Ticket", false));
        assert!(!app.delete_enabled());
    }

    #[test]
    fn failed_delete_leaves_the_collection_unchanged() {
        let (mut app, mut rx) = loaded_app();
        app.delete_current();
        let _ = rx.try_recv();

        app.update(Action::DeleteFailed(
            1,
            ApiError::Status(reqwest::StatusCode::NOT_FOUND),
        ));
        assert_eq!(app.films.len(), 2);
        assert_eq!(app.current.as_ref().unwrap().id, 1);
    }

    #[test]
    fn malformed_body_shows_the_literal_message_and_wires_nothing() {
        let (mut app, mut rx) = app();
        app.update(Action::FilmsFailed(ApiError::InvalidFormat));
        assert_eq!(app.list_error.as_deref(), Some(INVALID_FORMAT_TEXT));
        assert!(!app.controls_wired);

        // Unwired controls: buy and delete are dead keys.
        app.buy_ticket();
        app.delete_current();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn fetch_failure_shows_the_generic_error_message() {
        let (mut app, _rx) = app();
        app.update(Action::FilmsFailed(ApiError::Status(
            reqwest::StatusCode::BAD_GATEWAY,
        )));
        assert_eq!(app.list_error.as_deref(), Some(FETCH_ERROR_TEXT));
    }

    #[test]
    fn cursor_stays_inside_the_collection() {
        let (mut app, _rx) = loaded_app();
        app.move_up();
        assert_eq!(app.selected, 0);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 1);
    }
}
