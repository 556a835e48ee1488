use crate::error::ApiError;
use crate::model::Film;

/// Terminal input forwarded from the reader task to the main loop.
#[derive(Debug)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
}

/// IO commands sent from the app to the network task.
#[derive(Debug)]
pub enum IoEvent {
    FetchFilms,
    /// Full-record PUT; the payload already carries the local mutation.
    UpdateFilm(Film),
    DeleteFilm(u64),
}

/// Results dispatched back to update App state.
#[derive(Debug)]
pub enum Action {
    FilmsLoaded(Vec<Film>),
    FilmsFailed(ApiError),
    FilmUpdated(Film),
    UpdateFailed(u64, ApiError),
    FilmDeleted(u64),
    DeleteFailed(u64, ApiError),
}
