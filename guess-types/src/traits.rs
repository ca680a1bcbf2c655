use rand::Rng;

use crate::App;

/// Trait for frontends that let a player drive an [`App`].
///
/// A backend shows the current screen, turns input into
/// [`Action`](crate::Action)s for [`App::dispatch`] and re-renders from the
/// app state. How screens look (line prompts, full-screen panels, ...) is up
/// to the backend.
pub trait GameBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the session until the player quits.
    ///
    /// # Returns
    /// * `Ok(())` when the player chose to quit
    /// * `Err` on cancellation (Ctrl+C, Esc) or backend failure
    fn play<R: Rng>(&self, app: &mut App<R>) -> Result<(), Self::Error>;
}
