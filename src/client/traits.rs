use crate::session::enums::announce_error::AnnounceError;
use crate::session::structs::announce_update::AnnounceUpdate;

/// Receives the outcome of every announce cycle.
pub trait TrackerEventHandler {
    fn on_update(&mut self, update: &AnnounceUpdate);

    fn on_error(&mut self, error: &AnnounceError);
}
