use crate::session::enums::announce_error::AnnounceError;
use crate::session::structs::announce_update::AnnounceUpdate;

/// Caller-visible outcome of an announce cycle.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TrackerEvent {
    Update(AnnounceUpdate),
    Error(AnnounceError),
}
