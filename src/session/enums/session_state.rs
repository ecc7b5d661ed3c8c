#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum SessionState {
    Idle,
    AwaitingConnect,
    AwaitingAnnounce,
    Waiting,
    Destroyed,
}
