use crate::udp::enums::action::Action;

impl Action {
    #[inline]
    pub fn from_i32(i: i32) -> Option<Self> {
        match i {
            0 => Some(Self::Connect),
            1 => Some(Self::Announce),
            3 => Some(Self::Error),
            _ => None,
        }
    }
}
