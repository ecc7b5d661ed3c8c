use std::fmt;
use std::fmt::Formatter;
use crate::udp::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for PeerId {
    type Err = hex::FromHexError;

    /// Accepts either the 20 raw characters of the id (`-TR3000-xxxxxxxxxxxx`)
    /// or its 40 character hex form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = PeerId([0u8; 20]);
        match s.len() {
            20 => result.0.copy_from_slice(s.as_bytes()),
            40 => hex::decode_to_slice(s, &mut result.0)?,
            _ => return Err(hex::FromHexError::InvalidStringLength),
        }
        Ok(result)
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = hex::FromHexError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(PeerId(bytes))
    }
}
