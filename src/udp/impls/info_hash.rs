use std::fmt;
use std::fmt::Formatter;
use crate::udp::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for InfoHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = InfoHash([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = hex::FromHexError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(InfoHash(bytes))
    }
}
