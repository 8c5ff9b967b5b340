use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::info_hash_error::InfoHashError;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl std::str::FromStr for InfoHash {
    type Err = InfoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(InfoHashError::InvalidLength(s.len()));
        }
        let mut result = InfoHash([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0).map_err(|_| InfoHashError::InvalidHex(s.to_string()))?;
        Ok(result)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = InfoHashError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| InfoHashError::InvalidByteLength(data.len()))?;
        Ok(InfoHash(bytes))
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl InfoHash {
    /// Parses an optional, possibly padded hex string; blanks and malformed
    /// values are `None`.
    pub fn parse_lenient(value: Option<&str>) -> Option<InfoHash> {
        value.map(str::trim).and_then(|value| value.parse().ok())
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct InfoHashVisitor;

        impl<'de> serde::de::Visitor<'de> for InfoHashVisitor {
            type Value = InfoHash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<InfoHash>().map_err(E::custom)
            }
        }
        des.deserialize_str(InfoHashVisitor)
    }
}
