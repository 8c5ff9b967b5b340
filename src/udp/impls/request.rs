use std::io;
use std::io::{Cursor, Read, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::enums::request::Request;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_CONNECT, ACTION_SCRAPE, PROTOCOL_IDENTIFIER};

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeRequest> for Request {
    fn from(r: ScrapeRequest) -> Self {
        Self::Scrape(r)
    }
}

impl Request {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Request::Connect(r) => {
                bytes.write_i64::<NetworkEndian>(PROTOCOL_IDENTIFIER)?;
                bytes.write_i32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Scrape(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                for info_hash in r.info_hashes {
                    bytes.write_all(&info_hash.0)?;
                }
            }
        }

        Ok(())
    }

    pub fn write_to_vec(self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = match &self {
            Request::Connect(_) => Vec::with_capacity(16),
            Request::Scrape(r) => Vec::with_capacity(16 + r.info_hashes.len() * 20),
        };
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Decodes a connect or scrape packet, as a tracker would receive it.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        let mut cursor = Cursor::new(bytes);
        let connection_id = cursor.read_i64::<NetworkEndian>()?;
        let action = cursor.read_i32::<NetworkEndian>()?;
        let transaction_id = cursor.read_i32::<NetworkEndian>()?;

        match action {
            ACTION_CONNECT => {
                if connection_id != PROTOCOL_IDENTIFIER {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Protocol identifier missing"));
                }
                Ok(ConnectRequest {
                    transaction_id: TransactionId(transaction_id),
                }.into())
            }

            ACTION_SCRAPE => {
                let mut info_hashes = Vec::new();
                let mut info_hash = [0u8; 20];
                while cursor.read_exact(&mut info_hash).is_ok() {
                    info_hashes.push(InfoHash(info_hash));
                }
                if info_hashes.is_empty() {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Scrape without info hashes"));
                }
                Ok(ScrapeRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hashes,
                }.into())
            }

            _ => Err(io::Error::new(io::ErrorKind::InvalidData, format!("Unsupported action {action}"))),
        }
    }
}
