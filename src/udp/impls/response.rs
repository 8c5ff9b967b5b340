use std::io;
use std::io::{Cursor, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_CONNECT, ACTION_ERROR, ACTION_SCRAPE};

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeResponse> for Response {
    fn from(r: ScrapeResponse) -> Self {
        Self::Scrape(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Response::Connect(r) => r.transaction_id,
            Response::Scrape(r) => r.transaction_id,
            Response::Error(r) => r.transaction_id,
        }
    }

    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Scrape(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                for torrent_stat in &r.torrent_stats {
                    bytes.write_u32::<NetworkEndian>(torrent_stat.seeders)?;
                    bytes.write_u32::<NetworkEndian>(torrent_stat.completed)?;
                    bytes.write_u32::<NetworkEndian>(torrent_stat.leechers)?;
                }
            }
            Response::Error(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_ERROR)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_all(r.message.as_bytes())?;
            }
        }
        Ok(())
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => 16,
            Response::Scrape(r) => 8 + (r.torrent_stats.len() * 12),
            Response::Error(r) => 8 + r.message.len(),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Decodes a tracker reply. Truncated packets and unknown actions are
    /// `InvalidData` / `UnexpectedEof` errors.
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        let mut cursor = Cursor::new(bytes);
        let action = cursor.read_i32::<NetworkEndian>()?;
        let transaction_id = TransactionId(cursor.read_i32::<NetworkEndian>()?);

        match action {
            ACTION_CONNECT => {
                let connection_id = cursor.read_i64::<NetworkEndian>()?;
                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                }.into())
            }

            ACTION_SCRAPE => {
                let remaining_bytes = &bytes[cursor.position() as usize..];
                Ok(ScrapeResponse {
                    transaction_id,
                    torrent_stats: parse_scrape_stats(remaining_bytes)?,
                }.into())
            }

            ACTION_ERROR => {
                let message_bytes = &bytes[cursor.position() as usize..];
                Ok(ErrorResponse {
                    transaction_id,
                    message: String::from_utf8_lossy(message_bytes).into_owned().into(),
                }.into())
            }

            _ => Err(io::Error::new(io::ErrorKind::InvalidData, format!("Invalid action {action}"))),
        }
    }
}

#[inline]
fn parse_scrape_stats(bytes: &[u8]) -> Result<Vec<TorrentScrapeStatistics>, io::Error> {
    let chunk_size = 12;
    let mut stats = Vec::with_capacity(bytes.len() / chunk_size);
    for chunk in bytes.chunks_exact(chunk_size) {
        let mut cursor = Cursor::new(chunk);
        stats.push(TorrentScrapeStatistics {
            seeders: cursor.read_u32::<NetworkEndian>()?,
            completed: cursor.read_u32::<NetworkEndian>()?,
            leechers: cursor.read_u32::<NetworkEndian>()?,
        });
    }
    Ok(stats)
}
