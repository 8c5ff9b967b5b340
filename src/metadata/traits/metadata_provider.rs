use async_trait::async_trait;
use crate::metadata::errors::MetadataError;
use crate::metadata::structs::torrent_metadata::TorrentMetadata;
use crate::tracker::structs::info_hash::InfoHash;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn fetch(&self, info_hash: &InfoHash) -> Result<TorrentMetadata, MetadataError>;
}
