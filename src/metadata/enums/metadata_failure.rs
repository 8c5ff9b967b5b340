/// Which negative cache tier a failed lookup lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFailure {
    NotFound,
    Unavailable,
}
