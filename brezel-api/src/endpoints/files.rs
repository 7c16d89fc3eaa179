//! File endpoints.

use brezel_core::error::BrezelResult;

use crate::client::Client;
use crate::url::Params;

/// Requested rendition of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSize {
    /// Thumbnail rendition.
    Mini,
    /// Original rendition.
    Default,
}

impl FileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileSize::Mini => "mini",
            FileSize::Default => "default",
        }
    }
}

impl Client {
    /// Download a file as raw bytes.
    pub async fn fetch_file(&self, id: i64, size: Option<FileSize>) -> BrezelResult<Vec<u8>> {
        let mut params = Params::new();
        params.insert_opt("size", size.map(|s| s.as_str()));
        let response = self
            .get(&["files".into(), id.into()], &params)
            .await?;
        Client::decode_bytes(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size_param_values() {
        assert_eq!(FileSize::Mini.as_str(), "mini");
        assert_eq!(FileSize::Default.as_str(), "default");
    }
}
