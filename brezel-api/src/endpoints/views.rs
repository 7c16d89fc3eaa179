//! View endpoints.

use brezel_core::error::BrezelResult;

use crate::client::Client;
use crate::url::Params;

impl Client {
    /// Fetch a rendered view. Views are delivered as text, not JSON.
    pub async fn fetch_view(&self, view: &str) -> BrezelResult<String> {
        let response = self
            .get(&["views".into(), view.into()], &Params::new())
            .await?;
        Client::decode_text(response).await
    }
}
