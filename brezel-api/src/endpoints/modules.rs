//! Module endpoints.

use brezel_core::error::BrezelResult;

use crate::client::Client;
use crate::models::Module;
use crate::url::Params;

impl Client {
    /// List all modules of the system.
    ///
    /// `layouts` asks the server to embed layout definitions.
    pub async fn fetch_modules(&self, layouts: bool) -> BrezelResult<Vec<Module>> {
        let mut params = Params::new();
        params.insert("layouts", layouts);
        let response = self.get(&["modules".into()], &params).await?;
        Client::decode_json(response).await
    }

    /// Fetch a single module by identifier.
    pub async fn fetch_module(&self, identifier: &str) -> BrezelResult<Module> {
        let response = self
            .get(&["modules".into(), identifier.into()], &Params::new())
            .await?;
        Client::decode_json(response).await
    }
}
