//! System-level endpoints: API keys, spec, license plans, translations.

use serde_json::Value;

use brezel_core::error::BrezelResult;

use crate::client::Client;
use crate::url::Params;

impl Client {
    /// Fetch the public API keys of the system.
    pub async fn fetch_keys(&self) -> BrezelResult<Value> {
        let response = self.get(&["keys".into()], &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// Fetch the API specification document.
    pub async fn fetch_spec(&self) -> BrezelResult<Value> {
        let response = self.get(&["spec".into()], &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// List the available license plans.
    pub async fn fetch_license_plans(&self) -> BrezelResult<Value> {
        let response = self.get(&["plans".into()], &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// Fetch the license plan of the current system.
    pub async fn fetch_current_plan(&self) -> BrezelResult<Value> {
        let response = self
            .get(&["plans".into(), "currentPlan".into()], &Params::new())
            .await?;
        Client::decode_json(response).await
    }

    /// Fetch the translation mapping of the system.
    pub async fn fetch_translations(&self) -> BrezelResult<Value> {
        let response = self.get(&["translations".into()], &Params::new()).await?;
        Client::decode_json(response).await
    }
}
