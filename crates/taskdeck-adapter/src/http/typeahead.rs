/*
[INPUT]:  Search category, prefix text and a result cap
[OUTPUT]: Typeahead suggestion lookups through the connector proxy
[POS]:    HTTP layer - typeahead endpoint
[UPDATE]: When the connector proxy contract changes
*/

use reqwest::Method;

use super::client::WorkflowClient;
use super::error::Result;
use crate::types::TypeaheadItem;

impl WorkflowClient {
    /// Search a typeahead category for items matching a prefix.
    ///
    /// `GET /connector-proxy/typeahead/{category}?prefix={prefix}&limit={limit}`
    ///
    /// The prefix is user-typed free text, so it goes through proper query
    /// encoding rather than string formatting.
    pub async fn typeahead_search(
        &self,
        category: &str,
        prefix: &str,
        limit: u32,
    ) -> Result<Vec<TypeaheadItem>> {
        let endpoint = format!("/connector-proxy/typeahead/{category}");
        let builder = self
            .api_request(Method::GET, &endpoint)?
            .query(&[("prefix", prefix), ("limit", &limit.to_string())]);
        self.send_json(builder).await
    }
}
