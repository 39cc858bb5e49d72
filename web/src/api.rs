use gloo::net::http::Request;
use jeopardy_core::{
    CategoryId, CategoryPayload, CategorySummary, TriviaError, TriviaResult, TriviaSource,
};
use serde::de::DeserializeOwned;

/// jService-compatible trivia API reached over `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JService {
    base_url: String,
}

impl JService {
    pub(crate) const DEFAULT_BASE_URL: &'static str = "https://jservice.io/api/";

    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    fn categories_url(&self, count: usize) -> String {
        format!("{}categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}category?id={}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(url: &str) -> TriviaResult<T> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| TriviaError::Request(err.to_string()))?;

        if !response.ok() {
            return Err(TriviaError::Status {
                code: response.status(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| TriviaError::Decode(err.to_string()))
    }
}

impl Default for JService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

impl TriviaSource for JService {
    async fn category_pool(&self, count: usize) -> TriviaResult<Vec<CategorySummary>> {
        Self::get_json(&self.categories_url(count)).await
    }

    async fn category(&self, id: CategoryId) -> TriviaResult<CategoryPayload> {
        Self::get_json(&self.category_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_the_base_url() {
        let api = JService::default();

        assert_eq!(
            api.categories_url(100),
            "https://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            api.category_url(CategoryId(11496)),
            "https://jservice.io/api/category?id=11496"
        );
    }

    #[test]
    fn base_url_gets_a_trailing_slash() {
        let api = JService::new("http://localhost:3000/api");

        assert_eq!(
            api.categories_url(6),
            "http://localhost:3000/api/categories?count=6"
        );
    }
}
