//! Minimal GraphQL transport for the upstream candidate API, with a
//! bounded in-process response cache keyed by the sha256 of the request.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Upstream endpoint, read at call time so deployments can repoint it
/// without a rebuild.
fn graphql_endpoint() -> String {
    std::env::var("CANDIDATE_GRAPHQL_URL").unwrap_or("http://localhost:4000/graphql".to_string())
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlResponseError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponseError {
    pub message: String,
}


const RESPONSE_CACHE_CAPACITY: usize = 64;

/// Response bodies keyed by request digest, oldest entry evicted first.
/// Only bodies that parsed into a successful payload are ever stored.
struct ResponseCache {
    entries: HashMap<String, String>,
    insertion_order: VecDeque<String>,
    capacity: usize,
}

impl ResponseCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            capacity,
        }
    }

    fn get(&self, request_hash: &str) -> Option<String> {
        self.entries.get(request_hash).cloned()
    }

    fn insert(&mut self, request_hash: String, response_body: String) {
        if self.entries.insert(request_hash.clone(), response_body).is_none() {
            self.insertion_order.push_back(request_hash);
        }
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }
}

fn response_cache() -> &'static Mutex<ResponseCache> {
    static CACHE: OnceLock<Mutex<ResponseCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(ResponseCache::new(RESPONSE_CACHE_CAPACITY)))
}

fn cached_response(request_hash: &str) -> Option<String> {
    let cache = response_cache().lock().unwrap_or_else(|e| e.into_inner());
    cache.get(request_hash)
}

fn insert_cached_response(request_hash: &str, response_body: &str) {
    let mut cache = response_cache().lock().unwrap_or_else(|e| e.into_inner());
    cache.insert(request_hash.to_string(), response_body.to_string());
}

/// Extracts the `data` payload; GraphQL-level `errors` surface as errors.
fn parse_graphql_payload<T: DeserializeOwned>(response_txt: &str) -> anyhow::Result<T> {
    let response: GraphqlResponse<T> = serde_json::from_str(response_txt)?;
    if let Some(error) = response.errors.first() {
        anyhow::bail!("graphql error: {}", error.message);
    }
    response
        .data
        .ok_or_else(|| anyhow::anyhow!("graphql response carried no data"))
}

/// Posts one GraphQL operation and returns its `data` payload. HTTP-level
/// failures and GraphQL-level `errors` both surface as plain errors. A
/// repeated request is answered from the in-process cache; a cached body
/// that no longer parses falls through to the network.
pub async fn graphql_request<T: DeserializeOwned>(
    query: &str,
    variables: serde_json::Value,
) -> anyhow::Result<T> {
    let body = serde_json::to_string(&GraphqlRequest { query, variables })?;
    let request_hash = sha256::digest(body.clone());

    if let Some(cached_body) = cached_response(&request_hash) {
        if let Ok(payload) = parse_graphql_payload::<T>(&cached_body) {
            tracing::debug!(hash = %request_hash, "graphql cache hit");
            return Ok(payload);
        }
    }

    let t0 = std::time::Instant::now();
    let client = reqwest::Client::new();
    let response = client
        .post(graphql_endpoint())
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("upstream error {}: {}", status, response_txt);
    }
    tracing::debug!(
        len = response_txt.len(),
        ms = t0.elapsed().as_millis() as u64,
        "graphql response"
    );

    let payload = parse_graphql_payload::<T>(&response_txt)?;
    insert_cached_response(&request_hash, &response_txt);
    Ok(payload)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u64,
    }

    #[test]
    fn response_data_and_errors_deserialize() {
        let ok: GraphqlResponse<Payload> =
            serde_json::from_str(r#"{"data": {"value": 7}}"#).unwrap();
        assert_eq!(ok.data, Some(Payload { value: 7 }));
        assert!(ok.errors.is_empty());

        let failed: GraphqlResponse<Payload> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "boom", "path": ["candidates"]}]}"#,
        )
        .unwrap();
        assert!(failed.data.is_none());
        assert_eq!(failed.errors[0].message, "boom");
    }

    #[test]
    fn graphql_level_errors_fail_the_payload_parse() {
        let parsed = parse_graphql_payload::<Payload>(r#"{"data": {"value": 3}}"#).unwrap();
        assert_eq!(parsed, Payload { value: 3 });

        let failed = parse_graphql_payload::<Payload>(
            r#"{"data": null, "errors": [{"message": "boom"}]}"#,
        );
        assert!(failed.unwrap_err().to_string().contains("boom"));

        let missing = parse_graphql_payload::<Payload>(r#"{"data": null}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn identical_request_bodies_hash_to_the_same_key() {
        let a = sha256::digest(r#"{"query":"q","variables":{}}"#.to_string());
        let b = sha256::digest(r#"{"query":"q","variables":{}}"#.to_string());
        let c = sha256::digest(r#"{"query":"q","variables":{"limit":10}}"#.to_string());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn cache_returns_stored_bodies_and_overwrites_in_place() {
        let mut cache = ResponseCache::new(4);
        assert_eq!(cache.get("k1"), None);
        cache.insert("k1".to_string(), "body-1".to_string());
        assert_eq!(cache.get("k1").as_deref(), Some("body-1"));
        cache.insert("k1".to_string(), "body-2".to_string());
        assert_eq!(cache.get("k1").as_deref(), Some("body-2"));
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn cache_evicts_the_oldest_entry_at_capacity() {
        let mut cache = ResponseCache::new(2);
        cache.insert("k1".to_string(), "b1".to_string());
        cache.insert("k2".to_string(), "b2".to_string());
        cache.insert("k3".to_string(), "b3".to_string());
        assert_eq!(cache.get("k1"), None);
        assert_eq!(cache.get("k2").as_deref(), Some("b2"));
        assert_eq!(cache.get("k3").as_deref(), Some("b3"));
        assert_eq!(cache.entries.len(), 2);
    }
}
