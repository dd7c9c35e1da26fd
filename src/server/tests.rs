//! Server Module Tests
//!
//! ## Test Scopes
//! - **Config**: Flag parsing, environment fallbacks and defaults.
//! - **Routes**: Drives the axum router in-process and checks status codes and bodies.

#[cfg(test)]
mod tests {
    use crate::phrases::index::PhraseIndex;
    use crate::phrases::types::{HealthResponse, Phrase, RootResponse};
    use crate::server::config::{
        DEFAULT_BIND, DEFAULT_DATA_PATH, ENV_BIND, ENV_DATA_PATH, ServerConfig,
    };
    use crate::server::routes::build_router;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde::de::DeserializeOwned;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    // ============================================================
    // CONFIG TESTS
    // ============================================================

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_sources(args(&[]), no_env).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_from_flags() {
        let config = ServerConfig::from_sources(
            args(&["--bind", "0.0.0.0:9000", "--data", "/srv/phrases.json", "--verbose"]),
            no_env,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_path, PathBuf::from("/srv/phrases.json"));
        assert!(config.verbose);
    }

    #[test]
    fn test_config_env_fallback() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_BIND, "127.0.0.1:7000"),
            (ENV_DATA_PATH, "/env/phrases.json"),
        ]);

        let config =
            ServerConfig::from_sources(args(&[]), |key| env.get(key).map(|v| v.to_string()))
                .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_path, PathBuf::from("/env/phrases.json"));
    }

    #[test]
    fn test_config_flags_override_env() {
        let config = ServerConfig::from_sources(args(&["--bind", "127.0.0.1:5001"]), |key| {
            (key == ENV_BIND).then(|| "127.0.0.1:7000".to_string())
        })
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:5001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_config_invalid_bind_address() {
        let result = ServerConfig::from_sources(args(&["--bind", "not-an-address"]), no_env);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }

    #[test]
    fn test_config_flag_without_value() {
        assert!(ServerConfig::from_sources(args(&["--bind"]), no_env).is_err());
        assert!(ServerConfig::from_sources(args(&["--data", "--verbose"]), no_env).is_err());
    }

    #[test]
    fn test_config_ignores_unknown_arguments() {
        let config = ServerConfig::from_sources(args(&["--colour", "--verbose"]), no_env).unwrap();
        assert!(config.verbose);
    }

    // ============================================================
    // ROUTE TESTS
    // ============================================================

    fn test_index() -> Arc<PhraseIndex> {
        let json = br#"[
            {"text": "Eish", "category": "expression", "explainLikeImDutch": ""},
            {"text": "Lekker", "category": "slang", "explainLikeImDutch": "Means cool/nice"},
            {"text": "Dutch", "category": "slang", "explainLikeImDutch": "A shared potluck"}
        ]"#;
        Arc::new(PhraseIndex::from_slice(json).unwrap())
    }

    async fn get<T: DeserializeOwned>(index: Arc<PhraseIndex>, uri: &str) -> (StatusCode, T) {
        let response = build_router(index)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_route_root() {
        let (status, body): (_, RootResponse) = get(test_index(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.name, "Saffa as a Service");
        assert_eq!(body.status, "Sharp sharp!");
    }

    #[tokio::test]
    async fn test_route_random_phrase() {
        let (status, body): (_, Phrase) = get(test_index(), "/phrase").await;

        assert_eq!(status, StatusCode::OK);
        assert!(["Eish", "Lekker", "Dutch"].contains(&body.text.as_str()));
    }

    #[tokio::test]
    async fn test_route_random_dutch_phrase() {
        let (status, body): (_, Phrase) = get(test_index(), "/phrase/dutch").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.has_dutch_explanation());
    }

    #[tokio::test]
    async fn test_route_by_term_found_and_missing() {
        let (status, body): (_, Option<Phrase>) = get(test_index(), "/phrase/LEKKER").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap().text, "Lekker");

        let (status, body): (_, Option<Phrase>) = get(test_index(), "/phrase/doesnotexist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_route_by_category() {
        let (status, body): (_, Vec<Phrase>) = get(test_index(), "/phrase/category/Slang").await;
        assert_eq!(status, StatusCode::OK);
        let texts: Vec<String> = body.into_iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["Lekker", "Dutch"]);

        let (status, body): (_, Vec<Phrase>) = get(test_index(), "/phrase/category/unknown").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_route_for_dutch() {
        let (status, body): (_, Vec<Phrase>) = get(test_index(), "/phrases/dutch").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].text, "Lekker");
    }

    #[tokio::test]
    async fn test_route_health() {
        let (status, body): (_, HealthResponse) = get(test_index(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "Healthy");
        assert_eq!(body.phrases, 3);
    }

    #[tokio::test]
    async fn test_route_random_on_empty_index_returns_default() {
        let index = Arc::new(PhraseIndex::from_phrases(Vec::new()));

        let (status, body): (_, Phrase) = get(index.clone(), "/phrase").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Phrase::default());

        let (status, body): (_, Phrase) = get(index, "/phrase/dutch").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Phrase::default());
    }
}
