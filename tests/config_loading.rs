use pretty_assertions::assert_eq;
use recruitbot::config;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn load_from_reads_yaml_and_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "llm:\n  api_key: file-key\nserver:\n  port: 6000"
    )
    .unwrap();

    let config = config::load_from(file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(config.llm.api_key, "file-key");
    assert_eq!(config.llm.model, "models/gemini-2.5-flash");
    assert_eq!(config.server.port, 6000);
    assert_eq!(config.server.host, "127.0.0.1");
}

#[tokio::test]
async fn load_from_rejects_empty_api_key() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "llm:\n  api_key: \"\"").unwrap();

    let result = config::load_from(file.path().to_str().unwrap()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn load_from_missing_file_is_an_error() {
    let result = config::load_from("definitely-not-here.yaml").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn load_from_rejects_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "llm: [this is not a mapping").unwrap();

    let result = config::load_from(file.path().to_str().unwrap()).await;
    assert!(result.is_err());
}
