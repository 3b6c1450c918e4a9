// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Config file -> runtime -> run, using on-disk fixtures.

#[cfg(test)]
mod tests {
    use crate::config::{load_and_validate_config, load_dataset, RuntimeBuilder};
    use crate::errors::{ConfigError, PipelineError};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_yaml_config_with_json_lines_store() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("out").join("records.jsonl");
        let config_path = dir.path().join("pipeline.yaml");
        std::fs::write(
            &config_path,
            format!(
                "max_concurrency: 3\nstore:\n  type: json_lines\n  path: {}\n",
                store_path.display()
            ),
        )
        .unwrap();

        let cfg = load_and_validate_config(&config_path).unwrap();
        let coordinator = RuntimeBuilder::from_config(&cfg).await.unwrap();

        assert_eq!(coordinator.max_concurrency(), 3);
        assert!(store_path.exists());
    }

    #[tokio::test]
    async fn test_unopenable_store_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let config_path = dir.path().join("pipeline.toml");
        std::fs::write(
            &config_path,
            format!(
                "[store]\ntype = \"json_lines\"\npath = \"{}\"\n",
                blocker.join("records.jsonl").display()
            ),
        )
        .unwrap();

        let cfg = load_and_validate_config(&config_path).unwrap();
        let result = RuntimeBuilder::from_config(&cfg).await;

        assert!(matches!(result, Err(PipelineError::StoreInit(_))));
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("pipeline.yaml");
        std::fs::write(&config_path, "max_concurrency: 0\n").unwrap();

        let result = load_and_validate_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let result = load_and_validate_config(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[tokio::test]
    async fn test_empty_dataset_runs_twice_with_zero_documents() {
        let dir = tempdir().unwrap();
        let cfg = crate::config::Config {
            dataset: dir.path().join("missing.json"),
            ..Default::default()
        };
        let coordinator = RuntimeBuilder::from_config(&cfg).await.unwrap();

        for _ in 0..2 {
            let dataset = load_dataset(&cfg.dataset);
            let run = coordinator.run(&dataset).await;
            assert_eq!(run.report.total_documents, 0);
            assert_eq!(run.report.succeeded, 0);
            assert!(run.records.unwrap().is_empty());
        }
    }
}
