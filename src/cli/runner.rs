//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::naming::collection_field_name;
use crate::pagination::{PaginatedCollection, PaginationAdapter};
use crate::representer::LinkFormat;
use crate::source::{JsonPage, DEFAULT_ITEMS_KEY};
use crate::types::JsonValue;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command, returning its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Render {
                config,
                input,
                items_key,
                link_format,
                pretty,
            } => self.render(config, input, items_key, *link_format, *pretty),
            Commands::Inspect { input } => self.inspect(input),
            Commands::Name { type_name } => Ok(collection_field_name(type_name)),
        }
    }

    fn render(
        &self,
        config: &Path,
        input: &Path,
        items_key: &str,
        link_format: Option<LinkFormat>,
        pretty: bool,
    ) -> Result<String> {
        let mut config = load_config(config)?;
        if let Some(format) = link_format {
            config.link_format = format;
        }

        let page = read_page(input, items_key)?;
        let representer = config.page_representer::<JsonValue>()?;
        info!(
            input = %input.display(),
            collection = %representer.collection_name(),
            "Rendering page"
        );

        if pretty {
            representer.to_json_pretty(&page)
        } else {
            representer.to_json(&page)
        }
    }

    fn inspect(&self, input: &Path) -> Result<String> {
        let page = read_page(input, DEFAULT_ITEMS_KEY)?;
        let adapter = PaginationAdapter::new(&page)?;
        let state = adapter.state()?;
        let report = json!({
            "convention": adapter.convention(),
            "state": state,
            "items": page.items().len(),
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

fn read_page(path: &Path, items_key: &str) -> Result<JsonPage> {
    let content = fs::read_to_string(path)?;
    JsonPage::from_value_with_items_key(serde_json::from_str(&content)?, items_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args).unwrap())
    }

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join("songs.yaml"),
            "base_url: http://www.example.com/songs\ndecorator: TopSongsRepresenter\n",
        )
        .unwrap();
        fs::write(
            dir.join("page.json"),
            r#"{"current_page": 2, "limit_value": 1, "total_count": 3,
                "next_page": 3, "prev_page": 1, "items": [{"name": "One More Time"}]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_name_command() {
        let output = runner(&["pagelinks", "name", "TopSongsRepresenter"])
            .execute()
            .unwrap();
        assert_eq!(output, "top_songs");
    }

    #[test]
    fn test_render_command() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let config = dir.path().join("songs.yaml");
        let input = dir.path().join("page.json");

        let output = runner(&[
            "pagelinks",
            "render",
            "--config",
            config.to_str().unwrap(),
            "--input",
            input.to_str().unwrap(),
        ])
        .execute()
        .unwrap();

        assert_eq!(
            output,
            concat!(
                r#"{"total_entries":3,"links":["#,
                r#"{"rel":"self","href":"http://www.example.com/songs?page=2&per_page=1"},"#,
                r#"{"rel":"next","href":"http://www.example.com/songs?page=3&per_page=1"},"#,
                r#"{"rel":"previous","href":"http://www.example.com/songs?page=1&per_page=1"}"#,
                r#"],"top_songs":[{"name":"One More Time"}]}"#
            )
        );
    }

    #[test]
    fn test_render_command_hal_override() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let config = dir.path().join("songs.yaml");
        let input = dir.path().join("page.json");

        let output = runner(&[
            "pagelinks",
            "render",
            "-c",
            config.to_str().unwrap(),
            "-i",
            input.to_str().unwrap(),
            "--link-format",
            "hal",
        ])
        .execute()
        .unwrap();

        let doc: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(
            doc["_links"]["self"]["href"],
            "http://www.example.com/songs?page=2&per_page=1"
        );
    }

    #[test]
    fn test_inspect_command() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let input = dir.path().join("page.json");

        let output = runner(&["pagelinks", "inspect", "-i", input.to_str().unwrap()])
            .execute()
            .unwrap();
        let report: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(report["convention"], json!({"uniform": "limit_value"}));
        assert_eq!(report["state"]["per_page"], json!(1));
        assert_eq!(report["state"]["previous_page"], json!(1));
        assert_eq!(report["items"], json!(1));
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let result = runner(&["pagelinks", "inspect", "-i", missing.to_str().unwrap()]).execute();
        assert!(result.is_err());
    }
}
