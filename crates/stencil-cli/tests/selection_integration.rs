// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the CLI pipeline: config, catalog, SQLite-backed
//! selection persistence and command output.

use std::fs;
use std::path::Path;

use std::sync::Arc;

use stencil::kv::{KVError, KVResult, KVStore, MemoryKVStore};
use stencil::regions::HeaderProps;
use stencil::{header_catalog, Region, SelectionStore, TemplateSession};
use stencil_cli::commands::{self, Command, Target};
use stencil_cli::config::{Config, CONFIG_FILE};
use stencil_cli::execute;
use stencil_cli::kv::DATABASE_FILE;
use stencil_cli::workspace::Workspace;
use tempfile::tempdir;

/// Runs a command the way the binary does and returns its output.
fn run(dir: &Path, region: Option<Region>, command: Command) -> anyhow::Result<String> {
    let config = Config::load(&dir.join(CONFIG_FILE))?;
    let region = region.unwrap_or(config.catalog.region);
    let mut out = Vec::new();
    execute(&config, region, command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn select(id: &str) -> Command {
    Command::Select {
        id: id.to_string(),
        target: Target::default(),
    }
}

fn write_custom_catalog(dir: &Path, with_minimal: bool) {
    let mut templates = vec![
        serde_json::json!({
            "id": "hero", "name": "Hero", "thumbnail": "/t/hero.png", "category": "landing",
            "defaults": { "layout": "centered", "height": 120 },
            "styles": { "--header-height": 120 },
            "variant": { "mobile": { "height": 72 } }
        }),
        serde_json::json!({
            "id": "docs", "name": "Docs", "thumbnail": "/t/docs.png", "category": "content",
            "defaults": { "showSearch": true }
        }),
    ];
    if with_minimal {
        templates.push(serde_json::json!({
            "id": "plain", "name": "Minimal", "thumbnail": "/t/plain.png",
            "defaults": { "layout": "minimal" }
        }));
    }
    fs::write(
        dir.join("templates.json"),
        serde_json::to_string_pretty(&templates).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(CONFIG_FILE),
        "[project]\nname = \"custom\"\n\n[catalog]\npath = \"templates.json\"\n",
    )
    .unwrap();
}

#[test]
fn test_select_persists_across_invocations() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("No header template selected"));

    let output = run(dir.path(), None, select("header-centered")).unwrap();
    assert!(output.contains("Selected"));
    assert!(output.contains("\"layout\": \"centered\""));
    assert!(output.contains("--header-nav-gap: 32;"));

    // A fresh invocation restores the selection from the SQLite store
    assert!(dir.path().join(".stencil/data").join(DATABASE_FILE).exists());
    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("header-centered"));
    assert!(output.contains("Centered"));
}

#[test]
fn test_regions_are_remembered_separately() {
    let dir = tempdir().unwrap();

    run(dir.path(), None, select("header-split")).unwrap();
    run(dir.path(), Some(Region::Footer), select("footer-dark")).unwrap();

    let header = run(dir.path(), Some(Region::Header), Command::Current).unwrap();
    let footer = run(dir.path(), Some(Region::Footer), Command::Current).unwrap();
    assert!(header.contains("header-split"));
    assert!(footer.contains("footer-dark"));
}

#[test]
fn test_clear_forgets_selection() {
    let dir = tempdir().unwrap();

    run(dir.path(), None, select("header-classic")).unwrap();
    let output = run(dir.path(), None, Command::Clear).unwrap();
    assert!(output.contains("Cleared header template selection"));

    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("No header template selected"));
}

#[test]
fn test_reset_selects_minimal() {
    let dir = tempdir().unwrap();

    run(dir.path(), None, select("header-storefront")).unwrap();
    let output = run(
        dir.path(),
        None,
        Command::Reset {
            target: Target::default(),
        },
    )
    .unwrap();
    assert!(output.contains("\"layout\": \"minimal\""));

    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("header-minimal"));
}

#[test]
fn test_apply_uses_props_file_and_mode_without_persisting() {
    let dir = tempdir().unwrap();
    let props_path = dir.path().join("header.json");
    fs::write(
        &props_path,
        r#"{ "logo": { "text": "Acme" }, "nav": [{ "label": "Home", "href": "/" }] }"#,
    )
    .unwrap();

    let output = run(
        dir.path(),
        None,
        Command::Apply {
            id: "header-centered".to_string(),
            target: Target {
                mode: "mobile".parse().unwrap(),
                props: Some(props_path),
            },
        },
    )
    .unwrap();
    assert!(output.contains("\"layout\": \"stacked\""));
    assert!(output.contains("\"text\": \"Acme\""));
    assert!(output.contains("\"href\": \"/\""));

    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("No header template selected"));
}

#[test]
fn test_unknown_template_is_an_error() {
    let dir = tempdir().unwrap();

    assert!(run(dir.path(), None, select("nope")).is_err());
    assert!(run(
        dir.path(),
        None,
        Command::Show {
            id: "nope".to_string()
        }
    )
    .is_err());
}

#[test]
fn test_stale_selection_is_not_restored() {
    let dir = tempdir().unwrap();

    run(dir.path(), None, select("header-overlay")).unwrap();

    // The catalog changes between sessions and no longer has the template
    write_custom_catalog(dir.path(), true);
    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("No header template selected"));
}

#[test]
fn test_custom_catalog_listing_and_categories() {
    let dir = tempdir().unwrap();
    write_custom_catalog(dir.path(), true);

    run(dir.path(), None, select("docs")).unwrap();

    let output = run(dir.path(), None, Command::List { category: None }).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("hero"));
    assert!(lines[1].contains("docs"));
    assert!(lines[1].contains('●'));
    assert!(!lines[0].contains('●'));

    let output = run(
        dir.path(),
        None,
        Command::List {
            category: Some("landing".to_string()),
        },
    )
    .unwrap();
    assert_eq!(output.lines().count(), 1);

    let output = run(dir.path(), None, Command::Categories).unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), vec!["landing", "content"]);
}

#[test]
fn test_reset_without_minimal_is_noop() {
    let dir = tempdir().unwrap();
    write_custom_catalog(dir.path(), false);

    let output = run(
        dir.path(),
        None,
        Command::Reset {
            target: Target::default(),
        },
    )
    .unwrap();
    assert!(output.contains("nothing to reset"));

    let output = run(dir.path(), None, Command::Current).unwrap();
    assert!(output.contains("No header template selected"));
}

#[test]
fn test_disabled_storage_still_applies() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[storage]\nenabled = false\n").unwrap();

    let output = run(dir.path(), None, select("header-classic")).unwrap();
    assert!(output.contains("could not be saved"));
    assert!(output.contains("\"sticky\": true"));

    let output = run(dir.path(), None, Command::Clear).unwrap();
    assert!(output.contains("could not clear"));
    assert!(!dir.path().join(".stencil").exists());
}

#[test]
fn test_show_prints_record() {
    let dir = tempdir().unwrap();
    let output = run(
        dir.path(),
        Some(Region::Footer),
        Command::Show {
            id: "footer-columns".to_string(),
        },
    )
    .unwrap();

    let record: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(record["name"], "Columns");
    assert_eq!(record["variant"]["mobile"]["padding"], 24);
}

/// Keeps writes but fails every read.
struct WriteOnlyStore(MemoryKVStore);

impl KVStore for WriteOnlyStore {
    fn get(&self, _key: &str) -> KVResult<Option<Vec<u8>>> {
        Err(KVError::Storage("read failed".to_string()))
    }

    fn put(&self, key: &str, value: &[u8]) -> KVResult<()> {
        self.0.put(key, value)
    }

    fn delete(&self, key: &str) -> KVResult<()> {
        self.0.delete(key)
    }
}

/// Keeps what was stored before but rejects every write.
struct ReadOnlyStore(MemoryKVStore);

impl KVStore for ReadOnlyStore {
    fn get(&self, key: &str) -> KVResult<Option<Vec<u8>>> {
        self.0.get(key)
    }

    fn put(&self, _key: &str, _value: &[u8]) -> KVResult<()> {
        Err(KVError::QuotaExceeded)
    }

    fn delete(&self, key: &str) -> KVResult<()> {
        self.0.delete(key)
    }
}

fn workspace_over(store: Arc<dyn KVStore>) -> Workspace<HeaderProps> {
    Workspace {
        region: Region::Header,
        session: TemplateSession::new(
            Arc::new(header_catalog().unwrap()),
            SelectionStore::new(store),
        ),
    }
}

#[test]
fn test_select_reports_the_write_not_a_read_back() {
    let store = Arc::new(WriteOnlyStore(MemoryKVStore::new()));
    let workspace = workspace_over(store.clone());

    let mut out = Vec::new();
    commands::run(&workspace, select("header-split"), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.lines().next().unwrap().contains("Selected"));
    assert!(!output.contains("could not be saved"));
    assert_eq!(
        store.0.get("selectedTemplateId").unwrap().as_deref(),
        Some(&b"header-split"[..])
    );
}

#[test]
fn test_failed_write_is_reported_when_same_id_was_stored() {
    let inner = MemoryKVStore::new();
    inner.put("selectedTemplateId", b"header-split").unwrap();
    let workspace = workspace_over(Arc::new(ReadOnlyStore(inner)));

    let mut out = Vec::new();
    commands::run(&workspace, select("header-split"), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("could not be saved"));

    let mut out = Vec::new();
    let reset = Command::Reset {
        target: Target::default(),
    };
    commands::run(&workspace, reset, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("header-minimal applied, but the selection could not be saved"));
}
