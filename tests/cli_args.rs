//! CLI argument parsing tests.
//!
//! These tests pin down the `fuga` command-line interface.

use clap::Parser;
use fugapi::cli::{Cli, Command, Entity};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["fuga", "get", "product", "1002645007453"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert!(matches!(entity, Entity::Product));
            assert_eq!(id, 1002645007453);
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["fuga", "list", "products"]);

    assert!(!cli.json);
    match cli.command {
        Command::List { entity, page, .. } => {
            assert!(matches!(entity, Entity::Product));
            assert_eq!(page, None);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_list_with_pagination_and_filter() {
    let cli = Cli::parse_from([
        "fuga",
        "list",
        "assets",
        "--page",
        "3",
        "--page-size",
        "50",
        "--name",
        "winter",
    ]);

    match cli.command {
        Command::List {
            entity,
            page,
            page_size,
            name,
        } => {
            assert!(matches!(entity, Entity::Asset));
            assert_eq!(page, Some(3));
            assert_eq!(page_size, Some(50));
            assert_eq!(name, Some("winter".to_string()));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_create_subcommand() {
    let cli = Cli::parse_from([
        "fuga",
        "create",
        "product",
        "--name",
        "New Album",
        "--label-id",
        "100",
        "--release-format",
        "ALBUM",
    ]);

    match cli.command {
        Command::Create {
            entity,
            name,
            label_id,
            release_format,
            ..
        } => {
            assert!(matches!(entity, Entity::Product));
            assert_eq!(name, "New Album");
            assert_eq!(label_id, Some(100));
            assert_eq!(release_format, Some("ALBUM".to_string()));
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn test_cli_parses_update_subcommand() {
    let cli = Cli::parse_from([
        "fuga",
        "update",
        "product",
        "10001",
        "--name",
        "Renamed Album",
    ]);

    match cli.command {
        Command::Update {
            entity, id, name, ..
        } => {
            assert!(matches!(entity, Entity::Product));
            assert_eq!(id, 10001);
            assert_eq!(name, Some("Renamed Album".to_string()));
        }
        _ => panic!("Expected Update command"),
    }
}

#[test]
fn test_cli_parses_delete_subcommand() {
    let cli = Cli::parse_from(["fuga", "delete", "asset", "2000"]);

    match cli.command {
        Command::Delete { entity, id } => {
            assert!(matches!(entity, Entity::Asset));
            assert_eq!(id, 2000);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn test_cli_parses_publish_subcommand() {
    let cli = Cli::parse_from(["fuga", "publish", "10001"]);

    match cli.command {
        Command::Publish { id } => assert_eq!(id, 10001),
        _ => panic!("Expected Publish command"),
    }
}

#[test]
fn test_cli_json_flag_is_global() {
    let cli = Cli::parse_from(["fuga", "get", "label", "100", "--json"]);

    assert!(cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert!(matches!(entity, Entity::Label));
            assert_eq!(id, 100);
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_entity_accepts_singular_and_plural() {
    let singular = Cli::parse_from(["fuga", "list", "person"]);
    let plural = Cli::parse_from(["fuga", "list", "people"]);

    for cli in [singular, plural] {
        match cli.command {
            Command::List { entity, .. } => assert!(matches!(entity, Entity::Person)),
            _ => panic!("Expected List command"),
        }
    }
}

#[test]
fn test_cli_rejects_non_numeric_id() {
    let result = Cli::try_parse_from(["fuga", "get", "product", "not-a-number"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_entity() {
    let result = Cli::try_parse_from(["fuga", "get", "playlist", "1"]);
    assert!(result.is_err());
}
