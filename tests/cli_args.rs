//! CLI argument parsing tests.

use clap::Parser;
use tonicpow::cli::{Cli, Command, Entity, ListEntity};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["tonicpow", "get", "campaign", "10"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Campaign);
            assert_eq!(id, "10");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_accepts_plural_entity_names() {
    let cli = Cli::parse_from(["tonicpow", "get", "sessions", "abc123"]);

    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Session);
            assert_eq!(id, "abc123");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_with_pagination() {
    let cli = Cli::parse_from(["tonicpow", "list", "campaigns", "--page", "2", "--count", "5"]);

    match cli.command {
        Command::List {
            entity,
            page,
            count,
        } => {
            assert_eq!(entity, ListEntity::Campaigns);
            assert_eq!(page, Some(2));
            assert_eq!(count, Some(5));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_rate_with_default_amount() {
    let cli = Cli::parse_from(["tonicpow", "rate", "usd"]);

    match cli.command {
        Command::Rate { currency, amount } => {
            assert_eq!(currency, "usd");
            assert_eq!(amount, 1.0);
        }
        _ => panic!("Expected Rate command"),
    }
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "tonicpow",
        "get",
        "user",
        "1",
        "--json",
        "--api-key",
        "k",
        "--environment",
        "staging",
    ]);

    assert!(cli.json);
    assert_eq!(cli.api_key.as_deref(), Some("k"));
    assert_eq!(cli.environment.as_deref(), Some("staging"));
}

#[test]
fn test_cli_rejects_unknown_entity() {
    let result = Cli::try_parse_from(["tonicpow", "get", "project", "1"]);
    assert!(result.is_err());
}
