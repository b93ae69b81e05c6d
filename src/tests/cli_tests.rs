use clap::Parser;
use clap::error::ErrorKind;
use sqlx::SqlitePool;

use crate::cli::{Cli, Command, UsersCommand, run_users};
use crate::db;
use crate::error::BackofficeError;
use crate::tests::tick;

async fn pool() -> SqlitePool {
    db::connect("sqlite::memory:").await.unwrap()
}

fn create(email: &str) -> UsersCommand {
    UsersCommand::Create {
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

#[tokio::test]
async fn create_prints_confirmation_with_id() {
    let pool = pool().await;

    let output = run_users(&pool, create("ada@example.com")).await.unwrap();

    assert!(output.starts_with("User ada@example.com created with ID: "));
}

#[tokio::test]
async fn list_with_no_users_says_so() {
    let pool = pool().await;

    let output = run_users(
        &pool,
        UsersCommand::List {
            limit: 10,
            offset: 0,
        },
    )
    .await
    .unwrap();

    assert_eq!(output, "No users found.");
}

#[tokio::test]
async fn list_renders_user_table_in_creation_order() {
    let pool = pool().await;
    run_users(&pool, create("a@example.com")).await.unwrap();
    tick().await;
    run_users(&pool, create("b@example.com")).await.unwrap();

    let output = run_users(
        &pool,
        UsersCommand::List {
            limit: 10,
            offset: 0,
        },
    )
    .await
    .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("User ID"));
    assert!(lines[0].contains("Email"));
    assert!(lines[0].contains("First Name"));
    assert!(lines[1].starts_with("---"));
    assert!(lines[2].contains("a@example.com"));
    assert!(lines[3].contains("b@example.com"));
}

#[tokio::test]
async fn update_prints_confirmation_and_persists() {
    let pool = pool().await;
    run_users(&pool, create("ada@example.com")).await.unwrap();

    let output = run_users(
        &pool,
        UsersCommand::Update {
            email: "ada@example.com".to_string(),
            first_name: Some("Augusta".to_string()),
            last_name: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "User ada@example.com updated successfully.");

    let listed = run_users(
        &pool,
        UsersCommand::List {
            limit: 10,
            offset: 0,
        },
    )
    .await
    .unwrap();
    assert!(listed.contains("Augusta"));
}

#[tokio::test]
async fn delete_prints_confirmation_and_removes_user() {
    let pool = pool().await;
    run_users(&pool, create("ada@example.com")).await.unwrap();

    let output = run_users(
        &pool,
        UsersCommand::Delete {
            email: "ada@example.com".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "User ada@example.com deleted.");

    let listed = run_users(
        &pool,
        UsersCommand::List {
            limit: 10,
            offset: 0,
        },
    )
    .await
    .unwrap();
    assert_eq!(listed, "No users found.");
}

#[tokio::test]
async fn update_of_missing_user_is_an_error() {
    // Surfaces as a non-zero exit when main propagates the Err.
    let pool = pool().await;

    let err = run_users(
        &pool,
        UsersCommand::Update {
            email: "ghost@example.com".to_string(),
            first_name: Some("Casper".to_string()),
            last_name: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BackofficeError::UserNotFound(_)));
}

#[test]
fn create_requires_all_named_arguments() {
    let err = Cli::try_parse_from([
        "backoffice",
        "users",
        "create",
        "--email",
        "ada@example.com",
    ])
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn update_parses_positional_email_and_optional_flags() {
    let cli = Cli::try_parse_from([
        "backoffice",
        "users",
        "update",
        "ada@example.com",
        "--first-name",
        "Augusta",
    ])
    .unwrap();

    let Command::Users { command } = cli.command else {
        panic!("expected a users subcommand");
    };
    assert_eq!(
        command,
        UsersCommand::Update {
            email: "ada@example.com".to_string(),
            first_name: Some("Augusta".to_string()),
            last_name: None,
        }
    );
}
