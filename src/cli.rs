use clap::{Parser, Subcommand};
use sqlx::SqlitePool;

use crate::error::BackofficeError;
use crate::models::User;
use crate::service::users::{
    CreateUser, CreateUserHandler, DeleteUser, DeleteUserHandler, FetchAllUsers,
    FetchAllUsersHandler, UpdateUser, UpdateUserHandler,
};
use crate::storage::database::DatabaseUserStorage;

/// Back office services: user management CLI and invoice listing server.
#[derive(Parser, Debug)]
#[command(name = "backoffice", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server.
    Serve,
    /// Manage users.
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum UsersCommand {
    /// Create a new user in the system.
    Create {
        /// User email address
        #[arg(long)]
        email: String,
        /// User first name
        #[arg(long)]
        first_name: String,
        /// User last name
        #[arg(long)]
        last_name: String,
    },
    /// List all users from the system.
    List {
        /// Number of users to fetch.
        #[arg(long, default_value_t = 10)]
        limit: i64,
        /// Number of users to skip.
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Update an existing user from the system.
    Update {
        email: String,
        /// New first name.
        #[arg(long)]
        first_name: Option<String>,
        /// New last name.
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Delete a user from the system.
    Delete { email: String },
}

/// Runs one user command over a connection acquired for exactly that command;
/// the pool reclaims it on every exit path. Returns the text to print, so the
/// boundary can be exercised without capturing stdout.
pub async fn run_users(pool: &SqlitePool, command: UsersCommand) -> Result<String, BackofficeError> {
    let conn = pool.acquire().await?;
    let storage = DatabaseUserStorage::new(conn);

    let output = match command {
        UsersCommand::Create {
            email,
            first_name,
            last_name,
        } => {
            let handler = CreateUserHandler::new(&storage);
            let user = handler
                .handle(CreateUser {
                    email,
                    first_name,
                    last_name,
                })
                .await?;
            format!("User {} created with ID: {}", user.email, user.id)
        }
        UsersCommand::List { limit, offset } => {
            let handler = FetchAllUsersHandler::new(&storage);
            let users = handler.handle(FetchAllUsers { limit, offset }).await?;
            if users.is_empty() {
                "No users found.".to_string()
            } else {
                render_table(&users)
            }
        }
        UsersCommand::Update {
            email,
            first_name,
            last_name,
        } => {
            let handler = UpdateUserHandler::new(&storage);
            let user = handler
                .handle(UpdateUser {
                    email,
                    first_name,
                    last_name,
                })
                .await?;
            format!("User {} updated successfully.", user.email)
        }
        UsersCommand::Delete { email } => {
            let handler = DeleteUserHandler::new(&storage);
            handler
                .handle(DeleteUser {
                    email: email.clone(),
                })
                .await?;
            format!("User {} deleted.", email)
        }
    };

    Ok(output)
}

fn render_table(users: &[User]) -> String {
    let headers = ["User ID", "Email", "First Name", "Last Name"];
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.email.clone(),
                user.first_name.clone(),
                user.last_name.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render = |cells: &[String; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![
        render(&headers.map(String::from)),
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    ];
    lines.extend(rows.iter().map(|row| render(row)));
    lines.join("\n")
}
