//! Interactive menu-driven client

use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::api::{ClientError, UserDirectoryClient};
use super::output;

/// Menu entries, keyed by the number the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Get,
    Update,
    Delete,
    Health,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::List),
            "3" => Some(Self::Get),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Health),
            "0" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("\nChoose an action:");
    println!("  1. Create a user");
    println!("  2. List users");
    println!("  3. Get a user");
    println!("  4. Update a user");
    println!("  5. Delete a user");
    println!("  6. Health check");
    println!("  0. Quit");
}

/// Line-oriented prompt over any async reader
struct Prompter<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> Prompter<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    async fn ask(&mut self, label: &str) -> std::io::Result<Option<String>> {
        print!("{}", label);
        std::io::stdout().flush()?;

        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }

    async fn ask_optional(&mut self, label: &str) -> std::io::Result<Option<Option<String>>> {
        Ok(self
            .ask(label)
            .await?
            .map(|value| (!value.is_empty()).then_some(value)))
    }

    async fn ask_id(&mut self) -> std::io::Result<Option<Result<u64, std::num::ParseIntError>>> {
        Ok(self.ask("User ID: ").await?.map(|value| value.parse::<u64>()))
    }
}

/// What the loop should do after an action
enum Flow {
    Continue,
    Exit,
}

/// Run the menu loop until the user quits or input ends.
/// API errors are printed and the loop continues.
pub async fn run_interactive<R>(client: &UserDirectoryClient, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    output::banner("Interactive mode");

    let mut prompter = Prompter::new(input);

    loop {
        print_menu();

        let Some(line) = prompter.ask("\nYour choice: ").await? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            output::failure("Invalid choice");
            continue;
        };

        match perform(client, &mut prompter, choice).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(ActionError::Api(e)) => output::failure(&e.to_string()),
            Err(ActionError::Input(message)) => {
                output::failure(&format!("Invalid input: {}", message))
            }
            Err(ActionError::Io(e)) => return Err(e.into()),
        }
    }

    println!("\n{}", "Goodbye!".bold());
    Ok(())
}

enum ActionError {
    Api(ClientError),
    Input(String),
    Io(std::io::Error),
}

impl From<ClientError> for ActionError {
    fn from(err: ClientError) -> Self {
        Self::Api(err)
    }
}

impl From<std::io::Error> for ActionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Unwrap a prompt answer, treating end of input as a request to exit
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt.await? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

async fn perform<R: AsyncBufRead + Unpin>(
    client: &UserDirectoryClient,
    prompter: &mut Prompter<R>,
    choice: MenuChoice,
) -> Result<Flow, ActionError> {
    match choice {
        MenuChoice::Quit => return Ok(Flow::Exit),
        MenuChoice::Create => {
            let username = answer!(prompter.ask("Username: "));
            let email = answer!(prompter.ask("Email: "));
            let password = answer!(prompter.ask("Password: "));
            let full_name = answer!(prompter.ask_optional("Full name (optional): "));

            let user = client
                .create_user(&username, &email, &password, full_name.as_deref())
                .await?;
            output::print_json(&user, None);
        }
        MenuChoice::List => {
            let users = client.list_users(0, 100).await?;
            output::print_json(&users, None);
        }
        MenuChoice::Get => {
            let id = answer!(prompter.ask_id()).map_err(|e| ActionError::Input(e.to_string()))?;
            let user = client.get_user(id).await?;
            output::print_json(&user, None);
        }
        MenuChoice::Update => {
            let id = answer!(prompter.ask_id()).map_err(|e| ActionError::Input(e.to_string()))?;
            let username = answer!(prompter.ask("New username: "));
            let email = answer!(prompter.ask("New email: "));
            let full_name = answer!(prompter.ask_optional("New full name (optional): "));

            let user = client
                .update_user(id, &username, &email, full_name.as_deref())
                .await?;
            output::print_json(&user, None);
        }
        MenuChoice::Delete => {
            let id = answer!(prompter.ask_id()).map_err(|e| ActionError::Input(e.to_string()))?;
            client.delete_user(id).await?;
            output::success(&format!("User {} deleted", id));
        }
        MenuChoice::Health => {
            let health = client.health_check().await?;
            output::print_json(&health, None);
        }
    }

    Ok(Flow::Continue)
}
