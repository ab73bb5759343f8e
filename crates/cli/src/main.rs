use clap::{Args, Parser, Subcommand};

use api_types::auth::{Credentials, RegisterNew};
use client::{Client, Session, SessionStore};

use crate::error::{CliError, Result};
use crate::notify::StderrNotifier;

mod config;
mod error;
mod notify;

type ApiClient = Client<SessionStore, StderrNotifier>;

#[derive(Parser, Debug)]
#[command(name = "monedero")]
#[command(about = "Terminal client for the monedero personal-finance API")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override session file path.
    #[arg(long)]
    session: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account and persist the session.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show the stored user profile.
    Whoami,
    /// List transactions.
    Transactions {
        #[arg(long)]
        user: Option<i64>,
    },
    /// Scheduled-transaction operations.
    Scheduled(Scheduled),
    /// List budgets.
    Budgets {
        #[arg(long)]
        user: Option<i64>,
        /// Restrict to a month (YYYY-MM); requires --user.
        #[arg(long)]
        month: Option<String>,
    },
    /// List debts.
    Debts {
        #[arg(long)]
        user: Option<i64>,
        /// List debts where the user is the creditor instead.
        #[arg(long)]
        credits: bool,
    },
    /// List goals.
    Goals {
        #[arg(long)]
        user: Option<i64>,
    },
    /// List friends.
    Friends {
        #[arg(long)]
        user: Option<i64>,
    },
    /// List payment methods.
    PaymentMethods {
        #[arg(long)]
        user: Option<i64>,
    },
}

#[derive(Args, Debug)]
struct Scheduled {
    #[command(subcommand)]
    command: ScheduledCommand,
}

#[derive(Subcommand, Debug)]
enum ScheduledCommand {
    /// List scheduled transactions.
    List {
        #[arg(long)]
        user: Option<i64>,
    },
    /// Execute pending scheduled transactions now.
    RunPending,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("monedero=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::load(
        cli.config.as_deref(),
        cli.base_url.clone(),
        cli.session.clone(),
    )?;

    let store = SessionStore::new(&settings.session_path);
    let client = Client::new(&settings.base_url, store.clone(), StderrNotifier)?;

    run(cli.command, &client, &store).await
}

async fn run(command: Command, client: &ApiClient, store: &SessionStore) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            let auth = client.auth().login(&Credentials { email, password }).await?;
            store.save(&Session::from(&auth))?;
            println!("logged in as {}", auth.username);
        }
        Command::Register {
            email,
            password,
            name,
            username,
        } => {
            let auth = client
                .auth()
                .register(&RegisterNew {
                    email,
                    password,
                    name,
                    username,
                })
                .await?;
            store.save(&Session::from(&auth))?;
            println!("registered as {}", auth.username);
        }
        Command::Logout => {
            store.clear()?;
            println!("session cleared");
        }
        Command::Whoami => match store.load()? {
            Some(session) => {
                let user = session.user;
                println!("{} <{}> (id {})", user.name, user.email, user.id);
            }
            None => println!("no active session"),
        },
        Command::Transactions { user } => {
            let transactions = match user {
                Some(user_id) => client.transactions().by_user(user_id).await?,
                None => client.transactions().all().await?,
            };
            for transaction in transactions {
                println!(
                    "#{} {} {} {} {}",
                    transaction.id,
                    transaction.date,
                    transaction.kind.as_str(),
                    transaction.amount,
                    transaction.category,
                );
            }
        }
        Command::Scheduled(scheduled) => match scheduled.command {
            ScheduledCommand::List { user } => {
                let scheduled = match user {
                    Some(user_id) => client.transactions().scheduled_by_user(user_id).await?,
                    None => client.transactions().scheduled().await?,
                };
                for entry in scheduled {
                    println!(
                        "#{} {} {} next {} {}",
                        entry.id,
                        entry.name,
                        entry.amount,
                        entry.next_execution_date,
                        if entry.active { "active" } else { "inactive" },
                    );
                }
            }
            ScheduledCommand::RunPending => {
                let result = client.transactions().run_pending_scheduled().await?;
                println!("executed {}", result.executed_count);
            }
        },
        Command::Budgets { user, month } => {
            let budgets = match (user, month) {
                (Some(user_id), Some(month)) => {
                    client.budgets().by_user_month(user_id, &month).await?
                }
                (Some(user_id), None) => client.budgets().by_user(user_id).await?,
                (None, None) => client.budgets().all().await?,
                (None, Some(_)) => {
                    return Err(CliError::Usage("--month requires --user".to_string()));
                }
            };
            for budget in budgets {
                println!(
                    "#{} {} {} {}/{}",
                    budget.id,
                    budget.month,
                    budget.category,
                    budget.current_amount,
                    budget.limit_amount,
                );
            }
        }
        Command::Debts { user, credits } => {
            let debts = match (user, credits) {
                (Some(user_id), false) => client.debts().debts_of(user_id).await?,
                (Some(user_id), true) => client.debts().credits_of(user_id).await?,
                (None, false) => client.debts().all().await?,
                (None, true) => {
                    return Err(CliError::Usage("--credits requires --user".to_string()));
                }
            };
            for debt in debts {
                println!(
                    "#{} {} pending {} of {} due {}{}",
                    debt.id,
                    debt.description,
                    debt.pending_amount,
                    debt.original_amount,
                    debt.due_date,
                    if debt.paid { " (paid)" } else { "" },
                );
            }
        }
        Command::Goals { user } => {
            let goals = match user {
                Some(user_id) => client.goals().by_user(user_id).await?,
                None => client.goals().all().await?,
            };
            for goal in goals {
                println!(
                    "#{} {} {}/{} by {}",
                    goal.id, goal.name, goal.current_amount, goal.target_amount, goal.end_date,
                );
            }
        }
        Command::Friends { user } => {
            let friends = match user {
                Some(user_id) => client.friends().by_user(user_id).await?,
                None => client.friends().all().await?,
            };
            for entry in friends {
                println!(
                    "#{} {} (@{}) since {}",
                    entry.id, entry.friend.name, entry.friend.username, entry.connection_date,
                );
            }
        }
        Command::PaymentMethods { user } => {
            let methods = match user {
                Some(user_id) => client.payment_methods().by_user(user_id).await?,
                None => client.payment_methods().all().await?,
            };
            for method in methods {
                let digits = method
                    .last_four_digits
                    .map(|digits| format!(" ****{digits}"))
                    .unwrap_or_default();
                println!("#{} {} {:?}{}", method.id, method.name, method.kind, digits);
            }
        }
    }
    Ok(())
}
