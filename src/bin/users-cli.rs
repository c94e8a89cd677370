use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "users-cli")]
#[command(about = "Command-line client for the user service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Show one user
    Get { id: u64 },
    /// Create a user; the service assigns the ID
    Create {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
    },
    /// Replace a user's names
    Update {
        id: u64,
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
    },
    /// Delete a user
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{base}/users")).send().await?,
        Commands::Get { id } => client.get(format!("{base}/users/{id}")).send().await?,
        Commands::Create { first, last } => {
            client
                .post(format!("{base}/users"))
                .json(&json!({ "FirstName": first, "LastName": last }))
                .send()
                .await?
        }
        Commands::Update { id, first, last } => {
            client
                .put(format!("{base}/users/{id}"))
                .json(&json!({ "ID": id, "FirstName": first, "LastName": last }))
                .send()
                .await?
        }
        Commands::Delete { id } => client.delete(format!("{base}/users/{id}")).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: user service returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    if text.is_empty() {
        if status == StatusCode::OK {
            println!("OK");
        }
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
