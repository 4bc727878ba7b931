use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "user-cli")]
#[command(about = "Management CLI for the user service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token, when the service requires one
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service liveness
    Health,
    /// List all users
    List,
    /// Show a single user
    Get { id: i64 },
    /// Create or overwrite a user
    Create {
        id: i64,
        first_name: String,
        last_name: String,
        #[arg(long)]
        color: Option<String>,
    },
    /// Change a user's favorite color
    SetColor { id: i64, color: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(token) = &cli.token {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    }

    let users_url = format!("{}/api/v1/users", cli.url);
    let request = match cli.command {
        Commands::Health => client.get(format!("{}/api/v1/health", cli.url)),
        Commands::List => client.get(&users_url),
        Commands::Get { id } => client.get(format!("{}/{}", users_url, id)),
        Commands::Create {
            id,
            first_name,
            last_name,
            color,
        } => {
            let mut body = json!({
                "id": id,
                "first_name": first_name,
                "last_name": last_name,
            });
            if let Some(color) = color {
                body["fav_color"] = Value::String(color);
            }
            client.post(&users_url).json(&body)
        }
        Commands::SetColor { id, color } => client
            .put(format!("{}/{}", users_url, id))
            .json(&json!({ "favorite_color": color })),
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: user service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
