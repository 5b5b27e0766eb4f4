use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "docapi-cli")]
#[command(about = "Management CLI for the Document API service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[arg(short, long, default_value = "2.0.0")]
    api_version: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all documents
    Documents,
    /// Fetch a single document by id
    Get { id: String },
    /// Probe how the service routes a path, optionally with a version header
    Check {
        path: String,
        #[arg(long)]
        header_version: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Documents => {
            let res = client
                .get(format!("{}/api/v{}/document", cli.url, cli.api_version))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/api/v{}/document/{}", cli.url, cli.api_version, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Check {
            path,
            header_version,
        } => {
            let mut headers = HeaderMap::new();
            if let Some(version) = &header_version {
                headers.insert("accept-version", HeaderValue::from_str(version)?);
            }
            let res = client
                .get(format!("{}{}", cli.url, path))
                .headers(headers)
                .send()
                .await?;
            println!("Status: {}", res.status());
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
