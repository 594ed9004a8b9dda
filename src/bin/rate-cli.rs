use clap::{Parser, Subcommand};
use reqwest::{Method, Url};

#[derive(Parser)]
#[command(name = "rate-cli")]
#[command(about = "Client for the currency rate server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the rate between two currencies
    Rate { from: String, to: String },
    /// Set the rate between two currencies
    Update { from: String, to: String, value: String },
    /// Convert an amount between two currencies
    Convert { from: String, to: String, value: String },
}

impl Commands {
    fn method_and_segments(&self) -> (Method, Vec<&str>) {
        match self {
            Commands::Rate { from, to } => (Method::GET, vec!["rate", from.as_str(), to.as_str()]),
            Commands::Update { from, to, value } => {
                (Method::PUT, vec!["rate", from.as_str(), to.as_str(), value.as_str()])
            }
            Commands::Convert { from, to, value } => {
                (Method::GET, vec!["conversion", from.as_str(), to.as_str(), value.as_str()])
            }
        }
    }
}

/// Append `segments` to `base`, percent-encoding each one so `/` or `?`
/// inside an argument cannot change the request path.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("'{base}' cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (method, segments) = cli.command.method_and_segments();
    let url = endpoint(&cli.url, &segments)?;

    print_response(client.request(method, url).send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if status.is_success() {
        println!("{}", text);
    } else {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", text);
    }
    Ok(())
}
