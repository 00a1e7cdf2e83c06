mod client;
mod models;
mod render;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use client::{BlogClient, PostFilter};

#[derive(Debug, Parser)]
#[command(name = "blogfront-cli", version, about = "Browse the posts of a blogfront instance")]
struct Cli {
    /// Base URL of the blogfront server
    #[arg(long, env = "BLOGFRONT_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Print the raw JSON returned by the API
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List posts, optionally filtered and paginated
    Posts {
        /// Case-insensitive title substring
        #[arg(long)]
        query: Option<String>,
        /// Category id
        #[arg(long)]
        category: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show a single post
    Post { slug: String },
    /// List all categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = BlogClient::new(&cli.base_url);

    let output = match cli.command {
        Command::Posts {
            query,
            category,
            page,
            per_page,
        } => {
            let filter = PostFilter {
                query,
                category,
                page,
                per_page,
            };
            let value = client.list_posts(&filter).await?;
            if cli.json {
                serde_json::to_string_pretty(&value)?
            } else {
                render::render_posts(&client::as_posts(value)?)
            }
        }
        Command::Post { slug } => {
            let Some(value) = client.get_post(&slug).await? else {
                bail!("post '{slug}' not found");
            };
            if cli.json {
                serde_json::to_string_pretty(&value)?
            } else {
                render::render_post(&client::as_post(value)?)
            }
        }
        Command::Categories => {
            let value = client.list_categories().await?;
            if cli.json {
                serde_json::to_string_pretty(&value)?
            } else {
                render::render_categories(&client::as_categories(value)?)
            }
        }
    };

    print!("{output}");
    if cli.json {
        println!();
    }
    Ok(())
}
