//! TonicPow API CLI binary.
//!
//! A command-line interface for interacting with the TonicPow API.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tabled::{Table, Tabled};
use tonicpow::cli::{Cli, Command, Entity, ListEntity};
use tonicpow::{
    get_current_rate, AdvertiserProfile, Campaign, Conversion, Get, Goal, Link, List, Page,
    PrettyPrint, TonicPowClient, TonicPowError, User, VisitorSession,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set TONICPOW_API_KEY environment variable or pass --api-key");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(api_error) = e.api_error() {
                if !api_error.data.is_empty() {
                    eprintln!("Data: {}", api_error.data);
                }
                if !api_error.request_guid.is_empty() {
                    eprintln!("Request: {}", api_error.request_guid);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> tonicpow::Result<TonicPowClient> {
    let mut builder = TonicPowClient::builder().api_key(cli.api_key.clone().unwrap_or_default());
    if let Some(environment) = &cli.environment {
        builder = builder.environment_name(environment);
    }
    builder.build()
}

async fn run(client: &TonicPowClient, cli: Cli) -> tonicpow::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List {
            entity,
            page,
            count,
        } => handle_list(client, entity, page, count, cli.json).await,
        Command::Rate { currency, amount } => {
            let rate = get_current_rate(client, &currency, amount).await?;
            output_single(&rate, cli.json)
        }
    }
}

fn parse_id(id: &str) -> tonicpow::Result<u64> {
    id.parse()
        .map_err(|_| TonicPowError::InvalidArgument(format!("'{id}' is not a numeric id")))
}

async fn handle_get(
    client: &TonicPowClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> tonicpow::Result<()> {
    match entity {
        Entity::User => output_single(&User::get(client, parse_id(id)?).await?, json),
        Entity::Advertiser => {
            output_single(&AdvertiserProfile::get(client, parse_id(id)?).await?, json)
        }
        Entity::Campaign => output_single(&Campaign::get(client, parse_id(id)?).await?, json),
        Entity::Goal => output_single(&Goal::get(client, parse_id(id)?).await?, json),
        Entity::Conversion => {
            output_single(&Conversion::get(client, parse_id(id)?).await?, json)
        }
        Entity::Link => output_single(&Link::get(client, parse_id(id)?).await?, json),
        Entity::Session => {
            output_single(&VisitorSession::get(client, id.to_string()).await?, json)
        }
    }
}

async fn handle_list(
    client: &TonicPowClient,
    entity: ListEntity,
    page: Option<u32>,
    count: Option<u32>,
    json: bool,
) -> tonicpow::Result<()> {
    let page = page.unwrap_or(1);
    let count = count.unwrap_or(20);

    match entity {
        ListEntity::Campaigns => {
            let campaigns = Campaign::list_page(client, &Default::default(), page, count).await?;
            output_page(&campaigns, json, |c| CampaignRow::from(c))
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> tonicpow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> tonicpow::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        let rows: Vec<R> = page.items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        match (page.results, page.total_pages()) {
            (Some(results), Some(pages)) => {
                println!("\nPage {}/{} ({} campaigns)", page.current_page, pages, results)
            }
            _ if page.has_more() => println!("\nPage {} (more available)", page.current_page),
            _ => println!("\nPage {} (end)", page.current_page),
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct CampaignRow {
    id: u64,
    title: String,
    #[tabled(rename = "balance (sats)")]
    balance: i64,
    #[tabled(rename = "per click")]
    pay_per_click: f64,
    clicks: u64,
}

impl From<&Campaign> for CampaignRow {
    fn from(c: &Campaign) -> Self {
        Self {
            id: c.id,
            title: c.title.clone(),
            balance: c.balance_satoshis,
            pay_per_click: c.pay_per_click_rate,
            clicks: c.clicks,
        }
    }
}
