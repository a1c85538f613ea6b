//! FUGA Catalog API CLI binary.
//!
//! A command-line interface for interacting with the FUGA Catalog API.

use clap::Parser;
use fugapi::cli::{Cli, Command, Entity};
use fugapi::output::PrettyPrint;
use fugapi::{
    Artist, ArtistCreateParams, ArtistUpdateParams, Asset, AssetCreateParams, AssetUpdateParams,
    Create, Delete, FugaClient, Get, Label, LabelCreateParams, LabelUpdateParams, List, Page,
    Person, PersonCreateParams, PersonUpdateParams, Product, ProductCreateParams,
    ProductUpdateParams, Update,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    let client = match FugaClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set FUGA_USERNAME and FUGA_PASSWORD environment variables");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = client.login().await {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &FugaClient, cli: Cli) -> fugapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, id, cli.json).await,
        Command::List {
            entity,
            page,
            page_size,
            name,
        } => handle_list(client, entity, page, page_size, name, cli.json).await,
        Command::Create {
            entity,
            name,
            label_id,
            upc,
            release_format,
            asset_type,
            isrc,
            proprietary_id,
            organization_id,
        } => {
            let params = CreateFlags {
                name,
                label_id,
                upc,
                release_format,
                asset_type,
                isrc,
                proprietary_id,
                organization_id,
            };
            handle_create(client, entity, params, cli.json).await
        }
        Command::Update {
            entity,
            id,
            name,
            upc,
            isrc,
            proprietary_id,
        } => handle_update(client, entity, id, name, upc, isrc, proprietary_id, cli.json).await,
        Command::Delete { entity, id } => handle_delete(client, entity, id).await,
        Command::Publish { id } => handle_publish(client, id, cli.json).await,
    }
}

/// Flags accepted by `fuga create`, bundled to keep signatures short.
struct CreateFlags {
    name: String,
    label_id: Option<u64>,
    upc: Option<String>,
    release_format: Option<String>,
    asset_type: Option<String>,
    isrc: Option<String>,
    proprietary_id: Option<String>,
    organization_id: Option<u64>,
}

async fn handle_get(
    client: &FugaClient,
    entity: Entity,
    id: u64,
    json: bool,
) -> fugapi::Result<()> {
    match entity {
        Entity::Product => output_single(&Product::get(client, id).await?, json),
        Entity::Asset => output_single(&Asset::get(client, id).await?, json),
        Entity::Artist => output_single(&Artist::get(client, id).await?, json),
        Entity::Label => output_single(&Label::get(client, id).await?, json),
        Entity::Person => output_single(&Person::get(client, id).await?, json),
    }
}

async fn handle_list(
    client: &FugaClient,
    entity: Entity,
    page: Option<u32>,
    page_size: Option<u32>,
    name: Option<String>,
    json: bool,
) -> fugapi::Result<()> {
    let page = page.unwrap_or(0);
    let page_size = page_size.unwrap_or(20);

    match entity {
        Entity::Product => {
            let query = fugapi::ProductListQuery { name };
            let results = Product::list_page(client, &query, page, page_size).await?;
            output_page(&results, json, ProductRow::from)
        }
        Entity::Asset => {
            let query = fugapi::AssetListQuery { name };
            let results = Asset::list_page(client, &query, page, page_size).await?;
            output_page(&results, json, AssetRow::from)
        }
        Entity::Artist => {
            let query = fugapi::ArtistListQuery { name };
            let results = Artist::list_page(client, &query, page, page_size).await?;
            output_page(&results, json, NamedRow::from_artist)
        }
        Entity::Label => {
            let query = fugapi::LabelListQuery { name };
            let results = Label::list_page(client, &query, page, page_size).await?;
            output_page(&results, json, NamedRow::from_label)
        }
        Entity::Person => {
            let query = fugapi::PersonListQuery { name };
            let results = Person::list_page(client, &query, page, page_size).await?;
            output_page(&results, json, NamedRow::from_person)
        }
    }
}

async fn handle_create(
    client: &FugaClient,
    entity: Entity,
    flags: CreateFlags,
    json: bool,
) -> fugapi::Result<()> {
    match entity {
        Entity::Product => {
            let params = ProductCreateParams {
                name: flags.name,
                label: flags.label_id,
                upc: flags.upc,
                release_format_type: flags.release_format,
                ..Default::default()
            };
            output_single(&Product::create(client, params).await?, json)
        }
        Entity::Asset => {
            let params = AssetCreateParams {
                name: flags.name,
                asset_type: flags.asset_type,
                isrc: flags.isrc,
                ..Default::default()
            };
            output_single(&Asset::create(client, params).await?, json)
        }
        Entity::Artist => {
            let params = ArtistCreateParams {
                name: flags.name,
                proprietary_id: flags.proprietary_id,
                organization_id: flags.organization_id,
            };
            output_single(&Artist::create(client, params).await?, json)
        }
        Entity::Label => {
            let params = LabelCreateParams {
                name: flags.name,
                proprietary_id: flags.proprietary_id,
                organization_id: flags.organization_id,
            };
            output_single(&Label::create(client, params).await?, json)
        }
        Entity::Person => {
            let params = PersonCreateParams { name: flags.name };
            output_single(&Person::create(client, params).await?, json)
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_update(
    client: &FugaClient,
    entity: Entity,
    id: u64,
    name: Option<String>,
    upc: Option<String>,
    isrc: Option<String>,
    proprietary_id: Option<String>,
    json: bool,
) -> fugapi::Result<()> {
    match entity {
        Entity::Product => {
            let params = ProductUpdateParams {
                name,
                upc,
                ..Default::default()
            };
            output_single(&Product::update(client, id, params).await?, json)
        }
        Entity::Asset => {
            let params = AssetUpdateParams {
                name,
                isrc,
                ..Default::default()
            };
            output_single(&Asset::update(client, id, params).await?, json)
        }
        Entity::Artist => {
            let params = ArtistUpdateParams {
                name,
                proprietary_id,
            };
            output_single(&Artist::update(client, id, params).await?, json)
        }
        Entity::Label => {
            let params = LabelUpdateParams {
                name,
                proprietary_id,
            };
            output_single(&Label::update(client, id, params).await?, json)
        }
        Entity::Person => {
            let params = PersonUpdateParams { name };
            output_single(&Person::update(client, id, params).await?, json)
        }
    }
}

async fn handle_delete(client: &FugaClient, entity: Entity, id: u64) -> fugapi::Result<()> {
    match entity {
        Entity::Product => Product::delete(client, id).await?,
        Entity::Asset => Asset::delete(client, id).await?,
        Entity::Artist => Artist::delete(client, id).await?,
        Entity::Label => Label::delete(client, id).await?,
        Entity::Person => Person::delete(client, id).await?,
    }
    println!("Deleted");
    Ok(())
}

async fn handle_publish(client: &FugaClient, id: u64, json: bool) -> fugapi::Result<()> {
    let product = Product::get(client, id).await?;
    let published = product.publish(client).await?;
    output_single(&published, json)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> fugapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> fugapi::Result<()>
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
        if let Some(total) = page.total {
            let total_pages = total.div_ceil(u64::from(page.page_size.max(1)));
            println!("\nPage {}/{} ({} total items)", page.page + 1, total_pages, total);
        } else if page.has_more {
            println!("\nPage {} (more available)", page.page + 1);
        } else {
            println!("\nPage {} (end)", page.page + 1);
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ProductRow {
    id: u64,
    name: String,
    state: String,
    upc: String,
}

impl ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            state: p.state.clone().unwrap_or_default(),
            upc: p.upc.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct AssetRow {
    id: u64,
    name: String,
    #[tabled(rename = "type")]
    asset_type: String,
    isrc: String,
}

impl AssetRow {
    fn from(a: &Asset) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            asset_type: a.asset_type.clone().unwrap_or_default(),
            isrc: a.isrc.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct NamedRow {
    id: u64,
    name: String,
}

impl NamedRow {
    fn from_artist(a: &Artist) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
        }
    }

    fn from_label(l: &Label) -> Self {
        Self {
            id: l.id,
            name: l.name.clone(),
        }
    }

    fn from_person(p: &Person) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}
