//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! `fuga` binary.

use clap::{Parser, Subcommand, ValueEnum};

/// FUGA Catalog API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "fuga", about = "FUGA Catalog API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The FUGA-assigned numeric ID.
        id: u64,
    },

    /// List entities with optional filtering and pagination.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Page number (0-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Number of items per page.
        #[arg(long)]
        page_size: Option<u32>,

        /// Filter by name (partial match).
        #[arg(long)]
        name: Option<String>,
    },

    /// Create a new entity.
    Create {
        /// The type of entity to create.
        entity: Entity,

        /// Name of the new entity.
        #[arg(long)]
        name: String,

        /// Owning label ID (products only).
        #[arg(long)]
        label_id: Option<u64>,

        /// UPC/EAN barcode (products only).
        #[arg(long)]
        upc: Option<String>,

        /// Release format, e.g. ALBUM or SINGLE (products only).
        #[arg(long)]
        release_format: Option<String>,

        /// Asset kind, e.g. TRACK or VIDEO (assets only).
        #[arg(long)]
        asset_type: Option<String>,

        /// ISRC code (assets only).
        #[arg(long)]
        isrc: Option<String>,

        /// Proprietary identifier (artists and labels only).
        #[arg(long)]
        proprietary_id: Option<String>,

        /// Owning organization ID (artists and labels only).
        #[arg(long)]
        organization_id: Option<u64>,
    },

    /// Update an entity.
    Update {
        /// The type of entity to update.
        entity: Entity,

        /// The FUGA-assigned numeric ID.
        id: u64,

        /// New name for the entity.
        #[arg(long)]
        name: Option<String>,

        /// New UPC/EAN barcode (products only).
        #[arg(long)]
        upc: Option<String>,

        /// New ISRC code (assets only).
        #[arg(long)]
        isrc: Option<String>,

        /// New proprietary identifier (artists and labels only).
        #[arg(long)]
        proprietary_id: Option<String>,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The FUGA-assigned numeric ID.
        id: u64,
    },

    /// Publish a product, marking it ready for delivery.
    Publish {
        /// The product ID.
        id: u64,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A product (release).
    #[value(alias = "products")]
    Product,
    /// An asset (track or video).
    #[value(alias = "assets")]
    Asset,
    /// An artist.
    #[value(alias = "artists")]
    Artist,
    /// A label.
    #[value(alias = "labels")]
    Label,
    /// A person (credited contributor).
    #[value(alias = "people")]
    Person,
}
