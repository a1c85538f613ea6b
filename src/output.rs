//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Artist, Asset, Label, Person, Product};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Product {
    fn pretty_print(&self) -> String {
        let header = format!("Product: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider, format!("Name:           {}", self.name)];

        if let Some(ref upc) = self.upc {
            lines.push(format!("UPC:            {upc}"));
        }

        if let Some(ref state) = self.state {
            lines.push(format!("State:          {state}"));
        }

        if let Some(ref format) = self.release_format_type {
            lines.push(format!("Format:         {format}"));
        }

        if let Some(ref artist) = self.display_artist {
            lines.push(format!("Artist:         {artist}"));
        }

        if let Some(ref label) = self.label {
            lines.push(format!(
                "Label:          {} ({})",
                label.name.as_deref().unwrap_or("unnamed"),
                label.id
            ));
        }

        if let Some(ref date) = self.consumer_release_date {
            lines.push(format!("Release Date:   {date}"));
        }

        if self.parental_advisory {
            lines.push("Explicit:       yes".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Asset {
    fn pretty_print(&self) -> String {
        let header = format!("Asset: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider, format!("Name:           {}", self.name)];

        if let Some(ref kind) = self.asset_type {
            lines.push(format!("Type:           {kind}"));
        }

        if let Some(ref isrc) = self.isrc {
            lines.push(format!("ISRC:           {isrc}"));
        }

        if let Some(duration) = self.duration {
            lines.push(format!("Duration:       {}:{:02}", duration / 60, duration % 60));
        }

        if let Some(ref artist) = self.display_artist {
            lines.push(format!("Artist:         {artist}"));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Artist {
    fn pretty_print(&self) -> String {
        let header = format!("Artist: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider, format!("Name:           {}", self.name)];

        if let Some(ref pid) = self.proprietary_id {
            lines.push(format!("Proprietary ID: {pid}"));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Label {
    fn pretty_print(&self) -> String {
        let header = format!("Label: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider, format!("Name:           {}", self.name)];

        if let Some(ref pid) = self.proprietary_id {
            lines.push(format!("Proprietary ID: {pid}"));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Person {
    fn pretty_print(&self) -> String {
        let header = format!("Person: {}", self.id);
        let divider = "─".repeat(header.len().max(30));

        [header, divider, format!("Name:           {}", self.name)].join("\n")
    }
}
