//! Sort flags and line rendering shared by the list commands.

use chrono::{DateTime, Local, Utc};
use clap::Args;

use crate::domain::{File, Folder, ListOrder};

/// Mutually exclusive sort flags. Without either, listings are name-ascending.
#[derive(Args, Debug, Default)]
pub struct SortArgs {
    /// Sort by name (asc or desc)
    #[arg(
        long,
        value_name = "ORDER",
        value_parser = ["asc", "desc"],
        conflicts_with = "sort_created"
    )]
    pub sort_name: Option<String>,
    /// Sort by creation time (asc or desc)
    #[arg(long, value_name = "ORDER", value_parser = ["asc", "desc"])]
    pub sort_created: Option<String>,
}

impl SortArgs {
    pub fn order(&self) -> ListOrder {
        match (&self.sort_name, &self.sort_created) {
            (Some(order), _) => ListOrder::parse("name", order),
            (None, Some(order)) => ListOrder::parse("created", order),
            (None, None) => ListOrder::default(),
        }
    }
}

pub(super) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `name description created username`
pub(super) fn folder_line(folder: &Folder, username: &str) -> String {
    format!(
        "{} {} {} {}",
        folder.name,
        folder.description,
        format_timestamp(folder.created_at),
        username
    )
}

/// `name description created foldername username`
pub(super) fn file_line(file: &File, foldername: &str, username: &str) -> String {
    format!(
        "{} {} {} {} {}",
        file.name,
        file.description,
        format_timestamp(file.created_at),
        foldername,
        username
    )
}
