use itsm_preferences::{Language, SortDirection, Theme};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Print the current preferences
    Show,
    /// Change one or more preference fields
    Set {
        /// light, dark or auto
        #[arg(long)]
        theme: Option<Theme>,
        /// zh-CN or en-US
        #[arg(long)]
        language: Option<Language>,
        /// IANA zone name, e.g. Asia/Shanghai
        #[arg(long)]
        timezone: Option<String>,
        #[arg(long)]
        date_format: Option<String>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        sidebar_collapsed: Option<bool>,
        /// Widget ids in display order, comma separated
        #[arg(long, value_delimiter = ',')]
        dashboard_layout: Option<Vec<String>>,
    },
    /// Change the layout of one data table
    Table {
        /// Table id, e.g. tickets
        table_id: String,
        /// Visible columns in display order, comma separated
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,
        #[arg(long)]
        sort_field: Option<String>,
        /// asc or desc
        #[arg(long)]
        sort_direction: Option<SortDirection>,
    },
    /// Restore every preference to its default
    Reset,
}
