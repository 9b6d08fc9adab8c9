use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch pages of an index one after another, like repeated refreshes
    Page {
        #[command(flatten)]
        target: Target,

        #[arg(long, default_value_t = 100, help = "Documents per page")]
        size: usize,

        #[arg(long, default_value_t = 1, help = "Number of pages to fetch")]
        pages: usize,

        #[arg(
            long,
            help = "Also print the accumulated table, normalized with the target schema"
        )]
        show_all: bool,
    },
    /// Scroll through a whole index, normalize it and print an overview
    FetchAll {
        #[command(flatten)]
        target: Target,

        #[arg(long, default_value_t = 1000, help = "Documents per scroll page")]
        page_size: usize,

        #[arg(long, default_value_t = 5, help = "Rows to preview")]
        head: usize,

        #[arg(long, help = "Print every normalized row as JSON instead of a preview")]
        json: bool,
    },
    /// Descriptive statistics and per-group means over a normalized index
    Summary {
        #[command(flatten)]
        target: Target,

        #[arg(
            long,
            value_delimiter = ',',
            default_value = "temp,wind_spd,rain",
            help = "Numeric columns to describe"
        )]
        columns: Vec<String>,

        #[arg(long, default_value = "station", help = "Column to group by")]
        group_by: String,

        #[arg(long, default_value = "rain", help = "Column to average per group")]
        value: String,

        #[arg(long, default_value_t = 1000, help = "Documents per scroll page")]
        page_size: usize,
    },
    /// Print a built-in schema as JSON
    Schema {
        #[arg(long, default_value = "weather", help = "Schema preset: weather or tree")]
        kind: String,
    },
    /// Check that the store answers for an index
    Ping {
        #[command(flatten)]
        target: Target,
    },
    /// Print the resolved connection settings (password masked)
    Config,
}

/// Which index to read and how to normalize it.
#[derive(Args, Debug)]
pub struct Target {
    #[arg(long, default_value = "weather", help = "Schema preset: weather or tree")]
    pub kind: String,

    #[arg(long, help = "Index to read; defaults to the preset's index")]
    pub index: Option<String>,

    #[arg(long, help = "JSON schema file replacing the preset's schema")]
    pub schema: Option<String>,
}
