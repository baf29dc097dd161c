use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "mdl-render", version)]
#[command(about = "Render a material textfield from a JSON configuration", long_about = None)]
pub struct Cli {
    /// JSON file holding the textfield configuration ("-" or absent reads stdin)
    pub file: Option<PathBuf>,

    /// Indent the generated markup
    #[arg(short, long)]
    pub pretty: bool,

    /// Print the computed validity to stderr
    #[arg(long)]
    pub validity: bool,

    /// Log level written to the log file
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
