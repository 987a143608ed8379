use clap::Parser;

use crate::types::Browser;

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliProgram {
    #[arg(
        long,
        short,
        value_enum,
        help = "Browser to read YouTube cookies from (overrides the config file)"
    )]
    pub browser: Option<Browser>,

    #[arg(
        long,
        short,
        value_name = "DIR",
        help = "Browser profile directory holding the cookies (default profile when omitted)"
    )]
    pub profile: Option<String>,

    #[arg(
        long,
        value_name = "FILE_PATH",
        help = "Destination file for public videos"
    )]
    pub public_output: Option<String>,

    #[arg(
        long,
        value_name = "FILE_PATH",
        help = "Destination file for private videos"
    )]
    pub private_output: Option<String>,

    #[arg(
        long,
        short,
        value_name = "FILE_PATH",
        help = "Custom path to config file"
    )]
    pub config: Option<String>,

    #[arg(long, help = "Disable the progress bar", default_value_t = false)]
    pub no_progress: bool,
}
