mod commands;
mod terminal;

use commands::{CommandLine, Commands, request, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.scan_config();

    match commands.command {
        Commands::Scan { target, ports, json, all } => {
            print::header("starting scanner", commands.quiet);
            let output = scan::OutputOptions {
                json,
                all,
                quiet: commands.quiet,
            };
            scan::scan(target, &ports, cfg, &output).await
        }
        Commands::Request { body } => request::request(body, cfg).await,
    }
}
