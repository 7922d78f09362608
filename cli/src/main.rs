mod commands;
mod terminal;

use commands::{CommandLine, Commands, parse, report, shell, show};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = commands.config();
    print::banner(cfg.quiet);

    match commands.command.unwrap_or(Commands::Shell) {
        Commands::Parse { file } => {
            print::header("mapping topology", cfg.quiet);
            parse::parse(&file, &cfg).map(|_| ())
        }
        Commands::Report => {
            print::header("writing report", cfg.quiet);
            report::report(&cfg).await
        }
        Commands::Show => {
            print::header("loading snapshot", cfg.quiet);
            show::show(&cfg)
        }
        Commands::Shell => shell::run(&cfg).await,
    }
}
