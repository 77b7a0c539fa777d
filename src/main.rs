use clap::Parser;

mod cli;

fn main() {
    starter_kit::logging::init_logging();
    cli::run(cli::Cli::parse());
}
