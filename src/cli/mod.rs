use clap::{Parser, Subcommand, ValueEnum};

mod my_platform;

const USAGE: &str = "Usage: starter-kit my-platform [platform-directory-name]";

#[derive(Parser)]
#[command(
    name = "starter-kit",
    version,
    about = "Scaffold a new platform project from the starter kit template"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON object describing the created project
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the starter kit and set up a new project directory
    MyPlatform {
        /// Name of the directory to create [default: platform-starter-kit]
        #[arg(name = "platform-directory-name")]
        directory_name: Option<String>,
        /// Skip installing dependencies
        #[arg(long)]
        skip_install: bool,
        /// Skip git init and the initial commit
        #[arg(long)]
        skip_git: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::MyPlatform {
            directory_name,
            skip_install,
            skip_git,
            format,
        }) => my_platform::run(directory_name, skip_install, skip_git, format),
        None => {
            eprintln!("{USAGE}");
            eprintln!("Run `starter-kit --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "starter-kit: platform project scaffolding\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ template:   {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        starter_kit::config::TEMPLATE_URL,
        env!("CARGO_PKG_LICENSE"),
    );
}
