//! argtype command-line interface

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use commands::{CandidatesConfig, ParseConfig, TypeSelection};

/// Try argtype value types from the command line
#[derive(Parser)]
#[command(name = "argtype")]
#[command(author, version, about = "Parse and complete typed flag values", long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TypeArgs {
    /// Type name (defaults to string)
    #[arg(short, long = "type")]
    type_name: Option<String>,

    /// Comma-separated choices; registers --type as an enum of these values
    #[arg(long, value_delimiter = ',')]
    choices: Vec<String>,
}

impl From<TypeArgs> for TypeSelection {
    fn from(args: TypeArgs) -> Self {
        Self {
            type_name: args.type_name,
            choices: args.choices,
        }
    }
}

#[derive(Args)]
struct CandidateArgs {
    #[command(flatten)]
    ty: TypeArgs,

    /// Name of the owning command
    #[arg(long, default_value = "argtype")]
    command: String,

    /// Name of the parent command
    #[arg(long)]
    parent: Option<String>,

    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse raw values with a type
    Parse {
        #[command(flatten)]
        ty: TypeArgs,

        /// Declaration name used in messages
        #[arg(short, long, default_value = "--value")]
        name: String,

        /// Declaration label used in messages (Option, Argument)
        #[arg(short, long, default_value = "Option")]
        label: String,

        /// Print JSON
        #[arg(long)]
        json: bool,

        /// Raw values
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print the values a type lists in help text
    Values {
        #[command(flatten)]
        args: CandidateArgs,
    },

    /// Print shell completion candidates for a type
    Complete {
        #[command(flatten)]
        args: CandidateArgs,

        /// Only candidates starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// List the built-in types
    Types,
}

fn candidates(args: CandidateArgs, prefix: Option<String>) -> CandidatesConfig {
    CandidatesConfig {
        selection: args.ty.into(),
        command: args.command,
        parent: args.parent,
        prefix,
        json: args.json,
    }
}

#[tokio::main]
async fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Parse {
            ty,
            name,
            label,
            json,
            values,
        } => commands::parse(ParseConfig {
            selection: ty.into(),
            label,
            name,
            values,
            json,
        }),
        Commands::Values { args } => commands::values(candidates(args, None)),
        Commands::Complete { args, prefix } => commands::complete(candidates(args, prefix)).await,
        Commands::Types => Ok(commands::types()),
    };

    match result {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}
