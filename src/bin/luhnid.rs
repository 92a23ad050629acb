use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, prelude::*};

use luhnid::{Charset, KeyFormat};

#[derive(Parser)]
#[command(
    name = "luhnid",
    about = "Generate and validate Luhn mod N product keys",
    version
)]
struct Cli {
    #[command(flatten)]
    format: FormatArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FormatArgs {
    /// Number of groups in a key
    #[arg(long, default_value_t = 3, global = true)]
    groups: usize,

    /// Length of each group, including its prefix and check symbol
    #[arg(long = "len", default_value_t = 4, global = true)]
    group_len: usize,

    /// Separator placed between groups
    #[arg(long = "sep", default_value = "-", global = true)]
    separator: String,

    /// Alphabet to draw symbols from, one symbol per character
    #[arg(long, global = true)]
    charset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print newly generated keys
    Generate {
        /// How many keys to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Check a key and report whether it is valid
    Validate {
        /// Key to check
        key: String,
    },
}

impl FormatArgs {
    fn key_format(&self) -> Result<KeyFormat> {
        let mut format = KeyFormat::new()
            .with_groups(self.groups)
            .with_group_len(self.group_len)
            .with_separator(self.separator.as_str());

        if let Some(chars) = &self.charset {
            let charset = Charset::from_chars(chars).context("invalid --charset")?;
            format = format.with_charset(charset);
        }

        format.check().context("invalid key format")?;
        Ok(format)
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format.key_format()?;

    match cli.command {
        Commands::Generate { count } => {
            for _ in 0..count {
                println!("{}", format.generate()?);
            }
        }
        Commands::Validate { key } => {
            if let Err(error) = format.verify(&key) {
                bail!("invalid key: {error}");
            }
            println!("valid key");
        }
    }

    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
