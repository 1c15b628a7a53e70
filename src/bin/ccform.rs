//! CLI driver for the card form engine.
//!
//! # Usage
//!
//! ```bash
//! # Detect the network of a (partial) number
//! ccform detect 3782
//!
//! # Format a number for its network
//! ccform format 378282246310005
//!
//! # Check a complete form
//! ccform check --number 4111111111111111 --expiry 12/30 --cvc 123 --output json
//!
//! # Replay keystrokes, one "<field> <raw value>" per line
//! printf 'number 4\nnumber 41\nexpiry 12\n' | ccform interactive
//!
//! # Generate test card numbers
//! ccform generate --network amex --count 3
//! ```
//!
//! Set `RUST_LOG=card_form=debug` to trace engine updates on stderr.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;

use card_form::mask::{mask_cvc, mask_number};
use card_form::{
    detect_network, format_number, generate, CardNetwork, ErrorMessages, FieldName, FormConfig,
    FormEngine, FormError, FormSnapshot, YearMonth,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ccform")]
#[command(author, version, about = "Payment card form formatting and validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card network from leading digits
    Detect {
        /// Card number or partial number
        number: String,
    },

    /// Format a card number for its network
    Format {
        /// Card number (any separators)
        number: String,

        /// Format for this network instead of the detected one
        #[arg(short, long)]
        network: Option<NetworkArg>,
    },

    /// Run a whole form through the engine and report every field
    Check {
        /// Card number
        #[arg(long, default_value = "")]
        number: String,

        /// Expiry, MM/YY or MMYY
        #[arg(long, default_value = "")]
        expiry: String,

        /// Security code
        #[arg(long, default_value = "")]
        cvc: String,

        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,

        #[command(flatten)]
        form: FormArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Read "<field> <raw value>" lines from stdin and print a snapshot per line
    Interactive {
        #[command(flatten)]
        form: FormArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card network to generate
        #[arg(short, long, default_value = "visa")]
        network: NetworkArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output grouped for the network
        #[arg(short, long)]
        formatted: bool,
    },
}

#[derive(Args)]
struct FormArgs {
    /// Require the cardholder name
    #[arg(long)]
    requires_name: bool,

    /// Check expiry against this month (YYYY-MM) instead of today
    #[arg(long)]
    reference: Option<YearMonth>,

    /// Reject expiry dates more than this many years ahead
    #[arg(long)]
    max_expiry_years: Option<u16>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

impl FormArgs {
    fn into_config(self) -> Result<FormConfig, FormError> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| FormError::Config(format!("{}: {}", path.display(), e)))?;
                FormConfig::from_json(&json)?
            }
            None => FormConfig::default(),
        };

        if self.requires_name {
            config.requires_name = true;
        }
        if let Some(reference) = self.reference {
            config.reference_date = Some(reference);
        }
        if let Some(years) = self.max_expiry_years {
            config.max_expiry_years = Some(years);
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Visa,
    Mastercard,
    Amex,
    Discover,
    DinersClub,
    Jcb,
    UnionPay,
}

impl From<NetworkArg> for CardNetwork {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Visa => CardNetwork::Visa,
            NetworkArg::Mastercard => CardNetwork::Mastercard,
            NetworkArg::Amex => CardNetwork::Amex,
            NetworkArg::Discover => CardNetwork::Discover,
            NetworkArg::DinersClub => CardNetwork::DinersClub,
            NetworkArg::Jcb => CardNetwork::Jcb,
            NetworkArg::UnionPay => CardNetwork::UnionPay,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect { number } => {
            cmd_detect(&number);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Format { number, network } => {
            cmd_format(&number, network.map(Into::into));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            number,
            expiry,
            cvc,
            name,
            form,
            output,
        } => form
            .into_config()
            .map(|config| cmd_check(config, [&number, &expiry, &cvc, &name], output)),
        Commands::Interactive { form, output } => form
            .into_config()
            .and_then(|config| cmd_interactive(config, output)),
        Commands::Generate {
            network,
            count,
            formatted,
        } => {
            cmd_generate(network.into(), count, formatted);
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn cmd_detect(number: &str) {
    let network = detect_network(number);
    println!("Network: {} ({})", network.name(), network.tag());
    if network.is_known() {
        println!("Lengths: {}", join(network.number_lengths()));
        println!("Groups:  {}", join(network.group_sizes()));
        println!("CVC:     {} digits", network.cvc_length());
    }
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_format(number: &str, network: Option<CardNetwork>) {
    let network = network.unwrap_or_else(|| detect_network(number));
    println!("{}", format_number(number, network));
}

fn cmd_check(config: FormConfig, raw: [&String; 4], output: OutputFormat) -> ExitCode {
    let mut engine = FormEngine::new(config);
    for (field, raw) in FieldName::ALL.into_iter().zip(raw) {
        engine.update_field(field, raw);
    }

    let snapshot = engine.current_snapshot();
    print_snapshot(&snapshot, &engine.config().messages, None, output);

    if snapshot.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_interactive(config: FormConfig, output: OutputFormat) -> Result<ExitCode, FormError> {
    let mut engine = FormEngine::new(config);

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| FormError::Config(format!("stdin: {}", e)))?;
        if line.trim().is_empty() {
            continue;
        }
        let (field, raw) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let field: FieldName = field.parse()?;
        engine.update_field(field, raw);

        // the field just typed into keeps focus
        let snapshot = engine.current_snapshot();
        print_snapshot(&snapshot, &engine.config().messages, Some(field), output);
    }

    Ok(if engine.current_snapshot().valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_generate(network: CardNetwork, count: usize, formatted: bool) {
    for number in generate::generate_cards(network, count) {
        if formatted {
            println!("{}", format_number(&number, network));
        } else {
            println!("{}", number);
        }
    }
}

fn print_snapshot(
    snapshot: &Arc<FormSnapshot>,
    messages: &ErrorMessages,
    focused: Option<FieldName>,
    output: OutputFormat,
) {
    match output {
        OutputFormat::Text => {
            let values = &snapshot.values;
            println!("Network: {}", values.network.name());
            for field in FieldName::ALL {
                let shown = match field {
                    FieldName::Number => mask_number(&values.number, values.network),
                    FieldName::Cvc => mask_cvc(&values.cvc),
                    _ => values.get(field).to_string(),
                };
                let message = messages.message_for(snapshot, field, focused).unwrap_or("");
                println!(
                    "{:<7} {:<24} {:<10} {}",
                    format!("{}:", field),
                    format!("{:?}", shown),
                    snapshot.status.get(field).as_str(),
                    message
                );
            }
            println!("Valid:   {}", if snapshot.valid { "yes" } else { "no" });
        }
        OutputFormat::Json => match serde_json::to_string(snapshot.as_ref()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: {}", e),
        },
    }
}
