//! Command-line front end for the typology engine.
//!
//! ```text
//! cognitive-typology questions [--class <class>]
//! cognitive-typology calculate [--preset <name>] < responses.json
//! cognitive-typology archetype <CODE>
//! ```
//!
//! JSON goes to stdout; logs go to stderr.

use std::env;
use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cognitive_typology::application::{
    CalculateTypeCommand, CalculateTypeHandler, GetArchetypeHandler, GetArchetypeQuery,
    ListQuestionsHandler, ListQuestionsQuery,
};
use cognitive_typology::config::{AppConfig, LoggingConfig};
use cognitive_typology::domain::typology::{QuestionClass, StrategyPreset};

enum Command {
    Questions { class: Option<QuestionClass> },
    Calculate { preset: Option<StrategyPreset> },
    Archetype { code: String },
    Help,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let Some(name) = args.first() else {
            return Ok(Command::Help);
        };

        match name.as_str() {
            "questions" => {
                let class = match flag_value(&args[1..], "--class")? {
                    Some(value) => Some(parse_class(value)?),
                    None => None,
                };
                Ok(Command::Questions { class })
            }
            "calculate" => {
                let preset = match flag_value(&args[1..], "--preset")? {
                    Some(value) => Some(value.parse::<StrategyPreset>()?),
                    None => None,
                };
                Ok(Command::Calculate { preset })
            }
            "archetype" => {
                let code = args.get(1).context("archetype needs a four-letter code")?;
                Ok(Command::Archetype { code: code.clone() })
            }
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => bail!("unknown command '{other}' (try --help)"),
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args {
        [] => Ok(None),
        [name, value] if name == flag => Ok(Some(value.as_str())),
        [name] if name == flag => bail!("{flag} needs a value"),
        _ => bail!("unexpected arguments '{}'", args.join(" ")),
    }
}

fn parse_class(value: &str) -> Result<QuestionClass> {
    match value {
        "function_preference" => Ok(QuestionClass::FunctionPreference),
        "function_order" => Ok(QuestionClass::FunctionOrder),
        "traditional_dichotomy" => Ok(QuestionClass::TraditionalDichotomy),
        other => bail!(
            "unknown question class '{other}' \
             (expected function_preference, function_order or traditional_dichotomy)"
        ),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = fmt().with_writer(io::stderr).with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

fn print_help() {
    println!("cognitive-typology - personality type inference");
    println!();
    println!("USAGE:");
    println!("    cognitive-typology questions [--class <class>]");
    println!("    cognitive-typology calculate [--preset <name>] < responses.json");
    println!("    cognitive-typology archetype <CODE>");
    println!();
    println!("PRESETS: accurate (default), type-first, flexible, baseline");
    println!();
    println!("ENVIRONMENT:");
    println!("    TYPOLOGY__CALCULATION__PRESET    Default preset");
    println!("    TYPOLOGY__LOGGING__FILTER        Log filter (default: info)");
    println!("    TYPOLOGY__LOGGING__JSON          Emit JSON logs (default: false)");
    println!("    RUST_LOG                         Overrides the log filter");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    if let Command::Help = command {
        print_help();
        return Ok(());
    }

    let mut config = AppConfig::load_validated().context("invalid configuration")?;
    init_tracing(&config.logging);

    match command {
        Command::Questions { class } => {
            let views = ListQuestionsHandler::new().handle(ListQuestionsQuery { class });
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Command::Calculate { preset } => {
            if let Some(preset) = preset {
                config.calculation.preset = preset;
            }
            info!(preset = %config.calculation.preset, "Reading responses from stdin");

            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            let cmd: CalculateTypeCommand =
                serde_json::from_str(&input).context("stdin is not a JSON array of responses")?;

            let calculator = config.calculation.build_calculator()?;
            let handler = CalculateTypeHandler::new(Arc::new(calculator));
            let result = handler.handle(cmd)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Archetype { code } => {
            let archetype = GetArchetypeHandler::new().handle(GetArchetypeQuery { code })?;
            println!("{}", serde_json::to_string_pretty(archetype)?);
        }
        Command::Help => {}
    }

    Ok(())
}
