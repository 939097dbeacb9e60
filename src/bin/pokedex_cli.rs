//! Command-line front end for the catalog.
//!
//! Prints JSON on stdout and diagnostics on stderr. Exit status is 0 on
//! success, 2 when the caller passed something invalid, 3 when a requested
//! entity does not exist and 1 for anything else (bad resources included).

use anyhow::{Context, Result, anyhow, bail};
use pokedex::schema_loader::default_schema_path;
use pokedex::{
    EntitySchema, ErrorClass, Language, Listing, Pokedex, PokedexError, QueryParams,
    find_resource_dir,
};
use serde_json::json;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "POKEDEX_LOG";

const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_NOT_FOUND: i32 = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args_os().skip(1))?;
    let resource_dir = match args.resources {
        Some(dir) => dir,
        None => find_resource_dir()?,
    };
    debug!(dir = %resource_dir.display(), lang = %args.language, "loading catalog");
    let pokedex = Pokedex::load(args.language, &resource_dir)
        .with_context(|| format!("loading catalog from {}", resource_dir.display()))?;

    match args.command {
        Command::List(params) => {
            let page = params.run(&pokedex)?;
            info!(total = page.total, count = page.count, "listed pokemon");
            print_json(&page)
        }
        Command::Get(id) => {
            let found = pokedex.id(&id).get_pokemon();
            match found.into_iter().next() {
                Some(entity) => print_json(&entity),
                None => Err(NotFound(id).into()),
            }
        }
        Command::Types => print_json(&Listing::new(pokedex.types())),
        Command::Abilities => print_json(&Listing::new(pokedex.abilities())),
        Command::EggGroups => print_json(&Listing::new(pokedex.egg_groups())),
        Command::Generations => print_json(&Listing::new(pokedex.generations().to_vec())),
        Command::Validate(schema) => {
            let schema_path = schema.unwrap_or_else(|| default_schema_path(&resource_dir));
            let schema = EntitySchema::load(&schema_path)?;
            let entities = pokedex.get_pokemon();
            let violations = schema.validate_entities(&entities)?;
            print_json(&json!({
                "language": pokedex.language().code(),
                "schema": schema.path().display().to_string(),
                "checked": entities.len(),
                "violations": &violations,
            }))?;
            if !violations.is_empty() {
                bail!(
                    "{} of {} entities failed schema validation",
                    violations.len(),
                    entities.len()
                );
            }
            Ok(())
        }
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

#[derive(Debug)]
struct NotFound(String);

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pokemon not found: {}", self.0)
    }
}

impl std::error::Error for NotFound {}

#[derive(Debug)]
struct UsageError(String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.0, usage())
    }
}

impl std::error::Error for UsageError {}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<NotFound>().is_some() {
        return EXIT_NOT_FOUND;
    }
    if err.downcast_ref::<UsageError>().is_some() {
        return EXIT_INPUT;
    }
    match err.downcast_ref::<PokedexError>().map(PokedexError::class) {
        Some(ErrorClass::Input) => EXIT_INPUT,
        _ => EXIT_FAILURE,
    }
}

enum Command {
    List(QueryParams),
    Get(String),
    Types,
    Abilities,
    EggGroups,
    Generations,
    Validate(Option<PathBuf>),
}

struct CliArgs {
    language: Language,
    resources: Option<PathBuf>,
    command: Command,
}

impl CliArgs {
    fn parse(args: impl Iterator<Item = OsString>) -> Result<Self> {
        let mut args = args.map(|arg| {
            arg.into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))
        });
        let mut language: Option<String> = None;
        let mut resources: Option<PathBuf> = None;
        let mut command: Option<Command> = None;
        let mut params = QueryParams::default();
        let mut schema: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            let arg = arg?;
            match arg.as_str() {
                "--lang" => language = Some(next_value(&mut args, "--lang")?),
                "--resources" => {
                    resources = Some(PathBuf::from(next_value(&mut args, "--resources")?))
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => match command {
                    Some(Command::List(_)) => parse_list_flag(flag, &mut args, &mut params)?,
                    Some(Command::Validate(_)) if flag == "--schema" => {
                        schema = Some(PathBuf::from(next_value(&mut args, "--schema")?))
                    }
                    _ => return Err(UsageError(format!("unknown flag: {flag}")).into()),
                },
                word if command.is_none() => {
                    command = Some(match word {
                        "list" => Command::List(QueryParams::default()),
                        "get" => Command::Get(next_value(&mut args, "get")?),
                        "types" => Command::Types,
                        "abilities" => Command::Abilities,
                        "egg-groups" => Command::EggGroups,
                        "generations" => Command::Generations,
                        "validate" => Command::Validate(None),
                        other => {
                            return Err(UsageError(format!("unknown command: {other}")).into());
                        }
                    })
                }
                other => return Err(UsageError(format!("unexpected argument: {other}")).into()),
            }
        }

        let command = match command {
            Some(Command::List(_)) => Command::List(params),
            Some(Command::Validate(_)) => Command::Validate(schema),
            Some(command) => command,
            None => return Err(UsageError("missing command".to_string()).into()),
        };

        Ok(CliArgs {
            language: Language::resolve(language.as_deref())?,
            resources,
            command,
        })
    }
}

fn parse_list_flag(
    flag: &str,
    args: &mut impl Iterator<Item = Result<String>>,
    params: &mut QueryParams,
) -> Result<()> {
    match flag {
        "--name" => params.name = Some(next_value(args, flag)?),
        "--type" => params.pokemon_type = Some(next_value(args, flag)?),
        "--generation" => params.generation = Some(next_value(args, flag)?),
        "--egg-group" => params.egg_group = Some(next_value(args, flag)?),
        "--can-mega-evolve" => params.can_mega_evolve = true,
        "--in-galar-pokedex" => params.in_galar_pokedex = true,
        "--base-stat-total" => params.base_stat_total = Some(next_value(args, flag)?),
        "--operator" => params.operator = Some(next_value(args, flag)?),
        "--sort-by" => params.sort_by = Some(next_value(args, flag)?),
        // Unparseable paging values fall back to the defaults.
        "--limit" => params.limit = next_value(args, flag)?.trim().parse().ok(),
        "--offset" => params.offset = next_value(args, flag)?.trim().parse().ok(),
        other => return Err(UsageError(format!("unknown flag for list: {other}")).into()),
    }
    Ok(())
}

fn next_value(args: &mut impl Iterator<Item = Result<String>>, flag: &str) -> Result<String> {
    args.next()
        .transpose()?
        .ok_or_else(|| UsageError(format!("missing value for {flag}")).into())
}

fn usage() -> &'static str {
    "Usage: pokedex [--lang ja|en] [--resources DIR] <command>\n\
Commands:\n\
  list [--name N] [--type T] [--generation G] [--egg-group E] [--can-mega-evolve]\n\
       [--in-galar-pokedex] [--base-stat-total V --operator >|>=|<|<=|=]\n\
       [--sort-by Lexicographical|NationalNumber] [--limit N] [--offset N]\n\
  get <id>\n\
  types | abilities | egg-groups | generations\n\
  validate [--schema PATH]\n"
}
