//! Grid query CLI for the creature catalog.
//!
//! Loads the creature and type snapshots, applies the selector state passed
//! on the command line (search text, generation, type, sort key, language),
//! and prints one line per surviving creature. `--json` emits the full
//! records instead, for piping into other tools.

use anyhow::{Context, Result, bail};
use dexgrid::{
    CatalogIndex, GridFilter, Language, SortKey, TypeId, default_creatures_path,
    default_types_path, filter_creatures, sort_creatures,
};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;

    let creatures_path = match &args.creatures {
        Some(path) => path.clone(),
        None => default_creatures_path()?,
    };
    let types_path = match &args.types {
        Some(path) => path.clone(),
        None => default_types_path()?,
    };

    let index = CatalogIndex::load(&creatures_path, &types_path)?;
    let filtered = filter_creatures(index.creatures(), &args.filter);
    let sorted = sort_creatures(&filtered, args.sort, args.lang);

    if args.json {
        println!("{}", serde_json::to_string(&sorted)?);
        return Ok(());
    }

    for creature in &sorted {
        let type_labels = index.type_names_for(creature, args.lang).join(", ");
        println!(
            "{} {} [Gen {}] {}",
            creature.id,
            creature.name.get(args.lang),
            creature.generation,
            type_labels
        );
    }
    Ok(())
}

struct CliArgs {
    creatures: Option<PathBuf>,
    types: Option<PathBuf>,
    filter: GridFilter,
    sort: SortKey,
    lang: Language,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut creatures: Option<PathBuf> = None;
        let mut types: Option<PathBuf> = None;
        let mut filter = GridFilter::default();
        let mut sort = SortKey::IdAsc;
        let mut lang = Language::Fr;
        let mut json = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--creatures" => {
                    creatures = Some(PathBuf::from(next_value(&mut args, "--creatures")?));
                }
                "--types" => {
                    types = Some(PathBuf::from(next_value(&mut args, "--types")?));
                }
                "--search" => {
                    filter.search = next_value(&mut args, "--search")?;
                }
                "--gen" => {
                    filter.generation = parse_selector(&next_value(&mut args, "--gen")?, "--gen")?;
                }
                "--type" => {
                    filter.type_id = parse_selector(&next_value(&mut args, "--type")?, "--type")?
                        .map(TypeId);
                }
                "--sort" => {
                    // Unrecognized keys degrade to id_asc, same as the grid.
                    sort = SortKey::parse(&next_value(&mut args, "--sort")?);
                }
                "--lang" => {
                    lang = Language::parse(&next_value(&mut args, "--lang")?);
                }
                "--json" => {
                    json = true;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs {
            creatures,
            types,
            filter,
            sort,
            lang,
            json,
        })
    }
}

/// Parse a dropdown value: "all" (or empty) selects everything.
fn parse_selector(raw: &str, flag: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    let value: u32 = trimmed
        .parse()
        .with_context(|| format!("invalid value for {flag}: {raw}"))?;
    Ok(Some(value))
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: dex-grid [--creatures PATH] [--types PATH] [--search TEXT] [--gen N|all] [--type N|all] [--sort KEY] [--lang fr|en] [--json]\n\
Loads the creature snapshot, applies the grid selectors, and prints one line per matching creature (or full records with --json).\n\
Sort keys: id_asc id_desc name_asc name_desc weight_asc weight_desc height_asc height_desc (anything else falls back to id_asc).\n"
}

fn print_usage() {
    print!("{}", usage());
}
