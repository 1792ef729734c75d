//! Detail CLI for one catalog entry.
//!
//! Resolves a creature by id and prints its detail block (stats, size,
//! types) plus the one-level evolution view. Unresolved evolution links are
//! printed with their id and descriptor only, the same placeholder the grid
//! overlay renders. `--json` emits the expanded view as a single record.

use anyhow::{Context, Result, bail};
use dexgrid::{
    CatalogIndex, CreatureId, EvolutionLink, Language, default_creatures_path, default_types_path,
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
    let Some(view) = index.evolution_view(args.id) else {
        bail!("creature {} not found in snapshot", args.id);
    };

    if args.json {
        println!("{}", serde_json::to_string(&view)?);
        return Ok(());
    }

    let lang = args.lang;
    let creature = &view.creature;
    println!(
        "{} {} [Gen {}]",
        creature.id,
        creature.name.get(lang),
        creature.generation
    );
    println!(
        "{}: {}",
        label(lang, "types"),
        index.type_names_for(creature, lang).join(", ")
    );
    if let Some(hp) = creature.stats.hp {
        println!("{}: {}", label(lang, "hp"), hp);
    }
    println!("{}: {}", label(lang, "atk"), creature.stats.atk);
    println!("{}: {}", label(lang, "def"), creature.stats.def);
    println!("{}: {}", label(lang, "vit"), creature.stats.vit);
    println!("{}: {}", label(lang, "spe_atk"), creature.stats.spe_atk);
    println!("{}: {}", label(lang, "spe_def"), creature.stats.spe_def);
    println!("{}: {} m", label(lang, "height"), creature.height);
    println!("{}: {} kg", label(lang, "weight"), creature.weight);

    print_links(&view.evolved_from, label(lang, "evolved_from"), lang);
    print_links(&view.evolves_to, label(lang, "evolves_to"), lang);
    Ok(())
}

fn print_links(links: &[EvolutionLink], heading: &str, lang: Language) {
    for link in links {
        match &link.creature {
            Some(creature) => println!(
                "{}: {} {} ({})",
                heading,
                creature.id,
                creature.name.get(lang),
                link.descriptor
            ),
            // Dangling reference: keep the id visible rather than hiding
            // the edge.
            None => println!("{}: {} ({})", heading, link.id, link.descriptor),
        }
    }
}

fn label(lang: Language, key: &str) -> &'static str {
    match (lang, key) {
        (Language::Fr, "types") => "Type",
        (Language::Fr, "hp") => "PV",
        (Language::Fr, "atk") => "Attaque",
        (Language::Fr, "def") => "Défense",
        (Language::Fr, "vit") => "Vitesse",
        (Language::Fr, "spe_atk") => "Attaque Spéciale",
        (Language::Fr, "spe_def") => "Défense Spéciale",
        (Language::Fr, "height") => "Taille",
        (Language::Fr, "weight") => "Poids",
        (Language::Fr, "evolved_from") => "Évolue de",
        (Language::Fr, "evolves_to") => "Évolue en",
        (Language::En, "types") => "Type",
        (Language::En, "hp") => "HP",
        (Language::En, "atk") => "Attack",
        (Language::En, "def") => "Defense",
        (Language::En, "vit") => "Speed",
        (Language::En, "spe_atk") => "Special Attack",
        (Language::En, "spe_def") => "Special Defense",
        (Language::En, "height") => "Height",
        (Language::En, "weight") => "Weight",
        (Language::En, "evolved_from") => "Evolves from",
        (Language::En, "evolves_to") => "Evolves to",
        _ => "",
    }
}

struct CliArgs {
    creatures: Option<PathBuf>,
    types: Option<PathBuf>,
    id: CreatureId,
    lang: Language,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut creatures: Option<PathBuf> = None;
        let mut types: Option<PathBuf> = None;
        let mut id: Option<CreatureId> = None;
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
                "--id" => {
                    let raw = next_value(&mut args, "--id")?;
                    let value: u32 = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid value for --id: {raw}"))?;
                    id = Some(CreatureId(value));
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

        let Some(id) = id else {
            bail!("--id is required");
        };

        Ok(CliArgs {
            creatures,
            types,
            id,
            lang,
            json,
        })
    }
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
    "Usage: dex-entry --id N [--creatures PATH] [--types PATH] [--lang fr|en] [--json]\n\
Resolves one creature and prints its detail block plus the one-level evolution view.\n\
Evolution links pointing outside the snapshot are printed with their id and descriptor only.\n"
}

fn print_usage() {
    print!("{}", usage());
}
