use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use knapforge_instances::{generate_instances, GeneratorParams, Instance};
use knapforge_utils::{compress_obj, dejsonify, jsonify};
use std::{fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("knapforge")
        .about("Generates and verifies knapsack instances with a unique optimal solution")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generates instances")
                .arg(
                    arg!(<PARAMS> "Params json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instances will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the instances will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("PARAMS").unwrap().clone(),
            sub_m.get_one::<String>("SEED").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_one::<bool>("compress").unwrap().clone(),
        ),
        Some(("verify", sub_m)) => verify(sub_m.get_one::<String>("INSTANCE").unwrap().clone()),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn generate(
    params: String,
    rand_hash: String,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let params = load_params(&params);
    let seed = params.calc_seed(&rand_hash);
    let instances = generate_instances(&seed, &params)?;
    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&instances))?;
        } else {
            fs::write(&path, jsonify(&instances))?;
        }
        println!("{} instances written to: {:?}", instances.len(), path);
    } else {
        println!("{}", jsonify(&instances));
    }
    Ok(())
}

pub fn verify(instance: String) -> Result<()> {
    let instance = load_instance(&instance);
    instance
        .verify()
        .map_err(|e| anyhow!("Invalid instance: {}", e))?;
    println!("Instance is valid");
    Ok(())
}

fn load_params(params: &str) -> GeneratorParams {
    let params = if params.ends_with(".json") {
        fs::read_to_string(params).unwrap_or_else(|_| {
            eprintln!("Failed to read params file: {}", params);
            std::process::exit(1);
        })
    } else {
        params.to_string()
    };

    dejsonify::<GeneratorParams>(&params).unwrap_or_else(|_| {
        eprintln!("Failed to parse params");
        std::process::exit(1);
    })
}

fn load_instance(instance: &str) -> Instance {
    let instance = if instance == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|_| {
                eprintln!("Failed to read instance from stdin");
                std::process::exit(1);
            });
        buffer
    } else if instance.ends_with(".json") {
        fs::read_to_string(instance).unwrap_or_else(|_| {
            eprintln!("Failed to read instance file: {}", instance);
            std::process::exit(1);
        })
    } else {
        instance.to_string()
    };

    dejsonify::<Instance>(&instance).unwrap_or_else(|_| {
        eprintln!("Failed to parse instance");
        std::process::exit(1);
    })
}
