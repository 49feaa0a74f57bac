use clap::{
    crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand,
};
use gfreq::{
    orca::OrcaProcess,
    task::{batch, convert, recompute_freq, CountTask},
};
use std::{error::Error, path::Path};

fn handle_convert(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for file in matches.values_of("EDGELIST").unwrap() {
        let output = convert(Path::new(file))?;
        println!("{}", output.display());
    }
    Ok(())
}

fn handle_count(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let counter = OrcaProcess::new(matches.value_of("orca").unwrap());
    CountTask::new(matches.value_of("NETWORK").unwrap(), &counter).run()?;
    Ok(())
}

fn handle_batch(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let counter = OrcaProcess::new(matches.value_of("orca").unwrap());
    let count = batch(Path::new(matches.value_of("DIR").unwrap()), &counter)?;
    eprintln!("processed {} networks", count);
    Ok(())
}

fn handle_freq(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let output = recompute_freq(Path::new(matches.value_of("NDUMP2").unwrap()))?;
    println!("{}", output.display());
    Ok(())
}

fn orca_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("orca")
        .help("Path of the ORCA orbit counting executable")
        .long("orca")
        .takes_value(true)
        .default_value("./orca")
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("convert")
                .about("Converts tab-separated edge lists to LEDA .gw files")
                .arg(Arg::with_name("EDGELIST").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("count")
                .about("Counts graphlets in a LEDA network, writing .ndump2 and .gr_freq")
                .arg(Arg::with_name("NETWORK").required(true))
                .arg(orca_arg()),
        )
        .subcommand(
            SubCommand::with_name("batch")
                .about("Counts graphlets in every .gw network in a directory")
                .arg(Arg::with_name("DIR").required(true))
                .arg(orca_arg()),
        )
        .subcommand(
            SubCommand::with_name("freq")
                .about("Recomputes the .gr_freq report from an existing .ndump2 file")
                .arg(Arg::with_name("NDUMP2").required(true)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("convert") {
        handle_convert(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("count") {
        handle_count(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("batch") {
        handle_batch(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("freq") {
        handle_freq(matches)?;
    }
    Ok(())
}
