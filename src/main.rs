use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the TOML structure file")
                .default_value("structure.toml"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .help("Base output directory where structure will be created")
                .default_value("new_project"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // both flags carry defaults, so clap always provides a value
    let config = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("structure.toml");
    let out = matches
        .get_one::<String>("out")
        .map(String::as_str)
        .unwrap_or("new_project");

    let dict = hako::api::scaffold(config, out)?;

    print!("{}", hako::report::render_report(&dict));

    Ok(())
}
