use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

// Import from your library
use carvekit::utils::logger::Logger;
use carvekit::commands::{CommandFactory, CarvekitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CarveKit")
        .version("0.1")
        .about("Scan a binary file for magic-byte signatures and extract embedded files")
        .arg(
            Arg::new("input")
                .help("Input file to scan")
                .required_unless_present("list-signatures")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output directory for extracted files (default: ./output)")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::new("signatures")
                .short('s')
                .long("signatures")
                .help("Signature definitions file (default: type.txt)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("list-signatures")
                .short('l')
                .long("list-signatures")
                .help("Parse and display the signature catalog without scanning")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "carvekit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("carvekit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    if !matches.get_flag("verbose") {
        log::set_max_level(LevelFilter::Info);
    }

    let factory = CarvekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
