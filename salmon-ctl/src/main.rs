//  MAIN.rs
//    by Lut99
//
//  Created:
//    15 Feb 2023, 13:10:27
//  Last edited:
//    15 Feb 2023, 14:05:48
//  Auto updated?
//    Yes
//
//  Description:
//!   Entrypoint to the `salmonctl` executable.
//

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{error, info, LevelFilter};

use salmon_chain::agreement::AgreementContract;
use salmon_chain::salmon::SalmonContract;

use salmon_ctl::errors::CtlError;
use salmon_ctl::contracts;
use salmon_ctl::profiles;


/***** ARGUMENTS *****/
/// Defines the toplevel arguments for the `salmonctl` tool.
#[derive(Debug, Parser)]
#[clap(name = "salmonctl", about = "The command-line interface to the salmon provenance network.")]
struct Arguments {
    /// If given, prints `info` and `debug` prints.
    #[clap(long, help = "If given, prints additional information during execution.", env = "DEBUG")]
    debug       : bool,
    /// The directory the connection profiles resolve against.
    #[clap(short, long, default_value = "./", help = "The network directory under which the 'config/' folder with the connection-profile files lives.", env = "NETWORK_DIR")]
    network_dir : PathBuf,
    /// The path of the world-state snapshot to run contracts against.
    #[clap(short, long, default_value = "./state.json", help = "The world-state snapshot that contract invocations load and save.", env = "STATE_PATH")]
    state       : PathBuf,

    /// The subcommand that can be run.
    #[clap(subcommand)]
    subcommand : CtlSubcommand,
}

/// Defines subcommands for the `salmonctl` tool.
#[derive(Debug, Subcommand)]
enum CtlSubcommand {
    #[clap(subcommand)]
    Profiles(ProfileSubcommand),

    #[clap(subcommand)]
    Salmon(SalmonSubcommand),

    #[clap(subcommand)]
    Agreement(AgreementSubcommand),
}

/// Defines connection-profile-related subcommands for the `salmonctl` tool.
#[derive(Debug, Subcommand)]
#[clap(name = "profiles", about = "Groups commands about the connection-profile configuration.")]
enum ProfileSubcommand {
    #[clap(name = "list", about = "Resolves the four connection profiles against the network directory and prints where each registry key points.")]
    List {},

    #[clap(name = "generate", about = "Resolves the four connection profiles and writes them to a YAML file for later tooling to load.")]
    Generate {
        /// Where to write the resolved configuration.
        #[clap(short, long, default_value = "./profiles.yml", help = "The path to write the resolved profile configuration to.")]
        output : PathBuf,
    },
}

/// Defines salmon-contract subcommands for the `salmonctl` tool.
#[derive(Debug, Subcommand)]
#[clap(name = "salmon", about = "Groups commands that run the salmon provenance contract.")]
enum SalmonSubcommand {
    #[clap(name = "init", about = "Seeds the ledger with starter records, all held by the fisherman.")]
    Init {
        /// How many records to seed, if not the default.
        #[clap(help = "The number of records to seed. Uses the contract default if omitted.")]
        count : Option<String>,
    },

    #[clap(name = "record", about = "Records a single catch on the ledger.")]
    Record {
        #[clap(help = "The id to record the catch under.")]
        id       : String,
        #[clap(help = "The vessel that caught the salmon.")]
        vessel   : String,
        #[clap(help = "When the salmon was caught (YYYY-MM-DD).")]
        datetime : String,
        #[clap(help = "Where the salmon was caught.")]
        location : String,
        #[clap(help = "The identity that holds the salmon.")]
        holder   : String,
    },

    #[clap(name = "transfer", about = "Moves a recorded catch to a new holder.")]
    Transfer {
        #[clap(help = "The id of the catch to transfer.")]
        id     : String,
        #[clap(help = "The identity that will hold the salmon.")]
        holder : String,
    },

    #[clap(name = "query", about = "Shows a single recorded catch.")]
    Query {
        #[clap(help = "The id of the catch to show.")]
        id : String,
    },

    #[clap(name = "query-all", about = "Shows all recorded catches in the given id range.")]
    QueryAll {
        #[clap(help = "The inclusive start of the id range. Unbounded if omitted.")]
        start : Option<String>,
        #[clap(help = "The exclusive end of the id range. Unbounded if omitted.")]
        end   : Option<String>,
    },
}

/// Defines agreement-contract subcommands for the `salmonctl` tool.
#[derive(Debug, Subcommand)]
#[clap(name = "agreement", about = "Groups commands that run the price-agreement contract.")]
enum AgreementSubcommand {
    #[clap(name = "record", about = "Records the price agreed for a sale.")]
    Record {
        #[clap(help = "The id to record the agreement under.")]
        id    : String,
        #[clap(help = "The agreed price.")]
        price : String,
    },

    #[clap(name = "query", about = "Shows a single recorded agreement.")]
    Query {
        #[clap(help = "The id of the agreement to show.")]
        id : String,
    },
}





/***** ENTRYPOINT *****/
fn main() {
    // Read the env & CLI args
    dotenv().ok();
    let args = Arguments::parse();

    // Setup the logger according to the debug flag
    let mut logger = env_logger::builder();
    logger.format_module_path(false);
    if args.debug {
        logger.filter_level(LevelFilter::Debug).init();
    } else {
        logger.filter_level(LevelFilter::Info).init();
    }
    info!("Initializing salmonctl v{}...", env!("CARGO_PKG_VERSION"));

    // Run the subcommand
    let result: Result<(), CtlError> = match args.subcommand {
        CtlSubcommand::Profiles(subcommand) => match subcommand {
            ProfileSubcommand::List {}                => profiles::list(&args.network_dir),
            ProfileSubcommand::Generate { output }    => profiles::generate(&args.network_dir, output),
        },

        CtlSubcommand::Salmon(subcommand) => match subcommand {
            SalmonSubcommand::Init { count } => {
                let init_args: Vec<String> = count.into_iter().collect();
                contracts::init(&args.state, &SalmonContract, &init_args)
            },
            SalmonSubcommand::Record { id, vessel, datetime, location, holder } => contracts::invoke(&args.state, &SalmonContract, "recordSalmon", &[ id, vessel, datetime, location, holder ]),
            SalmonSubcommand::Transfer { id, holder }                           => contracts::invoke(&args.state, &SalmonContract, "changeSalmonHolder", &[ id, holder ]),
            SalmonSubcommand::Query { id }                                      => contracts::invoke(&args.state, &SalmonContract, "querySalmon", &[ id ]),
            SalmonSubcommand::QueryAll { start, end } => {
                let mut range_args: Vec<String> = Vec::with_capacity(2);
                if let Some(start) = start {
                    range_args.push(start);
                    if let Some(end) = end { range_args.push(end); }
                }
                contracts::invoke(&args.state, &SalmonContract, "queryAllSalmon", &range_args)
            },
        },

        CtlSubcommand::Agreement(subcommand) => match subcommand {
            AgreementSubcommand::Record { id, price } => contracts::invoke(&args.state, &AgreementContract, "recordAgreement", &[ id, price ]),
            AgreementSubcommand::Query { id }         => contracts::invoke(&args.state, &AgreementContract, "queryAgreement", &[ id ]),
        },
    };

    // Report any error
    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}
