use clap::{Parser, Subcommand};
use ipv6_toolkit::config::{clamp_bulk_count, PlannerConfig, ISATAP_DEFAULT_PREFIX};
use ipv6_toolkit::models::{Address, Subnet};
use ipv6_toolkit::output::{escape_csv_field, render_address, render_children, render_subnet};
use ipv6_toolkit::processing::{
    bulk_sequence, child_blocks, create_6to4, create_eui64_link_local, create_isatap_with_prefix,
    create_nat64,
};
use ipv6_toolkit::{AddressReport, SubnetReport};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use serde::Serialize;
use std::error::Error;

#[derive(Parser)]
#[command(name = "ipv6-toolkit")]
#[command(about = "IPv6 address, subnet and transition calculator.")]
struct CommandLine {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show canonical, expanded, category, binary and reverse DNS forms
    #[command(alias = "s")]
    Show { address: String },
    /// Show the range of a subnet
    #[command(alias = "n")]
    Subnet {
        address: String,
        #[arg(allow_negative_numbers = true)]
        prefix_len: i64,
    },
    /// List the child blocks one planning level down
    #[command(alias = "t")]
    Tree {
        address: String,
        #[arg(allow_negative_numbers = true)]
        prefix_len: i64,
    },
    /// Derive NAT64, 6to4 and ISATAP addresses from an IPv4 address
    Transition {
        ipv4: String,
        #[arg(long, default_value = ISATAP_DEFAULT_PREFIX)]
        isatap_prefix: String,
    },
    /// Generate consecutive addresses (at most 1000)
    #[command(alias = "b")]
    Bulk {
        address: String,
        #[arg(default_value_t = 10)]
        count: usize,
        /// Print as CSV with an Address header
        #[arg(long)]
        csv: bool,
    },
    /// Link-local address from a MAC via modified EUI-64
    Eui64 { mac: String },
}

#[derive(Serialize)]
struct TransitionReport {
    nat64: Address,
    six_to_four: Address,
    isatap: Address,
}

fn init_logging() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        let stderr = ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
        match config.map(log4rs::init_config) {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => eprintln!("Error installing fallback logger: {e}"),
            Err(e) => eprintln!("Error building fallback logger config: {e}"),
        }
        log::debug!("log4rs.yml not loaded: {e}");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let commands = CommandLine::parse();
    dotenv::dotenv().ok();
    init_logging();
    log::info!("#Start main()");

    match commands.command {
        Commands::Show { address } => {
            let report = AddressReport::new(&Address::parse(address.trim())?);
            if commands.json {
                print_json(&report)?;
            } else {
                println!("{}", render_address(&report));
            }
        }
        Commands::Subnet {
            address,
            prefix_len,
        } => {
            let subnet = Subnet::new(Address::parse(address.trim())?, prefix_len)?;
            let report = SubnetReport::new(&subnet);
            if commands.json {
                print_json(&report)?;
            } else {
                println!("{}", render_subnet(&report));
            }
        }
        Commands::Tree {
            address,
            prefix_len,
        } => {
            let subnet = Subnet::new(Address::parse(address.trim())?, prefix_len)?;
            let config = PlannerConfig::from_env();
            let children = child_blocks(&subnet, &config);
            log::info!("{} child blocks under {}", children.len(), subnet.key());
            if commands.json {
                print_json(&children)?;
            } else {
                println!("{}", render_children(&subnet, &children));
            }
        }
        Commands::Transition {
            ipv4,
            isatap_prefix,
        } => {
            let report = TransitionReport {
                nat64: create_nat64(&ipv4)?,
                six_to_four: create_6to4(&ipv4)?,
                isatap: create_isatap_with_prefix(&ipv4, &isatap_prefix)?,
            };
            if commands.json {
                print_json(&report)?;
            } else {
                println!("NAT64:  {}", report.nat64);
                println!("6to4:   {}", report.six_to_four);
                println!("ISATAP: {}", report.isatap);
            }
        }
        Commands::Bulk {
            address,
            count,
            csv,
        } => {
            let start = Address::parse(address.trim())?;
            let count = clamp_bulk_count(count);
            let mut printed = 0;
            if commands.json {
                let list: Vec<Address> = bulk_sequence(start, count).collect();
                printed = list.len();
                print_json(&list)?;
            } else {
                if csv {
                    println!("Address");
                }
                for addr in bulk_sequence(start, count) {
                    if csv {
                        println!("{}", escape_csv_field(&addr.canonical()));
                    } else {
                        println!("{addr}");
                    }
                    printed += 1;
                }
            }
            if printed < count {
                log::warn!("Address space ended after {printed} of {count} addresses");
            }
        }
        Commands::Eui64 { mac } => {
            let addr = create_eui64_link_local(&mac)?;
            if commands.json {
                print_json(&AddressReport::new(&addr))?;
            } else {
                println!("{addr}");
            }
        }
    }

    Ok(())
}
