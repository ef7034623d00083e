//! fleetwise-client CLI entry point.

use clap::Parser;
use fleetwise_client::cli::fleet::FleetAction;
use fleetwise_client::cli::{Cli, Commands, OutputFormat};
use fleetwise_client::client::fleet::RegenerateFleetRequest;
use fleetwise_client::client::FleetwiseClient;
use fleetwise_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = FleetwiseClient::new(&cli.base_url);

    match cli.command {
        Commands::Profiles => {
            let profiles = client.list_profiles().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&profiles, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_profiles(&profiles)),
            }
        }
        Commands::Fleet(fleet_cmd) => match fleet_cmd.action {
            FleetAction::Show => {
                let fleet = client.get_fleet().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&fleet, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_fleet(&fleet)),
                }
            }
            FleetAction::Generate { profile } => {
                let fleet = client
                    .regenerate_fleet(RegenerateFleetRequest { profile })
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&fleet, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("Generated:");
                        }
                        println!("{}", pretty::format_fleet(&fleet))
                    }
                }
            }
            FleetAction::Table { id } => {
                let table = client.get_table(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&table, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_table(&table)),
                }
            }
        },
        Commands::Stats => {
            let stats = client.get_stats().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&stats, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_stats(&stats)),
            }
        }
        Commands::Recommendations { limit } => {
            let recs = client.list_recommendations(limit).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&recs, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_recommendations(&recs)),
            }
        }
        Commands::Chat { message } => {
            let reply = client.chat(message.join(" ")).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&reply, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_chat_reply(&reply)),
            }
        }
        Commands::Health => {
            client.livez().await?;
            if !cli.quiet {
                println!("OK {}", client.base_url());
            }
        }
    }

    Ok(())
}
