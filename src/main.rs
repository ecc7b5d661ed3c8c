use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use torrust_udp_client::client::structs::udp_tracker_client::UdpTrackerClient;
use torrust_udp_client::client::traits::TrackerEventHandler;
use torrust_udp_client::config::structs::configuration::Configuration;
use torrust_udp_client::logging::setup_logging;
use torrust_udp_client::session::enums::announce_error::AnnounceError;
use torrust_udp_client::session::enums::tracker_event::TrackerEvent;
use torrust_udp_client::session::structs::announce_update::AnnounceUpdate;
use torrust_udp_client::structs::Cli;

struct LogHandler;

impl TrackerEventHandler for LogHandler {
    fn on_update(&mut self, update: &AnnounceUpdate) {
        info!("[UPDATE] seeds: {} leechers: {} interval: {}s", update.seeds, update.leechers, update.interval);
        for peer in &update.peers {
            info!("[PEER] {peer}");
        }
    }

    fn on_error(&mut self, error: &AnnounceError) {
        error!("[ERROR] {error}");
    }
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (peer_id, info_hash) = match (config.announce.peer_id(), config.announce.info_hash()) {
        (Ok(peer_id), Ok(info_hash)) => (peer_id, info_hash),
        (Err(e), _) | (_, Err(e)) => {
            error!("[BOOT] {e}");
            exit(101);
        }
    };
    let tracker = match config.announce.tracker_address(config.client.default_tracker_port) {
        Ok(tracker) => tracker,
        Err(e) => {
            error!("[BOOT] {e}");
            exit(101);
        }
    };

    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            info!("[BOOT] Announcing {info_hash} to {tracker} as {peer_id}...");
            let mut client = UdpTrackerClient::new(peer_id, info_hash, tracker, config.client);
            client.announce(config.announce.event, config.announce.params()).await;

            let mut handler = LogHandler;
            if args.once {
                match client.next_event().await {
                    Some(TrackerEvent::Update(update)) => handler.on_update(&update),
                    Some(TrackerEvent::Error(error)) => handler.on_error(&error),
                    None => warn!("[CLIENT] nothing to announce"),
                }
            } else {
                tokio::select! {
                    _ = client.run(&mut handler) => {
                        warn!("[CLIENT] stopped announcing");
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown request received, shutting down...");
                    }
                }
            }

            client.destroy();
            info!("Client shutting down completed");
            Ok(())
        })
}
