use std::path::PathBuf;

use clap::Parser;

use dnp3_core::Direction;
use dnp3_link::{FrameCategory, LinkSession, SessionConfig};
use dnp3_physical::LoopbackMedium;
use dnp3_stack::config::parse_role;
use dnp3_stack::{StackConfig, StackError, Station};

#[derive(Parser)]
#[command(name = "dnp3-stack", about = "DNP3 link-layer station demo")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "station.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        dnp3_stack::logging::init_json();
    } else {
        dnp3_stack::logging::init();
    }

    let config = if cli.config.exists() {
        match StackConfig::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("failed to load config from {}: {e}", cli.config.display());
                std::process::exit(1);
            }
        }
    } else {
        tracing::info!(
            path = %cli.config.display(),
            "no config file found, using defaults"
        );
        StackConfig::default()
    };

    if let Err(e) = run(&config) {
        tracing::error!("station demo failed: {e}");
        std::process::exit(1);
    }
}

/// Run one master/outstation exchange over a loopback pair.
///
/// The configured station takes one end; a mirror peer takes the other.
fn run(config: &StackConfig) -> Result<(), StackError> {
    let local_direction = parse_role(&config.station.role)?;
    let peer_direction = match local_direction {
        Direction::FromMaster => Direction::FromOutstation,
        Direction::FromOutstation => Direction::FromMaster,
    };

    let local_session = LinkSession::new(
        SessionConfig::new(config.station.source, config.station.destination)?
            .with_direction(local_direction),
    );
    let peer_session = LinkSession::new(
        SessionConfig::new(config.station.destination, config.station.source)?
            .with_direction(peer_direction),
    );

    let (medium_a, medium_b) = LoopbackMedium::pair();
    let mut local = Station::bind(local_session, Box::new(medium_a), config.station.confirmed)?;
    let mut peer = Station::bind(peer_session, Box::new(medium_b), config.station.confirmed)?;

    // Reset link states, then deliver one payload of user data.
    local.send_reset()?;
    for delivery in peer.poll()? {
        if matches!(delivery.category, FrameCategory::LinkControl(_)) {
            peer.acknowledge()?;
        }
    }
    local.poll()?;

    local.send_user_data(b"demand poll: analog inputs 0-15")?;
    let deliveries = peer.poll()?;
    for delivery in &deliveries {
        if delivery.category == (FrameCategory::DeliverUserData { confirm: true }) {
            peer.acknowledge()?;
        }
    }
    let acknowledgements = local.poll()?;

    tracing::info!(
        delivered = deliveries.len(),
        acknowledged = acknowledgements.len(),
        "exchange complete"
    );
    Ok(())
}
