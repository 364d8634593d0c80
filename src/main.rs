//! # Comanda CLI
//!
//! Command-line interface for the ticket printing service.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server (printer address from env or flags)
//! comanda serve
//!
//! # Serve with explicit settings
//! comanda serve --listen 0.0.0.0:3000 --printer-ip 192.168.1.50 --layout cocina
//!
//! # Print the diagnostic ticket without going through HTTP
//! comanda test-print
//!
//! # Open the cash drawer
//! comanda drawer
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use comanda::{
    ComandaError, NetworkTransport, PrinterConfig,
    directive::{Directive, Sequence},
    server::{ServerConfig, serve},
    ticket::{LayoutConfig, test_sequence},
};

/// Comanda - kitchen ticket printing service
#[derive(Parser, Debug)]
#[command(name = "comanda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server the POS frontend talks to
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:3000")]
        listen: String,

        /// Printer IP (overrides PRINTER_IP)
        #[arg(long)]
        printer_ip: Option<String>,

        /// Printer port (overrides PRINTER_PORT)
        #[arg(long)]
        printer_port: Option<u16>,

        /// Layout profile: mostrador or cocina
        #[arg(long, default_value = "mostrador")]
        layout: String,
    },

    /// Print the diagnostic ticket
    TestPrint {
        /// Printer IP (overrides PRINTER_IP)
        #[arg(long)]
        printer_ip: Option<String>,

        /// Printer port (overrides PRINTER_PORT)
        #[arg(long)]
        printer_port: Option<u16>,
    },

    /// Pulse the cash drawer kick connector
    Drawer {
        /// Printer IP (overrides PRINTER_IP)
        #[arg(long)]
        printer_ip: Option<String>,

        /// Printer port (overrides PRINTER_PORT)
        #[arg(long)]
        printer_port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ComandaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            printer_ip,
            printer_port,
            layout,
        } => {
            let layout = LayoutConfig::by_name(&layout)
                .ok_or_else(|| ComandaError::UnknownLayout(layout.clone()))?;
            let config = ServerConfig {
                listen_addr: listen,
                printer: printer_config(printer_ip, printer_port),
                layout,
            };
            serve(config).await
        }

        Commands::TestPrint {
            printer_ip,
            printer_port,
        } => {
            let printer = printer_config(printer_ip, printer_port);
            println!("Printing test ticket on {}...", printer.addr());
            send(&printer, &test_sequence())?;
            println!("Printed successfully!");
            Ok(())
        }

        Commands::Drawer {
            printer_ip,
            printer_port,
        } => {
            let printer = printer_config(printer_ip, printer_port);
            let mut seq = Sequence::with_init();
            seq.push(Directive::OpenCashDrawerPulse);
            send(&printer, &seq)?;
            println!("Drawer pulse sent.");
            Ok(())
        }
    }
}

/// Environment-based config with CLI flag overrides.
fn printer_config(ip: Option<String>, port: Option<u16>) -> PrinterConfig {
    let mut config = PrinterConfig::from_env();
    if let Some(ip) = ip {
        config.host = ip;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

/// Compile and send a sequence from the blocking CLI context.
fn send(printer: &PrinterConfig, seq: &Sequence) -> Result<(), ComandaError> {
    let mut transport = NetworkTransport::open(&printer.host, printer.port)?;
    transport.send(&seq.to_bytes())?;
    transport.close();
    Ok(())
}
