use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_testing::relay::{self, RelayAccount};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Relay {
            host,
            port,
            service_id,
            template_id,
            public_key,
        } => {
            let account = RelayAccount {
                service_id,
                template_id,
                public_key,
            };
            relay::start_server(host, port, account).await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the email relay testing server
    Relay {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        port: u16,
        #[arg(long, default_value = "YOUR_SERVICE_ID")]
        service_id: String,
        #[arg(long, default_value = "YOUR_TEMPLATE_ID")]
        template_id: String,
        #[arg(long, default_value = "YOUR_PUBLIC_KEY")]
        public_key: String,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
