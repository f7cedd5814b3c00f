use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;

use nav_lens::{NavLensServer, logging};

#[derive(Parser, Debug)]
#[command(name = "nav-lens", version, about)]
struct Args {
    /// Log at debug level regardless of the `logLevel` setting.
    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_path = args.log_file.as_ref().map(std::path::PathBuf::from).unwrap_or_else(logging::default_log_path);
    let log_control = logging::init(&log_path, args.verbose);

    info!("Starting nav-lens server v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| NavLensServer::new(client).with_log_control(log_control.clone()));

    Server::new(stdin, stdout, socket).serve(service).await;

    info!("nav-lens server stopped");
}
