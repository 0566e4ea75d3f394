use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = backend_template::cli::Cli::parse();
    if let Err(e) = backend_template::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
