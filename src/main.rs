use library_catalog::{application::catalog::Catalog, cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::io::Result<()> {
    // Initialize tracing (stderr so the menu on stdout stays readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut catalog = Catalog::new();

    // LIBRARY_SEED_DEMO=1 preloads the sample books and members
    let seed = std::env::var("LIBRARY_SEED_DEMO")
        .map(|v| matches!(v.as_str(), "1" | "true"))
        .unwrap_or(false);
    if seed {
        cli::load_demo_data(&mut catalog);
    }

    tracing::info!(seed, "library catalog started");

    let stdin = std::io::stdin();
    cli::run(&mut catalog, stdin.lock(), std::io::stdout())
}
