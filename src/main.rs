use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cubescan::api;
use cubescan::error::ErrorResponse;
use cubescan::models::{AppConfig, CubeDefinitionBuilder};
use cubescan::server;
use cubescan::services::{CubeSolver, FaceScanner, ProcessSolver};
use facelet_vision::ColorLabel;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Parser)]
#[command(name = "cubescan")]
#[command(about = "Rubik's Cube face scanner and solver front end")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the nine sticker codes of one face photo
    Scan {
        /// JPEG or PNG file showing one face
        image: PathBuf,
    },
    /// Scan six face photos into a 54-character cube definition
    Assemble {
        /// Photo of the up (white center) face
        #[arg(long)]
        up: PathBuf,

        /// Photo of the right (red center) face
        #[arg(long)]
        right: PathBuf,

        /// Photo of the front (green center) face
        #[arg(long)]
        front: PathBuf,

        /// Photo of the down (yellow center) face
        #[arg(long)]
        down: PathBuf,

        /// Photo of the left (orange center) face
        #[arg(long)]
        left: PathBuf,

        /// Photo of the back (blue center) face
        #[arg(long)]
        back: PathBuf,

        /// Also run the solver on the assembled definition
        #[arg(long)]
        solve: bool,
    },
    /// Solve a 54-character cube definition
    Solve {
        /// Facelet codes, faces in U, R, F, D, L, B order
        definition: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cubescan API",
        description = "Rubik's Cube face scanning and solving",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_root, api::handle_scan_face, api::handle_solve,),
    components(schemas(
        api::RootResponse,
        api::ScanFaceRequest,
        api::ScanFaceResponse,
        api::SolveRequest,
        api::SolveResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Status", description = "Liveness"),
        (name = "Scan", description = "Face photo to sticker codes"),
        (name = "Solve", description = "Cube definition to move sequence")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Scan { image }) => run_scan_command(&image),
        Some(Commands::Assemble {
            up,
            right,
            front,
            down,
            left,
            back,
            solve,
        }) => run_assemble_command([up, right, front, down, left, back], solve).await,
        Some(Commands::Solve { definition }) => run_solve_command(&definition).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubescan=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AppConfig::load_or_default(config_file.as_deref())
}

/// Scan one face photo and print its codes
fn run_scan_command(image: &Path) -> anyhow::Result<()> {
    init_cli_logging();
    let config = load_config();
    let scanner = FaceScanner::from_config(&config.scanner);

    let outcome = scanner.scan_file(image)?;
    println!("{}", outcome.scan);

    Ok(())
}

/// Scan six face photos, print the definition and optionally solve it
async fn run_assemble_command(images: [PathBuf; 6], solve: bool) -> anyhow::Result<()> {
    init_cli_logging();
    let config = load_config();
    let scanner = FaceScanner::from_config(&config.scanner);

    let mut builder = CubeDefinitionBuilder::new();
    for (face, path) in ColorLabel::FACE_ORDER.into_iter().zip(&images) {
        let outcome = scanner
            .scan_file(path)
            .map_err(|e| anyhow::anyhow!("{} face: {e}", face.face_name()))?;
        if outcome.scan.center() != face {
            tracing::warn!(
                face = face.face_name(),
                center = %outcome.scan.center(),
                "Center sticker does not match the face it was scanned as"
            );
        }
        builder.set(face, outcome.scan);
    }

    let definition = builder.build()?.to_string();
    println!("{definition}");

    if solve {
        let solver = ProcessSolver::from_config(&config.solver);
        let solution = solver.solve(&definition).await?;
        println!("{}", solution.text());
    }

    Ok(())
}

/// Run the configured solver on a definition
async fn run_solve_command(definition: &str) -> anyhow::Result<()> {
    init_cli_logging();
    let config = load_config();
    let solver = ProcessSolver::from_config(&config.solver);

    let solution = solver.solve(definition).await?;
    println!("{}", solution.text());
    eprintln!("{} moves", solution.len());

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("cubescan v{VERSION}");
    println!("Rubik's Cube face scanner and solver front end\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.unwrap_or_else(|| format!("{DEFAULT_BIND_ADDR} (default)"))
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig:  {config_source}");

    println!("\nCommands:");
    println!("  cubescan serve      Start the HTTP server");
    println!("  cubescan scan       Print the sticker codes of one face photo");
    println!("  cubescan assemble   Build a cube definition from six face photos");
    println!("  cubescan solve      Solve a cube definition");
    println!("\nRun 'cubescan --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubescan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let config = load_config();

    tracing::info!(
        strategy = ?config.scanner.strategy,
        solver = %config.solver.command,
        "Configuration ready"
    );

    let state = server::create_app_state(config);

    // Build router: shared API routes plus production-only documentation
    let app = server::build_router(state)?
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "cubescan server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
