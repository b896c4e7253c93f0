use std::io::{self, Write};

use clap::{Parser, Subcommand};
use rand::thread_rng;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fake_identity::error::Result;
use fake_identity::generator::build_identity;
use fake_identity::router::{Request, Router, RouterConfig, DEFAULT_PREFIX};
use fake_identity::serve::serve_lines;
use fake_identity::types::CountryCode;

#[derive(Parser, Debug)]
#[command(name = "fake_identity", version, about = "Fake identity generator")]
struct Args {
    /// Pretty-print JSON output (ignored by `serve`)
    #[arg(long, global = true)]
    pretty: bool,

    /// Path prefix the API routes are mounted under
    #[arg(long, global = true, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print identities, one JSON document per identity
    Generate {
        /// Number of identities
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Country code (US, CA, AU). Unknown codes fall back to US.
        #[arg(short, long, default_value = "US")]
        country: String,

        /// Realistic addresses when true, the sentinel address when false
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        format_valid: bool,
    },

    /// Dispatch one request, e.g. `/api/identity?country=CA`
    Request {
        target: String,

        /// JSON payload, merged over the query parameters
        #[arg(long)]
        body: Option<String>,
    },

    /// Read request lines (`[GET|POST] target [json]`) from stdin
    Serve,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("fake_identity error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("fake_identity: tracing init failed: {}", e);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let router = Router::new(RouterConfig {
        prefix: args.prefix.clone(),
        ..RouterConfig::default()
    });

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match args.command {
        Command::Generate {
            count,
            country,
            format_valid,
        } => {
            let country: CountryCode = country.parse().unwrap_or_default();
            info!(count, %country, format_valid, "generating identities");
            let mut rng = thread_rng();
            for _ in 0..count {
                let identity = build_identity(&mut rng, country, format_valid);
                write_json(&mut writer, &identity, args.pretty)?;
            }
        }
        Command::Request { target, body } => {
            let request = match body {
                Some(body) => Request::with_json(&target, &serde_json::from_str(&body)?)?,
                None => Request::parse(&target),
            };
            let response = router.handle(&request);
            if !response.is_success() {
                warn!(status = response.status, path = %request.path, "request not served");
            }
            write_json(&mut writer, &response.body, args.pretty)?;
        }
        Command::Serve => {
            let stdin = io::stdin();
            serve_lines(&router, stdin.lock(), writer)?;
        }
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
