use anyhow::{anyhow, Result};
use env_logger::Builder;
use log::{LevelFilter, info};
use solana_nft_activity::monitor::{Monitor, DEFAULT_CLUSTER};
use solana_nft_activity::{load_raw_transaction, DecodeErrorPolicy, Parser, ParserConfig};
use solana_pubkey::Pubkey;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

// Simple CLI without clap
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger; RUST_LOG overrides the default level
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Solana NFT Activity Parser v{}", solana_nft_activity::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    // Parse arguments
    let mut file = None;
    let mut signature = None;
    let mut mint = None;
    let mut cluster = DEFAULT_CLUSTER.to_string();
    let mut policy = DecodeErrorPolicy::SkipInstruction;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mint" | "-m" => {
                if i + 1 < args.len() {
                    mint = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    println!("Error: Missing value for --mint");
                    return Ok(());
                }
            },
            "--signature" | "-s" => {
                if i + 1 < args.len() {
                    signature = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    println!("Error: Missing value for --signature");
                    return Ok(());
                }
            },
            "--cluster" | "-c" => {
                if i + 1 < args.len() {
                    cluster = args[i + 1].clone();
                    i += 2;
                } else {
                    println!("Error: Missing value for --cluster");
                    return Ok(());
                }
            },
            "--abort-on-decode-error" => {
                policy = DecodeErrorPolicy::AbortChain;
                i += 1;
            },
            arg if !arg.starts_with('-') && file.is_none() => {
                file = Some(PathBuf::from(arg));
                i += 1;
            },
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    let mint = mint.ok_or_else(|| anyhow!("Missing required --mint"))?;
    let mint = Pubkey::from_str(&mint).map_err(|e| anyhow!("Invalid mint {}: {}", mint, e))?;

    let raw = match (file, signature) {
        (Some(path), None) => {
            info!("Reading transaction from {}", path.display());
            load_raw_transaction(&path)?
        },
        (None, Some(signature)) => {
            let monitor = Monitor::new(&cluster).await?;
            monitor.get_transaction(&signature).await?
        },
        (Some(_), Some(_)) => {
            return Err(anyhow!("Give either a transaction file or --signature, not both"));
        },
        (None, None) => {
            print_usage(&args[0]);
            return Ok(());
        },
    };

    let parser = Parser::new(ParserConfig {
        decode_error_policy: policy,
    });
    let mint = mint.to_string();
    let activity = parser.parse_input(raw, Some(&mint))?;

    println!("{}", serde_json::to_string_pretty(&activity)?);

    Ok(())
}

fn print_usage(program: &str) {
    println!("Solana NFT Activity Parser v{}", solana_nft_activity::VERSION);
    println!("\nUsage:");
    println!("  {} <TX_JSON_FILE> --mint MINT [--abort-on-decode-error]", program);
    println!("  {} --signature SIG --mint MINT [--cluster URL] [--abort-on-decode-error]", program);
    println!("  {} --version", program);
    println!("\nOptions:");
    println!("  --mint, -m MINT            Mint address of the NFT under investigation");
    println!("  --signature, -s SIG        Fetch the transaction from RPC instead of a file");
    println!("  --cluster, -c URL          Use the specified RPC URL (default: mainnet-beta)");
    println!("  --abort-on-decode-error    Report unknown on the first malformed marketplace instruction");
    println!("  --version, -v              Show version information");
}
