mod app;
mod commands;
mod config;
mod irc;
mod logging;

use crate::app::state::SessionState;
use crate::irc::connection::TcpConnection;
use crate::irc::session::{Identity, Session};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::{env, process};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config_path = parse_args();

    let cfg = config::load_config(&config_path).unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    });

    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    if let Err(e) = run_bot(cfg).await {
        tracing::error!("{:#}", e);
        process::exit(1);
    }
}

async fn run_bot(cfg: config::AppConfig) -> Result<()> {
    let server = &cfg.server;
    tracing::info!("connecting to {}:{} as {}", server.host, server.port, server.nickname);
    let conn = TcpConnection::connect(&server.host, server.port)
        .await
        .with_context(|| format!("Failed to connect to {}:{}", server.host, server.port))?;

    let identity = Identity {
        nickname: server.nickname.clone(),
        realname: server.realname.clone(),
    };
    tracing::info!("will join channel {}", cfg.channel);
    let session = Session::new(conn, SessionState::from_config(&cfg), identity)
        .channel_key(cfg.channel_key.clone())
        .reply_delay(cfg.behavior.reply_delay());

    let state = session.run().await.context("Session ended with an error")?;
    tracing::info!("connection closed by server (introduced: {})", state.intro_sent);
    Ok(())
}

fn parse_args() -> PathBuf {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    match args.next().as_deref() {
        None => config::default_config_path(),
        Some("-h") | Some("--help") => {
            eprintln!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            eprintln!("Usage: {} [CONFIG_FILE]", program);
            eprintln!("Default config: {}", config::default_config_path().display());
            process::exit(0);
        }
        Some("-V") | Some("--version") => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }
        Some(path) => PathBuf::from(path),
    }
}
