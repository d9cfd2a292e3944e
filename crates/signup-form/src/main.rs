//! Sundown signup form - main entry point.

use anyhow::Context;
use recaptcha_client::RecaptchaClient;
use signup_form::banner::{BannerKind, MessageBanner};
use signup_form::config::Config;
use signup_form::error::AppResult;
use signup_form::flow::SignupFlow;
use std::sync::Arc;
use sundown_client::SundownClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.form.log_level);

    info!("Starting Sundown signup form...");

    let recaptcha = Arc::new(RecaptchaClient::new(
        &config.recaptcha.provider_url,
        &config.recaptcha.site_key,
    )?);

    let api = Arc::new(SundownClient::new(&config.api.base_url)?);

    if recaptcha.ready().await {
        info!("Token provider ready at {}", config.recaptcha.provider_url);
    } else {
        warn!("Token provider not reachable - submissions may fail");
    }

    let success = MessageBanner::new(BannerKind::Success, config.form.success_delay);
    let error_banner = MessageBanner::new(BannerKind::Error, config.form.error_delay);
    let flow = SignupFlow::new(
        recaptcha,
        api,
        success,
        error_banner,
        config.form.default_region.clone(),
    );

    info!("Sundown API endpoint: {}", config.api.base_url);

    println!("Sundown signup - get a text when tonight's sunset is worth it.");
    println!("Type a phone number to edit the field, :region <CODE> to pick a country,");
    println!(":submit to send, :quit to exit.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = LinesStream::new(stdin.lines());

    // Main input loop
    loop {
        tokio::select! {
            line = lines.next() => {
                match line {
                    Some(Ok(line)) => {
                        if !dispatch(&flow, line.trim()).await {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        error!("Failed to read input: {}", e);
                    }
                    None => break,
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

/// Handle one line of input. Returns false when the loop should exit.
async fn dispatch(flow: &SignupFlow, line: &str) -> bool {
    match line {
        ":quit" => return false,
        ":submit" => {
            // Each activation runs the whole sequence; nothing stops a
            // second submit while one is in flight.
            let flow = flow.clone();
            tokio::spawn(async move { flow.submit().await });
        }
        _ if line.starts_with(":region") => {
            let code = line.strip_prefix(":region").unwrap_or_default().trim();
            flow.region.select(code).await;
            println!("region: {}", if code.is_empty() { "(none)" } else { code });
        }
        _ => {
            let formatted = flow.handle_input(line).await;
            println!("phone: {}", formatted);
        }
    }
    true
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
