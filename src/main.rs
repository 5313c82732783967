use std::{error::Error, sync::Arc};

use autosafety_reporter::{
    config::Config,
    context::BotContext,
    conversation::{self, Conversation},
    notify::AdminRoster,
    report_log::ReportLog,
    templates,
    webhook::{self, WebhookState},
};
use teloxide::prelude::*;
use tokio::{net::TcpListener, signal, sync::mpsc};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                log::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("Shutting down...");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::init()?;
    log::info!("Initialized config...");

    let _sentry = config.sentry_url.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let bot = Bot::new(&config.bot_token);
    let bot_username = bot.get_me().await?.user.username.unwrap_or_default();
    bot.set_webhook(config.webhook_endpoint()?).await?;
    log::info!("Registered webhook for @{}...", bot_username);

    let context = BotContext {
        bot_username,
        messenger: Arc::new(bot),
        roster: AdminRoster::new(config.admin_ids.clone()),
        tera: templates::load()?,
        reports: ReportLog::new(&config.reports_file),
    };
    log::info!(
        "Loaded {} admins, logging reports to {}",
        context.roster.len(),
        context.reports.path().display()
    );

    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    let dispatcher = tokio::spawn(conversation::run(Conversation::new(context), updates_rx));

    let state = WebhookState::new(
        &config.bot_token,
        config.strict_webhook_methods,
        updates_tx,
    );
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    log::info!("Started listening on {}...", listener.local_addr()?);
    webhook::serve(listener, state, shutdown_signal()).await?;

    log::info!("Draining queued updates...");
    dispatcher.await?;
    Ok(())
}
