/// Streamer Remote - terminal remote control for the casting service
use clap::Parser;
use streamer_client::StreamerClient;
use streamer_control::Controller;
use streamer_remote::{
    cli::{resolve_looping, Cli, Commands},
    config::RemoteConfig,
    render::render,
    session,
};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the rendered panel
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "streamer_remote=info,streamer_control=info,streamer_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let command = cli.command();

    let mut config = RemoteConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.server, cli.default_device);
    config.validate()?;

    tracing::info!(server = %config.server.url, "Starting Streamer remote");

    let client = StreamerClient::new(config.client_config())?;
    let mut controller = Controller::new(client, config.initial_panel());
    if let Some(name) = &config.panel.default_device {
        controller = controller.with_default_device(name.clone());
    }

    let result = match command {
        Commands::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run_interactive(&mut controller, stdin, &mut stdout).await?;
            return Ok(());
        }
        Commands::Status => session::run_status(&mut controller).await,
        Commands::Play {
            device,
            volume,
            loop_on,
            no_loop,
        } => {
            let looping = resolve_looping(loop_on, no_loop, config.panel.looping);
            session::run_play(&mut controller, device.as_deref(), volume, looping).await
        }
        Commands::Stop { device } => session::run_stop(&mut controller, device.as_deref()).await,
        Commands::Volume { level, device } => {
            session::run_volume(&mut controller, device.as_deref(), level).await
        }
    };

    print!("{}", render(controller.panel()));
    result?;
    Ok(())
}
