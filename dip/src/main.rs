use anyhow::Context;
use argh::FromArgs;

mod view;

#[derive(FromArgs)]
/// Roll for a random archival record.
struct Dip {
    #[argh(switch, short = 'v')]
    /// verbose mode
    verbose: bool,
    #[argh(switch)]
    /// print one record as JSON and exit
    json: bool,
    #[argh(switch)]
    /// open each record in the browser
    open: bool,
    #[argh(switch)]
    /// roll once and exit without prompting
    once: bool,
}

/// Attempt to open a record in the browser.
///
/// If opening the record fails then just print out the URL.
fn open_record(url: &str) {
    if let Err(e) = open::that(url) {
        eprintln!("Failed to open browser: {}", e);
        println!("{url}");
    }
}

/// Perform one roll and fold its outcome into the view state.
///
/// Exactly one fetch per call, no retries. Returns the record on success so
/// the caller can feed `--json` and `--open`; the failure path only reaches
/// the user through the view state and the log.
async fn roll(
    client: &luckydip_client::Client,
    state: &mut view::ViewState,
) -> Option<luckydip_client::RandomRecord> {
    state.apply(view::RollEvent::Started);
    let spinner = indicatif::ProgressBar::new_spinner().with_message("Rolling…");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let outcome = match client.random().await {
        Ok(record) => view::RollOutcome::Success(record),
        Err(e) => {
            tracing::error!("Roll failed: {e}");
            view::RollOutcome::Failure(e.to_string())
        }
    };

    // The spinner comes down on every path, settled or failed.
    spinner.finish_and_clear();

    let record = match &outcome {
        view::RollOutcome::Success(record) => Some(record.clone()),
        view::RollOutcome::Failure(_) => None,
    };
    state.apply(view::RollEvent::Settled(outcome));
    record
}

async fn actual_main(dip: Dip) -> anyhow::Result<()> {
    let config = luckydip_config::Config::get_or_default().context("Reading config")?;
    let client = luckydip_client::Client::new_with_url(config.get_luckydip_url_base());
    let mut state = view::ViewState::default();

    if dip.json {
        let Some(record) = roll(&client, &mut state).await else {
            eprintln!("{}", console::style(view::ERROR_TITLE).red());
            std::process::exit(1);
        };
        serde_json::to_writer_pretty(std::io::stdout(), &record).context("Writing record")?;
        println!();
        return Ok(());
    }

    loop {
        let record = roll(&client, &mut state).await;
        view::render(&state, &mut std::io::stdout().lock()).context("Rendering card")?;

        if dip.open {
            if let Some(record) = &record {
                open_record(&record.url);
            }
        }

        if dip.once {
            return Ok(());
        }

        let again = dialoguer::Confirm::new()
            .with_prompt("Roll again?")
            .default(true)
            .interact()
            .context("Reading prompt")?;
        if !again {
            return Ok(());
        }
    }
}

/// Set up tracing.
fn set_up_tracing(verbose: bool) {
    use tracing_subscriber::prelude::*;

    let env_filter =
        tracing_subscriber::filter::EnvFilter::try_from_default_env().unwrap_or(if verbose {
            tracing_subscriber::filter::EnvFilter::new("INFO")
        } else {
            tracing_subscriber::filter::EnvFilter::new("WARN")
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .pretty()
                .with_writer(std::io::stderr)
                .boxed(),
        )
        .with(env_filter)
        .init();
}

fn main() {
    let dip: Dip = argh::from_env();
    set_up_tracing(dip.verbose);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    if let Err(e) = runtime.block_on(actual_main(dip)) {
        tracing::error!("Error: {e}");
        std::process::exit(1);
    }
}
