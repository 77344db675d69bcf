use clap::Parser;
use mess_menu::{cli, clock, config, error, loader, render};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{MenuError, Result};
use mess_menu_common::{decode_first_sheet, parse_worksheet, parse_worksheet_strict, Day, Location, Screen, ViewModel};
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Show { day, location, source, format, timeout } => {
            let today = clock::today();
            let mut view = ViewModel::new(day.unwrap_or(today), clock::now());
            view.select_location(location);

            let source = source.unwrap_or_else(|| config.source());
            let timeout = timeout.map(Duration::from_secs).unwrap_or_else(|| config.timeout());
            load_into(&mut view, &source, &config.extension, today, timeout).await;

            let screen = view.screen();
            match format {
                OutputFormat::Text => print!("{}", render::render_screen(&screen)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screen)?),
            }

            if let Screen::Failed { message } = screen {
                return Err(MenuError::Orchestration(message));
            }
        }

        Commands::Watch { day, location, source } => {
            let today = clock::today();
            let mut view = ViewModel::new(day.unwrap_or(today), clock::now());
            view.select_location(location);

            print!("{}", render::render_screen(&view.screen()));
            let source = source.unwrap_or_else(|| config.source());
            load_into(&mut view, &source, &config.extension, today, config.timeout()).await;
            redraw(&view.screen());

            if let Screen::Failed { message } = view.screen() {
                return Err(MenuError::Orchestration(message));
            }

            // ガードのスコープ終了で時計タスクを止める
            let (_clock, mut ticks) = clock::start_clock(clock::CLOCK_PERIOD);
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);
            loop {
                tokio::select! {
                    changed = ticks.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let now = *ticks.borrow_and_update();
                        view.tick(now);
                        redraw(&view.screen());
                    }
                    _ = &mut ctrl_c => {
                        break;
                    }
                }
            }
        }

        Commands::Parse { file, strict, format } => {
            if !file.exists() {
                return Err(MenuError::FileNotFound(file.display().to_string()));
            }

            let bytes = std::fs::read(&file)?;
            let sheet = decode_first_sheet(&bytes)?;
            tracing::debug!(sheet = sheet.name(), rows = sheet.height(), cols = sheet.width(), "decoded");

            let menu = if strict {
                parse_worksheet_strict(&sheet)?
            } else {
                parse_worksheet(&sheet)
            };

            match format {
                OutputFormat::Text => print!("{}", render::render_day_menu(&menu)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&menu)?),
            }
        }

        Commands::Config { set_source, set_timeout, show } => {
            let mut config = config;

            if let Some(source) = set_source {
                config.set_source(source)?;
                println!("✔ データソースを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データソース: {}", config.source());
                println!("  拡張子: {}", config.extension);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                let names: Vec<&str> = Location::ALL.iter().map(|l| l.as_str()).collect();
                println!("  食堂: {}", names.join(", "));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 読み込み結果を表示状態に反映（失敗時は Failed へ遷移）
async fn load_into(view: &mut ViewModel, source: &str, extension: &str, today: Day, timeout: Duration) {
    match loader::load_from_spec(source, extension, today, timeout).await {
        Ok(outcome) => {
            if outcome.is_degraded() {
                tracing::info!(failed = outcome.failures.len(), "some menus replaced with fallback");
            }
            view.finish_load(outcome.menus);
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching menu data");
            view.fail(e.to_string());
        }
    }
}

fn redraw(screen: &Screen) {
    // 画面クリアしてカーソルを左上へ
    print!("\x1B[2J\x1B[H{}", render::render_screen(screen));
}
