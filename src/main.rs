use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::{info, warn};

use labourdesk::app::{App, Section};
use labourdesk::{config, input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "labourdesk",
    version,
    about = "LabourDesk: manage daily-wage workers, projects and payments from the terminal"
)]
struct Args {
    /// Section to open first (dashboard, labour, work, payments, reports, help)
    #[arg(long)]
    section: Option<String>,

    /// Config file (defaults to $LABOURDESK_CONFIG or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = config::log_path();
    let _log_guard = log_path.as_deref().and_then(logging::init_logging);

    let config = config::load(args.config.as_deref());
    let mut app = App::new(config);
    app.config_path = config::resolve_path(args.config.as_deref());
    app.log_path = log_path;

    if let Some(id) = args.section.as_deref() {
        match Section::from_id(id) {
            Some(section) => app.set_section(section),
            None => {
                warn!(section = id, "unknown section, opening dashboard");
                app.set_section(Section::Dashboard);
            }
        }
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        section = app.active_section.id(),
        config = ?app.config_path,
        "starting labourdesk"
    );

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }
    info!("exiting labourdesk");

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        app.clamp_selections();
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, terminal.size()?),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
