mod ui;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use skyhop::build_info;
use skyhop::core::constants::FRAME_MS;
use skyhop::core::GameConfig;
use skyhop::engine::{AudioCommand, FrameInput, InputEvent, Key};
use skyhop::utils::logging;
use skyhop::world::Game;
use ui::Hud;

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run(Options),
    Help,
    Version,
    WriteConfig,
}

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-v" => return Ok(CliAction::Version),
            "--write-config" => return Ok(CliAction::WriteConfig),
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(CliAction::Run(options))
}

fn print_help() {
    println!("Skyhop - Terminal Endless Runner\n");
    println!("Usage: skyhop [options]\n");
    println!("Options:");
    println!("  --seed <n>      Play a reproducible run");
    println!("  --write-config  Write the default ~/.skyhop/config.json");
    println!("  --version       Show version information");
    println!("  --help          Show this help message\n");
    println!("Controls:");
    println!("  Space / Up / left click   Jump (restart after a crash)");
    println!("  q / Esc                   Quit");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliAction::WriteConfig) => {
            let path = GameConfig::default().save()?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'skyhop --help' for usage.");
            std::process::exit(1);
        }
    };

    match logging::init() {
        Ok(path) => log::info!("{} logging to {}", build_info::version_line(), path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let config = GameConfig::load();
    let seed = options
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    // Built before touching the terminal so a bad config prints normally.
    let mut game = Game::new(config, seed)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    log::info!("exiting after {} run(s)", game.sessions());
    result
}

/// Frame loop: draw, gather input until the next frame is due, advance.
fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut Game) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_MS);
    let mut hud = Hud {
        last_cue: None,
        session: game.sessions(),
    };
    let mut input = FrameInput::none();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, game, &hud))?;

        let deadline = last_frame + frame_interval;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    KeyCode::Char(' ') | KeyCode::Up => {
                        input.push(InputEvent::KeyDown(Key::Space))
                    }
                    _ => input.push(InputEvent::KeyDown(Key::Other)),
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    input.push(InputEvent::PointerDown)
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        game.frame(dt_ms, &input);
        input.clear();

        for command in game.audio_mut().drain() {
            if let AudioCommand::Play {
                sound,
                looping: false,
            } = command
            {
                log::debug!("cue {}", sound.asset_path());
                hud.last_cue = Some(sound);
            }
        }
        hud.session = game.sessions();
    }
}
