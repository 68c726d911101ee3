mod app;
mod cli;
mod error;
mod event;
mod model;
mod output;
mod ports;
mod stats;
mod ui;

use clap::Parser;

use app::{map_key_to_action, Action, AppState, InputMode};
use cli::{Cli, Command};
use error::{PortlyError, Result};
use event::{AppEvent, EventHandler};
use ports::kill::{kill_by_ports, kill_pids, parse_int_list};
use stats::SystemStats;
use ui::theme::Theme;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_tui(),
        Some(Command::List { json, plain }) => {
            if json {
                output::print_json(&ports::list_ports())
            } else if plain {
                output::print_table(&ports::list_ports());
                Ok(())
            } else {
                run_tui()
            }
        }
        Some(Command::Kill { port, pid }) => run_kill(port, pid),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_kill(port: Option<String>, pid: Option<String>) -> Result<()> {
    if port.is_none() && pid.is_none() {
        return Err(PortlyError::Usage(
            "you must specify --port or --pid".to_string(),
        ));
    }

    // --pid wins when both are given.
    if let Some(pid_arg) = pid {
        for msg in kill_pids(&parse_int_list(&pid_arg)) {
            println!("{}", msg);
        }
        return Ok(());
    }

    if let Some(port_arg) = port {
        let entries = ports::list_ports();
        let port_list: Vec<String> = port_arg.split(',').map(str::to_string).collect();
        for msg in kill_by_ports(&entries, &port_list) {
            println!("{}", msg);
        }
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    let mut stats = SystemStats::new();
    let mut state = AppState::new(ports::list_ports());
    state.stats = stats.sample();

    let theme = Theme::default();
    let event_handler = EventHandler::new();

    let mut terminal = ratatui::init();
    let run = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &mut state, &theme)) {
            break Err(PortlyError::Io(e));
        }

        match event_handler.next() {
            Ok(AppEvent::Key(key)) => {
                if let Some(action) = map_key_to_action(key, &state.mode) {
                    dispatch_action(&mut state, action, &mut stats);
                }
            }
            Ok(AppEvent::Tick) => {
                state.refresh(&mut stats);
            }
            Ok(AppEvent::Resize(_, _)) => {
                // redrawn on the next loop iteration
            }
            Err(e) => break Err(PortlyError::Io(e)),
        }

        if state.should_quit {
            break Ok(());
        }
    };
    ratatui::restore();
    run
}

fn dispatch_action(state: &mut AppState, action: Action, stats: &mut SystemStats) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MoveUp => {
            state.move_cursor(-1);
        }
        Action::MoveDown => {
            state.move_cursor(1);
        }
        Action::ToggleSelect => {
            state.toggle_select();
        }
        Action::Kill => {
            state.kill_selected(stats);
        }
        Action::Refresh => {
            state.refresh(stats);
            state.set_status("reloaded".to_string(), true);
        }
        Action::FilterStart => {
            state.mode = InputMode::Filter;
        }
        Action::FilterInput(c) => {
            state.filter_input.push(c);
            state.update_filter();
        }
        Action::FilterBackspace => {
            state.filter_input.pop();
            state.update_filter();
        }
        Action::FilterClear => {
            state.filter_input.clear();
            state.update_filter();
            state.mode = InputMode::Normal;
        }
        Action::FilterDone => {
            state.mode = InputMode::Normal;
        }
    }
}
