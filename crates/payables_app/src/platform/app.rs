use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use desk_logging::{desk_info, desk_warn};
use payables_core::{update, AppState, AppViewModel, Msg, Seed};
use payables_handoff::DirectorySink;

use super::cli::Args;
use super::commands::{self, Command};
use super::config::{self, DeskConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_problem) = match config::load_config(&args.config) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (DeskConfig::default(), None),
        Err(err) => (DeskConfig::default(), Some(err)),
    };
    logging::initialize(
        config.log_destination,
        desk_logging::parse_level(&config.log_level),
    );
    match config_problem {
        Some(err) => desk_warn!("Ignoring config, using defaults: {}", err),
        None => desk_info!("Configuration loaded from {:?}", args.config),
    }

    let seed = config.seed.unwrap_or_else(|| Seed::demo(Utc::now()));
    let state = AppState::from_seed(seed).context("invalid seed data in configuration")?;
    let output_dir = args.output_dir.unwrap_or(config.output_dir);
    desk_info!("Hand-off manifests go to {:?}", output_dir);

    let mut desk = Desk {
        state,
        runner: EffectRunner::new(Box::new(DirectorySink::new(output_dir))),
        fixed_today: args.today,
        last_view: None,
    };

    let (line_tx, line_rx) = mpsc::channel::<String>();
    // The reader thread only forwards lines; state changes happen on this
    // thread, one line at a time.
    thread::spawn(move || {
        for line in io::stdin().lock().lines().map_while(Result::ok) {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    desk.render_now();
    prompt();
    for line in line_rx {
        match commands::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Ok(Command::Help) => println!("{}", commands::HELP),
            Ok(Command::Dispatch(msg)) => desk.dispatch_msg(msg),
            Ok(Command::Stage { via, paths }) => {
                let mut files = Vec::with_capacity(paths.len());
                for path in &paths {
                    match commands::describe_path(path) {
                        Ok(raw) => files.push(raw),
                        Err(err) => println!("Skipping {}: {}", path.display(), err),
                    }
                }
                desk.dispatch_msg(commands::stage_msg(via, files, Utc::now()));
            }
            Ok(Command::RemoveStaged(target)) => match desk.resolve_staged_id(&target) {
                Some(id) => desk.dispatch_msg(Msg::StagedFileRemoved(id)),
                None => println!("No staged file {target}"),
            },
            Err(err) => println!("{err}"),
        }
        prompt();
    }

    desk_info!("Input closed, exiting");
    Ok(())
}

struct Desk {
    state: AppState,
    runner: EffectRunner,
    fixed_today: Option<NaiveDate>,
    last_view: Option<AppViewModel>,
}

impl Desk {
    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        for notice in self.runner.run(effects) {
            println!("{notice}");
        }
        if was_dirty {
            self.render_now();
        }
    }

    fn render_now(&mut self) {
        let view = self.state.view(self.today());
        print!("{}", ui::render::render(&view));
        self.last_view = Some(view);
    }

    fn resolve_staged_id(&self, target: &str) -> Option<String> {
        let view = self.last_view.as_ref()?;
        commands::resolve_staged_target(&view.staged, target)
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
