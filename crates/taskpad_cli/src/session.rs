use crate::cli::{Cli, Command};
use crate::render::{self, Palette};
use clap::{CommandFactory, Parser};
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use taskpad_core::config::Config;
use taskpad_core::error::AppError;
use taskpad_core::store::TaskListStore;

/// The presentation shell: owns the task store for the lifetime of the
/// session plus purely presentational state (expanded rows, palette,
/// command aliases). Every user intent runs synchronously and ends by
/// re-rendering the visible list.
pub struct Session {
    store: TaskListStore,
    expanded: HashSet<u64>,
    palette: Palette,
    aliases: HashMap<String, String>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TaskListStore::new(),
            expanded: HashSet::new(),
            palette: render::palette_for_theme(config.theme.as_deref()),
            aliases: config.aliases.clone(),
        }
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains(&id)
    }

    /// Reads command lines until EOF or an exit command.
    pub fn run(&mut self, reader: &mut impl BufRead) -> Result<(), AppError> {
        let mut input = String::new();

        loop {
            input.clear();
            let bytes = reader
                .read_line(&mut input)
                .map_err(|err| AppError::io(err.to_string()))?;

            if bytes == 0 {
                break;
            }

            let line = input.trim();
            if line.is_empty() {
                continue;
            }

            if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                break;
            }

            if line == "help" || line == "?" {
                print_help();
                continue;
            }

            self.handle_line(line);
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str) {
        let args = match split_command_line(line) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                return;
            }
        };

        if args.is_empty() {
            return;
        }

        let args = self.apply_alias(args);

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("taskpad".to_string());
        argv.extend(args);

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                return;
            }
        };

        if let Err(err) = self.run_command(cli) {
            eprintln!("ERROR: {}", err);
        }
    }

    /// Replaces a leading alias token with its configured expansion.
    fn apply_alias(&self, mut args: Vec<String>) -> Vec<String> {
        let Some(expansion) = args.first().and_then(|head| self.aliases.get(head)) else {
            return args;
        };

        let mut expanded: Vec<String> = expansion
            .split_whitespace()
            .map(str::to_string)
            .collect();
        expanded.extend(args.drain(1..));
        expanded
    }

    fn run_command(&mut self, cli: Cli) -> Result<(), AppError> {
        match cli.command {
            Command::Add { title } => {
                // An absent argument is the empty input buffer; the store
                // decides whether it is acceptable.
                self.store.add_task(title.as_deref().unwrap_or(""))?;
            }
            Command::Done { id } => {
                self.store.complete_task(id);
            }
            Command::Filter { selection } => {
                self.store.set_filter(selection.into());
            }
            Command::List => {}
            Command::Expand { id } => {
                self.toggle_expanded(id);
            }
        }

        self.print_list(cli.json);
        Ok(())
    }

    /// Flips full-title display for a row. Only rows whose title exceeds
    /// the preview limit carry the control; anything else is a silent no-op.
    fn toggle_expanded(&mut self, id: u64) {
        let Some(task) = self.store.tasks().iter().find(|task| task.id == id) else {
            return;
        };

        if task.title.chars().count() <= render::TITLE_PREVIEW_LIMIT {
            return;
        }

        if !self.expanded.insert(id) {
            self.expanded.remove(&id);
        }
    }

    fn print_list(&self, json: bool) {
        let visible = self.store.visible_tasks();

        if json {
            println!("{}", render::tasks_json(&visible));
            return;
        }

        println!(
            "{}",
            render::list_header(self.store.filter().label(), &self.palette)
        );

        if visible.is_empty() {
            println!("{}", render::EMPTY_PLACEHOLDER);
            return;
        }

        for task in &visible {
            println!(
                "{}",
                render::task_row(task, self.expanded.contains(&task.id), &self.palette)
            );
        }
    }
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

/// Collapses clap's multi-line parse error into a one-line notice.
pub fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .next()
        .map(|line| line.trim().trim_start_matches("error: ").to_string())
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| "invalid command".to_string());
    AppError::validation(summary)
}

/// Splits an input line into argv tokens, honoring double quotes and the
/// escapes `\"` and `\\` inside them.
pub fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted_token = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if in_quotes => match chars.next() {
                Some(next @ ('"' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            '"' => {
                in_quotes = !in_quotes;
                quoted_token = true;
            }
            _ if ch.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted_token {
                    args.push(std::mem::take(&mut current));
                }
                quoted_token = false;
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(AppError::validation("unterminated quote in command"));
    }

    if !current.is_empty() || quoted_token {
        args.push(current);
    }

    Ok(args)
}
