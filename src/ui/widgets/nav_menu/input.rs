//! Keyboard input handling and the interactive loop.
//!
//! The loop owns the round trip between widget and synchronizer: an
//! activation requests navigation, the router commits it, and the committed
//! path is fed back as a path change before the menu is redrawn.

use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use dialoguer::Input;

use apiconsole::presentation::output::render_invocation;
use apiconsole::{
    parse_params, split_composite_key, Activation, ApiClient, ConsoleError, InvokeUseCase,
    MemoryRouter, NavigationSynchronizer,
};

use super::log::EventLog;
use super::menu::{MenuAction, MenuCommand, NavMenu};
use super::render::{render_help_bar, render_status_bar};
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii};

/// Convert a keyboard event to a MenuAction
pub fn key_to_action(key: KeyEvent) -> Option<MenuAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(MenuAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Activate),
        KeyCode::Right | KeyCode::Char('l') => Some(MenuAction::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(MenuAction::Collapse),
        KeyCode::Char('a') => Some(MenuAction::ExpandAll),
        KeyCode::Char('n') => Some(MenuAction::CollapseAll),
        KeyCode::Char('b') | KeyCode::Backspace => Some(MenuAction::Back),
        KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Raw mode for the lifetime of the guard
struct RawModeGuard;

impl RawModeGuard {
    fn enter(out: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = execute!(
            out,
            cursor::Show,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the operation menu until the user quits
pub fn run_interactive<C: ApiClient>(
    sync: &mut NavigationSynchronizer<MemoryRouter>,
    invoke: &InvokeUseCase<C>,
    log: &EventLog,
    ui: &UiContext,
) -> Result<()> {
    let mut out = stdout();
    let _guard = RawModeGuard::enter(&mut out)?;

    let mut menu = NavMenu::new(sync.tree(), sync.state());
    draw(&mut out, &menu, sync, log, ui)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key) else {
            continue;
        };

        match menu.handle_action(action) {
            MenuCommand::None => {}
            MenuCommand::Quit => break,
            MenuCommand::Toggle(key) => {
                sync.toggle_group(&key);
                menu.rebuild(sync.tree(), sync.state());
            }
            MenuCommand::SetExpanded(keys) => {
                sync.set_expanded(keys);
                menu.rebuild(sync.tree(), sync.state());
            }
            MenuCommand::Back => {
                if let Some(path) = sync.router().back() {
                    sync.on_path_changed(&path);
                    menu.rebuild(sync.tree(), sync.state());
                    menu.focus(sync.selected_key());
                }
            }
            MenuCommand::Activate(key) => {
                if let Activation::Navigate { .. } = sync.activate(&key) {
                    if let Some(path) = sync.router().poll_all() {
                        sync.on_path_changed(&path);
                    }
                    menu.rebuild(sync.tree(), sync.state());
                    menu.focus(sync.selected_key());

                    if is_operation(sync, sync.selected_key()) {
                        terminal::disable_raw_mode()?;
                        execute!(out, cursor::Show)?;
                        let screen = run_operation_screen(sync, invoke, ui);
                        terminal::enable_raw_mode()?;
                        execute!(out, cursor::Hide)?;
                        screen?;
                    }
                }
            }
        }

        draw(&mut out, &menu, sync, log, ui)?;
    }

    Ok(())
}

fn is_operation(sync: &NavigationSynchronizer<MemoryRouter>, key: &str) -> bool {
    split_composite_key(key).is_some() && sync.tree().find(key).is_some_and(|e| !e.is_group())
}

fn draw(
    out: &mut Stdout,
    menu: &NavMenu,
    sync: &NavigationSynchronizer<MemoryRouter>,
    log: &EventLog,
    ui: &UiContext,
) -> Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let width = ui.caps.width;
    let header = format!(
        "{} API Console",
        icon(ui.unicode, icons::CONSOLE, icons_ascii::CONSOLE)
    );
    let separator = icon(ui.unicode, icons::SEPARATOR, icons_ascii::SEPARATOR)
        .repeat(width.min(72) as usize);

    let mut lines = vec![header, String::new()];
    lines.extend(
        menu.render(sync.selected_key(), ui.unicode, ui.color, width)
            .lines()
            .map(str::to_string),
    );
    lines.push(separator.clone());
    lines.extend(
        render_status_bar(sync.observed_path(), &sync.selected_label(), ui.unicode, width)
            .lines()
            .map(str::to_string),
    );

    let recent = log.lines();
    if !recent.is_empty() {
        lines.push(separator);
        for line in recent {
            if ui.color {
                lines.push(format!("{}", line.as_str().with(colors::DIM)));
            } else {
                lines.push(line);
            }
        }
    }
    lines.push(String::new());
    lines.extend(render_help_bar().lines().map(str::to_string));

    for line in lines {
        write!(out, "{}\r\n", line)?;
    }
    out.flush()?;
    Ok(())
}

/// Operation screen: collect JSON parameters, forward them, show the result
fn run_operation_screen<C: ApiClient>(
    sync: &NavigationSynchronizer<MemoryRouter>,
    invoke: &InvokeUseCase<C>,
    ui: &UiContext,
) -> Result<()> {
    let mut out = stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let key = sync.selected_key().to_string();
    println!("{}", sync.selected_label());
    println!("{}\n", sync.observed_path());

    let outcome = prompt("Parameters (JSON, empty for none)")
        .and_then(|input| parse_params(&input))
        .and_then(|params| invoke.execute(sync.tree(), &key, params));
    match outcome {
        Ok(outcome) => println!("\n{}", render_invocation(&outcome, ui.unicode)),
        Err(e) => {
            let mark = icon(ui.unicode, icons::ERROR, icons_ascii::ERROR);
            if ui.color {
                println!("\n{} {}", mark.with(colors::ERROR), e);
            } else {
                println!("\n{} {}", mark, e);
            }
        }
    }

    match prompt("Press Enter to return to the menu") {
        Ok(_) | Err(ConsoleError::Aborted) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Read one line of text. Ctrl-C at the prompt maps to `Aborted`.
fn prompt(text: &str) -> Result<String, ConsoleError> {
    Input::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| {
            let e = std::io::Error::from(e);
            if e.kind() == std::io::ErrorKind::Interrupted {
                ConsoleError::Aborted
            } else {
                ConsoleError::Io(e)
            }
        })
}
