use std::io::{self, BufRead, Write};

use todo_core::TodoClient;
use todo_host::view::{self, Command};
use todo_host::{HostConfig, Session, Transport, UreqTransport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = HostConfig::from_env();
    tracing::info!(api_url = %config.api_url, "starting");
    let mut session = Session::new(TodoClient::new(&config.api_url), UreqTransport::new());

    // A failed load is recorded in the state and shown by the first render.
    let _ = session.mount();
    print!("{}", view::render(session.state()));
    println!("{}", view::HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", view::HELP),
            Ok(command) => {
                if let Err(message) = apply(&mut session, command) {
                    println!("{message}");
                }
                print!("{}", view::render(session.state()));
            }
            Err(message) => println!("{message}"),
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Run one command. Sync failures are rendered from the state, so only
/// input problems come back as `Err`.
fn apply<T: Transport>(session: &mut Session<T>, command: Command) -> Result<(), String> {
    match command {
        Command::List | Command::Help | Command::Quit => {}
        Command::Add(title) => {
            session.set_new_title(title);
            if let Ok(None) = session.add() {
                return Err("nothing to add".to_string());
            }
        }
        Command::Edit(n) => {
            let todo = nth(session, n)?;
            session.start_editing(todo.id, todo.title);
        }
        Command::Draft(text) => {
            if session.state().editing().is_none() {
                return Err("not editing; use `edit <n>` first".to_string());
            }
            session.set_draft(text);
        }
        Command::Save => {
            if let Ok(None) = session.save() {
                return Err("nothing to save".to_string());
            }
        }
        Command::Cancel => session.cancel_editing(),
        Command::Delete(n) => {
            let todo = nth(session, n)?;
            let _ = session.delete(todo.id);
        }
    }
    Ok(())
}

fn nth<T: Transport>(session: &Session<T>, n: usize) -> Result<todo_core::TodoItem, String> {
    session
        .state()
        .todos()
        .get(n - 1)
        .cloned()
        .ok_or_else(|| format!("no item {n}"))
}
