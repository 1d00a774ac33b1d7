//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use clerk_application::ConverseUseCase;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: ConverseUseCase,
    tool_names: Vec<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl over an open dispatcher session
    pub fn new(use_case: ConverseUseCase, tool_names: Vec<String>) -> Self {
        Self {
            use_case,
            tool_names,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("storeclerk").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    let reply = self.use_case.send(line).await;
                    println!("{}", ConsoleFormatter::reply(&reply));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Storeclerk - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::tool_list(&self.tool_names));
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /tools    - Show registered lookup tools");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?   - Show this help");
                println!("  /tools          - Show registered lookup tools");
                println!("  /quit, /exit    - Exit chat");
                println!();
                false
            }
            "/tools" => {
                println!("{}", ConsoleFormatter::tool_list(&self.tool_names));
                false
            }
            _ => {
                println!("Unknown command: {} (try /help)", cmd);
                false
            }
        }
    }
}
