//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::{ConsoleFormatter, ProgressReporter, ReplConfig};
use agentic_application::{NoProgress, RunTurnUseCase};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, warn};

const PROMPT: &str = "You: ";

/// A classified line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    /// `exit` or `quit`
    Exit,
    /// `help`
    Help,
    /// Blank line
    Empty,
    /// Anything else, forwarded verbatim to the agent
    Utterance(&'a str),
}

impl<'a> ShellCommand<'a> {
    /// Classify a line. Commands are case-insensitive and ignore
    /// surrounding whitespace.
    pub fn parse(line: &'a str) -> Self {
        let command = line.trim();
        if command.is_empty() {
            Self::Empty
        } else if command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit") {
            Self::Exit
        } else if command.eq_ignore_ascii_case("help") {
            Self::Help
        } else {
            Self::Utterance(line)
        }
    }
}

/// Whether the shell keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RunTurnUseCase,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunTurnUseCase) -> Self {
        Self {
            use_case,
            config: ReplConfig::default(),
        }
    }

    /// Replace the REPL configuration
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Run the shell on the process's stdin/stdout.
    ///
    /// A terminal gets a line editor with history; piped input is read
    /// line by line until end-of-input.
    pub async fn run(&self) -> RlResult<()> {
        if io::stdin().is_terminal() {
            self.run_interactive().await
        } else {
            debug!("stdin is not a terminal, reading lines");
            let stdin = io::stdin();
            self.run_with(stdin.lock(), io::stdout()).await?;
            Ok(())
        }
    }

    /// Run the shell over arbitrary line input and output
    pub async fn run_with<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self.welcome())?;

        for line in reader.lines() {
            let line = line?;
            if self.process_line(&line, &mut writer).await? == LoopControl::Exit {
                return Ok(());
            }
        }

        writeln!(writer, "{}", ConsoleFormatter::farewell())
    }

    /// Handle one line of input, writing everything it produces to `out`
    pub async fn process_line(&self, line: &str, out: &mut dyn Write) -> io::Result<LoopControl> {
        match ShellCommand::parse(line) {
            ShellCommand::Empty => Ok(LoopControl::Continue),
            ShellCommand::Exit => {
                writeln!(out, "{}", ConsoleFormatter::farewell())?;
                Ok(LoopControl::Exit)
            }
            ShellCommand::Help => {
                let tools = self.use_case.tool_executor().list();
                write!(out, "{}", ConsoleFormatter::help(&tools))?;
                Ok(LoopControl::Continue)
            }
            ShellCommand::Utterance(text) => {
                self.process_utterance(text, out).await?;
                Ok(LoopControl::Continue)
            }
        }
    }

    async fn run_interactive(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_file.as_ref();
        if let Some(path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let mut stdout = io::stdout();
        write!(stdout, "{}", self.welcome())?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    if self.process_line(&line, &mut stdout).await? == LoopControl::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", ConsoleFormatter::farewell());
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn welcome(&self) -> String {
        let tools = self.use_case.tool_executor().available_tools();
        ConsoleFormatter::welcome(&self.use_case.model_name(), &tools)
    }

    async fn process_utterance(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        let result = if self.config.show_progress {
            let progress = ProgressReporter::new(self.use_case.model_name());
            self.use_case.execute(text, &progress).await
        } else {
            self.use_case.execute(text, &NoProgress).await
        };

        match result {
            Ok(outcome) => writeln!(out, "{}", ConsoleFormatter::outcome(&outcome)),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Turn failed");
                writeln!(out, "{}", ConsoleFormatter::error(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentic_application::{GatewayError, LlmGateway, ToolExecutorPort};
    use agentic_domain::{Model, ToolCall, ToolDefinition, ToolParameter, ToolResult, ToolSpec};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Gateway that pops scripted replies and counts requests
    struct ScriptedGateway {
        model: Model,
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                model: Model::Gemini25Flash,
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("(no reply scripted)".to_string()))
        }
    }

    struct ShoutTools {
        spec: ToolSpec,
    }

    impl ShoutTools {
        fn new() -> Self {
            Self {
                spec: ToolSpec::new().register(
                    ToolDefinition::new("shout", "Upper-cases its argument.")
                        .with_parameter(ToolParameter::new("text", "Text to shout")),
                ),
            }
        }
    }

    impl ToolExecutorPort for ShoutTools {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        fn execute(&self, call: &ToolCall) -> ToolResult {
            let text = call
                .args
                .first()
                .and_then(|v| v.as_scalar_text())
                .unwrap_or_default();
            ToolResult::success(&call.tool_name, text.to_uppercase())
        }
    }

    fn repl(gateway: &Arc<ScriptedGateway>) -> ChatRepl {
        ConsoleFormatter::set_color(false);
        let use_case = RunTurnUseCase::new(gateway.clone(), Arc::new(ShoutTools::new()));
        ChatRepl::new(use_case).with_progress(false)
    }

    async fn session(repl: &ChatRepl, input: &str) -> String {
        let mut output = Vec::new();
        repl.run_with(input.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_shell_command_parse() {
        assert_eq!(ShellCommand::parse("exit"), ShellCommand::Exit);
        assert_eq!(ShellCommand::parse("  QUIT "), ShellCommand::Exit);
        assert_eq!(ShellCommand::parse("Help"), ShellCommand::Help);
        assert_eq!(ShellCommand::parse(" \t "), ShellCommand::Empty);
        assert_eq!(
            ShellCommand::parse("  exit now"),
            ShellCommand::Utterance("  exit now")
        );
    }

    #[tokio::test]
    async fn test_help_lists_tools_without_model_call() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let output = session(&repl(&gateway), "help\nexit\n").await;

        assert!(output.starts_with("=== Agentic Gemini AI ==="));
        assert!(output.contains("Model: gemini-2.5-flash"));
        assert!(output.contains(" - shout: Upper-cases its argument.\n"));
        assert!(output.ends_with("Agent: Goodbye\n"));
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_exit_stops_reading() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let output = session(&repl(&gateway), "Exit\nWhat's up?\n").await;

        assert_eq!(output.matches("Agent: Goodbye").count(), 1);
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_lines_are_skipped() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        session(&repl(&gateway), "\n   \n").await;
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_turns_print_results() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("TOOL_CALL: shout(\"paris\")".to_string()),
            Ok("Bonjour!".to_string()),
        ]));
        let output = session(&repl(&gateway), "shout paris\nsay hi\n").await;

        assert!(output.contains("[Tool Result] PARIS\n"));
        assert!(output.contains("[Agent Response] Bonjour!\n"));
        assert!(output.ends_with("Agent: Goodbye\n"));

        let requests = gateway.requests.lock().unwrap();
        assert!(requests[0].ends_with("\nUSER: shout paris"));
        assert!(requests[1].ends_with("\nUSER: say hi"));
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_shell() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::Connection("connection refused".to_string())),
            Ok("TOOL_CALL: whisper('x')".to_string()),
            Ok("still here".to_string()),
        ]));
        let output = session(&repl(&gateway), "one\ntwo\nthree\n").await;

        assert!(output.contains("[Error] "));
        assert!(output.contains("[Error] Tool 'whisper' not found.\n"));
        assert!(output.contains("[Agent Response] still here\n"));
        assert_eq!(gateway.request_count(), 3);
    }
}
