//! Interactive session controller.

use crate::menu::MenuRegistry;
use figuras_core::{
    DEFAULT_PRECISION, Dimension, InputError, MenuChoice, Report, ShapeKind, parse_dimension,
    parse_menu_choice,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Prompt shown while waiting for a menu choice.
const CHOICE_PROMPT: &str = "Seleccione una opcion (1-5): ";

/// Errors that abort a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Heading of the main menu.
    pub title: String,
    /// Printed once when the session starts.
    pub welcome: String,
    /// Printed when the user picks the exit entry.
    pub farewell: String,
    /// Shown after each result; any line continues.
    pub pause_prompt: String,
    /// Decimal places in results.
    pub precision: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "GESTOR DE FIGURAS GEOMETRICAS".to_string(),
            welcome: "Bienvenido al Gestor de Figuras Geometricas!".to_string(),
            farewell: "\nGracias por usar el programa!\nHasta luego!".to_string(),
            pause_prompt: "\nPresiona Enter para continuar...".to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Figures built and printed.
    pub figures: usize,
    /// Lines rejected by validation.
    pub rejected_inputs: usize,
}

/// States of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    ShowMenu,
    ReadChoice,
    Dispatch(ShapeKind),
    ShowPausePrompt,
    Exit,
}

/// Menu-driven loop over a line reader and a writer.
///
/// Generic over the console so tests can drive it with in-memory buffers.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with the default configuration.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, AppConfig::default())
    }

    pub fn with_config(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
            summary: SessionSummary::default(),
        }
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self) -> SessionResult<SessionSummary> {
        writeln!(self.output, "{}", self.config.welcome)?;

        let mut state = SessionState::ShowMenu;
        while state != SessionState::Exit {
            state = self.step(state)?;
        }

        self.output.flush()?;
        log::info!(
            "Session finished: {} figures, {} rejected inputs",
            self.summary.figures,
            self.summary.rejected_inputs
        );
        Ok(self.summary)
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn step(&mut self, state: SessionState) -> SessionResult<SessionState> {
        let next = match state {
            SessionState::ShowMenu => {
                write!(self.output, "{}", MenuRegistry::render(&self.config.title))?;
                SessionState::ReadChoice
            }
            SessionState::ReadChoice => match self.read_choice()? {
                Some(MenuChoice::Create(kind)) => SessionState::Dispatch(kind),
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", self.config.farewell)?;
                    SessionState::Exit
                }
                None => SessionState::Exit,
            },
            SessionState::Dispatch(kind) => {
                if self.dispatch(kind)? {
                    SessionState::ShowPausePrompt
                } else {
                    SessionState::Exit
                }
            }
            SessionState::ShowPausePrompt => {
                write!(self.output, "{}", self.config.pause_prompt)?;
                self.output.flush()?;
                match self.read_line()? {
                    Some(_) => SessionState::ShowMenu,
                    None => SessionState::Exit,
                }
            }
            SessionState::Exit => SessionState::Exit,
        };
        Ok(next)
    }

    /// Build, print and drop one figure. Returns `false` if input ran out.
    fn dispatch(&mut self, kind: ShapeKind) -> SessionResult<bool> {
        let Some(dimension) = self.read_dimension(kind)? else {
            return Ok(false);
        };

        let figure = kind.build(dimension);
        let report = Report::for_figure(&figure, self.config.precision);
        write!(self.output, "{}", report)?;
        self.summary.figures += 1;
        log::debug!("Computed {:?} from dimension {}", figure, dimension.get());
        Ok(true)
    }

    fn read_choice(&mut self) -> SessionResult<Option<MenuChoice>> {
        self.read_validated(CHOICE_PROMPT, parse_menu_choice)
    }

    fn read_dimension(&mut self, kind: ShapeKind) -> SessionResult<Option<Dimension>> {
        self.read_validated(kind.dimension_prompt(), parse_dimension)
    }

    /// Prompt until `parse` accepts a line. `None` means end of input.
    fn read_validated<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> SessionResult<Option<T>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    self.summary.rejected_inputs += 1;
                    log::debug!("Rejected input {:?}", err.rejected());
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> SessionResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line, terminator included. `None` at end of input.
    fn read_line(&mut self) -> SessionResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::warn!("Input closed, ending session");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (SessionSummary, String) {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let summary = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (summary, output)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_immediate_exit() {
        let (summary, output) = run_session("5\n");
        assert!(output.starts_with("Bienvenido al Gestor de Figuras Geometricas!\n"));
        assert!(output.contains("1. Crear Cubo"));
        assert!(output.ends_with("\nGracias por usar el programa!\nHasta luego!\n"));
        assert!(!output.contains("Presiona Enter"));
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn test_cube_then_exit() {
        let (summary, output) = run_session("1\n3\n\n5\n");
        assert!(output.contains("Ingrese la longitud del lado del cubo: "));
        assert!(output.contains("Figura: Cubo (3D)\nVolumen: 27.00\nArea: 54.00\n"));
        assert_eq!(count(&output, "Presiona Enter para continuar..."), 1);
        assert_eq!(count(&output, "5. Salir"), 2);
        assert_eq!(summary.figures, 1);
        assert_eq!(summary.rejected_inputs, 0);
    }

    #[test]
    fn test_sphere_and_circle() {
        let (summary, output) = run_session("2\n1\n\n3\n1\n\n5\n");
        assert!(output.contains("Figura: Esfera (3D)\nVolumen: 4.19\nArea: 12.57\n"));
        assert!(output.contains("Figura: Círculo (2D)\nArea: 3.14\nPerimetro: 6.28\n"));
        assert_eq!(summary.figures, 2);
    }

    #[test]
    fn test_invalid_choices_reprompt() {
        let (summary, output) = run_session("0\n6\nab\n\n12\n5\n");
        assert_eq!(count(&output, "Error: Ingrese una opcion valida (1-5)"), 5);
        assert_eq!(count(&output, CHOICE_PROMPT), 6);
        assert_eq!(summary.rejected_inputs, 5);
        assert_eq!(summary.figures, 0);
    }

    #[test]
    fn test_invalid_dimensions_reprompt() {
        let (summary, output) = run_session("4\n-1\n0\nabc\n\n2.5\n\n5\n");
        assert_eq!(count(&output, "Error: Ingrese un numero valido mayor que 0"), 4);
        assert_eq!(count(&output, "Ingrese la longitud del lado del cuadrado: "), 5);
        assert!(output.contains("Figura: Cuadrado (2D)\nArea: 6.25\nPerimetro: 10.00\n"));
        assert_eq!(summary.rejected_inputs, 4);
        assert_eq!(summary.figures, 1);
    }

    #[test]
    fn test_trailing_text_after_dimension_reprompts() {
        let (summary, output) = run_session("1\n3 \n3\t\n 3\n\n5\n");
        assert_eq!(count(&output, "Error: Ingrese un numero valido mayor que 0"), 2);
        assert!(output.contains("Figura: Cubo (3D)\nVolumen: 27.00\nArea: 54.00\n"));
        assert_eq!(summary.rejected_inputs, 2);
        assert_eq!(summary.figures, 1);
    }

    #[test]
    fn test_pause_accepts_any_line() {
        let (summary, output) = run_session("1\n1\nanything\n5\n");
        assert_eq!(summary.figures, 1);
        assert_eq!(summary.rejected_inputs, 0);
        assert!(output.ends_with("Hasta luego!\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (summary, output) = run_session("");
        assert_eq!(summary, SessionSummary::default());
        assert!(!output.contains("Hasta luego!"));

        let (summary, _) = run_session("1\n");
        assert_eq!(summary.figures, 0);

        let (summary, output) = run_session("3\n2\n");
        assert_eq!(summary.figures, 1);
        assert!(output.ends_with("Presiona Enter para continuar..."));
    }

    #[test]
    fn test_custom_config() {
        let config = AppConfig {
            title: "SHAPES".to_string(),
            welcome: "hi".to_string(),
            farewell: "bye".to_string(),
            pause_prompt: "[enter]".to_string(),
            precision: 4,
        };
        let input = Cursor::new(b"3\n1\n\n5\n".to_vec());
        let mut session = Session::with_config(input, Vec::new(), config);
        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.starts_with("hi\n"));
        assert!(output.contains("    SHAPES\n"));
        assert!(output.contains("Area: 3.1416\nPerimetro: 6.2832\n"));
        assert!(output.contains("[enter]"));
        assert!(output.ends_with("bye\n"));
    }

    #[test]
    fn test_write_failure_propagates() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut session = Session::new(Cursor::new(b"5\n".to_vec()), FailingWriter);
        assert!(matches!(session.run(), Err(SessionError::Io(_))));
    }
}
