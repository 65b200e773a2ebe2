//! # Interactive Prompts
//!
//! Line-based prompts over any reader/writer pair. Every prompt re-asks on
//! empty or invalid input and aborts with [`CliError::Cancelled`] when the
//! user enters the quit string.

use std::io::{BufRead, Write};
use std::str::FromStr;

use aruco_dict::PredefinedDictionary;
use config::constants::{DEFAULT_INTERACTIVE_DICTIONARY, QUIT_STRING};

use crate::error::{CliError, CliResult};

/// Prompts reading answers from `input` and writing questions to `output`.
///
/// ## Example
///
/// ```rust
/// use aruco_box::prompt::Prompter;
///
/// let mut out = Vec::new();
/// let mut prompter = Prompter::new("abc\n\n12.5\n".as_bytes(), &mut out);
/// let side = prompter.ask_positive("Enter the total side length (marker+margin) (mm)").unwrap();
/// assert_eq!(side, 12.5);
/// ```
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `message` and read one trimmed answer.
    fn read_answer(&mut self, message: &str) -> CliResult<String> {
        write!(self.output, "{message} ({QUIT_STRING} to exit): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        let answer = line.trim();
        if answer == QUIT_STRING {
            return Err(CliError::Cancelled);
        }
        Ok(answer.to_string())
    }

    /// Ask until the answer parses as `T` and passes `accept`.
    ///
    /// `invalid` is printed after every rejected answer.
    pub fn ask<T, F>(&mut self, message: &str, invalid: &str, accept: F) -> CliResult<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.read_answer(message)?;
            match answer.parse::<T>() {
                Ok(value) if !answer.is_empty() && accept(&value) => return Ok(value),
                _ => writeln!(self.output, "{invalid}")?,
            }
        }
    }

    /// Ask for a positive length in millimetres.
    pub fn ask_positive(&mut self, message: &str) -> CliResult<f64> {
        self.ask_length(message, "Invalid number, expected a positive length", |_| true)
    }

    /// Ask for a positive length that also passes `accept`.
    pub fn ask_length<F>(&mut self, message: &str, invalid: &str, accept: F) -> CliResult<f64>
    where
        F: Fn(f64) -> bool,
    {
        self.ask(message, invalid, |v: &f64| v.is_finite() && *v > 0.0 && accept(*v))
    }

    /// List the predefined dictionaries and ask for one by number.
    ///
    /// An empty answer selects `DICT_ARUCO_ORIGINAL`. Full dictionary names
    /// are accepted as well.
    pub fn pick_dictionary(&mut self) -> CliResult<PredefinedDictionary> {
        writeln!(self.output, "Available Aruco Markers:")?;
        for (index, kind) in PredefinedDictionary::ALL.iter().enumerate() {
            writeln!(self.output, "{index}: {}", kind.short_name())?;
        }

        let default_label = DEFAULT_INTERACTIVE_DICTIONARY.trim_start_matches("DICT_");
        let message = format!("Enter the type of marker to generate (Default: {default_label})");
        loop {
            let answer = self.read_answer(&message)?;
            if answer.is_empty() {
                return Ok(DEFAULT_INTERACTIVE_DICTIONARY.parse()?);
            }
            if let Some(kind) = answer
                .parse::<usize>()
                .ok()
                .and_then(|index| PredefinedDictionary::ALL.get(index).copied())
                .or_else(|| answer.parse().ok())
            {
                return Ok(kind);
            }
            writeln!(self.output, "Invalid marker type")?;
        }
    }

    /// Ask for a marker id in `0..marker_count`.
    pub fn ask_marker_id(&mut self, marker_count: usize) -> CliResult<u32> {
        let last = marker_count.saturating_sub(1);
        let invalid = format!("Input must be an integer between 0 and {last}");
        self.ask("Enter the marker id", &invalid, |id: &u32| (*id as usize) < marker_count)
    }
}
