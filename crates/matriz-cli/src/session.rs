//! Interactive calculator session.
//!
//! Two matrices are entered up front, then a menu loop offers the three
//! operations plus re-entry and display. Arithmetic errors are printed
//! and the loop continues; end of input ends the session cleanly.

use std::io::{self, BufRead, Write};

use matriz::prelude::*;

use crate::input::TokenReader;

/// One interactive calculator session over a pair of I/O handles.
pub struct Session<R, W> {
    tokens: TokenReader<R>,
    out: W,
    precision: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, precision: usize) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
            precision,
        }
    }

    /// Runs the session until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing a handle fails;
    /// invalid user input is re-prompted, never fatal.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "matriz: interactive matrix calculator")?;

        let Some(mut first) = self.read_matrix(1)? else {
            return self.goodbye();
        };
        let Some(mut second) = self.read_matrix(2)? else {
            return self.goodbye();
        };

        loop {
            self.print_menu()?;
            let Some(choice) = self.tokens.next_token()? else {
                return self.goodbye();
            };
            writeln!(self.out)?;
            match choice.as_str() {
                "1" => self.show_result("Sum", first.add(&second))?,
                "2" => self.show_result("Difference", first.sub(&second))?,
                "3" => self.show_result("Product", first.matmul(&second))?,
                "4" => self.show_matrix(1, &first)?,
                "5" => self.show_matrix(2, &second)?,
                "6" => match self.read_matrix(1)? {
                    Some(m) => first = m,
                    None => return self.goodbye(),
                },
                "7" => match self.read_matrix(2)? {
                    Some(m) => second = m,
                    None => return self.goodbye(),
                },
                "8" => return self.goodbye(),
                other => writeln!(self.out, "Unknown choice: {other}")?,
            }
        }
    }

    /// Prompts for dimensions and values, returning `None` at end of input.
    fn read_matrix(&mut self, id: usize) -> io::Result<Option<Matrix>> {
        let Some((rows, cols)) = self.read_dimensions(id)? else {
            return Ok(None);
        };

        writeln!(
            self.out,
            "Enter {} value(s) for matrix {id}, row by row.",
            rows * cols
        )?;
        let mut values = Vec::with_capacity(rows * cols);
        while values.len() < rows * cols {
            let Some(token) = self.tokens.next_token()? else {
                return Ok(None);
            };
            match token.parse::<f32>() {
                Ok(v) => values.push(v),
                Err(_) => writeln!(self.out, "Not a number: {token}")?,
            }
        }

        match Matrix::from_vec(rows, cols, values) {
            Ok(m) => {
                self.show_matrix(id, &m)?;
                Ok(Some(m))
            }
            Err(err) => {
                // Dimensions were validated above; surface a length bug
                // rather than swallowing it.
                writeln!(self.out, "{err}")?;
                Ok(None)
            }
        }
    }

    /// Re-prompts until both dimensions parse and lie in
    /// `[MIN_SIZE, MAX_SIZE]`; `None` at end of input.
    fn read_dimensions(&mut self, id: usize) -> io::Result<Option<(usize, usize)>> {
        writeln!(
            self.out,
            "Enter the dimensions for matrix {id} (width, then height)."
        )?;
        loop {
            write!(self.out, "Dimensions <width height>: ")?;
            self.out.flush()?;
            let Some(w) = self.tokens.next_token()? else {
                return Ok(None);
            };
            let Some(h) = self.tokens.next_token()? else {
                return Ok(None);
            };
            let (Ok(width), Ok(height)) = (w.parse::<usize>(), h.parse::<usize>()) else {
                writeln!(self.out, "Dimensions must be whole numbers.")?;
                continue;
            };

            if width < MIN_SIZE || height < MIN_SIZE {
                writeln!(self.out, "Invalid size, min is {MIN_SIZE}")?;
            } else if width > MAX_SIZE || height > MAX_SIZE {
                writeln!(self.out, "Invalid size, max is {MAX_SIZE}")?;
            } else {
                // width counts columns, height counts rows
                return Ok(Some((height, width)));
            }
        }
    }

    fn show_result(&mut self, label: &str, result: matriz::Result<Matrix>) -> io::Result<()> {
        match result {
            Ok(m) => {
                writeln!(self.out, "=== {label} ===")?;
                writeln!(self.out, "{m:.prec$}", prec = self.precision)
            }
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn show_matrix(&mut self, id: usize, m: &Matrix) -> io::Result<()> {
        let (rows, cols) = m.shape();
        writeln!(self.out, "--- Matrix {id} ({rows}x{cols}) ---")?;
        writeln!(self.out, "{m:.prec$}", prec = self.precision)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "------- Menu -------")?;
        writeln!(self.out, "[1] Print sum")?;
        writeln!(self.out, "[2] Print difference")?;
        writeln!(self.out, "[3] Print product")?;
        writeln!(self.out, "[4] Print matrix 1")?;
        writeln!(self.out, "[5] Print matrix 2")?;
        writeln!(self.out, "[6] Re-enter matrix 1")?;
        writeln!(self.out, "[7] Re-enter matrix 2")?;
        writeln!(self.out, "[8] Exit")?;
        write!(self.out, "Input: ")?;
        self.out.flush()
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "Goodbye!")
    }
}

/// Runs an interactive session over the given handles.
///
/// # Errors
///
/// Returns an error when reading or writing a handle fails.
pub fn run<R: BufRead, W: Write>(input: R, out: W, precision: usize) -> io::Result<()> {
    Session::new(input, out, precision).run()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
