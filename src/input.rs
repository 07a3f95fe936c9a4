//! Input validation and the re-prompting readers built on it.
//!
//! The `parse_*` functions are pure: they turn one raw line into a value or an
//! [`InputError`] whose text is the message shown before re-prompting.
//! [`Prompter`] owns the retry loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::{Error, HolderName, LineSource, Money, Pin};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Input cannot be empty.")]
    Empty,

    #[error("PIN must be exactly 4 digits.")]
    MalformedPin,

    #[error("Invalid input.\nEnter a valid non-negative amount.")]
    UnparsableAmount,

    #[error("Enter a valid non-negative amount.")]
    NegativeAmount,

    #[error("Invalid input.\nEnter a number between {min} and {max}.")]
    UnparsableNumber { min: i32, max: i32 },

    #[error("Enter a number between {min} and {max}.")]
    OutOfRange { min: i32, max: i32 },
}

pub fn parse_holder_name(raw: &str) -> Result<HolderName, InputError> {
    HolderName::new(raw).ok_or(InputError::Empty)
}

pub fn parse_pin(raw: &str) -> Result<Pin, InputError> {
    Pin::new(raw).ok_or(InputError::MalformedPin)
}

/// The sign is checked before rounding to cents, so `-0.001` is rejected
/// while `-0` is accepted.
pub fn parse_amount(raw: &str) -> Result<Money, InputError> {
    let value = Money::parse_decimal(raw).ok_or(InputError::UnparsableAmount)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::NegativeAmount);
    }
    Money::from_decimal(value).ok_or(InputError::UnparsableAmount)
}

pub fn parse_int_in_range(raw: &str, min: i32, max: i32) -> Result<i32, InputError> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::UnparsableNumber { min, max })?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { min, max })
    }
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail validation like any other typo.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// Writes prompts to `W` and reads answers from `I` until they validate.
#[derive(Debug)]
pub struct Prompter<I, W>
where
    I: LineSource,
    W: Write,
{
    input: I,
    output: W,
}

impl<I, W> Prompter<I, W>
where
    I: LineSource,
    W: Write,
{
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Re-prompts until `parse` accepts a line. Fails only when the input
    /// closes or the terminal errors.
    pub fn read_valid<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, Error>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let line = self.input.next_line()?.ok_or(Error::InputClosed)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(reason = ?e, "input rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    pub fn read_holder_name(&mut self, prompt: &str) -> Result<HolderName, Error> {
        self.read_valid(prompt, parse_holder_name)
    }

    pub fn read_pin(&mut self, prompt: &str) -> Result<Pin, Error> {
        self.read_valid(prompt, parse_pin)
    }

    pub fn read_amount(&mut self, prompt: &str) -> Result<Money, Error> {
        self.read_valid(prompt, parse_amount)
    }

    pub fn read_int_in_range(&mut self, prompt: &str, min: i32, max: i32) -> Result<i32, Error> {
        self.read_valid(prompt, |raw| parse_int_in_range(raw, min, max))
    }

    pub fn say(&mut self, message: impl core::fmt::Display) -> Result<(), Error> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn header(&mut self, title: &str) -> Result<(), Error> {
        writeln!(self.output, "\n=== {} ===", title)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
