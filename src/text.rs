//! Whitespace-separated text format.
//!
//! A [`Vector`] is two scalars `x y`, a [`Line`] three scalars `a b c`, a
//! [`Beam`] or [`Segment`] two vectors. Tokens may be split by any
//! whitespace, so one value can span lines and one line can hold many
//! values. [`Display`](fmt::Display) writes the same order back, separated
//! by single spaces, honoring a requested precision (`{:.3}`).

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use crate::error::{ParseError, PlanimetryError, Result};
use crate::geometry::{Beam, Line, Segment, Vector};
use crate::math::Scalar;

/// Cursor over the tokens of a text input.
#[derive(Debug, Clone)]
pub struct TextReader<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> TextReader<'a> {
    /// Creates a reader over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    /// Reads the next value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedEnd`] if the input runs out and
    /// [`ParseError::InvalidScalar`] if a token is not a number.
    pub fn read<T: ReadText>(&mut self) -> Result<T> {
        T::read_text(self)
    }

    /// Consumes the reader, checking that no tokens are left.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TrailingInput`] naming the first leftover token.
    pub fn finish(mut self) -> Result<()> {
        match self.tokens.next() {
            None => Ok(()),
            Some(token) => {
                tracing::debug!(token, "trailing input");
                Err(ParseError::TrailingInput {
                    token: token.to_owned(),
                }
                .into())
            }
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str> {
        self.tokens.next().ok_or_else(|| {
            tracing::debug!(expected, "unexpected end of input");
            PlanimetryError::from(ParseError::UnexpectedEnd { expected })
        })
    }
}

/// A value that can be read from a [`TextReader`].
pub trait ReadText: Sized {
    /// Reads one value, consuming exactly its tokens.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the tokens are missing or malformed.
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self>;
}

impl ReadText for Scalar {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self> {
        let token = reader.next_token("a scalar")?;
        token.parse::<Scalar>().map_err(|source| {
            tracing::debug!(token, "invalid scalar");
            PlanimetryError::from(ParseError::InvalidScalar {
                token: token.to_owned(),
                source,
            })
        })
    }
}

impl ReadText for Vector {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self> {
        Ok(Vector::new(reader.read()?, reader.read()?))
    }
}

impl ReadText for Line {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self> {
        Ok(Line::new(reader.read()?, reader.read()?, reader.read()?))
    }
}

impl ReadText for Beam {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self> {
        Ok(Beam::new(reader.read()?, reader.read()?))
    }
}

impl ReadText for Segment {
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self> {
        Ok(Segment::new(reader.read()?, reader.read()?))
    }
}

/// Parses `s` as exactly one `T`.
fn parse_exact<T: ReadText>(s: &str) -> Result<T> {
    let mut reader = TextReader::new(s);
    let value = reader.read()?;
    reader.finish()?;
    Ok(value)
}

impl FromStr for Vector {
    type Err = PlanimetryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s)
    }
}

impl FromStr for Line {
    type Err = PlanimetryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s)
    }
}

impl FromStr for Beam {
    type Err = PlanimetryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s)
    }
}

impl FromStr for Segment {
    type Err = PlanimetryError;

    fn from_str(s: &str) -> Result<Self> {
        parse_exact(s)
    }
}

fn write_scalars(f: &mut fmt::Formatter<'_>, values: &[Scalar]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        match f.precision() {
            Some(p) => write!(f, "{value:.p$}")?,
            None => write!(f, "{value}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &[self.x, self.y])
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &[self.a, self.b, self.c])
    }
}

impl fmt::Display for Beam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(
            f,
            &[self.origin.x, self.origin.y, self.through.x, self.through.y],
        )
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalars(f, &[self.a.x, self.a.y, self.b.x, self.b.y])
    }
}
