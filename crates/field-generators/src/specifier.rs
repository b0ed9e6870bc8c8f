//! Data specifiers: how a requested field is described.
//!
//! In configuration files a field is given as text, either a path to a raw
//! input file or a generator specifier of the form
//!
//! ```text
//! :<name>:<arg1>,<arg2>,...,<argn>
//! ```
//!
//! where `<name>` is a registered generator and the arguments are real
//! literals (the list may be empty). No whitespace is allowed. Programmatic
//! callers may pass native constants and functions instead.

use crate::error::{GeneratorError, GeneratorResult};
use crate::registry;
use crate::value::{LayerValue, SeriesValue};
use nom::bytes::complete::take_while;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map_res, rest, verify};
use nom::number::complete::recognize_float;
use nom::sequence::{preceded, separated_pair};
use nom::IResult;
use std::path::PathBuf;
use std::str::FromStr;

/// A requested field.
#[derive(Debug, Clone)]
pub enum DataSpec {
    /// Existing raw input file, used verbatim
    Path(PathBuf),
    /// Registered generator with numeric arguments
    Generator { name: String, args: Vec<f64> },
    /// One constant or function per layer
    Layers(Vec<LayerValue>),
    /// Time series value
    Series(SeriesValue),
}

impl DataSpec {
    /// Classify a textual specifier.
    ///
    /// Text that matches the specifier grammar must name a registered
    /// generator and carry numeric arguments; anything else is a path.
    pub fn from_text(text: &str) -> GeneratorResult<Self> {
        match parse_specifier(text)? {
            Some((name, args)) => Ok(Self::Generator { name, args }),
            None => Ok(Self::Path(PathBuf::from(text))),
        }
    }

    /// Per-layer constants.
    pub fn constants(values: &[f64]) -> Self {
        Self::Layers(values.iter().copied().map(LayerValue::Constant).collect())
    }
}

impl FromStr for DataSpec {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl From<Vec<LayerValue>> for DataSpec {
    fn from(values: Vec<LayerValue>) -> Self {
        Self::Layers(values)
    }
}

impl From<SeriesValue> for DataSpec {
    fn from(value: SeriesValue) -> Self {
        Self::Series(value)
    }
}

/// Split `:<name>:<args>` into its two parts.
fn specifier_parts(input: &str) -> IResult<&str, (&str, &str)> {
    preceded(
        char(':'),
        separated_pair(take_while(|c: char| c != ':'), char(':'), rest),
    )(input)
}

/// A finite real literal such as `-1.5e-4`. `nan` and `inf` are not literals.
fn real(token: &str) -> IResult<&str, f64> {
    all_consuming(verify(
        map_res(recognize_float, str::parse::<f64>),
        |value: &f64| value.is_finite(),
    ))(token)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a generator specifier.
///
/// Returns `Ok(None)` when the text does not have the `:<name>:<args>` form.
pub fn parse_specifier(text: &str) -> GeneratorResult<Option<(String, Vec<f64>)>> {
    let (name, arg_text) = match specifier_parts(text) {
        Ok((_, parts)) => parts,
        Err(_) => return Ok(None),
    };

    if !is_identifier(name) {
        return Err(GeneratorError::parse(
            text,
            format!("'{}' is not a valid generator name", name),
        ));
    }
    if !registry::is_registered(name) {
        return Err(GeneratorError::UnknownGenerator(name.to_string()));
    }

    let args = if arg_text.is_empty() {
        Vec::new()
    } else {
        arg_text
            .split(',')
            .enumerate()
            .map(|(i, token)| {
                real(token).map(|(_, v)| v).map_err(|_| {
                    GeneratorError::parse(
                        text,
                        format!("argument {} ('{}') is not a real number", i, token),
                    )
                })
            })
            .collect::<GeneratorResult<Vec<f64>>>()?
    };

    Ok(Some((name.to_string(), args)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_argument_list() {
        assert_eq!(
            parse_specifier(":rectangular_pool:").unwrap(),
            Some(("rectangular_pool".to_string(), vec![]))
        );
    }

    #[test]
    fn test_single_argument() {
        assert_eq!(
            parse_specifier(":f_plane_f_u:0.0001").unwrap(),
            Some(("f_plane_f_u".to_string(), vec![0.0001]))
        );
    }

    #[test]
    fn test_scientific_and_negative_arguments() {
        let (_, args) = parse_specifier(":beta_plane_f_v:-1.0e-4,2e-11").unwrap().unwrap();
        assert_eq!(args, vec![-1.0e-4, 2e-11]);

        let (_, args) = parse_specifier(":tracer_point_variable:400,1600,5").unwrap().unwrap();
        assert_eq!(args, vec![400.0, 1600.0, 5.0]);

        let (_, args) = parse_specifier(":beta_plane_f_u:.5,+3.").unwrap().unwrap();
        assert_eq!(args, vec![0.5, 3.0]);
    }

    #[test]
    fn test_unknown_generator() {
        assert!(matches!(
            parse_specifier(":bogus:1"),
            Err(GeneratorError::UnknownGenerator(ref n)) if n == "bogus"
        ));
    }

    #[test]
    fn test_malformed_arguments() {
        for text in [
            ":f_plane_f_u:abc",
            ":f_plane_f_u:1,,2",
            ":f_plane_f_u:1,",
            ":f_plane_f_u: 1",
            ":f_plane_f_u:1e-4 ",
            ":tracer_point_variable:1:2",
            ":f_plane_f_u:nan",
            ":f_plane_f_u:inf",
            ":f_plane_f_u:-inf",
            ":f_plane_f_u:infinity",
            ":f_plane_f_u:1e999",
        ] {
            assert!(
                matches!(parse_specifier(text), Err(GeneratorError::ParseError { .. })),
                "{} should fail to parse",
                text
            );
        }
        assert!(matches!(
            parse_specifier(":not a name:1"),
            Err(GeneratorError::ParseError { .. })
        ));
    }

    #[test]
    fn test_plain_paths_are_not_specifiers() {
        for text in ["input/initH.bin", "/abs/path/wind_x.bin", ":no_second_colon", ""] {
            assert_eq!(parse_specifier(text).unwrap(), None, "{}", text);
        }
        assert!(matches!(
            DataSpec::from_text("input/initH.bin").unwrap(),
            DataSpec::Path(p) if p == PathBuf::from("input/initH.bin")
        ));
    }
}
