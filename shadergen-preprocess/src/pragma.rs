use crate::PreprocessError;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::space1;
use nom::combinator::{map, rest};
use nom::sequence::{preceded, terminated};
use nom::IResult;
use shadergen_common::ShaderStage;

/// A pragma recognized by the shader definition format.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Pragma<'a> {
    /// `#pragma name <Name>`
    Name(&'a str),
    /// `#pragma stage <vertex|fragment|compute>`
    Stage(&'a str),
}

fn parse_pragma(input: &str) -> IResult<&str, Pragma<'_>> {
    let (input, _) = tag("#pragma")(input)?;
    let (input, _) = space1(input)?;
    alt((
        map(preceded(terminated(tag("name"), space1), rest), |name: &str| {
            Pragma::Name(name.trim())
        }),
        map(preceded(terminated(tag("stage"), space1), rest), |stage: &str| {
            Pragma::Stage(stage.trim())
        }),
    ))(input)
}

/// Recognize a `name` or `stage` pragma. Any other line is not a pragma of interest.
pub(crate) fn parse_pragma_line(line: &str) -> Option<Pragma<'_>> {
    parse_pragma(line.trim_start()).ok().map(|(_, pragma)| pragma)
}

pub(crate) fn parse_stage(stage: &str) -> Result<ShaderStage, PreprocessError> {
    stage
        .parse()
        .map_err(|_| PreprocessError::UnknownStage(stage.to_string()))
}
