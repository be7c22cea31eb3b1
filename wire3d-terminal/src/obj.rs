/// Wavefront OBJ loader for the `v`/`f` subset
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{digit1, line_ending, multispace0, not_line_ending, space1},
    combinator::{map_res, opt},
    error::{Error, ErrorKind},
    multi::{many0, many1},
    number::complete::double,
    sequence::preceded,
    IResult,
};
use thiserror::Error as ThisError;
use wire3d_core::{Face, Model, ModelError, Vertex};

/// Errors raised while loading an OBJ file
#[derive(ThisError, Debug)]
pub enum ObjError {
    #[error("OBJ syntax error: {0}")]
    Syntax(String),
    #[error("OBJ face index 0 in face {face}; OBJ indices are 1-based")]
    ZeroIndex { face: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}

enum Statement {
    Vertex(Vertex),
    Face(Vec<usize>),
    Ignored,
}

/// Parse OBJ text into a validated model.
///
/// Only `v` and `f` statements are interpreted; normals, texture
/// coordinates, comments, and grouping statements are skipped. Face entries
/// of the `i`, `i/t`, `i/t/n`, and `i//n` forms all resolve to the leading
/// vertex index.
pub fn parse_obj(input: &str) -> Result<Model, ObjError> {
    let (rest, statements) =
        parse_obj_impl(input).map_err(|e| ObjError::Syntax(format!("{e:?}")))?;
    if !rest.trim().is_empty() {
        return Err(ObjError::Syntax(format!("unparsed trailing input: {rest:?}")));
    }

    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for statement in statements {
        match statement {
            Statement::Vertex(v) => vertices.push(v),
            Statement::Face(indices) => {
                let face = faces.len();
                let indices = indices
                    .into_iter()
                    .map(|i| i.checked_sub(1).ok_or(ObjError::ZeroIndex { face }))
                    .collect::<Result<Vec<_>, _>>()?;
                faces.push(Face::new(indices));
            }
            Statement::Ignored => {}
        }
    }
    Ok(Model::new(vertices, faces)?)
}

fn parse_obj_impl(input: &str) -> IResult<&str, Vec<Statement>> {
    many0(statement)(input)
}

fn statement(input: &str) -> IResult<&str, Statement> {
    preceded(multispace0, alt((vertex_line, face_line, other_line)))(input)
}

fn vertex_line(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("v")(input)?;
    let (input, _) = space1(input)?;
    let (input, x) = double(input)?;
    let (input, _) = space1(input)?;
    let (input, y) = double(input)?;
    let (input, _) = space1(input)?;
    let (input, z) = double(input)?;
    // Anything else on the line (an optional w component) is ignored.
    let (input, _) = not_line_ending(input)?;
    Ok((input, Statement::Vertex(Vertex::new(x, y, z))))
}

fn face_line(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("f")(input)?;
    let (input, indices) = many1(preceded(space1, face_index))(input)?;
    let (input, _) = not_line_ending(input)?;
    Ok((input, Statement::Face(indices)))
}

fn face_index(input: &str) -> IResult<&str, usize> {
    let (input, index) = map_res(digit1, str::parse::<usize>)(input)?;
    // Swallow any /texture/normal suffix.
    let (input, _) = take_while(|c: char| c == '/' || c.is_ascii_digit())(input)?;
    Ok((input, index))
}

fn other_line(input: &str) -> IResult<&str, Statement> {
    // Consume one unrecognized line, newline included, so `many0` always
    // makes progress. Fails only at end of input.
    let (input, line) = not_line_ending(input)?;
    let (input, newline) = opt(line_ending)(input)?;
    if line.is_empty() && newline.is_none() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Eof)));
    }
    Ok((input, Statement::Ignored))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
# a single triangle
v 0.0 1.0 0.0
v 1.0 -1.0 0.5
v -1.0 -1.0 -0.5
f 1 2 3
";

    #[test]
    fn test_parse_triangle() {
        let model = parse_obj(TRIANGLE).unwrap();
        assert_eq!(model.vertices().len(), 3);
        assert_eq!(model.faces().len(), 1);
        assert_eq!(model.faces()[0].indices(), &[0, 1, 2]);
        assert_eq!(model.vertices()[1], Vertex::new(1.0, -1.0, 0.5));
    }

    #[test]
    fn test_slash_forms_use_leading_index() {
        let input = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.5 0.5
vn 0 0 1
f 1/1 2/1/1 3//1
";
        let model = parse_obj(input).unwrap();
        assert_eq!(model.faces()[0].indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_unknown_statements_are_skipped() {
        let input = "\
o spinner
usemtl none
v 0 0 0
v 1 1 1
f 1 2
s off
";
        let model = parse_obj(input).unwrap();
        assert_eq!(model.vertices().len(), 2);
        assert_eq!(model.faces().len(), 1);
    }

    #[test]
    fn test_zero_index_rejected() {
        let input = "v 0 0 0\nv 1 1 1\nf 0 1\n";
        assert!(matches!(
            parse_obj(input),
            Err(ObjError::ZeroIndex { face: 0 })
        ));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let input = "v 0 0 0\nv 1 1 1\nf 1 3\n";
        assert!(matches!(
            parse_obj(input),
            Err(ObjError::Model(ModelError::IndexOutOfRange {
                face: 0,
                index: 2,
                ..
            }))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            parse_obj(""),
            Err(ObjError::Model(ModelError::NoVertices))
        ));
    }
}
