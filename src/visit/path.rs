use crate::error::Error;
use std::fmt;

/// The path from the document root to the node that's currently being visited.
///
/// Each segment is either a key of a parent node, such as `fields`, or an index into a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Returns the last segment of the path.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let segments = value
            .split('.')
            .map(PathSegment::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.segments
                .iter()
                .map(|segment| segment.to_string())
                .collect::<Vec<_>>()
                .join(".")
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    Index(usize),

    Arguments,
    Definitions,
    Directives,
    Fields,
    Interfaces,
    OperationTypes,
    Type,
    Types,
    Values,
}

impl TryFrom<&str> for PathSegment {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<usize>() {
            Ok(index) => Ok(Self::Index(index)),
            Err(_) => match value {
                "arguments" => Ok(PathSegment::Arguments),
                "definitions" => Ok(PathSegment::Definitions),
                "directives" => Ok(PathSegment::Directives),
                "fields" => Ok(PathSegment::Fields),
                "interfaces" => Ok(PathSegment::Interfaces),
                "operationTypes" => Ok(PathSegment::OperationTypes),
                "type" => Ok(PathSegment::Type),
                "types" => Ok(PathSegment::Types),
                "values" => Ok(PathSegment::Values),
                _ => Err(Error::new(format!("Invalid path segment {value}"), None)),
            },
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::Arguments => f.write_str("arguments"),
            PathSegment::Definitions => f.write_str("definitions"),
            PathSegment::Directives => f.write_str("directives"),
            PathSegment::Fields => f.write_str("fields"),
            PathSegment::Interfaces => f.write_str("interfaces"),
            PathSegment::OperationTypes => f.write_str("operationTypes"),
            PathSegment::Type => f.write_str("type"),
            PathSegment::Types => f.write_str("types"),
            PathSegment::Values => f.write_str("values"),
        }
    }
}
