//! Declarative `(method, path shape) -> operation` table

use actix_web::http::Method;

/// Administrative operation selected for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOperation {
    Metadata { table: String },
    Regions { table: String },
    Create,
    Enable { table: String },
    Disable { table: String },
    Alter { table: String },
    Delete { table: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn from_method(method: &Method) -> Option<Self> {
        if *method == Method::GET {
            Some(Verb::Get)
        } else if *method == Method::POST {
            Some(Verb::Post)
        } else if *method == Method::PUT {
            Some(Verb::Put)
        } else if *method == Method::DELETE {
            Some(Verb::Delete)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Seg {
    /// Captures the table name
    Name,
    /// Any single segment, ignored
    Any,
    /// Case-insensitive literal
    Keyword(&'static str),
    /// Zero or more trailing segments
    Rest,
}

#[derive(Debug, Clone, Copy)]
enum OpKind {
    Metadata,
    Regions,
    Create,
    Enable,
    Disable,
    Alter,
    Delete,
}

struct Route {
    verb: Verb,
    shape: &'static [Seg],
    op: OpKind,
}

const fn route(verb: Verb, shape: &'static [Seg], op: OpKind) -> Route {
    Route { verb, shape, op }
}

use Seg::*;

/// Checked in order; the first matching shape wins.
const ROUTES: &[Route] = &[
    route(Verb::Get, &[Name], OpKind::Metadata),
    route(Verb::Get, &[Name, Keyword("regions")], OpKind::Regions),
    route(Verb::Post, &[Any], OpKind::Create),
    route(Verb::Post, &[Name, Keyword("enable")], OpKind::Enable),
    route(Verb::Post, &[Name, Keyword("disable")], OpKind::Disable),
    route(Verb::Post, &[Any, Name, Keyword("enable")], OpKind::Enable),
    route(Verb::Post, &[Any, Name, Keyword("disable")], OpKind::Disable),
    route(Verb::Put, &[Any, Name, Rest], OpKind::Alter),
    route(Verb::Delete, &[Any, Name], OpKind::Delete),
];

/// Match `segments` against `shape`, returning the captured table name
/// (empty when the shape captures none).
fn match_shape<'a>(shape: &[Seg], segments: &[&'a str]) -> Option<&'a str> {
    let mut name = "";
    let mut rest = segments;
    for seg in shape {
        match seg {
            Rest => return Some(name),
            Name | Any | Keyword(_) => {
                let (head, tail) = rest.split_first()?;
                match seg {
                    Name => name = *head,
                    Keyword(kw) if !head.eq_ignore_ascii_case(kw) => return None,
                    _ => {},
                }
                rest = tail;
            },
        }
    }
    rest.is_empty().then_some(name)
}

/// Select the operation for a request, or `None` when no route matches.
pub fn match_route(method: &Method, segments: &[&str]) -> Option<TableOperation> {
    let verb = Verb::from_method(method)?;
    ROUTES
        .iter()
        .filter(|r| r.verb == verb)
        .find_map(|r| match_shape(r.shape, segments).map(|name| (r.op, name.to_string())))
        .map(|(op, table)| match op {
            OpKind::Metadata => TableOperation::Metadata { table },
            OpKind::Regions => TableOperation::Regions { table },
            OpKind::Create => TableOperation::Create,
            OpKind::Enable => TableOperation::Enable { table },
            OpKind::Disable => TableOperation::Disable { table },
            OpKind::Alter => TableOperation::Alter { table },
            OpKind::Delete => TableOperation::Delete { table },
        })
}
