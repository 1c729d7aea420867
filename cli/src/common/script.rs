//! The operation script language.
//!
//! A script is a list of statements over an array of `i64`, separated by
//! newlines or `;`. `#` starts a comment that runs to the end of the line.
//!
//! ```text
//! append 1; append 2   # two appends
//! insert 55 1
//! remove_one 0
//! ```

use std::fmt;

use dynarr::{ArrayError, DynArray};
use miette::{NamedSource, SourceSpan};

use super::error::{CliError, CliResult};

/// Every operation with its usage, in the order shown in help messages.
const OPERATIONS: &[(&str, &str)] = &[
    ("append", "append <value>"),
    ("add", "add <value>"),
    ("insert", "insert <value> <index>"),
    ("remove_one", "remove_one <index>"),
    ("pop", "pop"),
    ("delete", "delete"),
    ("len", "len"),
    ("capacity", "capacity"),
    ("get", "get <index>"),
    ("clear", "clear"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOp {
    Append(i64),
    Add(i64),
    Insert { value: i64, index: usize },
    RemoveOne(usize),
    Pop,
    Delete,
    Len,
    Capacity,
    Get(usize),
    Clear,
}

impl fmt::Display for ScriptOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptOp::Append(value) => write!(f, "append {value}"),
            ScriptOp::Add(value) => write!(f, "add {value}"),
            ScriptOp::Insert { value, index } => write!(f, "insert {value} {index}"),
            ScriptOp::RemoveOne(index) => write!(f, "remove_one {index}"),
            ScriptOp::Pop => f.write_str("pop"),
            ScriptOp::Delete => f.write_str("delete"),
            ScriptOp::Len => f.write_str("len"),
            ScriptOp::Capacity => f.write_str("capacity"),
            ScriptOp::Get(index) => write!(f, "get {index}"),
            ScriptOp::Clear => f.write_str("clear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub op: ScriptOp,
    /// Byte range of the statement in the script, for diagnostics.
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: SourceSpan,
    pub help: Option<String>,
}

/// Value produced by an operation, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Element(i64),
    Count(usize),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Element(value) => write!(f, "{value}"),
            Output::Count(count) => write!(f, "{count}"),
        }
    }
}

/// Split a script into statements.
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();
    let mut line_start = 0;

    for line in source.split_inclusive('\n') {
        let code = line.split('#').next().unwrap_or_default();
        let mut segment_start = line_start;

        for segment in code.split(';') {
            let text = segment.trim_start();
            let start = segment_start + (segment.len() - text.len());
            let text = text.trim_end();
            if !text.is_empty() {
                statements.push(parse_statement(text, (start, text.len()).into())?);
            }
            segment_start += segment.len() + 1;
        }

        line_start += line.len();
    }

    Ok(statements)
}

fn parse_statement(text: &str, span: SourceSpan) -> Result<Statement, ParseError> {
    let mut words = text.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let op = match (name, args.as_slice()) {
        ("append", [value]) => ScriptOp::Append(parse_value(value, span)?),
        ("add", [value]) => ScriptOp::Add(parse_value(value, span)?),
        ("insert", [value, index]) => ScriptOp::Insert {
            value: parse_value(value, span)?,
            index: parse_index(index, span)?,
        },
        ("remove_one", [index]) => ScriptOp::RemoveOne(parse_index(index, span)?),
        ("get", [index]) => ScriptOp::Get(parse_index(index, span)?),
        ("pop", []) => ScriptOp::Pop,
        ("delete", []) => ScriptOp::Delete,
        ("len", []) => ScriptOp::Len,
        ("capacity", []) => ScriptOp::Capacity,
        ("clear", []) => ScriptOp::Clear,
        _ => return Err(malformed(name, span)),
    };

    Ok(Statement { op, span })
}

fn malformed(name: &str, span: SourceSpan) -> ParseError {
    match OPERATIONS.iter().find(|(op, _)| *op == name) {
        Some((_, usage)) => ParseError {
            message: format!("wrong arguments for `{name}`"),
            span,
            help: Some(format!("usage: {usage}")),
        },
        None => ParseError {
            message: format!("unknown operation `{name}`"),
            span,
            help: Some(format!(
                "expected one of: {}",
                OPERATIONS
                    .iter()
                    .map(|(op, _)| *op)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        },
    }
}

fn parse_value(word: &str, span: SourceSpan) -> Result<i64, ParseError> {
    word.parse().map_err(|_| ParseError {
        message: format!("`{word}` is not an integer"),
        span,
        help: None,
    })
}

fn parse_index(word: &str, span: SourceSpan) -> Result<usize, ParseError> {
    word.parse().map_err(|_| ParseError {
        message: format!("`{word}` is not a valid index"),
        span,
        help: Some("indices are non-negative integers".to_string()),
    })
}

/// Apply one operation to `array`.
///
/// `get` past the end is reported like any other out-of-range index.
pub fn execute(array: &mut DynArray<i64>, op: ScriptOp) -> Result<Option<Output>, String> {
    let output = match op {
        ScriptOp::Append(value) => {
            array.append(value);
            None
        }
        ScriptOp::Add(value) => {
            array.add(value);
            None
        }
        ScriptOp::Insert { value, index } => {
            array.insert(value, index).map_err(describe)?;
            None
        }
        ScriptOp::RemoveOne(index) => Some(Output::Element(
            array.remove_one(index).map_err(describe)?,
        )),
        ScriptOp::Pop => Some(Output::Element(array.pop().map_err(describe)?)),
        ScriptOp::Delete => Some(Output::Element(array.delete().map_err(describe)?)),
        ScriptOp::Len => Some(Output::Count(array.len())),
        ScriptOp::Capacity => Some(Output::Count(array.capacity())),
        ScriptOp::Get(index) => match array.get(index) {
            Some(value) => Some(Output::Element(*value)),
            None => {
                return Err(format!(
                    "get: index {index} is out of range for length {}",
                    array.len()
                ));
            }
        },
        ScriptOp::Clear => {
            array.clear();
            None
        }
    };
    Ok(output)
}

fn describe(error: ArrayError) -> String {
    match error {
        ArrayError::EmptyStructure { .. } => format!("{error} (nothing to remove)"),
        _ => error.to_string(),
    }
}

/// One-line summary of the array: elements, length and capacity.
pub fn format_state(array: &DynArray<i64>) -> String {
    format!(
        "{:?} (len={}, capacity={})",
        array,
        array.len(),
        array.capacity()
    )
}

/// Parse and run a script against a fresh array, printing as it goes.
///
/// Without `steps`, values produced by operations are printed one per line
/// followed by the final state. With `steps`, every statement prints its own
/// line with the resulting state.
pub fn interpret_input(source: &str, name: &str, steps: bool) -> CliResult<()> {
    let named = || NamedSource::new(name, source.to_string());

    let statements = parse(source).map_err(|e| CliError::Parse {
        message: e.message,
        src: named(),
        span: e.span,
        help: e.help,
    })?;
    tracing::debug!(statements = statements.len(), script = name, "parsed script");

    let mut array = DynArray::new();
    for statement in &statements {
        let output = execute(&mut array, statement.op).map_err(|message| CliError::Rejected {
            message,
            src: named(),
            span: statement.span,
        })?;

        match (steps, output) {
            (true, Some(output)) => {
                println!("{} = {} -> {}", statement.op, output, format_state(&array))
            }
            (true, None) => println!("{} -> {}", statement.op, format_state(&array)),
            (false, Some(output)) => println!("{output}"),
            (false, None) => {}
        }
    }

    if !steps {
        println!("{}", format_state(&array));
    }
    Ok(())
}
