//! Line-oriented scripts that drive a [`DynamicArray`].
//!
//! One command per line (or per `;`-separated segment). `#` starts a comment.
//!
//! ```text
//! new 5
//! push 10        # append
//! insert 2 50
//! find 20        # prints 7
//! rotate-right 3
//! print
//! ```
//!
//! Commands that observe the array print one line each; the rest are silent.
//! Execution stops at the first failing command.

use std::io::Write;
use std::ops::Range;

use dynarray_core::DynamicArray;
use thiserror::Error;

/// Byte range into the script source.
pub type Span = Range<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New(i64),
    Push(i32),
    Insert { index: i64, value: i32 },
    Set { index: i64, value: i32 },
    Get(i64),
    Pop(i64),
    Front,
    Back,
    Find(i32),
    FindMove(i32),
    /// `None` rotates by a single step.
    RotateRight(Option<i64>),
    RotateLeft,
    Print,
    Len,
    Capacity,
    Destroy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub command: Command,
    pub span: Span,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub statements: Vec<Statement>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects a {name} argument")]
    MissingArgument {
        command: String,
        name: &'static str,
    },

    #[error("unexpected argument to `{command}`")]
    UnexpectedArgument { command: String },

    #[error("invalid integer `{0}`")]
    InvalidInteger(String),

    #[error("array size {size} is too large")]
    SizeTooLarge { size: i64 },

    #[error(transparent)]
    Array(#[from] dynarray_core::Error),
}

/// A parse or execution failure, located in the script source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ScriptError {
    pub kind: ScriptErrorKind,
    pub span: Span,
}

impl ScriptError {
    pub fn new(kind: ScriptErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Short stable code shown in rendered reports.
    pub fn code(&self) -> &'static str {
        match &self.kind {
            ScriptErrorKind::UnknownCommand(_) => "S001",
            ScriptErrorKind::MissingArgument { .. } => "S002",
            ScriptErrorKind::UnexpectedArgument { .. } => "S003",
            ScriptErrorKind::InvalidInteger(_) => "S004",
            ScriptErrorKind::SizeTooLarge { .. } => "S005",
            ScriptErrorKind::Array(dynarray_core::Error::EmptyContainer) => "A001",
            ScriptErrorKind::Array(dynarray_core::Error::IndexOutOfRange { .. }) => "A002",
        }
    }

    pub fn help(&self) -> Option<String> {
        match &self.kind {
            ScriptErrorKind::UnknownCommand(_) => Some(format!(
                "Known commands: {}",
                COMMAND_NAMES.join(", ")
            )),
            ScriptErrorKind::InvalidInteger(_) => {
                Some("Values must fit in a 32-bit signed integer".to_string())
            }
            ScriptErrorKind::SizeTooLarge { .. } => {
                Some(format!("Sizes are limited to {MAX_SIZE} elements"))
            }
            ScriptErrorKind::Array(dynarray_core::Error::EmptyContainer) => {
                Some("Push an element before reading `front` or `back`".to_string())
            }
            ScriptErrorKind::Array(dynarray_core::Error::IndexOutOfRange { len: 0, .. }) => {
                Some("The array is empty".to_string())
            }
            ScriptErrorKind::Array(dynarray_core::Error::IndexOutOfRange { len, .. }) => {
                Some(format!("The array has {len} elements"))
            }
            ScriptErrorKind::MissingArgument { .. } | ScriptErrorKind::UnexpectedArgument { .. } => {
                None
            }
        }
    }
}

/// Failure while executing a script.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

const COMMAND_NAMES: &[&str] = &[
    "new",
    "push",
    "insert",
    "set",
    "get",
    "pop",
    "front",
    "back",
    "find",
    "find-move",
    "rotate-right",
    "rotate-left",
    "print",
    "len",
    "capacity",
    "destroy",
];

/// Largest array a script may create with `new`.
pub const MAX_SIZE: usize = 1 << 24;

/// Parse a script. Both newlines and `;` end a command; a `#` comment runs to
/// the end of its line.
pub fn parse(source: &str) -> Result<Script, ScriptError> {
    let mut statements = Vec::new();
    let mut line_start = 0;
    for line in source.split('\n') {
        let code = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };
        let mut start = line_start;
        for segment in code.split(';') {
            let tokens = tokenize(segment, start);
            if let Some((head, rest)) = tokens.split_first() {
                statements.push(parse_statement(head, rest)?);
            }
            start += segment.len() + 1;
        }
        line_start += line.len() + 1;
    }
    Ok(Script { statements })
}

struct Token<'a> {
    text: &'a str,
    span: Span,
}

fn tokenize(code: &str, offset: usize) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut current: Option<usize> = None;
    for (i, c) in code.char_indices() {
        match (c.is_whitespace(), current) {
            (true, Some(begin)) => {
                tokens.push(Token {
                    text: &code[begin..i],
                    span: offset + begin..offset + i,
                });
                current = None;
            }
            (false, None) => current = Some(i),
            _ => {}
        }
    }
    if let Some(begin) = current {
        tokens.push(Token {
            text: &code[begin..],
            span: offset + begin..offset + code.len(),
        });
    }
    tokens
}

struct Args<'t, 'a> {
    head: &'t Token<'a>,
    rest: std::slice::Iter<'t, Token<'a>>,
}

impl Args<'_, '_> {
    fn optional<T: TryFrom<i64>>(&mut self) -> Result<Option<T>, ScriptError> {
        let Some(token) = self.rest.next() else {
            return Ok(None);
        };
        let invalid = || {
            ScriptError::new(
                ScriptErrorKind::InvalidInteger(token.text.to_string()),
                token.span.clone(),
            )
        };
        let wide: i64 = token.text.parse().map_err(|_| invalid())?;
        T::try_from(wide).map(Some).map_err(|_| invalid())
    }

    fn required<T: TryFrom<i64>>(&mut self, name: &'static str) -> Result<T, ScriptError> {
        self.optional()?.ok_or_else(|| {
            ScriptError::new(
                ScriptErrorKind::MissingArgument {
                    command: self.head.text.to_string(),
                    name,
                },
                self.head.span.clone(),
            )
        })
    }

    /// An array size, bounded by [`MAX_SIZE`]. Non-positive sizes are kept.
    fn size(&mut self) -> Result<i64, ScriptError> {
        let span = self.rest.as_slice().first().map(|token| token.span.clone());
        let size: i64 = self.required("size")?;
        if usize::try_from(size).is_ok_and(|size| size > MAX_SIZE) {
            return Err(ScriptError::new(
                ScriptErrorKind::SizeTooLarge { size },
                span.unwrap_or_else(|| self.head.span.clone()),
            ));
        }
        Ok(size)
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.rest.next() {
            None => Ok(()),
            Some(extra) => Err(ScriptError::new(
                ScriptErrorKind::UnexpectedArgument {
                    command: self.head.text.to_string(),
                },
                extra.span.clone(),
            )),
        }
    }
}

fn parse_statement<'a>(head: &Token<'a>, rest: &[Token<'a>]) -> Result<Statement, ScriptError> {
    let end = rest.last().unwrap_or(head).span.end;
    let mut args = Args {
        head,
        rest: rest.iter(),
    };

    let command = match head.text {
        "new" => Command::New(args.size()?),
        "push" => Command::Push(args.required("value")?),
        "insert" => Command::Insert {
            index: args.required("index")?,
            value: args.required("value")?,
        },
        "set" => Command::Set {
            index: args.required("index")?,
            value: args.required("value")?,
        },
        "get" => Command::Get(args.required("index")?),
        "pop" => Command::Pop(args.required("index")?),
        "front" => Command::Front,
        "back" => Command::Back,
        "find" => Command::Find(args.required("value")?),
        "find-move" => Command::FindMove(args.required("value")?),
        "rotate-right" => Command::RotateRight(args.optional()?),
        "rotate-left" => Command::RotateLeft,
        "print" => Command::Print,
        "len" => Command::Len,
        "capacity" => Command::Capacity,
        "destroy" => Command::Destroy,
        other => {
            return Err(ScriptError::new(
                ScriptErrorKind::UnknownCommand(other.to_string()),
                head.span.clone(),
            ));
        }
    };
    args.finish()?;

    Ok(Statement {
        command,
        span: head.span.start..end,
    })
}

/// The array a script runs against.
pub struct Session {
    array: DynamicArray,
}

impl From<DynamicArray> for Session {
    fn from(array: DynamicArray) -> Self {
        Self { array }
    }
}

impl Session {
    pub fn new(initial_size: usize) -> Self {
        Self {
            array: DynamicArray::new(initial_size),
        }
    }

    pub fn array(&self) -> &DynamicArray {
        &self.array
    }

    /// Run every statement in order, writing observer output to `out`.
    pub fn execute(&mut self, script: &Script, out: &mut dyn Write) -> Result<(), ExecError> {
        tracing::debug!(statements = script.statements.len(), "Executing script");
        for statement in &script.statements {
            if let Some(line) = self.step(statement)? {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    /// Run one statement, returning the line it prints, if any.
    pub fn step(&mut self, statement: &Statement) -> Result<Option<String>, ScriptError> {
        let at = |kind: dynarray_core::Error| ScriptError::new(kind.into(), statement.span.clone());
        let len = self.array.len();
        let index = |i: i64| usize::try_from(i).map_err(|_| at(out_of_range(i, len)));

        let line = match statement.command {
            Command::New(size) => {
                self.array = DynamicArray::new(usize::try_from(size).unwrap_or(0));
                None
            }
            Command::Push(value) => {
                self.array.push_back(value);
                None
            }
            Command::Insert { index: i, value } => {
                self.array.insert(index(i)?, value).map_err(at)?;
                None
            }
            Command::Set { index: i, value } => {
                self.array.set(index(i)?, value).map_err(at)?;
                None
            }
            Command::Get(i) => Some(self.array.get(index(i)?).map_err(at)?.to_string()),
            Command::Pop(i) => Some(self.array.pop(index(i)?).map_err(at)?.to_string()),
            Command::Front => Some(self.array.front().map_err(at)?.to_string()),
            Command::Back => Some(self.array.back().map_err(at)?.to_string()),
            Command::Find(value) => Some(render_index(self.array.find(value))),
            Command::FindMove(value) => {
                Some(render_index(self.array.find_with_transposition(value)))
            }
            Command::RotateRight(None) => {
                self.array.right_rotate_one();
                None
            }
            Command::RotateRight(Some(times)) => {
                // Non-positive counts leave the array alone.
                self.array.right_rotate(usize::try_from(times).unwrap_or(0));
                None
            }
            Command::RotateLeft => {
                self.array.left_rotate_one();
                None
            }
            Command::Print => Some(self.array.to_string()),
            Command::Len => Some(self.array.len().to_string()),
            Command::Capacity => Some(self.array.capacity().to_string()),
            Command::Destroy => {
                self.array.destroy();
                None
            }
        };
        Ok(line)
    }
}

fn out_of_range(index: i64, len: usize) -> dynarray_core::Error {
    dynarray_core::Error::IndexOutOfRange { index, len }
}

/// Missing values print as `-1`.
fn render_index(index: Option<usize>) -> String {
    match index {
        Some(i) => i.to_string(),
        None => "-1".to_string(),
    }
}

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;
