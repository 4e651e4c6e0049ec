//! Hand-written scanner for the restricted path grammar.

use super::{LiteralExpr, Lookup, ParseError, ParsedQuery, PathExpr, QueryBody, StepExpr};

/// Parses a path-expression string.
///
/// Surrounding whitespace is ignored, as is whitespace around the `/`
/// step separator. Anything left over after a complete expression is an
/// error.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not a well-formed
/// expression of the restricted grammar.
///
/// # Example
///
/// ```
/// use pathlens::syntax::{parse, ParseError, QueryBody};
///
/// assert!(matches!(parse("?a?3")?.body(), QueryBody::Lookups(_)));
/// assert!(matches!(parse(".?a")?.body(), QueryBody::Path(_)));
/// assert!(matches!(parse("42")?.body(), QueryBody::Literal(_)));
/// assert_eq!(parse(""), Err(ParseError::EmptyExpression));
/// # Ok::<(), ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<ParsedQuery, ParseError> {
    let mut scanner = Scanner::new(text);
    scanner.skip_whitespace();
    let Some((offset, character)) = scanner.peek() else {
        return Err(ParseError::EmptyExpression);
    };

    let body = match character {
        '0'..='9' => QueryBody::Literal(scanner.number_literal()),
        '"' | '\'' => QueryBody::Literal(scanner.text_literal()?),
        '.' | '?' => scanner.steps()?,
        _ => return Err(ParseError::UnexpectedCharacter { character, offset }),
    };

    scanner.skip_whitespace();
    match scanner.peek() {
        None => Ok(ParsedQuery::new(body)),
        Some((offset, character)) => Err(ParseError::UnexpectedCharacter { character, offset }),
    }
}

struct Scanner<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Scanner<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.text[self.offset..]
            .chars()
            .next()
            .map(|character| (self.offset, character))
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.peek();
        if let Some((_, character)) = next {
            self.offset += character.len_utf8();
        }
        next
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some((_, character)) if character.is_whitespace()) {
            self.bump();
        }
    }

    fn number_literal(&mut self) -> LiteralExpr {
        let start = self.offset;
        while matches!(self.peek(), Some((_, character)) if character.is_ascii_digit()) {
            self.bump();
        }
        LiteralExpr::Number(self.text[start..self.offset].to_string())
    }

    fn text_literal(&mut self) -> Result<LiteralExpr, ParseError> {
        let Some((start, quote)) = self.bump() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let content_start = self.offset;
        loop {
            match self.bump() {
                Some((offset, character)) if character == quote => {
                    return Ok(LiteralExpr::Text(self.text[content_start..offset].to_string()));
                }
                Some(_) => {}
                None => return Err(ParseError::UnterminatedLiteral { offset: start }),
            }
        }
    }

    /// Parses `step ('/' step)*`.
    ///
    /// A lone step without a leading context item is a bare lookup
    /// chain rather than a path.
    fn steps(&mut self) -> Result<QueryBody, ParseError> {
        let mut steps = Vec::new();
        let mut first_has_context = false;
        loop {
            let Some((offset, character)) = self.peek() else {
                return Err(ParseError::UnexpectedEnd);
            };

            let has_context = character == '.';
            if has_context {
                self.bump();
            }

            let mut lookups = Vec::new();
            while matches!(self.peek(), Some((_, '?'))) {
                lookups.push(self.lookup()?);
            }
            if !has_context && lookups.is_empty() {
                return Err(ParseError::UnexpectedCharacter { character, offset });
            }

            if steps.is_empty() {
                first_has_context = has_context;
            }
            steps.push(StepExpr::new(lookups));

            self.skip_whitespace();
            if matches!(self.peek(), Some((_, '/'))) {
                self.bump();
                self.skip_whitespace();
            } else {
                break;
            }
        }

        if !first_has_context && steps.len() == 1 {
            if let Some(step) = steps.pop() {
                return Ok(QueryBody::Lookups(step.into_lookups()));
            }
        }
        Ok(QueryBody::Path(PathExpr::new(steps)))
    }

    fn lookup(&mut self) -> Result<Lookup, ParseError> {
        let Some((offset, _)) = self.bump() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let start = self.offset;
        while matches!(
            self.peek(),
            Some((_, character)) if character.is_alphanumeric() || character == '_' || character == '-'
        ) {
            self.bump();
        }
        if self.offset == start {
            return Err(ParseError::MissingLookupKey { offset });
        }
        Ok(Lookup::classify(self.text[start..self.offset].to_string()))
    }
}
