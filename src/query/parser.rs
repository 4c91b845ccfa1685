//! Pattern parser built with chumsky.
//!
//! Grammar, tightest binding first: `~` applies to the following atom,
//! `and` binds tighter than `or`, and parentheses regroup boolean
//! sub-expressions. An atom is a word, a parenthesized expression, a
//! `[...]` contains-group, or a `[[...]]` exact-group. Bracket content is a
//! comma-separated list of items, each an optionally negated word or nested
//! bracket. The whole pattern is a comma-separated list of one or more
//! clauses, implicitly ANDed.

use chumsky::prelude::*;

use crate::query::ast::{Expr, Pattern};
use crate::query::error::PatternSyntaxError;
use crate::query::lexer::tokenize;
use crate::query::tokens::Token;

/// Type alias for parser errors over the token stream.
type ParserError = Simple<Token>;

/// Compile a pattern string into a reusable [`Pattern`].
///
/// Fails fast with a [`PatternSyntaxError`] on any malformed input; no
/// partial pattern is ever returned.
pub fn compile(source: &str) -> Result<Pattern, PatternSyntaxError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(PatternSyntaxError::EmptyPattern);
    }
    pattern()
        .parse(tokens)
        .map(Pattern::new)
        .map_err(into_syntax_error)
}

fn into_syntax_error(errors: Vec<ParserError>) -> PatternSyntaxError {
    // The first error is the most local diagnosis chumsky produced.
    match errors.into_iter().next() {
        Some(err) => match err.found() {
            Some(token) => PatternSyntaxError::UnexpectedToken {
                found: token.to_string(),
                position: err.span().start,
            },
            None => PatternSyntaxError::UnexpectedEnd,
        },
        None => PatternSyntaxError::UnexpectedEnd,
    }
}

/// A bare word token, yielding its text.
fn word() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span, token| match token {
        Token::Word(name) => Ok(name),
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
}

/// A `[...]` or `[[...]]` group pattern, including its nested items.
///
/// Bracket kinds must be internally consistent: `[` closed by `]]` is
/// rejected because the closing token cannot complete the contains-group
/// rule.
fn bracket() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|bracket| {
        let item = just(Token::Tilde)
            .repeated()
            .then(word().map(Expr::Tag).or(bracket))
            .foldr(|_tilde, inner| Expr::Not(Box::new(inner)));

        let items = item.separated_by(just(Token::Comma)).at_least(1);

        let contains = items
            .clone()
            .delimited_by(just(Token::OpenContains), just(Token::CloseContains))
            .map(Expr::ContainsGroup);

        let exact = items
            .delimited_by(just(Token::OpenExact), just(Token::CloseExact))
            .map(Expr::ExactGroup);

        contains.or(exact)
    })
}

/// One boolean clause: the full `~` / `and` / `or` expression grammar.
fn expr() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expr| {
        let atom = word()
            .map(Expr::Tag)
            .or(expr
                .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
                .map(|inner| Expr::Paren(Box::new(inner))))
            .or(bracket());

        let unary = just(Token::Tilde)
            .repeated()
            .then(atom)
            .foldr(|_tilde, inner| Expr::Not(Box::new(inner)));

        let conjunction = unary
            .clone()
            .then(just(Token::And).ignore_then(unary).repeated())
            .foldl(|left, right| Expr::And(Box::new(left), Box::new(right)));

        conjunction
            .clone()
            .then(just(Token::Or).ignore_then(conjunction).repeated())
            .foldl(|left, right| Expr::Or(Box::new(left), Box::new(right)))
    })
}

/// The top-level clause list.
fn pattern() -> impl Parser<Token, Vec<Expr>, Error = ParserError> {
    expr()
        .separated_by(just(Token::Comma))
        .at_least(1)
        .then_ignore(end())
}
