use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{Extras, Token};
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use bumpalo::collections::Vec;
use logos::{Lexer, Logos, Span};

type ParseResult<T> = std::result::Result<T, ASTKind>;

pub(crate) mod private {
    use super::{ASTContext, Extras, Lexer, Loc, Logos, ParseResult, Span, Token};

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Lexer].
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) source: &'a str,
        pub(crate) peek: Option<(Token<'a>, Span)>,
        pub(crate) iter: Lexer<'a, Token<'a>>,
        /// Span of the last token that was returned by `next`
        pub(crate) span: Span,
        line_starts: std::vec::Vec<usize>,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            let extras = Extras { arena: &ctx.arena };
            let line_starts = std::iter::once(0)
                .chain(source.match_indices('\n').map(|(index, _)| index + 1))
                .collect();
            ParserContext {
                arena: &ctx.arena,
                source,
                peek: None,
                iter: Token::lexer_with_extras(source, extras),
                span: 0..0,
                line_starts,
            }
        }

        #[inline]
        fn lex(&mut self) -> (Token<'a>, Span) {
            match self.iter.next() {
                Some(token) => (token, self.iter.span()),
                None => (Token::End, self.source.len()..self.source.len()),
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            let (token, span) = match self.peek.take() {
                Some(peeked) => peeked,
                None => self.lex(),
            };
            self.span = span;
            token
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> Token<'a> {
            if self.peek.is_none() {
                self.peek = Some(self.lex());
            }
            self.peek.as_ref().map_or(Token::End, |(token, _)| *token)
        }

        /// Returns the offset at which the next token starts.
        #[inline]
        pub(crate) fn start(&mut self) -> usize {
            self.peek();
            self.peek
                .as_ref()
                .map_or(self.span.end, |(_, span)| span.start)
        }

        /// Creates a node's [Loc] from its start offset up until the end of the last token.
        pub(crate) fn loc(&self, start: usize) -> Loc {
            let line = self.line_starts.partition_point(|&line_start| line_start <= start);
            let line_start = self.line_starts[line - 1];
            let column = self.source[line_start..start].chars().count() + 1;
            Loc {
                start,
                end: self.span.end.max(start),
                line,
                column,
            }
        }

        /// Returns the span that a parsing error should point at.
        #[inline]
        pub(crate) fn error_span(&self) -> Span {
            match self.peek {
                Some((_, ref span)) => span.clone(),
                None => self.span.clone(),
            }
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

use private::ParseNode as _;
use private::ParserContext;

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse the
/// GraphQL schema definition language. However, mostly this will be used via `Document::parse`.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = ParserContext::new(ctx, source);
        match Self::new_with_ctx(&mut parser_ctx) {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(error) => {
                let span = parser_ctx.error_span();
                let location = get_location(source, span.start);
                let message = format!("Invalid {}", error);
                tracing::debug!(%location, %message, "failed to parse SDL document");
                Err(Error::new_with_context(
                    message,
                    Some(location),
                    print_span(source, span),
                    Some(ErrorType::Syntax),
                ))
            }
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

#[inline]
fn parse_name<'a>(ctx: &mut ParserContext<'a>, kind: ASTKind) -> ParseResult<&'a str> {
    match ctx.next() {
        Token::Name(name) => Ok(name),
        _ => Err(kind),
    }
}

#[inline]
fn parse_keyword(ctx: &mut ParserContext, keyword: &str, kind: ASTKind) -> ParseResult<()> {
    match ctx.next() {
        Token::Name(name) if name == keyword => Ok(()),
        _ => Err(kind),
    }
}

#[inline]
fn parse_description<'a>(ctx: &mut ParserContext<'a>) -> Option<StringValue<'a>> {
    match ctx.peek() {
        Token::String(value) => {
            ctx.next();
            Some(StringValue {
                value,
                block: false,
            })
        }
        Token::BlockString(value) => {
            ctx.next();
            Some(StringValue { value, block: true })
        }
        _ => None,
    }
}

/// Parses a list of `open item+ close`, returning an empty list when `open` isn't the next token.
#[inline]
fn parse_optional_list<'a, T: private::ParseNode<'a>>(
    ctx: &mut ParserContext<'a>,
    open: Token<'a>,
    close: Token<'a>,
) -> ParseResult<Vec<'a, T>> {
    let mut builder = Vec::new_in(ctx.arena);
    if ctx.peek() == open {
        ctx.next();
        loop {
            builder.push(T::new_with_ctx(ctx)?);
            if ctx.peek() == close {
                ctx.next();
                break;
            }
        }
    }
    Ok(builder)
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        parse_description(ctx).ok_or(ASTKind::String)
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Value<'a>> {
        match ctx.next() {
            Token::Name("null") => Ok(Value::Null),
            Token::Name("true") => Ok(Value::Boolean(BooleanValue { value: true })),
            Token::Name("false") => Ok(Value::Boolean(BooleanValue { value: false })),
            Token::Name(value) => Ok(Value::Enum(EnumValue { value })),
            Token::Float(value) => Ok(Value::Float(FloatValue { value })),
            Token::Integer(value) => Ok(Value::Int(IntValue { value })),
            Token::String(value) => Ok(Value::String(StringValue {
                value,
                block: false,
            })),
            Token::BlockString(value) => Ok(Value::String(StringValue { value, block: true })),
            Token::BracketOpen => {
                let mut children = Vec::new_in(ctx.arena);
                while ctx.peek() != Token::BracketClose {
                    children.push(Value::new_with_ctx(ctx)?);
                }
                ctx.next();
                Ok(Value::List(ListValue { children }))
            }
            Token::BraceOpen => {
                let mut children = Vec::new_in(ctx.arena);
                while ctx.peek() != Token::BraceClose {
                    children.push(ObjectField::new_with_ctx(ctx)?);
                }
                ctx.next();
                Ok(Value::Object(ObjectValue { children }))
            }
            _ => Err(ASTKind::Value),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let start = ctx.start();
        let name = parse_name(ctx, ASTKind::ObjectField)?;
        if let Token::Colon = ctx.next() {
            let value = Value::new_with_ctx(ctx)?;
            let loc = ctx.loc(start);
            Ok(ObjectField { name, value, loc })
        } else {
            Err(ASTKind::ObjectField)
        }
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let start = ctx.start();
        let name = parse_name(ctx, ASTKind::Argument)?;
        if let Token::Colon = ctx.next() {
            let value = Value::new_with_ctx(ctx)?;
            let loc = ctx.loc(start);
            Ok(Argument { name, value, loc })
        } else {
            Err(ASTKind::Argument)
        }
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            let mut builder = Vec::new_in(ctx.arena);
            loop {
                builder.push(Argument::new_with_ctx(ctx)?);
                if let Token::ParenClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            builder
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Directive<'a>> {
        let start = ctx.start();
        if let Token::DirectiveName(name) = ctx.next() {
            let arguments = Arguments::new_with_ctx(ctx)?;
            let loc = ctx.loc(start);
            Ok(Directive {
                name,
                arguments,
                loc,
            })
        } else {
            Err(ASTKind::Directive)
        }
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Directives<'a>> {
        let mut builder = Vec::new_in(ctx.arena);
        while let Token::DirectiveName(_) = ctx.peek() {
            builder.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children: builder })
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let start = ctx.start();
        let name = parse_name(ctx, ASTKind::NamedType)?;
        Ok(NamedType {
            name,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Type<'a>> {
        let of_type = if let Token::BracketOpen = ctx.peek() {
            ctx.next();
            let inner = Type::new_with_ctx(ctx)?;
            if let Token::BracketClose = ctx.next() {
                Type::ListType(ctx.arena.alloc(inner))
            } else {
                return Err(ASTKind::Type);
            }
        } else {
            Type::NamedType(NamedType::new_with_ctx(ctx)?)
        };
        if let Token::Exclam = ctx.peek() {
            ctx.next();
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for InputValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<InputValueDefinition<'a>> {
        let start = ctx.start();
        let description = parse_description(ctx);
        let name = parse_name(ctx, ASTKind::InputValueDefinition)?;
        if ctx.next() != Token::Colon {
            return Err(ASTKind::InputValueDefinition);
        }
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if let Token::Equal = ctx.peek() {
            ctx.next();
            Some(Value::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(InputValueDefinition {
            description,
            name,
            of_type,
            default_value,
            directives,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for FieldDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<FieldDefinition<'a>> {
        let start = ctx.start();
        let description = parse_description(ctx);
        let name = parse_name(ctx, ASTKind::FieldDefinition)?;
        let arguments = parse_optional_list(ctx, Token::ParenOpen, Token::ParenClose)?;
        if ctx.next() != Token::Colon {
            return Err(ASTKind::FieldDefinition);
        }
        let of_type = Type::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            of_type,
            directives,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<EnumValueDefinition<'a>> {
        let start = ctx.start();
        let description = parse_description(ctx);
        let name = parse_name(ctx, ASTKind::EnumValueDefinition)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: ctx.loc(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<OperationTypeDefinition<'a>> {
        let start = ctx.start();
        let operation = match ctx.next() {
            Token::Name("query") => OperationKind::Query,
            Token::Name("mutation") => OperationKind::Mutation,
            Token::Name("subscription") => OperationKind::Subscription,
            _ => return Err(ASTKind::OperationTypeDefinition),
        };
        if ctx.next() != Token::Colon {
            return Err(ASTKind::OperationTypeDefinition);
        }
        let named_type = NamedType::new_with_ctx(ctx)?;
        Ok(OperationTypeDefinition {
            operation,
            named_type,
            loc: ctx.loc(start),
        })
    }
}

/// Parses interfaces after `implements`, which are separated by ampersands.
fn parse_implements_interfaces<'a>(
    ctx: &mut ParserContext<'a>,
) -> ParseResult<Vec<'a, NamedType<'a>>> {
    let mut interfaces = Vec::new_in(ctx.arena);
    if let Token::Name("implements") = ctx.peek() {
        ctx.next();
        if let Token::Ampersand = ctx.peek() {
            ctx.next();
        }
        loop {
            interfaces.push(NamedType::new_with_ctx(ctx)?);
            if let Token::Ampersand = ctx.peek() {
                ctx.next();
            } else {
                break;
            }
        }
    }
    Ok(interfaces)
}

/// Parses union members after `=`, which are separated by pipes.
fn parse_union_members<'a>(ctx: &mut ParserContext<'a>) -> ParseResult<Vec<'a, NamedType<'a>>> {
    let mut types = Vec::new_in(ctx.arena);
    if let Token::Equal = ctx.peek() {
        ctx.next();
        if let Token::Pipe = ctx.peek() {
            ctx.next();
        }
        loop {
            types.push(NamedType::new_with_ctx(ctx)?);
            if let Token::Pipe = ctx.peek() {
                ctx.next();
            } else {
                break;
            }
        }
    }
    Ok(types)
}

/// Parses the body of a type definition after its description. The `start` offset is where the
/// definition's description or `extend` keyword started.
fn parse_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    start: usize,
    description: Option<StringValue<'a>>,
) -> ParseResult<TypeDefinition<'a>> {
    match ctx.next() {
        Token::Name("scalar") => {
            let name = parse_name(ctx, ASTKind::ScalarTypeDefinition)?;
            let directives = Directives::new_with_ctx(ctx)?;
            Ok(TypeDefinition::Scalar(ScalarTypeDefinition {
                description,
                name,
                directives,
                loc: ctx.loc(start),
            }))
        }
        Token::Name("type") => {
            let name = parse_name(ctx, ASTKind::ObjectTypeDefinition)?;
            let interfaces = parse_implements_interfaces(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let fields = parse_optional_list(ctx, Token::BraceOpen, Token::BraceClose)?;
            Ok(TypeDefinition::Object(ObjectTypeDefinition {
                description,
                name,
                interfaces,
                directives,
                fields,
                loc: ctx.loc(start),
            }))
        }
        Token::Name("interface") => {
            let name = parse_name(ctx, ASTKind::InterfaceTypeDefinition)?;
            let interfaces = parse_implements_interfaces(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let fields = parse_optional_list(ctx, Token::BraceOpen, Token::BraceClose)?;
            Ok(TypeDefinition::Interface(InterfaceTypeDefinition {
                description,
                name,
                interfaces,
                directives,
                fields,
                loc: ctx.loc(start),
            }))
        }
        Token::Name("union") => {
            let name = parse_name(ctx, ASTKind::UnionTypeDefinition)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let types = parse_union_members(ctx)?;
            Ok(TypeDefinition::Union(UnionTypeDefinition {
                description,
                name,
                directives,
                types,
                loc: ctx.loc(start),
            }))
        }
        Token::Name("enum") => {
            let name = parse_name(ctx, ASTKind::EnumTypeDefinition)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let values = parse_optional_list(ctx, Token::BraceOpen, Token::BraceClose)?;
            Ok(TypeDefinition::Enum(EnumTypeDefinition {
                description,
                name,
                directives,
                values,
                loc: ctx.loc(start),
            }))
        }
        Token::Name("input") => {
            let name = parse_name(ctx, ASTKind::InputObjectTypeDefinition)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let fields = parse_optional_list(ctx, Token::BraceOpen, Token::BraceClose)?;
            Ok(TypeDefinition::InputObject(InputObjectTypeDefinition {
                description,
                name,
                directives,
                fields,
                loc: ctx.loc(start),
            }))
        }
        _ => Err(ASTKind::Definition),
    }
}

impl<'a> private::ParseNode<'a> for TypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<TypeDefinition<'a>> {
        let start = ctx.start();
        let description = parse_description(ctx);
        parse_type_definition(ctx, start, description)
    }
}

fn parse_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    start: usize,
) -> ParseResult<TypeExtension<'a>> {
    let definition = parse_type_definition(ctx, start, None)?;
    // An extension has to extend a type by something
    let is_empty = match &definition {
        TypeDefinition::Scalar(def) => def.directives.is_empty(),
        TypeDefinition::Object(def) => {
            def.interfaces.is_empty() && def.directives.is_empty() && def.fields.is_empty()
        }
        TypeDefinition::Interface(def) => {
            def.interfaces.is_empty() && def.directives.is_empty() && def.fields.is_empty()
        }
        TypeDefinition::Union(def) => def.directives.is_empty() && def.types.is_empty(),
        TypeDefinition::Enum(def) => def.directives.is_empty() && def.values.is_empty(),
        TypeDefinition::InputObject(def) => def.directives.is_empty() && def.fields.is_empty(),
    };
    if is_empty {
        Err(ASTKind::Definition)
    } else {
        Ok(TypeExtension { definition })
    }
}

fn parse_schema_definition<'a>(
    ctx: &mut ParserContext<'a>,
    start: usize,
    description: Option<StringValue<'a>>,
) -> ParseResult<SchemaDefinition<'a>> {
    parse_keyword(ctx, "schema", ASTKind::SchemaDefinition)?;
    let directives = Directives::new_with_ctx(ctx)?;
    if ctx.peek() != Token::BraceOpen {
        return Err(ASTKind::SchemaDefinition);
    }
    let operation_types = parse_optional_list(ctx, Token::BraceOpen, Token::BraceClose)?;
    Ok(SchemaDefinition {
        description,
        directives,
        operation_types,
        loc: ctx.loc(start),
    })
}

fn parse_schema_extension<'a>(
    ctx: &mut ParserContext<'a>,
    start: usize,
) -> ParseResult<SchemaExtension<'a>> {
    parse_keyword(ctx, "schema", ASTKind::SchemaExtension)?;
    let directives = Directives::new_with_ctx(ctx)?;
    let operation_types = parse_optional_list(ctx, Token::BraceOpen, Token::BraceClose)?;
    if directives.is_empty() && operation_types.is_empty() {
        return Err(ASTKind::SchemaExtension);
    }
    Ok(SchemaExtension {
        directives,
        operation_types,
        loc: ctx.loc(start),
    })
}

fn parse_directive_definition<'a>(
    ctx: &mut ParserContext<'a>,
    start: usize,
    description: Option<StringValue<'a>>,
) -> ParseResult<DirectiveDefinition<'a>> {
    parse_keyword(ctx, "directive", ASTKind::DirectiveDefinition)?;
    let name = match ctx.next() {
        Token::DirectiveName(name) => name,
        _ => return Err(ASTKind::DirectiveDefinition),
    };
    let arguments = parse_optional_list(ctx, Token::ParenOpen, Token::ParenClose)?;
    let repeatable = if let Token::Name("repeatable") = ctx.peek() {
        ctx.next();
        true
    } else {
        false
    };
    parse_keyword(ctx, "on", ASTKind::DirectiveDefinition)?;
    if let Token::Pipe = ctx.peek() {
        ctx.next();
    }
    let mut locations = Vec::new_in(ctx.arena);
    loop {
        match ctx.next() {
            Token::Name(name) => {
                let location =
                    DirectiveLocation::from_name(name).ok_or(ASTKind::DirectiveLocation)?;
                locations.push(location);
            }
            _ => return Err(ASTKind::DirectiveLocation),
        }
        if let Token::Pipe = ctx.peek() {
            ctx.next();
        } else {
            break;
        }
    }
    Ok(DirectiveDefinition {
        description,
        name,
        arguments,
        repeatable,
        locations,
        loc: ctx.loc(start),
    })
}

impl<'a> private::ParseNode<'a> for DirectiveDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<DirectiveDefinition<'a>> {
        let start = ctx.start();
        let description = parse_description(ctx);
        parse_directive_definition(ctx, start, description)
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Definition<'a>> {
        let start = ctx.start();
        let description = parse_description(ctx);
        match ctx.peek() {
            Token::Name("schema") => {
                parse_schema_definition(ctx, start, description).map(Definition::Schema)
            }
            Token::Name("directive") => {
                parse_directive_definition(ctx, start, description).map(Definition::Directive)
            }
            Token::Name("scalar" | "type" | "interface" | "union" | "enum" | "input") => {
                parse_type_definition(ctx, start, description).map(Definition::Type)
            }
            Token::Name("extend") if description.is_none() => {
                ctx.next();
                if let Token::Name("schema") = ctx.peek() {
                    parse_schema_extension(ctx, start).map(Definition::SchemaExtension)
                } else {
                    parse_type_extension(ctx, start).map(Definition::TypeExtension)
                }
            }
            _ => Err(ASTKind::Definition),
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        while ctx.peek() != Token::End {
            definitions.push(Definition::new_with_ctx(ctx)?);
        }
        if definitions.is_empty() {
            return Err(ASTKind::Document);
        }
        // The document spans the whole source text, including leading comments
        let mut loc = ctx.loc(0);
        loc.end = ctx.source.len();
        Ok(Document {
            definitions,
            source: ctx.source,
            loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{super::ast::*, ParseNode};
    use crate::error::{ErrorType, Location};
    use indoc::indoc;

    #[test]
    fn error() {
        let ctx = ASTContext::new();
        let result = Document::parse(&ctx, "type Foo { bar: $ }");
        let error = result.err().unwrap();
        assert_eq!(error.error_type(), ErrorType::Syntax);
        assert_eq!(
            error.location,
            Some(Location {
                line: 1,
                column: 17
            })
        );

        let result = Document::parse(
            &ctx,
            indoc! {"
                type Foo {
                  bar: String
                  baz
                }
            "},
        );
        assert_eq!(
            result.err().unwrap().location,
            Some(Location { line: 4, column: 1 })
        );
    }

    #[test]
    fn empty_document() {
        let ctx = ASTContext::new();
        assert!(Document::parse(&ctx, "  # nothing here\n").is_err());
    }

    #[test]
    fn named_type() {
        let ctx = ASTContext::new();
        let named = NamedType::parse(&ctx, "TypeName").unwrap();
        assert_eq!(named.name, "TypeName");
        assert_eq!(named.loc.location(), Location { line: 1, column: 1 });
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();
        let of_type = Type::parse(&ctx, "[Int!]!").unwrap();
        assert_eq!(of_type.to_string(), "[Int!]!");
        assert_eq!(of_type.of_type().name, "Int");
        assert!(Type::parse(&ctx, "[Int").is_err());
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let value =
            Value::parse(&ctx, "{ a: [1, 2.5, \"x\"], b: ENUM, c: null, d: true }").unwrap();
        if let Value::Object(object) = value {
            assert_eq!(object.children.len(), 4);
            assert_eq!(object.children[0].name, "a");
            if let Value::List(list) = &object.children[0].value {
                assert_eq!(list.children.len(), 3);
                assert_eq!(list.children[0], Value::Int(IntValue { value: "1" }));
            } else {
                panic!("expected a list");
            }
            assert_eq!(
                object.children[1].value,
                Value::Enum(EnumValue { value: "ENUM" })
            );
            assert_eq!(object.children[2].value, Value::Null);
            assert_eq!(
                object.children[3].value,
                Value::Boolean(BooleanValue { value: true })
            );
        } else {
            panic!("expected an object");
        }
    }

    #[test]
    fn object_type_with_descriptions() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {r#"
                """
                A type
                """
                type Foo implements Bar & Baz @key(fields: "id") {
                  "The id"
                  id: ID!
                  list(first: Int = 10, after: String): [Foo] @deprecated(reason: "no")
                }
            "#},
        )
        .unwrap();

        assert_eq!(document.definitions.len(), 1);
        let def = match &document.definitions[0] {
            Definition::Type(TypeDefinition::Object(def)) => def,
            _ => panic!("expected an object type"),
        };
        assert_eq!(def.name, "Foo");
        assert_eq!(
            def.description,
            Some(StringValue {
                value: "A type",
                block: true
            })
        );
        assert_eq!(def.loc.line, 1);
        assert_eq!(def.interfaces.len(), 2);
        assert_eq!(def.interfaces[1].name, "Baz");
        assert_eq!(def.directives.children[0].name, "key");
        assert_eq!(def.fields.len(), 2);

        let id = &def.fields[0];
        assert_eq!(id.description.map(|desc| desc.value), Some("The id"));
        assert_eq!(id.description.map(|desc| desc.block), Some(false));
        assert_eq!(id.loc.location(), Location { line: 5, column: 3 });
        assert!(id.of_type.is_non_null());

        let list = &def.fields[1];
        assert_eq!(list.arguments.len(), 2);
        assert_eq!(
            list.arguments[0].default_value,
            Some(Value::Int(IntValue { value: "10" }))
        );
        assert_eq!(list.arguments[1].default_value, None);
        assert_eq!(list.loc.location(), Location { line: 7, column: 3 });
        let deprecated = list.directives.get("deprecated").unwrap();
        assert!(deprecated.arguments.get("reason").is_some());
        assert_eq!(
            deprecated.loc.location(),
            Location {
                line: 7,
                column: 47
            }
        );
    }

    #[test]
    fn other_type_definitions() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                scalar Date @specifiedBy(url: \"https://example.com\")
                interface Node implements Entity { id: ID! }
                union Result = | Foo | Bar
                enum Color { RED GREEN @deprecated }
                input Filter { name: String, limit: Int = 5 }
            "},
        )
        .unwrap();

        let kinds: std::vec::Vec<&str> = document
            .type_definitions()
            .map(|def| def.kind_name())
            .collect();
        assert_eq!(
            kinds,
            vec!["scalar", "interface", "union", "enum", "input object"]
        );

        match &document.definitions[2] {
            Definition::Type(TypeDefinition::Union(def)) => {
                assert_eq!(def.types.len(), 2);
                assert_eq!(def.types[0].name, "Foo");
            }
            _ => panic!("expected a union type"),
        }
        match &document.definitions[3] {
            Definition::Type(TypeDefinition::Enum(def)) => {
                assert_eq!(def.values.len(), 2);
                assert!(def.values[1].directives.get("deprecated").is_some());
            }
            _ => panic!("expected an enum type"),
        }
        match &document.definitions[4] {
            Definition::Type(TypeDefinition::InputObject(def)) => {
                assert_eq!(def.fields.len(), 2);
                assert_eq!(def.fields[1].loc.line, 5);
            }
            _ => panic!("expected an input object type"),
        }
    }

    #[test]
    fn schema_and_directive_definitions() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                schema { query: Root mutation: Change }
                extend schema @tag { subscription: Events }
                directive @tag(name: String) repeatable on | OBJECT | FIELD_DEFINITION
                extend type Root { more: Int }
            "},
        )
        .unwrap();

        match &document.definitions[0] {
            Definition::Schema(def) => {
                assert_eq!(def.operation_types.len(), 2);
                assert_eq!(def.operation_types[1].operation, OperationKind::Mutation);
                assert_eq!(def.operation_types[1].named_type.name, "Change");
            }
            _ => panic!("expected a schema definition"),
        }
        match &document.definitions[1] {
            Definition::SchemaExtension(def) => {
                assert_eq!(def.directives.children.len(), 1);
                assert_eq!(
                    def.operation_types[0].operation,
                    OperationKind::Subscription
                );
            }
            _ => panic!("expected a schema extension"),
        }
        match &document.definitions[2] {
            Definition::Directive(def) => {
                assert_eq!(def.name, "tag");
                assert!(def.repeatable);
                assert_eq!(
                    def.locations.iter().copied().collect::<std::vec::Vec<_>>(),
                    vec![DirectiveLocation::Object, DirectiveLocation::FieldDefinition]
                );
            }
            _ => panic!("expected a directive definition"),
        }
        match &document.definitions[3] {
            Definition::TypeExtension(ext) => {
                assert_eq!(ext.name(), "Root");
                assert_eq!(ext.loc().location(), Location { line: 4, column: 1 });
            }
            _ => panic!("expected a type extension"),
        }
    }

    #[test]
    fn invalid_definitions() {
        let ctx = ASTContext::new();
        assert!(Document::parse(&ctx, "extend type Foo").is_err());
        let described_extension = "\"desc\" extend type Foo { a: Int }";
        assert!(Document::parse(&ctx, described_extension).is_err());
        assert!(Document::parse(&ctx, "directive @foo on NOWHERE").is_err());
        assert!(Document::parse(&ctx, "schema {}").is_err());
        assert!(Document::parse(&ctx, "query { field }").is_err());
        assert!(Document::parse(&ctx, "type Foo { bar(): String }").is_err());
    }

    #[test]
    fn document_keeps_source() {
        let ctx = ASTContext::new();
        let source = "# comment\ntype Foo { bar: String }";
        let document = Document::parse(&ctx, source).unwrap();
        assert_eq!(document.source, source);
        assert_eq!(document.loc.location(), Location { line: 1, column: 1 });
        match &document.definitions[0] {
            Definition::Type(def) => assert_eq!(def.loc().line, 2),
            _ => panic!("expected a type definition"),
        }
    }
}
