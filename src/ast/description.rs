use super::ast_node::ASTNode;
use super::lexer::block_string_value;
use std::borrow::Cow;

/// Returns the description of a node.
///
/// A description string that's written for the node always takes precedence. Otherwise, when
/// `comment_descriptions` is enabled, the block of `#` comments directly above the node is used
/// as its description, which is how descriptions were written in older schemas:
///
/// ```graphql
/// # The root query type
/// type Query {
///   # Returns the current user
///   me: User
/// }
/// ```
///
/// Only comments that are on their own lines and that directly precede the line the node starts
/// on count. The comment block is dedented in the same way that block strings are.
pub fn get_description<'a>(
    node: ASTNode<'a>,
    source: &'a str,
    comment_descriptions: bool,
) -> Option<Cow<'a, str>> {
    if let Some(description) = node.description() {
        Some(Cow::Borrowed(description.value))
    } else if comment_descriptions {
        leading_comment_block(source, node.loc().start).map(Cow::Owned)
    } else {
        None
    }
}

/// Returns whether a node has a non-empty description. Descriptions consisting of empty strings
/// or blank comments are treated as missing.
pub fn has_description(node: ASTNode, source: &str, comment_descriptions: bool) -> bool {
    get_description(node, source, comment_descriptions)
        .map_or(false, |description| !description.is_empty())
}

#[inline]
fn is_ignored(c: char) -> bool {
    matches!(c, ' ' | '\t' | ',' | '\u{FEFF}')
}

fn leading_comment_block(source: &str, start: usize) -> Option<String> {
    let line_start = source[..start].rfind('\n').map_or(0, |index| index + 1);
    // Another token precedes the node on its line
    let prefix = &source[line_start..start];
    if !prefix.trim_matches(is_ignored).is_empty() {
        return None;
    }

    let mut comments = Vec::new();
    let mut lines = source[..line_start].lines().rev();
    // `lines` doesn't yield an empty line for the trailing newline, so the first line is the one
    // directly above the node
    for line in lines.by_ref() {
        match line.trim_start_matches(is_ignored).strip_prefix('#') {
            Some(comment) => comments.push(comment.trim_end_matches('\r')),
            None => break,
        }
    }

    if comments.is_empty() {
        return None;
    }

    let mut raw = String::new();
    for comment in comments.iter().rev() {
        raw.push('\n');
        raw.push_str(comment);
    }
    Some(block_string_value(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use indoc::indoc;

    fn first_type<'a>(document: &'a Document<'a>) -> &'a TypeDefinition<'a> {
        document.type_definitions().next().unwrap()
    }

    #[test]
    fn explicit_descriptions() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "\"Foo type\" type Foo { bar: String }").unwrap();
        let node = ASTNode::TypeDefinition(first_type(document));
        assert_eq!(
            get_description(node, document.source, false).as_deref(),
            Some("Foo type")
        );
        assert!(has_description(node, document.source, true));
    }

    #[test]
    fn comment_descriptions() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                # unrelated

                #   The Foo type
                #     with an indented line
                type Foo {
                  # The bar field
                  bar: String # trailing
                  baz: Int
                }
            "},
        )
        .unwrap();

        let def = first_type(document);
        let node = ASTNode::TypeDefinition(def);
        assert_eq!(get_description(node, document.source, false), None);
        assert_eq!(
            get_description(node, document.source, true).as_deref(),
            Some("The Foo type\n  with an indented line")
        );

        let fields = match def {
            TypeDefinition::Object(object) => &object.fields,
            _ => panic!("expected an object type"),
        };
        let bar = ASTNode::FieldDefinition(&fields[0]);
        assert_eq!(
            get_description(bar, document.source, true).as_deref(),
            Some("The bar field")
        );
        let baz = ASTNode::FieldDefinition(&fields[1]);
        assert_eq!(get_description(baz, document.source, true), None);
    }

    #[test]
    fn comments_must_be_on_own_lines() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                type Foo { bar: String } # not a description
                type Baz { qux: String }
            "},
        )
        .unwrap();
        let baz = document.type_definitions().nth(1).unwrap();
        assert_eq!(
            get_description(ASTNode::TypeDefinition(baz), document.source, true),
            None
        );
    }

    #[test]
    fn blank_comments_are_missing_descriptions() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "#\ntype Foo { bar: String }").unwrap();
        let node = ASTNode::TypeDefinition(first_type(document));
        assert_eq!(
            get_description(node, document.source, true).as_deref(),
            Some("")
        );
        assert!(!has_description(node, document.source, true));
    }
}
