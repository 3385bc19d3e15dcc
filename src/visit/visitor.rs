use super::{compose::ComposedVisitor, path::Path, PathSegment};
use crate::ast::*;

pub(crate) mod private {
    use super::{VisitFlow, VisitInfo, Visitor};

    pub trait VisitNodeWithInfo<'a>: Sized {
        fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
            &'a self,
            ctx: &'b mut C,
            visitor: &'b mut V,
            info: &mut VisitInfo<'a>,
        ) -> VisitFlow;
    }
}

use private::VisitNodeWithInfo;

/// A visitor signal that is returned from [Visitor] callbacks to alter the flow of traversal.
///
/// The default callbacks all return `VisitFlow::Next`, which continues the depth-first traversal. The
/// other signals may be used to skip over a node in an `enter_` callback or to abort traversal
/// entirely without visiting any more AST Nodes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,
    /// Abort the traversal without performing any subsequent visits.
    Break,
    /// Skip over the current node without performing any deeper traversal.
    /// (Only applies to `enter_` callbacks)
    Skip,
}

/// Information on the node that's currently being visited, which is passed to every callback.
#[derive(Debug, Default)]
pub struct VisitInfo<'a> {
    /// The path from the document root to the current node.
    pub path: Path,
    /// All nodes from the document root down to the current node's parent.
    pub ancestors: Vec<ASTNode<'a>>,
}

impl<'a> VisitInfo<'a> {
    /// Returns the key of the current node inside its parent, i.e. the last segment of its path.
    #[inline]
    pub fn key(&self) -> Option<&PathSegment> {
        self.path.last()
    }

    /// Returns the nearest ancestor node of the current node.
    #[inline]
    pub fn parent(&self) -> Option<ASTNode<'a>> {
        self.ancestors.last().copied()
    }
}

/// Trait for a visitor that carries methods that are called as callback while AST nodes
/// implementing the visitor pattern are traversed.
///
/// While the AST is traversed in depth-first order, callbacks that are prefixed with `enter_` are
/// called from top-to-bottom while the traversal is recursing, while callbacks that are prefixed
/// with `leave_` are called from bottom-to-top while the traversal is returning.
///
/// All callbacks have a default no-op implementation that returns `VisitFlow::Next`. The
/// [`VisitFlow`] signals are returned from callbacks to alter the traversal and either continue it
/// (`Next`), skip over a node during an `enter_` callback with (`Skip`), or abort traversal
/// entirely (`Break`).
///
/// The visitor may also define a custom context structure that can be passed to the `visit`
/// method. By default the context is an empty unit `()`.
///
/// Type extensions are visited using the `enter_type_extension` and `leave_type_extension`
/// callbacks, while their children, like fields or enum values, are visited using the same
/// callbacks as the children of type definitions.
///
/// The trait is object safe, so that visitors may be boxed and combined at runtime using a
/// [`ParallelVisitor`](super::ParallelVisitor).
///
/// This pattern is applicable to any AST node that implements the [`VisitNode`] trait.
pub trait Visitor<'a, Context = ()> {
    /// Combines two visitors into one that will run both the original and passed visitor concurrently.
    ///
    /// Both visitors must accept the same `Context` type.
    #[inline]
    fn compose<V: Visitor<'a, Context>>(self, other: V) -> ComposedVisitor<'a, Context, Self, V>
    where
        Self: Sized,
    {
        ComposedVisitor::new(self, other)
    }

    /// Called when a [Document] node is visited and before its child nodes are visited.
    fn enter_document(
        &mut self,
        _ctx: &mut Context,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [Document] node and its child nodes were visited.
    fn leave_document(
        &mut self,
        _ctx: &mut Context,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaDefinition`] node is visited and before its child nodes are visited.
    fn enter_schema_definition(
        &mut self,
        _ctx: &mut Context,
        _schema: &'a SchemaDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaDefinition`] node and its child nodes were visited.
    fn leave_schema_definition(
        &mut self,
        _ctx: &mut Context,
        _schema: &'a SchemaDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaExtension`] node is visited and before its child nodes are visited.
    fn enter_schema_extension(
        &mut self,
        _ctx: &mut Context,
        _schema: &'a SchemaExtension<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaExtension`] node and its child nodes were visited.
    fn leave_schema_extension(
        &mut self,
        _ctx: &mut Context,
        _schema: &'a SchemaExtension<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`OperationTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_operation_type_definition(
        &mut self,
        _ctx: &mut Context,
        _operation_type: &'a OperationTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`OperationTypeDefinition`] node and its child nodes were visited.
    fn leave_operation_type_definition(
        &mut self,
        _ctx: &mut Context,
        _operation_type: &'a OperationTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`ScalarTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_scalar_type_definition(
        &mut self,
        _ctx: &mut Context,
        _scalar: &'a ScalarTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`ScalarTypeDefinition`] node and its child nodes were visited.
    fn leave_scalar_type_definition(
        &mut self,
        _ctx: &mut Context,
        _scalar: &'a ScalarTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`ObjectTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_object_type_definition(
        &mut self,
        _ctx: &mut Context,
        _object: &'a ObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`ObjectTypeDefinition`] node and its child nodes were visited.
    fn leave_object_type_definition(
        &mut self,
        _ctx: &mut Context,
        _object: &'a ObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`InterfaceTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_interface_type_definition(
        &mut self,
        _ctx: &mut Context,
        _interface: &'a InterfaceTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`InterfaceTypeDefinition`] node and its child nodes were visited.
    fn leave_interface_type_definition(
        &mut self,
        _ctx: &mut Context,
        _interface: &'a InterfaceTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`UnionTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_union_type_definition(
        &mut self,
        _ctx: &mut Context,
        _union: &'a UnionTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`UnionTypeDefinition`] node and its child nodes were visited.
    fn leave_union_type_definition(
        &mut self,
        _ctx: &mut Context,
        _union: &'a UnionTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`EnumTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_enum_type_definition(
        &mut self,
        _ctx: &mut Context,
        _enum_type: &'a EnumTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`EnumTypeDefinition`] node and its child nodes were visited.
    fn leave_enum_type_definition(
        &mut self,
        _ctx: &mut Context,
        _enum_type: &'a EnumTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`InputObjectTypeDefinition`] node is visited and before its child nodes are visited.
    fn enter_input_object_type_definition(
        &mut self,
        _ctx: &mut Context,
        _input_object: &'a InputObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`InputObjectTypeDefinition`] node and its child nodes were visited.
    fn leave_input_object_type_definition(
        &mut self,
        _ctx: &mut Context,
        _input_object: &'a InputObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`TypeExtension`] node is visited and before its child nodes are visited.
    fn enter_type_extension(
        &mut self,
        _ctx: &mut Context,
        _extension: &'a TypeExtension<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`TypeExtension`] node and its child nodes were visited.
    fn leave_type_extension(
        &mut self,
        _ctx: &mut Context,
        _extension: &'a TypeExtension<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`FieldDefinition`] node is visited and before its child nodes are visited.
    fn enter_field_definition(
        &mut self,
        _ctx: &mut Context,
        _field: &'a FieldDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`FieldDefinition`] node and its child nodes were visited.
    fn leave_field_definition(
        &mut self,
        _ctx: &mut Context,
        _field: &'a FieldDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`InputValueDefinition`] node is visited and before its child nodes are visited.
    fn enter_input_value_definition(
        &mut self,
        _ctx: &mut Context,
        _input_value: &'a InputValueDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`InputValueDefinition`] node and its child nodes were visited.
    fn leave_input_value_definition(
        &mut self,
        _ctx: &mut Context,
        _input_value: &'a InputValueDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [`EnumValueDefinition`] node is visited and before its child nodes are visited.
    fn enter_enum_value_definition(
        &mut self,
        _ctx: &mut Context,
        _enum_value: &'a EnumValueDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [`EnumValueDefinition`] node and its child nodes were visited.
    fn leave_enum_value_definition(
        &mut self,
        _ctx: &mut Context,
        _enum_value: &'a EnumValueDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`DirectiveDefinition`] node is visited and before its child nodes are visited.
    fn enter_directive_definition(
        &mut self,
        _ctx: &mut Context,
        _directive_def: &'a DirectiveDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`DirectiveDefinition`] node and its child nodes were visited.
    fn leave_directive_definition(
        &mut self,
        _ctx: &mut Context,
        _directive_def: &'a DirectiveDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [Directive] node is visited and before its child nodes are visited.
    fn enter_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [Directive] node and its child nodes were visited.
    fn leave_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an [Argument] node is visited and before its child nodes are visited.
    fn enter_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an [Argument] node and its child nodes were visited.
    fn leave_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`NamedType`] node is visited and before its child nodes are visited.
    fn enter_named_type(
        &mut self,
        _ctx: &mut Context,
        _named_type: &'a NamedType<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`NamedType`] node and its child nodes were visited.
    fn leave_named_type(
        &mut self,
        _ctx: &mut Context,
        _named_type: &'a NamedType<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
}

/// Trait for visiting AST Nodes of a GraphQL schema document in depth-first order using a
/// custom visitor.
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method.
pub trait VisitNode<'a>: Sized + VisitNodeWithInfo<'a> {
    /// Visit a GraphQL AST node tree recursively in depth-first order with a given visitor.
    ///
    /// The visitor must implement the [Visitor] trait which may also define a custom context structure
    /// that can be passed to the `visit` method. By default the context is an empty unit `()`.
    fn visit<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
    ) -> VisitFlow {
        let mut info = VisitInfo::default();
        self.visit_with_info(ctx, visitor, &mut info)
    }
}

impl<'a, T: VisitNodeWithInfo<'a>> VisitNode<'a> for T {}

#[inline]
fn visit_child<'a, 'b, C, V, T>(
    node: &'a T,
    segment: PathSegment,
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo<'a>,
) -> VisitFlow
where
    V: Visitor<'a, C> + ?Sized,
    T: VisitNodeWithInfo<'a>,
{
    info.path.push(segment);
    let flow = node.visit_with_info(ctx, visitor, info);
    info.path.pop();
    flow
}

/// Visits all nodes of a list and returns `VisitFlow::Break` if the traversal was aborted.
#[inline]
fn visit_list<'a, 'b, C, V, T>(
    list: &'a [T],
    segment: PathSegment,
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo<'a>,
) -> VisitFlow
where
    V: Visitor<'a, C> + ?Sized,
    T: VisitNodeWithInfo<'a>,
{
    if list.is_empty() {
        return VisitFlow::Next;
    }
    info.path.push(segment);
    for (index, node) in list.iter().enumerate() {
        info.path.push(PathSegment::Index(index));
        if let VisitFlow::Break = node.visit_with_info(ctx, visitor, info) {
            return VisitFlow::Break;
        }
        info.path.pop();
    }
    info.path.pop();
    VisitFlow::Next
}

/// Runs `children` between pushing and popping `node` as the ancestor of the visited children.
#[inline]
fn with_ancestor<'a, F>(node: ASTNode<'a>, info: &mut VisitInfo<'a>, children: F) -> VisitFlow
where
    F: FnOnce(&mut VisitInfo<'a>) -> VisitFlow,
{
    info.ancestors.push(node);
    let flow = children(info);
    info.ancestors.pop();
    flow
}

impl<'a> VisitNodeWithInfo<'a> for NamedType<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_named_type(ctx, self, info);
        if let VisitFlow::Next = flow {
            visitor.leave_named_type(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for Argument<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_argument(ctx, self, info);
        if let VisitFlow::Next = flow {
            visitor.leave_argument(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for Directive<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_directive(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::Directive(self), info, |info| {
                visit_list(
                    &self.arguments.children,
                    PathSegment::Arguments,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_directive(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for InputValueDefinition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_input_value_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::InputValueDefinition(self), info, |info| {
                let of_type = self.of_type.of_type();
                if visit_child(of_type, PathSegment::Type, ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_input_value_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for FieldDefinition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_field_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::FieldDefinition(self), info, |info| {
                if visit_list(&self.arguments, PathSegment::Arguments, ctx, visitor, info)
                    == VisitFlow::Break
                {
                    return VisitFlow::Break;
                }
                let of_type = self.of_type.of_type();
                if visit_child(of_type, PathSegment::Type, ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_field_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for EnumValueDefinition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_enum_value_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::EnumValueDefinition(self), info, |info| {
                visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_enum_value_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for OperationTypeDefinition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_operation_type_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::OperationTypeDefinition(self), info, |info| {
                visit_child(&self.named_type, PathSegment::Type, ctx, visitor, info)
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_operation_type_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

/// Visits the children of a type definition or extension, whose ancestor has already been pushed.
fn visit_type_children<'a, 'b, C, V: Visitor<'a, C> + ?Sized>(
    definition: &'a TypeDefinition<'a>,
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo<'a>,
) -> VisitFlow {
    let interfaces: &'a [NamedType<'a>] = match definition {
        TypeDefinition::Object(def) => &def.interfaces[..],
        TypeDefinition::Interface(def) => &def.interfaces[..],
        _ => &[],
    };
    if visit_list(interfaces, PathSegment::Interfaces, ctx, visitor, info) == VisitFlow::Break {
        return VisitFlow::Break;
    }
    if visit_list(
        &definition.directives().children,
        PathSegment::Directives,
        ctx,
        visitor,
        info,
    ) == VisitFlow::Break
    {
        return VisitFlow::Break;
    }
    match definition {
        TypeDefinition::Scalar(_) => VisitFlow::Next,
        TypeDefinition::Object(def) => {
            visit_list(&def.fields, PathSegment::Fields, ctx, visitor, info)
        }
        TypeDefinition::Interface(def) => {
            visit_list(&def.fields, PathSegment::Fields, ctx, visitor, info)
        }
        TypeDefinition::Union(def) => {
            visit_list(&def.types, PathSegment::Types, ctx, visitor, info)
        }
        TypeDefinition::Enum(def) => {
            visit_list(&def.values, PathSegment::Values, ctx, visitor, info)
        }
        TypeDefinition::InputObject(def) => {
            visit_list(&def.fields, PathSegment::Fields, ctx, visitor, info)
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for TypeDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = match self {
            TypeDefinition::Scalar(def) => visitor.enter_scalar_type_definition(ctx, def, info),
            TypeDefinition::Object(def) => visitor.enter_object_type_definition(ctx, def, info),
            TypeDefinition::Interface(def) => {
                visitor.enter_interface_type_definition(ctx, def, info)
            }
            TypeDefinition::Union(def) => visitor.enter_union_type_definition(ctx, def, info),
            TypeDefinition::Enum(def) => visitor.enter_enum_type_definition(ctx, def, info),
            TypeDefinition::InputObject(def) => {
                visitor.enter_input_object_type_definition(ctx, def, info)
            }
        };
        if flow != VisitFlow::Next {
            return flow;
        }
        let flow = with_ancestor(ASTNode::TypeDefinition(self), info, |info| {
            visit_type_children(self, ctx, visitor, info)
        });
        if flow == VisitFlow::Break {
            return VisitFlow::Break;
        }
        match self {
            TypeDefinition::Scalar(def) => visitor.leave_scalar_type_definition(ctx, def, info),
            TypeDefinition::Object(def) => visitor.leave_object_type_definition(ctx, def, info),
            TypeDefinition::Interface(def) => {
                visitor.leave_interface_type_definition(ctx, def, info)
            }
            TypeDefinition::Union(def) => visitor.leave_union_type_definition(ctx, def, info),
            TypeDefinition::Enum(def) => visitor.leave_enum_type_definition(ctx, def, info),
            TypeDefinition::InputObject(def) => {
                visitor.leave_input_object_type_definition(ctx, def, info)
            }
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for TypeExtension<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_type_extension(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::TypeExtension(self), info, |info| {
                visit_type_children(&self.definition, ctx, visitor, info)
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_type_extension(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for SchemaDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_schema_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::SchemaDefinition(self), info, |info| {
                if visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                ) == VisitFlow::Break
                {
                    return VisitFlow::Break;
                }
                visit_list(
                    &self.operation_types,
                    PathSegment::OperationTypes,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_schema_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for SchemaExtension<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_schema_extension(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::SchemaExtension(self), info, |info| {
                if visit_list(
                    &self.directives.children,
                    PathSegment::Directives,
                    ctx,
                    visitor,
                    info,
                ) == VisitFlow::Break
                {
                    return VisitFlow::Break;
                }
                visit_list(
                    &self.operation_types,
                    PathSegment::OperationTypes,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_schema_extension(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for DirectiveDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_directive_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::DirectiveDefinition(self), info, |info| {
                visit_list(&self.arguments, PathSegment::Arguments, ctx, visitor, info)
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_directive_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for Definition<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        match self {
            Definition::Schema(def) => def.visit_with_info(ctx, visitor, info),
            Definition::SchemaExtension(def) => def.visit_with_info(ctx, visitor, info),
            Definition::Type(def) => def.visit_with_info(ctx, visitor, info),
            Definition::TypeExtension(def) => def.visit_with_info(ctx, visitor, info),
            Definition::Directive(def) => def.visit_with_info(ctx, visitor, info),
        }
    }
}

impl<'a> VisitNodeWithInfo<'a> for Document<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C> + ?Sized>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_document(ctx, self, info);
        if let VisitFlow::Next = flow {
            let flow = with_ancestor(ASTNode::Document(self), info, |info| {
                visit_list(
                    &self.definitions,
                    PathSegment::Definitions,
                    ctx,
                    visitor,
                    info,
                )
            });
            if flow == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_document(ctx, self, info)
        } else {
            flow
        }
    }
}
