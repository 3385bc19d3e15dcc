use super::visitor::*;
use crate::ast::*;

/// This structure implements the `Visitor` trait and runs two child Visitors in parallel,
/// executing and calling callbacks on them both.
///
/// During traversal the Composed Visitor will keep track of the visitor's [`VisitFlow`] signals and
/// will avoid calling callbacks on them appropriately, while letting the other visitor continue as
/// usual. In short, this visitor aims to minimize the work it does while preserving expected
/// behavior.
///
/// Visitors may be composed indefinitely since a Composed Visitor can be passed into another
/// Composed Visitor, as long as all visitors accept the same `Context` type. This is how the
/// structural SDL rules are combined into a single visitor.
pub struct ComposedVisitor<'a, Context, A: Visitor<'a, Context>, B: Visitor<'a, Context>> {
    _marker: std::marker::PhantomData<&'a Context>,
    depth: usize,
    skip_a: usize,
    skip_b: usize,
    pub a: A,
    pub b: B,
}

type Callback<'a, V, C, Node> = fn(&mut V, &mut C, &'a Node, &VisitInfo<'a>) -> VisitFlow;

impl<'a, C, A: Visitor<'a, C>, B: Visitor<'a, C>> ComposedVisitor<'a, C, A, B> {
    /// Composes two input visitors into one Composed Visitor.
    #[inline]
    pub fn new(a: A, b: B) -> ComposedVisitor<'a, C, A, B> {
        ComposedVisitor {
            _marker: std::marker::PhantomData,
            depth: 1,
            skip_a: usize::MAX,
            skip_b: usize::MAX,
            a,
            b,
        }
    }

    #[inline(always)]
    fn compose_flow_enter<Node: 'a>(
        &mut self,
        fn_a: Callback<'a, A, C, Node>,
        fn_b: Callback<'a, B, C, Node>,
        node: &'a Node,
        info: &VisitInfo<'a>,
        ctx: &mut C,
    ) -> VisitFlow {
        let mut all_skip = true;
        let mut all_break = true;

        if self.skip_a == usize::MAX || self.skip_a == self.depth {
            self.skip_a = usize::MAX;
            match fn_a(&mut self.a, ctx, node, info) {
                VisitFlow::Break => {
                    self.skip_a = 0;
                    all_skip = false;
                }
                VisitFlow::Skip => {
                    self.skip_a = self.depth;
                    all_break = false;
                }
                VisitFlow::Next => {
                    all_break = false;
                    all_skip = false;
                }
            }
        } else if self.skip_a == 0 {
            all_skip = false;
        } else {
            all_break = false;
        }

        if self.skip_b == usize::MAX || self.skip_b == self.depth {
            self.skip_b = usize::MAX;
            match fn_b(&mut self.b, ctx, node, info) {
                VisitFlow::Break => {
                    self.skip_b = 0;
                    all_skip = false;
                }
                VisitFlow::Skip => {
                    self.skip_b = self.depth;
                    all_break = false;
                }
                VisitFlow::Next => {
                    all_break = false;
                    all_skip = false;
                }
            }
        } else if self.skip_b == 0 {
            all_skip = false;
        } else {
            all_break = false;
        }

        if all_break {
            VisitFlow::Break
        } else if all_skip {
            if self.skip_a == self.depth {
                self.skip_a = usize::MAX;
            }
            if self.skip_b == self.depth {
                self.skip_b = usize::MAX;
            }
            VisitFlow::Skip
        } else {
            self.depth += 1;
            VisitFlow::Next
        }
    }

    #[inline(always)]
    fn compose_flow_leave<Node: 'a>(
        &mut self,
        fn_a: Callback<'a, A, C, Node>,
        fn_b: Callback<'a, B, C, Node>,
        node: &'a Node,
        info: &VisitInfo<'a>,
        ctx: &mut C,
    ) -> VisitFlow {
        self.depth -= 1;
        let mut all_break = true;

        if self.skip_a == usize::MAX {
            if fn_a(&mut self.a, ctx, node, info) == VisitFlow::Break {
                self.skip_a = 0;
            } else {
                all_break = false;
            }
        } else if self.skip_a == self.depth {
            self.skip_a = usize::MAX;
            all_break = false;
        } else if self.skip_a != 0 {
            all_break = false;
        }

        if self.skip_b == usize::MAX {
            if fn_b(&mut self.b, ctx, node, info) == VisitFlow::Break {
                self.skip_b = 0;
            } else {
                all_break = false;
            }
        } else if self.skip_b == self.depth {
            self.skip_b = usize::MAX;
            all_break = false;
        } else if self.skip_b != 0 {
            all_break = false;
        }

        if all_break {
            VisitFlow::Break
        } else {
            VisitFlow::Next
        }
    }
}

macro_rules! compose_callbacks {
    ($($enter:ident, $leave:ident: $node:ident;)*) => {
        impl<'a, C, A: Visitor<'a, C>, B: Visitor<'a, C>> Visitor<'a, C>
            for ComposedVisitor<'a, C, A, B>
        {
            $(
                #[inline]
                fn $enter(
                    &mut self,
                    ctx: &mut C,
                    node: &'a $node<'a>,
                    info: &VisitInfo<'a>,
                ) -> VisitFlow {
                    self.compose_flow_enter(A::$enter, B::$enter, node, info, ctx)
                }

                #[inline]
                fn $leave(
                    &mut self,
                    ctx: &mut C,
                    node: &'a $node<'a>,
                    info: &VisitInfo<'a>,
                ) -> VisitFlow {
                    self.compose_flow_leave(A::$leave, B::$leave, node, info, ctx)
                }
            )*
        }
    };
}

for_each_callback!(compose_callbacks);
