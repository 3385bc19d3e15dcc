use super::visitor::*;
use crate::ast::*;

/// A visitor that runs a dynamic list of boxed visitors in a single traversal.
///
/// This works like a [`ComposedVisitor`](super::ComposedVisitor) but for any number of visitors
/// that are only known at runtime, for instance a list of configured lint rules. Each visitor's
/// [`VisitFlow`] signals only affect that visitor: a visitor that returns `Skip` won't be called
/// for the skipped node's children and a visitor that returns `Break` won't be called again. The
/// traversal itself is only skipped or aborted when all visitors agree.
pub struct ParallelVisitor<'a, C> {
    visitors: Vec<Box<dyn Visitor<'a, C> + 'a>>,
    skips: Vec<usize>,
    depth: usize,
}

const ACTIVE: usize = usize::MAX;
const BROKEN: usize = 0;

impl<'a, C> ParallelVisitor<'a, C> {
    pub fn new(visitors: Vec<Box<dyn Visitor<'a, C> + 'a>>) -> Self {
        ParallelVisitor {
            skips: vec![ACTIVE; visitors.len()],
            visitors,
            depth: 1,
        }
    }

    /// Returns the number of visitors that haven't aborted yet.
    pub fn active(&self) -> usize {
        self.skips.iter().filter(|skip| **skip != BROKEN).count()
    }

    pub fn into_inner(self) -> Vec<Box<dyn Visitor<'a, C> + 'a>> {
        self.visitors
    }

    fn all_broken(&self) -> bool {
        self.skips.iter().all(|skip| *skip == BROKEN)
    }

    #[inline]
    fn enter_each<F>(&mut self, ctx: &mut C, mut callback: F) -> VisitFlow
    where
        F: FnMut(&mut (dyn Visitor<'a, C> + 'a), &mut C) -> VisitFlow,
    {
        let mut any_next = false;
        for (visitor, skip) in self.visitors.iter_mut().zip(self.skips.iter_mut()) {
            if *skip != ACTIVE {
                continue;
            }
            match callback(visitor.as_mut(), ctx) {
                VisitFlow::Next => any_next = true,
                VisitFlow::Skip => *skip = self.depth,
                VisitFlow::Break => *skip = BROKEN,
            }
        }

        if any_next {
            self.depth += 1;
            VisitFlow::Next
        } else {
            // Nothing below this node will be visited, so skipping visitors become active again
            for skip in self.skips.iter_mut() {
                if *skip == self.depth {
                    *skip = ACTIVE;
                }
            }
            if self.all_broken() {
                VisitFlow::Break
            } else {
                VisitFlow::Skip
            }
        }
    }

    #[inline]
    fn leave_each<F>(&mut self, ctx: &mut C, mut callback: F) -> VisitFlow
    where
        F: FnMut(&mut (dyn Visitor<'a, C> + 'a), &mut C) -> VisitFlow,
    {
        self.depth -= 1;
        for (visitor, skip) in self.visitors.iter_mut().zip(self.skips.iter_mut()) {
            if *skip == ACTIVE {
                if callback(visitor.as_mut(), ctx) == VisitFlow::Break {
                    *skip = BROKEN;
                }
            } else if *skip == self.depth {
                *skip = ACTIVE;
            }
        }

        if self.all_broken() {
            VisitFlow::Break
        } else {
            VisitFlow::Next
        }
    }
}

macro_rules! parallel_callbacks {
    ($($enter:ident, $leave:ident: $node:ident;)*) => {
        impl<'a, C> Visitor<'a, C> for ParallelVisitor<'a, C> {
            $(
                fn $enter(
                    &mut self,
                    ctx: &mut C,
                    node: &'a $node<'a>,
                    info: &VisitInfo<'a>,
                ) -> VisitFlow {
                    self.enter_each(ctx, |visitor, ctx| visitor.$enter(ctx, node, info))
                }

                fn $leave(
                    &mut self,
                    ctx: &mut C,
                    node: &'a $node<'a>,
                    info: &VisitInfo<'a>,
                ) -> VisitFlow {
                    self.leave_each(ctx, |visitor, ctx| visitor.$leave(ctx, node, info))
                }
            )*
        }
    };
}

for_each_callback!(parallel_callbacks);

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    struct Recorder<'r> {
        name: &'static str,
        skip_type: Option<&'static str>,
        break_at: Option<&'static str>,
        log: &'r std::cell::RefCell<Vec<String>>,
    }

    impl<'a, 'r> Visitor<'a> for Recorder<'r> {
        fn enter_object_type_definition(
            &mut self,
            _: &mut (),
            object: &'a ObjectTypeDefinition<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.log
                .borrow_mut()
                .push(format!("{} enter {}", self.name, object.name));
            if self.skip_type == Some(object.name) {
                VisitFlow::Skip
            } else {
                VisitFlow::Next
            }
        }

        fn leave_object_type_definition(
            &mut self,
            _: &mut (),
            object: &'a ObjectTypeDefinition<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.log
                .borrow_mut()
                .push(format!("{} leave {}", self.name, object.name));
            VisitFlow::Next
        }

        fn enter_field_definition(
            &mut self,
            _: &mut (),
            field: &'a FieldDefinition<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.log
                .borrow_mut()
                .push(format!("{} field {}", self.name, field.name));
            if self.break_at == Some(field.name) {
                VisitFlow::Break
            } else {
                VisitFlow::Next
            }
        }
    }

    const SOURCE: &str = indoc! {"
        type Foo { a: Int }
        type Bar { b: Int c: Int }
    "};

    #[test]
    fn runs_visitors_in_order() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, SOURCE).unwrap();
        let log = std::cell::RefCell::new(Vec::new());
        let first = Recorder {
            name: "first",
            skip_type: Some("Foo"),
            break_at: None,
            log: &log,
        };
        let second = Recorder {
            name: "second",
            skip_type: None,
            break_at: Some("b"),
            log: &log,
        };

        let visitors: Vec<Box<dyn Visitor<'_> + '_>> = vec![Box::new(first), Box::new(second)];
        let mut visitor = ParallelVisitor::new(visitors);
        assert_eq!(document.visit(&mut (), &mut visitor), VisitFlow::Next);
        assert_eq!(visitor.active(), 1);
        assert_eq!(
            *log.borrow(),
            vec![
                "first enter Foo",
                "second enter Foo",
                "second field a",
                "second leave Foo",
                "first enter Bar",
                "second enter Bar",
                "first field b",
                "second field b",
                "first field c",
                "first leave Bar",
            ]
        );
    }

    #[test]
    fn skips_and_breaks_when_all_agree() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, SOURCE).unwrap();
        let log = std::cell::RefCell::new(Vec::new());
        let visitors: Vec<Box<dyn Visitor<'_> + '_>> = vec![
            Box::new(Recorder {
                name: "first",
                skip_type: Some("Foo"),
                break_at: Some("b"),
                log: &log,
            }),
            Box::new(Recorder {
                name: "second",
                skip_type: Some("Foo"),
                break_at: Some("b"),
                log: &log,
            }),
        ];

        let mut visitor = ParallelVisitor::new(visitors);
        assert_eq!(document.visit(&mut (), &mut visitor), VisitFlow::Break);
        assert_eq!(visitor.active(), 0);
        assert_eq!(
            *log.borrow(),
            vec![
                "first enter Foo",
                "second enter Foo",
                "first enter Bar",
                "second enter Bar",
                "first field b",
                "second field b",
            ]
        );
    }
}
