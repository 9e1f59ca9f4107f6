//! Inspection of a captured accessor expression.
//!
//! The `field!` macro stringifies the extraction expression at the call
//! site. Here that text is parsed back with `syn` and walked to find the
//! one field the expression reads, or the callable it forwards to.

use syn::ext::IdentExt;
use syn::{Expr, Ident, Member, Pat, Stmt, UnOp};

/// What an accessor expression turned out to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Located {
    /// Reads the named field directly.
    Field(String),
    /// Forwards to a method or function with this name.
    Callable(String),
}

/// Parses `source` and locates the field read (or forwarding call) it performs.
///
/// Returns `Ok(None)` for expressions that compute a value instead.
pub(crate) fn locate(source: &str) -> syn::Result<Option<Located>> {
    let expr: Expr = syn::parse_str(source)?;
    let located = match &expr {
        Expr::Closure(closure) => {
            let mut scope = Scope::default();
            if let Some(input) = closure.inputs.first() {
                scope.bind(input, None);
            }
            scope.visit(&closure.body)
        }
        Expr::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| Located::Callable(segment.ident.unraw().to_string())),
        other => Scope::default().visit(other),
    };
    Ok(located)
}

/// Names bound by the closure's parameter pattern.
#[derive(Default)]
struct Scope {
    /// The parameter itself, when bound to a single identifier.
    param: Option<Ident>,
    /// Identifiers destructured out of the parameter, with the field each came from.
    bindings: Vec<(Ident, String)>,
}

impl Scope {
    fn bind(&mut self, pat: &Pat, member: Option<String>) {
        match pat {
            Pat::Ident(p) => match member {
                Some(member) => self.bindings.push((p.ident.clone(), member)),
                None => self.param = Some(p.ident.clone()),
            },
            Pat::Type(p) => self.bind(&p.pat, member),
            Pat::Reference(p) => self.bind(&p.pat, member),
            Pat::Paren(p) => self.bind(&p.pat, member),
            Pat::Struct(p) => {
                for field in &p.fields {
                    self.bind(&field.pat, Some(member_name(&field.member)));
                }
            }
            Pat::TupleStruct(p) => {
                for (index, elem) in p.elems.iter().enumerate() {
                    self.bind(elem, Some(index.to_string()));
                }
            }
            _ => {}
        }
    }

    fn visit(&self, expr: &Expr) -> Option<Located> {
        match expr {
            Expr::Field(field) => Some(Located::Field(member_name(&field.member))),
            Expr::Reference(r) => self.visit(&r.expr),
            Expr::Unary(u) if matches!(u.op, UnOp::Deref(_)) => self.visit(&u.expr),
            Expr::Paren(p) => self.visit(&p.expr),
            Expr::Group(g) => self.visit(&g.expr),
            Expr::Cast(c) => self.visit(&c.expr),
            Expr::Try(t) => self.visit(&t.expr),
            // `&p.tags[..]`, `&p.items[0]`
            Expr::Index(i) => self.visit(&i.expr),
            Expr::Block(b) => match b.block.stmts.last() {
                Some(Stmt::Expr(tail, None)) => self.visit(tail),
                _ => None,
            },
            Expr::MethodCall(call) if self.is_param(&call.receiver) => {
                Some(Located::Callable(call.method.unraw().to_string()))
            }
            // `p.name.clone()`, `p.tags.as_slice()`: the receiver holds the read
            Expr::MethodCall(call) => self.visit(&call.receiver),
            Expr::Call(call) => {
                let Expr::Path(func) = call.func.as_ref() else {
                    return None;
                };
                if call.args.iter().any(|arg| self.is_param(arg)) {
                    func.path
                        .segments
                        .last()
                        .map(|segment| Located::Callable(segment.ident.unraw().to_string()))
                } else {
                    call.args.iter().find_map(|arg| self.visit(arg))
                }
            }
            Expr::Path(path) => path
                .path
                .get_ident()
                .and_then(|ident| self.binding(ident))
                .map(Located::Field),
            _ => None,
        }
    }

    fn is_param(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Reference(r) => self.is_param(&r.expr),
            Expr::Paren(p) => self.is_param(&p.expr),
            Expr::Group(g) => self.is_param(&g.expr),
            Expr::Unary(u) if matches!(u.op, UnOp::Deref(_)) => self.is_param(&u.expr),
            Expr::Path(path) => path
                .path
                .get_ident()
                .is_some_and(|ident| ident == "self" || self.param.as_ref() == Some(ident)),
            _ => false,
        }
    }

    fn binding(&self, ident: &Ident) -> Option<String> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == ident)
            .map(|(_, member)| member.clone())
    }
}

fn member_name(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}
