//! Static handler introspection.
//!
//! The original generation step relied on runtime reflection to read handler
//! doc comments and discover form-request parameters. Here that capability is
//! a pre-scan over the parsed source tree: every free function is indexed by
//! name with its doc comment and typed parameter list, and every `impl` block
//! exposing a `rules()` method with a literal rule table is registered as a
//! validation-rules provider.
//!
//! A provider's `rules()` body must be a literal table for the pre-scan to
//! pick it up:
//!
//! ```ignore
//! impl FormRequest for StoreUserRequest {
//!     fn rules(&self) -> Vec<(&'static str, &'static str)> {
//!         vec![
//!             ("email", "required|email"),
//!             ("age", "numeric|min:18"),
//!         ]
//!     }
//! }
//! ```
//!
//! Anything the pre-scan cannot understand degrades to "no metadata" rather
//! than failing: a handler that cannot be resolved simply yields no doc
//! comment and no bound rules.

use crate::parser::ParsedFile;
use log::debug;
use std::collections::HashMap;
use syn::visit::Visit;

/// An ordered field-to-rule-expression mapping from a rules provider.
pub type RuleFields = Vec<(String, String)>;

/// Capability for looking up handler metadata by handler reference.
///
/// The reference is the string from the route manifest, either a bare
/// function name or a `module::function` path; lookup is by the final path
/// segment.
pub trait HandlerIntrospector {
    /// The handler's doc comment with doc-attribute framing stripped, lines
    /// joined by `\n`. `None` when the handler cannot be resolved or carries
    /// no doc comment.
    fn doc_comment(&self, handler: &str) -> Option<String>;

    /// The resolved field/rule mapping of the validation-rules provider
    /// bound to the handler, if the handler declares a parameter of a
    /// registered provider type. `Some(vec![])` is a well-formed provider
    /// with zero fields and is distinct from `None`.
    fn bound_rules(&self, handler: &str) -> Option<RuleFields>;
}

/// Registry of validation-rules providers discovered by the pre-scan.
#[derive(Debug, Default)]
pub struct RulesRegistry {
    providers: HashMap<String, RuleFields>,
}

impl RulesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider type with its declared fields.
    pub fn register(&mut self, type_name: String, fields: RuleFields) {
        debug!(
            "Registered rules provider {} ({} fields)",
            type_name,
            fields.len()
        );
        self.providers.insert(type_name, fields);
    }

    /// The declared fields of a provider, if registered.
    pub fn rules(&self, type_name: &str) -> Option<&RuleFields> {
        self.providers.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Handler metadata recorded for one function.
#[derive(Debug)]
struct FunctionMeta {
    doc: Option<String>,
    param_types: Vec<String>,
}

/// [`HandlerIntrospector`] implementation built from parsed source files.
pub struct SourceIntrospector {
    functions: HashMap<String, FunctionMeta>,
    registry: RulesRegistry,
}

impl SourceIntrospector {
    /// Runs the pre-scan over all parsed files.
    pub fn scan(parsed_files: &[ParsedFile]) -> Self {
        let mut visitor = PreScanVisitor {
            functions: HashMap::new(),
            registry: RulesRegistry::new(),
        };

        for file in parsed_files {
            visitor.visit_file(&file.syntax_tree);
        }

        debug!(
            "Pre-scan indexed {} functions and {} rules providers",
            visitor.functions.len(),
            visitor.registry.len()
        );

        Self {
            functions: visitor.functions,
            registry: visitor.registry,
        }
    }

    /// The provider registry built by the pre-scan.
    pub fn registry(&self) -> &RulesRegistry {
        &self.registry
    }

    fn lookup(&self, handler: &str) -> Option<&FunctionMeta> {
        let name = handler.rsplit("::").next().unwrap_or(handler);
        self.functions.get(name)
    }
}

impl HandlerIntrospector for SourceIntrospector {
    fn doc_comment(&self, handler: &str) -> Option<String> {
        self.lookup(handler).and_then(|meta| meta.doc.clone())
    }

    fn bound_rules(&self, handler: &str) -> Option<RuleFields> {
        let meta = self.lookup(handler)?;
        meta.param_types
            .iter()
            .find_map(|ty| self.registry.rules(ty))
            .cloned()
    }
}

struct PreScanVisitor {
    functions: HashMap<String, FunctionMeta>,
    registry: RulesRegistry,
}

impl<'ast> Visit<'ast> for PreScanVisitor {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        let fn_name = node.sig.ident.to_string();

        let param_types = node
            .sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                syn::FnArg::Typed(pat_type) => type_name(&pat_type.ty),
                syn::FnArg::Receiver(_) => None,
            })
            .collect();

        // First definition wins when names collide across modules
        self.functions.entry(fn_name).or_insert(FunctionMeta {
            doc: doc_string(&node.attrs),
            param_types,
        });

        syn::visit::visit_item_fn(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        if let Some(fields) = rules_from_impl(node) {
            if let Some(name) = type_name(&node.self_ty) {
                self.registry.register(name, fields);
            }
        }

        syn::visit::visit_item_impl(self, node);
    }
}

/// Joins the `#[doc]` attribute lines of an item, stripping the single
/// leading space `///` comments carry.
fn doc_string(attrs: &[syn::Attribute]) -> Option<String> {
    let mut lines = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(nv) = &attr.meta {
            if let syn::Expr::Lit(expr_lit) = &nv.value {
                if let syn::Lit::Str(lit) = &expr_lit.lit {
                    let value = lit.value();
                    lines.push(value.strip_prefix(' ').unwrap_or(&value).to_string());
                }
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// The last path segment of a (possibly referenced) type, e.g.
/// `&http::StoreUserRequest` yields `StoreUserRequest`.
fn type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Reference(reference) => type_name(&reference.elem),
        syn::Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

/// Extracts the literal rule table from an impl block's `rules()` method.
fn rules_from_impl(node: &syn::ItemImpl) -> Option<RuleFields> {
    node.items.iter().find_map(|item| match item {
        syn::ImplItem::Fn(method) if method.sig.ident == "rules" => {
            rule_pairs_from_block(&method.block)
        }
        _ => None,
    })
}

fn rule_pairs_from_block(block: &syn::Block) -> Option<RuleFields> {
    block.stmts.iter().find_map(|stmt| match stmt {
        syn::Stmt::Expr(expr, _) => rule_pairs_from_expr(expr),
        _ => None,
    })
}

fn rule_pairs_from_expr(expr: &syn::Expr) -> Option<RuleFields> {
    match expr {
        syn::Expr::Return(ret) => ret.expr.as_deref().and_then(rule_pairs_from_expr),
        // vec![...].into() and friends
        syn::Expr::MethodCall(call) => rule_pairs_from_expr(&call.receiver),
        syn::Expr::Macro(mac) if mac.mac.path.is_ident("vec") => {
            let elems = mac
                .mac
                .parse_body_with(
                    syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            collect_pairs(elems.iter())
        }
        syn::Expr::Array(array) => collect_pairs(array.elems.iter()),
        _ => None,
    }
}

/// Collects `("field", "rule")` string-literal tuples. An empty element list
/// is a valid zero-field table; a non-empty list with no valid tuples is
/// treated as unrecognizable.
fn collect_pairs<'a>(elems: impl Iterator<Item = &'a syn::Expr>) -> Option<RuleFields> {
    let mut saw_any = false;
    let mut pairs = Vec::new();

    for elem in elems {
        saw_any = true;
        if let syn::Expr::Tuple(tuple) = elem {
            if tuple.elems.len() == 2 {
                if let (Some(field), Some(rule)) =
                    (str_literal(&tuple.elems[0]), str_literal(&tuple.elems[1]))
                {
                    pairs.push((field, rule));
                }
            }
        }
    }

    if saw_any && pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

fn str_literal(expr: &syn::Expr) -> Option<String> {
    if let syn::Expr::Lit(expr_lit) = expr {
        if let syn::Lit::Str(lit) = &expr_lit.lit {
            return Some(lit.value());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scan_code(code: &str) -> SourceIntrospector {
        let syntax_tree = syn::parse_file(code).expect("Failed to parse test code");
        let parsed = ParsedFile {
            path: PathBuf::from("test.rs"),
            syntax_tree,
        };
        SourceIntrospector::scan(&[parsed])
    }

    #[test]
    fn test_doc_comment_extraction() {
        let introspector = scan_code(
            r#"
            /// List all users.
            ///
            /// @queryParam page integer The page number. Example: 1
            pub fn index() {}
            "#,
        );

        let doc = introspector.doc_comment("index").unwrap();
        assert!(doc.starts_with("List all users."));
        assert!(doc.contains("@queryParam page integer"));
    }

    #[test]
    fn test_doc_comment_lookup_by_module_path() {
        let introspector = scan_code(
            r#"
            pub mod users {
                /// Store a user.
                pub fn store() {}
            }
            "#,
        );

        assert_eq!(
            introspector.doc_comment("users::store").as_deref(),
            Some("Store a user.")
        );
    }

    #[test]
    fn test_unknown_handler_yields_nothing() {
        let introspector = scan_code("pub fn index() {}");

        assert_eq!(introspector.doc_comment("missing"), None);
        assert_eq!(introspector.bound_rules("missing"), None);
    }

    #[test]
    fn test_undocumented_handler_yields_no_doc() {
        let introspector = scan_code("pub fn index() {}");
        assert_eq!(introspector.doc_comment("index"), None);
    }

    #[test]
    fn test_rules_provider_bound_through_parameter() {
        let introspector = scan_code(
            r#"
            pub struct StoreUserRequest;

            impl StoreUserRequest {
                pub fn rules(&self) -> Vec<(&'static str, &'static str)> {
                    vec![
                        ("email", "required|email"),
                        ("age", "numeric|min:18"),
                    ]
                }
            }

            pub fn store(request: StoreUserRequest) {}
            "#,
        );

        let rules = introspector.bound_rules("store").unwrap();
        assert_eq!(
            rules,
            vec![
                ("email".to_string(), "required|email".to_string()),
                ("age".to_string(), "numeric|min:18".to_string()),
            ]
        );
    }

    #[test]
    fn test_rules_provider_via_trait_impl_and_reference_param() {
        let introspector = scan_code(
            r#"
            pub trait FormRequest {
                fn rules(&self) -> Vec<(&'static str, &'static str)>;
            }

            pub struct UpdateOrderRequest;

            impl FormRequest for UpdateOrderRequest {
                fn rules(&self) -> Vec<(&'static str, &'static str)> {
                    vec![("status", "required")]
                }
            }

            pub fn update(request: &UpdateOrderRequest, id: u64) {}
            "#,
        );

        let rules = introspector.bound_rules("update").unwrap();
        assert_eq!(rules, vec![("status".to_string(), "required".to_string())]);
    }

    #[test]
    fn test_handler_without_provider_parameter() {
        let introspector = scan_code(
            r#"
            pub struct StoreUserRequest;

            impl StoreUserRequest {
                pub fn rules(&self) -> Vec<(&'static str, &'static str)> {
                    vec![("email", "required|email")]
                }
            }

            pub fn index(page: u32) {}
            "#,
        );

        assert_eq!(introspector.bound_rules("index"), None);
    }

    #[test]
    fn test_empty_rule_table_is_well_formed() {
        let introspector = scan_code(
            r#"
            pub struct EmptyRequest;

            impl EmptyRequest {
                pub fn rules(&self) -> Vec<(&'static str, &'static str)> {
                    vec![]
                }
            }

            pub fn store(request: EmptyRequest) {}
            "#,
        );

        assert_eq!(introspector.bound_rules("store"), Some(vec![]));
    }

    #[test]
    fn test_non_literal_rule_table_is_ignored() {
        let introspector = scan_code(
            r#"
            pub struct DynamicRequest;

            impl DynamicRequest {
                pub fn rules(&self) -> Vec<(String, String)> {
                    vec![build_rule()]
                }
            }

            pub fn store(request: DynamicRequest) {}
            "#,
        );

        // The table is not a literal, so the provider is unrecognizable and
        // the handler falls back to doc-comment metadata.
        assert_eq!(introspector.bound_rules("store"), None);
    }

    #[test]
    fn test_rules_behind_return_statement() {
        let introspector = scan_code(
            r#"
            pub struct StoreUserRequest;

            impl StoreUserRequest {
                pub fn rules(&self) -> Vec<(&'static str, &'static str)> {
                    return vec![("name", "required")];
                }
            }

            pub fn store(request: StoreUserRequest) {}
            "#,
        );

        let rules = introspector.bound_rules("store").unwrap();
        assert_eq!(rules, vec![("name".to_string(), "required".to_string())]);
    }
}
