//! Name-based component registry
//!
//! Parents that resolve children by name go through the registry, which
//! lets an application replace a specific component for one namespace
//! (`"Admin::Table"`) while every other namespace keeps the default
//! (`"Table"`).

use crate::component::{Component, Render};
use crate::content::Content;
use crate::error::{ComponentError, Result};
use crate::options::Options;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a boxed component from supplied options and an optional content block
pub type Factory =
    Arc<dyn Fn(Options, Option<Content>) -> Result<Box<dyn Render>> + Send + Sync>;

#[derive(Default, Clone)]
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(Options, Option<Content>) -> Result<Box<dyn Render>> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    /// Register `C` under `name`, constructing it through [`Component::build`]
    pub fn register_component<C: Component>(&mut self, name: impl Into<String>) -> &mut Self {
        self.register(name, |options, content| {
            let component = match content {
                Some(content) => C::build_with_content(options, content)?,
                None => C::build(options)?,
            };
            Ok(Box::new(component) as Box<dyn Render>)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Resolve `name`, preferring `"<namespace>::<name>"` when a namespace is given.
    ///
    /// Returns the key that matched along with its factory.
    pub fn lookup(&self, name: &str, namespace: Option<&str>) -> Option<(String, &Factory)> {
        if let Some(ns) = namespace {
            let scoped = format!("{ns}::{name}");
            if let Some(factory) = self.factories.get(&scoped) {
                tracing::debug!(name, namespace = ns, "Using namespaced component override");
                return Some((scoped, factory));
            }
        }
        self.factories
            .get(name)
            .map(|factory| (name.to_string(), factory))
    }

    pub fn build(
        &self,
        name: &str,
        namespace: Option<&str>,
        options: Options,
        content: Option<Content>,
    ) -> Result<Box<dyn Render>> {
        let (_, factory) =
            self.lookup(name, namespace)
                .ok_or_else(|| ComponentError::UnknownComponent {
                    name: name.to_string(),
                    namespace: namespace.map(str::to_string),
                })?;
        factory(options, content)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("components", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::render_to_string;
    use crate::context::RenderContext;
    use crate::options::{Props, Schema};
    use crate::options;
    use maud::{html, Markup};
    use std::sync::OnceLock;

    struct Label(String);

    impl Render for Label {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
            Ok(html! { span { (self.0) } })
        }
    }

    fn label(text: &'static str) -> impl Fn(Options, Option<Content>) -> Result<Box<dyn Render>> {
        move |_, _| Ok(Box::new(Label(text.to_string())) as Box<dyn Render>)
    }

    struct Abstract;

    impl Render for Abstract {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
            Ok(html! {})
        }
    }

    impl Component for Abstract {
        fn schema() -> &'static Schema {
            static SCHEMA: OnceLock<Schema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                Schema::builder("Abstract")
                    .abstract_component()
                    .build()
                    .expect("Abstract schema")
            })
        }

        fn from_props(_props: Props) -> Self {
            Self
        }
    }

    #[test]
    fn namespace_override_wins() {
        let mut registry = Registry::new();
        registry
            .register("Table", label("default"))
            .register("Admin::Table", label("admin"));

        let (key, _) = registry.lookup("Table", Some("Admin")).unwrap();
        assert_eq!(key, "Admin::Table");

        let (key, _) = registry.lookup("Table", Some("Shop")).unwrap();
        assert_eq!(key, "Table");

        let (key, _) = registry.lookup("Table", None).unwrap();
        assert_eq!(key, "Table");
    }

    #[test]
    fn render_named_through_context() {
        let mut registry = Registry::new();
        registry
            .register("Table", label("default"))
            .register("Admin::Table", label("admin"));

        let ctx = RenderContext::new().with_registry(&registry);
        let table = ctx.build("Table", Options::new(), None).unwrap();
        assert_eq!(render_to_string(table.as_ref(), &ctx).unwrap(), "<span>default</span>");

        let admin = ctx.with_namespace("Admin");
        let table = admin.render_named("Table", Options::new(), None).unwrap();
        assert_eq!(table.into_string(), "<span>admin</span>");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = Registry::new();
        let err = registry
            .build("Table", Some("Admin"), options! {}, None)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ComponentError::UnknownComponent { ref name, namespace: Some(ref ns) }
                if name == "Table" && ns == "Admin"
        ));
    }

    #[test]
    fn abstract_component_factory_fails() {
        let mut registry = Registry::new();
        registry.register_component::<Abstract>("Abstract");
        let err = registry
            .build("Abstract", None, Options::new(), None)
            .err()
            .unwrap();
        assert!(matches!(err, ComponentError::AbstractComponent(_)));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = Registry::new();
        registry.register("Tag", label("t")).register("Button", label("b"));
        assert_eq!(registry.names(), ["Button", "Tag"]);
        assert!(registry.contains("Tag"));
        assert!(!registry.contains("Icon"));
    }
}
