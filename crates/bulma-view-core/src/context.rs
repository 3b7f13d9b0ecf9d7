//! Render context
//!
//! Everything a render may consult besides the component itself: the theme
//! configuration, the component registry, the host's URL helper and the
//! namespace used for registry overrides. The context is read-only for the
//! duration of a render.

use crate::component::Render;
use crate::content::Content;
use crate::error::{ComponentError, Result};
use crate::options::Options;
use crate::registry::Registry;
use crate::url::{ResourceDescriptor, UrlHelper};
use bulma_view_config::ThemeConfig;
use maud::{html, Markup, PreEscaped};

#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a ThemeConfig,
    registry: Option<&'a Registry>,
    urls: Option<&'a dyn UrlHelper>,
    namespace: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// Context over the process-wide configuration with no collaborators
    pub fn new() -> Self {
        Self {
            config: ThemeConfig::global(),
            registry: None,
            urls: None,
            namespace: None,
        }
    }

    pub fn with_config(mut self, config: &'a ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: &'a Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_url_helper(mut self, urls: &'a dyn UrlHelper) -> Self {
        self.urls = Some(urls);
        self
    }

    /// Namespace tried first when resolving components by name
    pub fn with_namespace(mut self, namespace: &'a str) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn config(&self) -> &'a ThemeConfig {
        self.config
    }

    pub fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    pub fn registry(&self) -> Result<&'a Registry> {
        self.registry
            .ok_or(ComponentError::MissingDependency("component registry"))
    }

    pub fn urls(&self) -> Result<&'a dyn UrlHelper> {
        self.urls.ok_or(ComponentError::MissingDependency("url helper"))
    }

    pub fn url_for(&self, resource: &ResourceDescriptor, action: &str) -> Result<String> {
        self.urls()?.url_for(resource, action)
    }

    /// Render a node, honouring its visibility
    pub fn render(&self, component: &dyn Render) -> Result<Markup> {
        if !component.is_visible(self) {
            tracing::trace!(component = component.type_name(), "Skipping invisible component");
            return Ok(PreEscaped(String::new()));
        }
        tracing::trace!(component = component.type_name(), "Rendering component");
        component.render(self)
    }

    /// Render a content block at the point the caller asks for it
    pub fn render_content(&self, content: &Content) -> Result<Markup> {
        match content {
            Content::Text(text) => Ok(html! { (text) }),
            Content::Markup(markup) => Ok(markup.clone()),
            Content::Component(component) => self.render(component.as_ref()),
            Content::Fragment(items) => {
                let mut out = String::new();
                for item in items {
                    out.push_str(&self.render_content(item)?.into_string());
                }
                Ok(PreEscaped(out))
            }
        }
    }

    /// Build a component by name through the registry, in this context's namespace
    pub fn build(&self, name: &str, options: Options, content: Option<Content>) -> Result<Box<dyn Render>> {
        self.registry()?.build(name, self.namespace, options, content)
    }

    /// Build a component by name and render it
    pub fn render_named(&self, name: &str, options: Options, content: Option<Content>) -> Result<Markup> {
        let component = self.build(name, options, content)?;
        self.render(component.as_ref())
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("config", self.config)
            .field("registry", &self.registry)
            .field("urls", &self.urls.is_some())
            .field("namespace", &self.namespace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Posts;

    impl UrlHelper for Posts {
        fn url_for(&self, resource: &ResourceDescriptor, action: &str) -> Result<String> {
            Ok(format!("/{}s/{}", resource.kind, action))
        }
    }

    #[test]
    fn missing_collaborators_are_reported() {
        let ctx = RenderContext::new();
        assert!(matches!(
            ctx.registry(),
            Err(ComponentError::MissingDependency("component registry"))
        ));
        let resource = ResourceDescriptor::new("post");
        assert!(matches!(
            ctx.url_for(&resource, "new"),
            Err(ComponentError::MissingDependency("url helper"))
        ));
    }

    #[test]
    fn url_helper_is_consulted() {
        let posts = Posts;
        let ctx = RenderContext::new().with_url_helper(&posts);
        let resource = ResourceDescriptor::new("post");
        assert_eq!(ctx.url_for(&resource, "new").unwrap(), "/posts/new");
    }

    #[test]
    fn explicit_config_overrides_global() {
        let config = ThemeConfig {
            colors: vec!["brand".into()],
            ..ThemeConfig::default()
        };
        let ctx = RenderContext::new().with_config(&config);
        assert!(ctx.config().is_color("brand"));
        assert!(!ctx.config().is_color("primary"));
    }

    #[test]
    fn fragment_renders_in_order() {
        let ctx = RenderContext::new();
        let content = Content::fragment([
            Content::text("a < b"),
            Content::raw("<hr>"),
            Content::text("done"),
        ]);
        assert_eq!(
            ctx.render_content(&content).unwrap().into_string(),
            "a &lt; b<hr>done"
        );
    }
}
