//! Template system for spider code generation

use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::params::SpiderParams;

/// Name the fixed template is registered under in the Tera instance.
const TEMPLATE_NAME: &str = "spider.py";

/// The spider skeleton emitted for every invocation.
///
/// Plain named substitutions only; no loops or conditionals. Everything
/// outside the placeholders passes through byte-for-byte, including the
/// comment about additional start locations, which remain unimplemented.
const SPIDER_TEMPLATE: &str = r#"# -*- coding: utf-8 -*-

"""{{ doc }}"""

from scrapy import Spider


class {{ name }}Spider(Spider):
    name = '{{ name }}'
    version = '1.0.0'
    provider = '{{ name }}'

    # TODO: allow more than one start location
    start_urls = [
        '{{ url }}',
    ]

    def parse(self, response):
        raise NotImplementedError('parse is not implemented yet')
"#;

/// Renders the fixed spider template.
///
/// The template text is a process-wide constant; compiling it happens once
/// at construction, and a compile failure means the shipped template itself
/// is broken, never that user input was bad.
#[derive(Debug)]
pub struct SpiderRenderer {
    tera: Tera,
}

impl SpiderRenderer {
    /// Compile the built-in template.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, SPIDER_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Substitute `params` into the template and return the generated source.
    ///
    /// Checks the name-non-empty invariant before touching the template.
    /// Pure function of its input: identical params yield identical bytes.
    pub fn render(&self, params: &SpiderParams) -> Result<String> {
        if params.name.is_empty() {
            return Err(Error::EmptyName);
        }

        log::debug!("rendering spider template for '{}'", params.name);

        let context = Context::from_serialize(params)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, doc: &str, url: &str) -> Result<String> {
        SpiderRenderer::new()
            .expect("built-in template must compile")
            .render(&SpiderParams::new(name, doc, url))
    }

    #[test]
    fn substitutes_name_at_every_placeholder() {
        let source = render("Harbor", "", "www.example.com").unwrap();

        assert!(source.contains("class HarborSpider(Spider):"));
        assert!(source.contains("name = 'Harbor'"));
        assert!(source.contains("provider = 'Harbor'"));
    }

    #[test]
    fn leaves_no_placeholder_markers_behind() {
        let source = render("Harbor", "some docs", "www.example.com").unwrap();

        assert!(!source.contains("{{"));
        assert!(!source.contains("}}"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = SpiderRenderer::new().unwrap();
        let params = SpiderParams::new("Harbor", "some docs", "www.example.com");

        let first = renderer.render(&params).unwrap();
        let second = renderer.render(&params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_doc_renders_an_empty_docstring() {
        let source = render("Harbor", "", "www.example.com").unwrap();

        assert!(source.contains("\"\"\"\"\"\""));
    }

    #[test]
    fn values_are_embedded_unescaped() {
        let source = render("Harbor", "a <b> & \"c\"", "http://x/?q=1&r=2").unwrap();

        assert!(source.contains("a <b> & \"c\""));
        assert!(source.contains("'http://x/?q=1&r=2'"));
    }

    #[test]
    fn empty_name_fails_before_rendering() {
        let err = render("", "some docs", "www.example.com").unwrap_err();

        assert!(matches!(err, Error::EmptyName));
    }

    #[test]
    fn renders_the_full_marine_traffic_skeleton() {
        let source = render("MarineTraffic", "scrape MT", "www.mt.com").unwrap();

        assert!(source.contains("\"\"\"scrape MT\"\"\""));
        assert!(source.contains("from scrapy import Spider"));
        assert!(source.contains("class MarineTrafficSpider(Spider):"));
        assert!(source.contains("name = 'MarineTraffic'"));
        assert!(source.contains("'www.mt.com',"));
        assert!(source.contains("def parse(self, response):"));
    }
}
