//! Built-in Spring/DDD Java stubs.
//!
//! Bodies live in `templates/*.java.tmpl` and are compiled into the binary.
//! Rendering is plain `{{KEY}}` substitution over three variables:
//!
//! | Variable | Example (`OrderLine`) |
//! |----------|-----------------------|
//! | `NAME` | `OrderLine` |
//! | `FIELD_NAME` | `orderLine` |
//! | `TABLE_NAME` | `_order_line` |

use strata_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{
        TemplateKind,
        naming::{camel_to_snake, decapitalize_first},
    },
    error::StrataResult,
};
use tracing::{instrument, trace};

const CONTROLLER: &str = include_str!("../../templates/controller.java.tmpl");
const SERVICE: &str = include_str!("../../templates/service.java.tmpl");
const FACADE: &str = include_str!("../../templates/facade.java.tmpl");
const ENTITY: &str = include_str!("../../templates/entity.java.tmpl");
const VO: &str = include_str!("../../templates/vo.java.tmpl");
const COMMAND: &str = include_str!("../../templates/command.java.tmpl");
const QUERY: &str = include_str!("../../templates/query.java.tmpl");
const EXCEPTION_ADVICE: &str = include_str!("../../templates/exception_advice.java.tmpl");
const API_ERROR: &str = include_str!("../../templates/api_error.java.tmpl");
const API_ERROR_TYPE: &str = include_str!("../../templates/api_error_type.java.tmpl");

/// The built-in template catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringTemplates;

impl SpringTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Raw template body, placeholders intact.
    pub fn source(template: TemplateKind) -> &'static str {
        match template {
            TemplateKind::Controller => CONTROLLER,
            TemplateKind::Service => SERVICE,
            TemplateKind::Facade => FACADE,
            TemplateKind::Entity => ENTITY,
            TemplateKind::Vo => VO,
            TemplateKind::Command => COMMAND,
            TemplateKind::Query => QUERY,
            TemplateKind::ExceptionAdvice => EXCEPTION_ADVICE,
            TemplateKind::ApiError => API_ERROR,
            TemplateKind::ApiErrorType => API_ERROR_TYPE,
        }
    }
}

impl TemplateRenderer for SpringTemplates {
    #[instrument(skip(self))]
    fn render(&self, template: TemplateKind, name: &str) -> StrataResult<String> {
        let variables = [
            ("NAME", name.to_string()),
            ("FIELD_NAME", decapitalize_first(name)),
            ("TABLE_NAME", camel_to_snake(name)),
        ];

        let result = substitute(Self::source(template), &variables).map_err(|placeholder| {
            ApplicationError::RenderingFailed {
                reason: format!("unknown placeholder {placeholder} in {template} template"),
            }
        })?;

        trace!(bytes = result.len(), "rendered template");
        Ok(result)
    }
}

/// Single pass over `source`: each `{{KEY}}` is replaced once and the
/// inserted values are never scanned again.  Errs with the first placeholder
/// whose key is not in `variables`.
fn substitute(source: &str, variables: &[(&str, String)]) -> Result<String, String> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(len) = after.find("}}") else {
            return Err(rest[start..].lines().next().unwrap_or_default().to_string());
        };
        let key = &after[..len];
        match variables.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => return Err(format!("{{{{{key}}}}}")),
        }
        rest = &after[len + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TEMPLATES: [TemplateKind; 10] = [
        TemplateKind::Controller,
        TemplateKind::Service,
        TemplateKind::Facade,
        TemplateKind::Entity,
        TemplateKind::Vo,
        TemplateKind::Command,
        TemplateKind::Query,
        TemplateKind::ExceptionAdvice,
        TemplateKind::ApiError,
        TemplateKind::ApiErrorType,
    ];

    fn render(template: TemplateKind, name: &str) -> String {
        SpringTemplates::new().render(template, name).unwrap()
    }

    #[test]
    fn every_template_renders_without_leftovers() {
        for template in ALL_TEMPLATES {
            let out = render(template, "OrderLine");
            assert!(!out.contains("{{"), "{template} left a placeholder");
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn controller_keeps_literal_mapping() {
        let out = render(TemplateKind::Controller, "Order");
        assert!(out.contains("@RequestMapping(\"/api/v1/{}\")"));
        assert!(out.contains("public class OrderController"));
    }

    #[test]
    fn facade_field_is_lower_camel() {
        let out = render(TemplateKind::Facade, "OrderFacade");
        assert!(out.contains("public class OrderFacade {"));
        assert!(out.contains("private final OrderFacadeService orderFacadeService;"));
    }

    #[test]
    fn entity_table_is_snake_cased() {
        let out = render(TemplateKind::Entity, "OrderLine");
        assert!(out.contains("@Table(name = \"_order_line\")"));
        assert!(out.contains("public class OrderLine {"));
    }

    #[test]
    fn suffixed_class_names() {
        assert!(render(TemplateKind::Service, "GetOrderQuery").contains("class GetOrderQueryService"));
        assert!(render(TemplateKind::Command, "CreateOrder").contains("class CreateOrderCommand"));
        assert!(render(TemplateKind::Query, "GetOrder").contains("class GetOrderQuery"));
        assert!(render(TemplateKind::ExceptionAdvice, "Global").contains("class GlobalAdvice"));
    }

    #[test]
    fn companions_ignore_name() {
        assert_eq!(
            render(TemplateKind::ApiError, "Global"),
            render(TemplateKind::ApiError, "Other")
        );
        assert!(render(TemplateKind::ApiErrorType, "X").contains("public enum ApiErrorType"));
    }

    #[test]
    fn braces_in_name_are_copied_verbatim() {
        let out = render(TemplateKind::Vo, "Money{{x");
        assert!(out.contains("public class Money{{x {"));

        let out = render(TemplateKind::Facade, "A{{FIELD_NAME}}");
        assert!(out.contains("public class A{{FIELD_NAME}} {"));
        assert!(out.contains("private final A{{FIELD_NAME}}Service a{{FIELD_NAME}}Service;"));
    }

    #[test]
    fn unknown_template_key_is_rejected() {
        let vars = [("NAME", "Order".to_string())];
        assert_eq!(substitute("class {{NAME}}", &vars).unwrap(), "class Order");
        assert_eq!(substitute("{{NAME}} {{OTHER}}", &vars).unwrap_err(), "{{OTHER}}");
        assert_eq!(substitute("open {{NAME", &vars).unwrap_err(), "{{NAME");
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(
            render(TemplateKind::Entity, "Order"),
            render(TemplateKind::Entity, "Order")
        );
    }
}
