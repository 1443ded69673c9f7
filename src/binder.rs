//! Binds a callable's declared parameters to their documentation.

use crate::error::{ToolError, ToolResult};
use crate::schema::{map_type, ParameterSpec};
use crate::types::{Documentation, Signature};

/// Combines a signature's declared parameters with the documentation lookup
/// into an ordered [`ParameterSpec`] sequence.
///
/// Every parameter must carry a type annotation and a documentation entry;
/// the callable itself must have a short description. Any gap fails the
/// whole binding — a schema is never partially built.
pub fn bind_parameters(
    signature: &Signature,
    documentation: &Documentation,
) -> ToolResult<Vec<ParameterSpec>> {
    if documentation.short_description().trim().is_empty() {
        return Err(ToolError::missing_documentation(&signature.name));
    }

    let mut specs = Vec::with_capacity(signature.params.len());
    for param in &signature.params {
        let annotation = param
            .annotation
            .as_ref()
            .ok_or_else(|| ToolError::missing_annotation(&param.name))?;
        let descriptor = map_type(annotation)?;
        let description = documentation
            .param_description(&param.name)
            .ok_or_else(|| ToolError::missing_description(&param.name))?;

        specs.push(ParameterSpec {
            name: param.name.clone(),
            descriptor,
            description: description.to_string(),
            required: param.default.is_none(),
            default: param.default.clone(),
        });
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Parameter, TypeExpr};
    use serde_json::json;

    fn documented_signature() -> (Signature, Documentation) {
        let signature = Signature::new("repeat")
            .with_parameter(Parameter::new("x", TypeExpr::Integer))
            .with_parameter(Parameter::new("y", TypeExpr::String).with_default("hello"));
        let documentation = Documentation::new("This is a test function.")
            .with_param("x", "An integer.")
            .with_param("y", "A string.");
        (signature, documentation)
    }

    #[test]
    fn binds_required_and_defaulted_parameters() {
        let (signature, documentation) = documented_signature();
        let specs = bind_parameters(&signature, &documentation).unwrap();

        assert_eq!(specs.len(), 2);
        assert!(specs[0].required);
        assert_eq!(specs[0].default, None);
        assert!(!specs[1].required);
        assert_eq!(specs[1].default, Some(json!("hello")));
        assert_eq!(specs[1].description, "A string.");
    }

    #[test]
    fn missing_annotation_fails_the_binding() {
        let signature = Signature::new("f").with_parameter(Parameter::untyped("x"));
        let documentation = Documentation::new("Docs.").with_param("x", "An x.");

        let err = bind_parameters(&signature, &documentation).unwrap_err();
        assert!(matches!(
            err,
            ToolError::MissingAnnotation { ref parameter } if parameter == "x"
        ));
    }

    #[test]
    fn missing_parameter_description_fails_the_binding() {
        let signature = Signature::new("f").with_parameter(Parameter::new("x", TypeExpr::Integer));
        let documentation = Documentation::new("Docs.");

        let err = bind_parameters(&signature, &documentation).unwrap_err();
        assert!(matches!(
            err,
            ToolError::MissingDescription { ref parameter } if parameter == "x"
        ));
    }

    #[test]
    fn missing_short_description_fails_before_any_parameter() {
        let (signature, _) = documented_signature();
        let err = bind_parameters(&signature, &Documentation::new("")).unwrap_err();
        assert!(matches!(
            err,
            ToolError::MissingDocumentation { ref callable } if callable == "repeat"
        ));
    }

    #[test]
    fn defaults_do_not_alter_the_description() {
        let (signature, documentation) = documented_signature();
        let specs = bind_parameters(&signature, &documentation).unwrap();
        // The default is exposed through the fragment, not the text.
        assert_eq!(specs[1].description, "A string.");
        let fragment = specs[1].fragment();
        assert_eq!(fragment["default"], json!("hello"));
    }
}
