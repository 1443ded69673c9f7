//! Simple example showing basic tool usage

use serde_json::json;
use tool_bind::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simple Calculator Example ===\n");

    let signature = Signature::new("add")
        .with_parameter(Parameter::new("a", TypeExpr::Number))
        .with_parameter(Parameter::new("b", TypeExpr::Number))
        .returning(TypeExpr::Number);
    let documentation = Documentation::new("Add two numbers")
        .with_param("a", "First number")
        .with_param("b", "Second number");

    let add = Tool::with_return(signature, documentation, |args| {
        let a = args["a"].as_f64().unwrap_or(0.0);
        let b = args["b"].as_f64().unwrap_or(0.0);
        Ok(json!(a + b))
    })?;

    let mut tools = ToolCollection::new();
    tools.add(add);

    // Invoke it the way an LLM response arrives: raw JSON
    let result = tools.invoke("add", r#"{"a": 10.0, "b": 5.0}"#)?;
    println!("Result: 10 + 5 = {}\n", result);

    // Show the schema
    let schema = tools.get("add").map(Tool::schema).ok_or("missing tool")?;
    println!("OpenAI Schema:");
    println!(
        "{}\n",
        serde_json::to_string_pretty(&schema.to_openai_schema())?
    );

    println!("Anthropic Schema:");
    println!(
        "{}",
        serde_json::to_string_pretty(&schema.to_anthropic_schema())?
    );

    Ok(())
}
