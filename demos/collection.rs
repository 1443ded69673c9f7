//! Example showing a tool collection driving LLM-style tool calls

use serde_json::json;
use tool_bind::prelude::*;

fn weather_tool() -> ToolResult<Tool> {
    let signature = Signature::new("get_weather")
        .with_parameter(Parameter::new("location", TypeExpr::String))
        .with_parameter(
            Parameter::new("days", TypeExpr::optional(TypeExpr::Integer)).with_default(1),
        );
    let documentation = Documentation::new("Get a weather forecast for a location")
        .with_param("location", "City or region to look up")
        .with_param("days", "Number of forecast days");

    Tool::new(signature, documentation, |args| {
        let location = args
            .get("location")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        let days = args.get("days").and_then(|v| v.as_i64()).unwrap_or(1);
        Ok(json!({
            "location": location,
            "days": days,
            "forecast": "Sunny, 22°C"
        }))
    })
}

fn tag_tool() -> ToolResult<Tool> {
    let signature = Signature::new("tag_items")
        .with_parameter(Parameter::new(
            "items",
            TypeExpr::list(TypeExpr::String),
        ))
        .with_parameter(Parameter::new(
            "weights",
            TypeExpr::map(TypeExpr::Number),
        ));
    let documentation = Documentation::new("Attach weights to a list of items")
        .with_param("items", "Items to tag")
        .with_param("weights", "Weight per tag name");

    Tool::new(signature, documentation, |args| {
        Ok(json!({
            "items": args.get("items").cloned().unwrap_or(json!([])),
            "weights": args.get("weights").cloned().unwrap_or(json!({})),
        }))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Tool Collection Example ===\n");

    let mut tools = ToolCollection::with_tools([weather_tool()?, tag_tool()?]);
    println!("Registered {} tools: {:?}\n", tools.len(), tools.names());

    // Dispatch a call the way it arrives from a provider response
    let call = ToolCall::with_id("call_1", "get_weather", json!({ "location": "Lisbon" }));
    let output = tools.dispatch(&call);
    println!(
        "Dispatch result (success = {}):\n{}\n",
        output.success,
        serde_json::to_string_pretty(&output)?
    );

    // Validation failures never reach the callable
    let bad = tools.dispatch(&ToolCall::new("get_weather", json!({ "location": 42 })));
    println!(
        "Bad arguments are rejected: {}\n",
        bad.error.as_deref().unwrap_or("")
    );

    // Re-registering a name replaces the tool but keeps its position
    tools.add(weather_tool()?);
    println!("After re-registration: {:?}\n", tools.names());

    // Export schemas
    println!("Anthropic Schemas:");
    let schemas = tools.export_schemas(Provider::Anthropic);
    println!("{}", serde_json::to_string_pretty(&schemas)?);

    Ok(())
}
