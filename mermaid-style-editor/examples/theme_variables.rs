// Example: Deriving Mermaid theme variables from the style fields
//
// This example shows how the six user-facing colors expand onto the
// renderer's `themeVariables`, and what the renderer configuration looks
// like for different themes.

use mermaid_style_editor::{
    HexColor, RenderConfig, StyleField, StyleFields, ThemeName, theme_variables,
};

fn main() {
    println!("=== Mermaid Style Editor - Theme Variables Example ===\n");

    // Example 1: The expansion table
    println!("1. Renderer keys per style field:");
    for field in StyleField::ALL {
        println!("  {:<20} -> {}", format!("{field:?}"), field.renderer_keys().join(", "));
    }

    println!();

    // Example 2: Customizing one field
    println!("2. Default theme with a custom node color:");
    let mut fields = StyleFields::default();
    match HexColor::parse("#112233") {
        Ok(color) => fields.set(StyleField::Background, color),
        Err(err) => println!("  {err}"),
    }
    for (key, value) in theme_variables(ThemeName::Default, &fields).iter() {
        println!("  {key:<20} {value}");
    }

    println!();

    // Example 3: Renderer configuration for every theme
    println!("3. Renderer configuration per theme:");
    for theme in ThemeName::ALL {
        let config = RenderConfig::new(theme, theme_variables(theme, &fields));
        match serde_json::to_string(&config) {
            Ok(json) => println!("  {theme}: {json}"),
            Err(err) => println!("  {theme}: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
