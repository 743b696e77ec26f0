/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Canvas Configuration ===\n");

    println!("Resize Settings:");
    println!("  Standard: {:?}", config.resize.standard);
    println!("  Minimum: {:?}", config.resize.minimum);
    println!("  Maximum: {:?}", config.resize.maximum);
    println!("  Strict Bounds: {}", config.resize.strict_bounds);
    println!();

    println!("Debug Settings:");
    println!("  Overlay: {}", config.debug.overlay);
    println!("  Overlay Scale: {:?}", config.debug.overlay_scale);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
