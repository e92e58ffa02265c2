//! Example: Basic usage of the ARIA role registry

use aria_roles::{is_valid_role, names, role_names, Role};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // List every role in the registry
    println!("All {} ARIA roles:", aria_roles::ROLE_COUNT);
    for name in role_names() {
        println!("  {}", name);
    }

    // Validate role names
    println!("Is 'button' a valid role? {}", is_valid_role("button"));
    println!("Is 'custom-role' a valid role? {}", is_valid_role("custom-role"));

    // Named constants avoid stringly-typed call sites
    println!("Button role: {}", names::BUTTON);
    println!("Alert role: {}", names::ALERT);

    // Typed roles parse from attribute values, skipping unknown tokens
    if let Some(role) = Role::from_attribute("bogus button") {
        println!("Resolved role attribute to {} ({:?})", role, role.category());
    }
}
