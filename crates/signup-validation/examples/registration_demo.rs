//! Walks the signup rules over a few typical inputs

use signup_validation::{
    email_schema, name_schema, password_schema, PasswordRequirements, PasswordStrength,
    RegistrationSchema,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("signup_validation=debug")
        .init();

    println!("signup-validation demo");
    println!("======================\n");

    demo_field_rules();
    demo_strength();
    demo_registration();
}

fn demo_field_rules() {
    println!("Field rules");
    println!("-----------");

    let name = name_schema("name");
    for input in ["Jo", "J", "Juan Pérez", "R2D2"] {
        let outcome = name.check(input);
        println!("  name {:>14?} -> valid={} {:?}", input, outcome.valid, outcome.message);
    }

    let email = email_schema("email");
    for input in ["a@b.com", "Ana@Correo.ES", "ana@"] {
        match email.parse(input) {
            Ok(canonical) => println!("  email {:>14?} -> {}", input, canonical),
            Err(error) => println!("  email {:>14?} -> {}", input, error.message),
        }
    }

    let password = password_schema("password");
    for input in ["abcdefgh", "Abcdefgh1!"] {
        let outcome = password.check(input);
        println!("  password {:>11?} -> valid={} {:?}", input, outcome.valid, outcome.message);
    }
    println!();
}

fn demo_strength() {
    println!("Strength");
    println!("--------");

    for input in ["abcdefgh", "Abcdefgh1!", "Abcdefghijkl", "Abcdefghij1!"] {
        if let Some(strength) = PasswordStrength::evaluate(input) {
            println!(
                "  {:>14?} -> {:>3} {} ({})",
                input,
                strength.score,
                strength.label(),
                strength.color()
            );
        }
        let requirements = PasswordRequirements::check(input);
        for item in requirements.items() {
            println!("      {} {}", if item.met { "✓" } else { "○" }, item.label);
        }
    }
    println!();
}

fn demo_registration() {
    println!("Registration");
    println!("------------");

    let schema = RegistrationSchema::new();
    match schema.parse("Ana María", "Ana@Correo.com", "Abcdefgh1!") {
        Ok(data) => println!("  accepted: {} <{}>", data.name, data.email),
        Err(errors) => println!("  rejected: {}", errors),
    }
    match schema.parse("Ana María", "Ana@Correo.com", "abcdefgh") {
        Ok(data) => println!("  accepted: {} <{}>", data.name, data.email),
        Err(errors) => println!("  rejected: {}", errors),
    }
}
