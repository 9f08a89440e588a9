//! Drives both signup screens the way a user would.
//!
//! Honours `SIGNUP_THEME`, `SIGNUP_LOG_LEVEL` and `SIGNUP_LOG_JSON`.

use signup_forms::{
    init_logging, EmailValidationForm, FieldId, FormConfig, RegistrationForm,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FormConfig::from_env()?;
    init_logging(&config.logging())?;

    registration(&config)?;
    email_screen();
    Ok(())
}

fn registration(config: &FormConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Registration");
    println!("------------");

    let mut form = RegistrationForm::with_theme(config.theme());

    form.focus(FieldId::Name);
    form.set_name("J")?;
    println!("  name 'J': {:?}", form.name().error());
    form.set_name("Juan Pérez")?;
    form.blur(FieldId::Name);

    form.set_email("juan@Correo.com")?;

    form.focus(FieldId::Password);
    for attempt in ["abc", "abcdefgh", "Abcdefgh1", "Abcdefgh1!"] {
        form.set_password(attempt)?;
        let bar = form.strength_bar();
        println!(
            "  password {:>12?}: valid={} bar={}% {} checklist={}",
            attempt,
            form.password().is_valid(),
            bar.percent,
            bar.color,
            form.password().requirements_visible()
        );
    }
    form.blur(FieldId::Password);

    match form.submit() {
        Ok(notice) => println!("\n  {}\n  {}", notice.title, notice.message.replace('\n', "\n  ")),
        Err(error) => println!("  {}", error),
    }

    println!("\n{}", serde_json::to_string_pretty(&form.snapshot())?);
    Ok(())
}

fn email_screen() {
    println!("\nEmail screen");
    println!("------------");

    let mut form = EmailValidationForm::new();
    for input in ["ana@", "Ana@Correo.ES"] {
        form.on_change(input);
        match form.confirm() {
            Ok(notice) => println!("  {:>14?}: {}", input, notice.message.replace('\n', " ")),
            Err(error) => println!(
                "  {:>14?}: {}",
                input,
                error.notice().map(|n| n.message.as_str()).unwrap_or_default()
            ),
        }
    }
    println!("  validated: {:?}", form.validated_email());
}
