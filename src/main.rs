//! Interactive terminal password checker.

use clap::Parser;
use dialoguer::{Confirm, Input, Password};
use owo_colors::OwoColorize;
use pwd_meter::{Config, Evaluation, Strength, evaluate};
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[command(name = "pwd-meter", version, about = "Heuristic password strength checker")]
struct Args {
    /// Echo the password while typing instead of masking it
    #[arg(long)]
    show: bool,
}

fn read_password(show: bool) -> dialoguer::Result<String> {
    let prompt = "Enter the password to evaluate";
    if show {
        Input::<String>::new().with_prompt(prompt).interact_text()
    } else {
        Password::new().with_prompt(prompt).interact()
    }
}

fn print_evaluation(evaluation: &Evaluation) {
    let label = evaluation.strength.to_string();
    let colored = match evaluation.strength {
        Strength::VeryWeak | Strength::Weak => label.red().to_string(),
        Strength::Moderate => label.yellow().to_string(),
        Strength::Strong | Strength::VeryStrong => label.green().to_string(),
    };
    println!("Password strength: {} (score {})", colored, evaluation.score);
    for suggestion in &evaluation.feedback {
        println!("  - {}", suggestion);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::default();
    config.validate()?;

    println!("--- Password Strength Checker ---");
    println!("Checks length, character variety, sequences and repetitions.");

    loop {
        println!();
        let input = read_password(args.show)?;
        if input.is_empty() {
            println!("No password entered. Please try again.");
            continue;
        }

        let password = SecretString::new(input.into());
        print_evaluation(&evaluate(&password, &config));

        println!();
        let again = Confirm::new()
            .with_prompt("Check another password?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    println!("Exiting.");
    Ok(())
}
