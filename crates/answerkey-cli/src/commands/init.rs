//! The `answerkey init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("answerkey.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("samples")?;
    write_if_missing(Path::new("samples/quiz.txt"), SAMPLE_QUIZ)?;
    write_if_missing(Path::new("samples/roster.txt"), SAMPLE_ROSTER)?;

    println!("\nNext steps:");
    println!("  1. Replace samples/quiz.txt and samples/roster.txt with your own");
    println!("  2. Run: answerkey validate --quiz samples/quiz.txt");
    println!("  3. Run: answerkey generate --quiz samples/quiz.txt --roster samples/roster.txt --max-errors 2");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# answerkey configuration

# Default ceiling for wrong answers per student (--max-errors overrides)
max_errors = 2

output_dir = "./answerkey-output"
file_suffix = "_answers.txt"

# Uncomment for reproducible output
# seed = 12345
"#;

const SAMPLE_QUIZ: &str = "\
1. What is 2+2?
3
+4
5

2. Pick all primes
+2
+3
4

3. Capital of France
Berlin
+Paris
Rome

4. Largest planet in the solar system
+Jupiter
Saturn
Earth
";

const SAMPLE_ROSTER: &str = "\
alice
bob
carol
";
