use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn stringsgen_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stringsgen"))
}

const STRINGS: &str = r#"
/* Shown on launch */
"greeting" = "Hello!";
"apples_given" = "I give %d apples to %@";
"#;

#[test]
fn test_generate_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("Localizable.strings");
    fs::write(&input_file, STRINGS).unwrap();

    let output = stringsgen_cmd()
        .args(["generate", "-i", input_file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("// This file is automatically generated by stringsgen."));
    assert!(stdout.contains("enum L10n {\n    case Greeting\n    case ApplesGiven(Int, String)\n}\n"));
    assert!(stdout.contains("return L10n.tr(\"apples_given\", p0, p1)"));
}

#[test]
fn test_generate_to_file_with_options() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("en.strings");
    let output_file = temp_dir.path().join("Generated/Strings.swift");
    fs::write(&input_file, STRINGS).unwrap();

    let output = stringsgen_cmd()
        .args([
            "generate",
            "-i",
            input_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
            "--enum-name",
            "Strings",
            "--indent",
            "tabs",
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("enum Strings {\n\tcase Greeting\n"));
    assert!(content.contains("\t\t\t\treturn Strings.tr(\"greeting\")\n"));
    assert!(content.contains("func tr(_ key: Strings) -> String {\n\treturn key.string\n}\n"));
}

#[test]
fn test_generate_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("en.json");
    fs::write(
        &input_file,
        r#"{"b": "%f", "a": "%@ and %i", "c": "100%% sure"}"#,
    )
    .unwrap();

    let run = || {
        stringsgen_cmd()
            .args(["generate", "-i", input_file.to_str().unwrap()])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());

    let stdout = String::from_utf8(first).unwrap();
    assert!(stdout.contains("    case A(String, Int)\n    case B(Float)\n    case C\n"));
}

#[test]
fn test_generate_multiple_inputs_with_glob_and_sort() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("1-main.strings"), "\"zeta\" = \"%d\";\n\"eta\" = \"x\";\n").unwrap();
    fs::write(temp_dir.path().join("2-extra.csv"), "beta,%@\n").unwrap();
    let pattern = format!("{}/*-*.*", temp_dir.path().display());

    let output = stringsgen_cmd()
        .args(["generate", "-i", &pattern, "--sort"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("    case Eta\n    case Zeta(Int)\n    case Beta(String)\n"));
}

#[test]
fn test_generate_single_language_glob() {
    let temp_dir = TempDir::new().unwrap();
    for (lang, text) in [("en", "Hello %@"), ("de", "Hallo %@")] {
        let dir = temp_dir.path().join(format!("{}.lproj", lang));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Localizable.strings"), format!("\"greeting\" = \"{}\";\n", text)).unwrap();
        fs::write(dir.join("Settings.strings"), "\"sync\" = \"%d\";\n").unwrap();
    }

    let one_language = format!("{}/en.lproj/*.strings", temp_dir.path().display());
    let output = stringsgen_cmd()
        .args(["generate", "-i", &one_language, "--strict"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("    case Greeting(String)\n    case Sync(Int)\n}\n"));

    let every_language = format!("{}/*.lproj/Localizable.strings", temp_dir.path().display());
    let output = stringsgen_cmd()
        .args(["generate", "-i", &every_language, "--strict"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("identifier `Greeting` is generated for both `greeting` and `greeting`"));
}

#[test]
fn test_generate_help_warns_about_mixing_languages() {
    let output = stringsgen_cmd().args(["generate", "--help"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("single language"));
}

#[test]
fn test_generate_strict_reports_collisions() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("en.strings");
    fs::write(&input_file, "\"apples_given\" = \"%d\";\n\"apples.given\" = \"%d\";\n").unwrap();

    let lenient = stringsgen_cmd()
        .args(["generate", "-i", input_file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(lenient.status.success());

    let strict = stringsgen_cmd()
        .args(["generate", "-i", input_file.to_str().unwrap(), "--strict"])
        .output()
        .unwrap();
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("identifier `ApplesGiven` is generated for both"));
}

#[test]
fn test_generate_malformed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("broken.strings");
    fs::write(&input_file, "\"missing\" = \"semicolon\"\n").unwrap();

    let output = stringsgen_cmd()
        .args(["generate", "-i", input_file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read resources from"));
    assert!(stderr.contains("broken.strings"));
}

#[test]
fn test_generate_missing_input_fails() {
    let output = stringsgen_cmd()
        .args(["generate", "-i", "does-not-exist.strings"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File does not exist"));
}

#[test]
fn test_generate_rejects_bad_indent() {
    let output = stringsgen_cmd()
        .args(["generate", "-i", "x.strings", "--indent", "wide"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid indentation"));
}

#[test]
fn test_generate_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("en.strings"), STRINGS).unwrap();
    fs::write(
        temp_dir.path().join("stringsgen.toml"),
        r#"
        inputs = ["en.strings"]
        output = "Sources/L10n.swift"
        enum_name = "Texts"
        indentation = "spaces:2"
        "#,
    )
    .unwrap();

    let output = stringsgen_cmd()
        .current_dir(temp_dir.path())
        .args(["generate"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = fs::read_to_string(temp_dir.path().join("Sources/L10n.swift")).unwrap();
    assert!(content.contains("enum Texts {\n  case Greeting\n"));
}

#[test]
fn test_cli_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("en.strings"), STRINGS).unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "enum_name = \"FromConfig\"\ninputs = [\"en.strings\"]\n").unwrap();

    let output = stringsgen_cmd()
        .current_dir(temp_dir.path())
        .args([
            "generate",
            "--config",
            config.to_str().unwrap(),
            "--enum-name",
            "FromCli",
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("enum FromCli {"));
    assert!(!stdout.contains("FromConfig"));
}
