//! End-to-end tests for the `maniforge` binary.
//!
//! Each test runs the real binary in a fresh temp directory, creates the
//! template tree it needs, and asserts on stdout/stderr plus the files left
//! on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn maniforge() -> Command {
    let mut cmd = Command::cargo_bin("maniforge").unwrap();
    // Keep assertions simple: no ANSI escapes in captured output.
    cmd.arg("--no-color");
    cmd
}

#[test]
fn help_flag() {
    maniforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    maniforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn render_help_shows_both_lists() {
    maniforge()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--templates"))
        .stdout(predicate::str::contains("--outputs"));
}

#[test]
fn render_service_template_creates_valid_output() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();
    fs::write(
        temp.path().join("templates/service.j2"),
        "apiVersion: {{ service_apiVersion }}\n\
         kind: {{ service_kind }}\n\
         metadata:\n\
         \x20 name: {{ service_name }}\n",
    )
    .unwrap();

    maniforge()
        .current_dir(temp.path())
        .args([
            "render",
            "-t",
            "templates/service.j2",
            "-o",
            "out/service.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Output File 'out/service.yaml' has been created.",
        ))
        .stdout(predicate::str::contains(
            "The 'out/service.yaml' is a valid YAML file.",
        ));

    let written = fs::read_to_string(temp.path().join("out/service.yaml")).unwrap();
    assert!(written.contains("name: my-service"));
    assert!(written.contains("kind: Service"));
}

#[test]
fn render_both_known_templates() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();
    fs::write(
        temp.path().join("templates/service.j2"),
        "name: {{ service_name }}\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("templates/deployment.j2"),
        "image: {{ deployment_image_name }}\nreplicas: {{ deployment_spec_replicas }}\n",
    )
    .unwrap();

    maniforge()
        .current_dir(temp.path())
        .args([
            "render",
            "-t",
            "templates/service.j2",
            "templates/deployment.j2",
            "-o",
            "out/service.yaml",
            "out/deployment.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The 'out/service.yaml' is a valid YAML file.",
        ))
        .stdout(predicate::str::contains(
            "The 'out/deployment.yaml' is a valid YAML file.",
        ));

    let deployment = fs::read_to_string(temp.path().join("out/deployment.yaml")).unwrap();
    assert!(deployment.contains("image: nginx:1.14.2"));
    assert!(deployment.contains("replicas: 3"));
}

#[test]
fn unknown_template_is_skipped_not_fatal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();

    // The path is not one of the known identifiers, so the item is skipped
    // and no output file appears, but the run still succeeds.
    maniforge()
        .current_dir(temp.path())
        .args([
            "render",
            "-t",
            "templates/ingress.j2",
            "-o",
            "out/ingress.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown template file"))
        .stdout(predicate::str::contains(
            "The 'out/ingress.yaml' is an invalid YAML file.",
        ));

    assert!(!temp.path().join("out/ingress.yaml").exists());
}

#[test]
fn missing_template_file_is_skipped_not_fatal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();

    // Known identifier, but no file on disk.
    maniforge()
        .current_dir(temp.path())
        .args([
            "render",
            "-t",
            "templates/service.j2",
            "-o",
            "out/service.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 'templates/service.j2'"));

    assert!(!temp.path().join("out/service.yaml").exists());
}

#[test]
fn template_without_placeholders_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();
    fs::write(temp.path().join("templates/service.j2"), "name: static\n").unwrap();

    maniforge()
        .current_dir(temp.path())
        .args([
            "render",
            "-t",
            "templates/service.j2",
            "-o",
            "out/service.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No placeholders found"));

    assert!(!temp.path().join("out/service.yaml").exists());
}

#[test]
fn invalid_rendered_yaml_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();
    // Renders fine but produces an unclosed flow sequence.
    fs::write(
        temp.path().join("templates/service.j2"),
        "ports: [80, {{ service_targetPort }}\n",
    )
    .unwrap();

    maniforge()
        .current_dir(temp.path())
        .args([
            "render",
            "-t",
            "templates/service.j2",
            "-o",
            "out/service.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Output File 'out/service.yaml' has been created.",
        ))
        .stdout(predicate::str::contains(
            "The 'out/service.yaml' is an invalid YAML file.",
        ));
}

#[test]
fn json_output_format_emits_report() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::create_dir(temp.path().join("out")).unwrap();
    fs::write(
        temp.path().join("templates/service.j2"),
        "name: {{ service_name }}\n",
    )
    .unwrap();

    let output = maniforge()
        .current_dir(temp.path())
        .args([
            "--output-format",
            "json",
            "render",
            "-t",
            "templates/service.j2",
            "-o",
            "out/service.yaml",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["items"][0]["state"]["state"], "written");
    assert_eq!(json["validations"][0]["outcome"]["outcome"], "valid");
}

#[test]
fn completions_bash_generates_script() {
    maniforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maniforge"));
}
