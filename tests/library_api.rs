mod harness;

use harness::TestContext;
use infragen::{Artifact, GeneratedArtifact, RunOptions};
use mockito::Server;
use std::fs;

fn ollama_options(ctx: &TestContext, server: &Server) -> RunOptions {
    let config = ctx.work_dir().join("infragen.toml");
    fs::write(&config, format!("ollama_url = \"{}\"\ntimeout_secs = 5\n", server.url())).unwrap();
    RunOptions { provider: Some("ollama".into()), timeout_secs: None, config: Some(config) }
}

#[test]
fn commit_at_returns_trimmed_suggestion() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"message":{"content":"  Bump version\n"}}"#)
        .create();

    let ctx = TestContext::new();
    ctx.commit_file("VERSION", "1\n", "Init");
    ctx.commit_file("VERSION", "2\n", "Bump");

    let generated = infragen::commit_at(&ollama_options(&ctx, &server), ctx.work_dir()).unwrap();

    assert_eq!(generated.artifact, Artifact::CommitMessage);
    assert_eq!(generated.content, "Bump version");
}

#[test]
fn commit_at_on_single_commit_is_empty_input() {
    let server = Server::new();
    let ctx = TestContext::new();
    ctx.commit_file("VERSION", "1\n", "Init");

    let err = infragen::commit_at(&ollama_options(&ctx, &server), ctx.work_dir()).unwrap_err();
    assert!(err.is_empty_input());
}

#[test]
fn save_writes_and_refuses_blank_text() {
    let ctx = TestContext::new();
    let out = ctx.work_dir().join("out");

    let path = infragen::save(&GeneratedArtifact::new(Artifact::Dockerfile, "FROM alpine\n"), &out).unwrap();
    assert_eq!(path, fs::canonicalize(out.join("Dockerfile")).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "FROM alpine\n");

    let err = infragen::save(&GeneratedArtifact::new(Artifact::TerraformCi, "   "), &out).unwrap_err();
    assert!(err.is_empty_input());
    assert!(!out.join("terraform.yml").exists());
}
