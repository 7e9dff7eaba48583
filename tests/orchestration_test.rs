// tests/orchestration_test.rs
//
// End-to-end orchestration runs driven entirely through the injected ports:
// RecordingRunner captures the executed-command log, PresetPrompter scripts
// operator answers, MockRepository stubs git state.

use regex::Regex;

use release_cycle::config::{Config, HookCommand};
use release_cycle::git::MockRepository;
use release_cycle::hooks::LifecycleEvent;
use release_cycle::plugins;
use release_cycle::prompt::{PresetPrompter, Prompter};
use release_cycle::runner::{PhaseOutcome, TaskRunner};
use release_cycle::shell::{RecordingRunner, ShellExecutor};
use release_cycle::ui::Console;
use release_cycle::ReleaseError;

fn hooked(mut config: Config, entries: &[&str]) -> Config {
    for key in entries {
        config.hooks.insert(
            key.to_string(),
            HookCommand::Single(format!("echo {}", key)),
        );
    }
    config
}

fn runner_with(
    config: Config,
    repository: MockRepository,
    prompter: Box<dyn Prompter>,
) -> (TaskRunner, RecordingRunner) {
    let log = RecordingRunner::new();
    let shell = ShellExecutor::new(Box::new(log.clone()), Console::default(), false);
    let plugins = plugins::default_plugins(&config, Box::new(repository)).expect("plugins");
    let runner =
        TaskRunner::new(config, plugins, shell, prompter, Console::default()).expect("runner");
    (runner, log)
}

fn stub_repository() -> MockRepository {
    MockRepository::new()
        .with_remote_url("git@github.com:acme/widget.git")
        .with_latest_tag("v1.0.0")
        .with_head_subject("feat: prepare release")
}

#[test]
fn test_fresh_project_defaults_to_first_patch_release() {
    // No hooks, non-interactive, default answers, no tags yet
    let mut config = Config::default();
    config.ci = true;

    let repository = MockRepository::new().with_remote_url("git@github.com:acme/widget.git");
    let (mut runner, log) = runner_with(config, repository, Box::new(PresetPrompter::new(true)));

    let summary = runner.run().unwrap();

    assert_eq!(summary.name, "widget");
    assert_eq!(summary.latest_version, "0.0.0");
    assert_eq!(summary.version, "0.0.1");

    let done = Regex::new(r"^Done \(in \d+s\.\)$").unwrap();
    assert!(
        done.is_match(&summary.completion_line()),
        "unexpected completion line: {}",
        summary.completion_line()
    );

    // No hooks configured, so only plugin commands appear in the log
    assert!(log.ran("git commit"));
    assert!(log.ran("npm version 0.0.1"));
}

#[test]
fn test_all_publish_flags_disabled_keeps_global_hooks() {
    let mut config = hooked(
        Config::default(),
        &[
            "before:init",
            "after:afterRelease",
            "after:git:release",
            "after:github:release",
            "after:gitlab:release",
            "after:npm:release",
        ],
    );
    config.ci = true;
    config.git.push = false;
    config.github.release = false;
    config.gitlab.release = false;
    config.npm.publish = false;

    let (mut runner, log) = runner_with(
        config,
        stub_repository(),
        Box::new(PresetPrompter::new(true)),
    );

    runner.run().unwrap();

    assert!(log.ran("echo before:init"));
    assert!(log.ran("echo after:afterRelease"));
    assert!(!log.ran("after:git:release"));
    assert!(!log.ran("after:github:release"));
    assert!(!log.ran("after:gitlab:release"));
    assert!(!log.ran("after:npm:release"));

    for namespace in ["git", "github", "gitlab", "npm"] {
        assert_eq!(
            runner.outcome(LifecycleEvent::Release, namespace),
            Some(PhaseOutcome::Skipped),
            "{} release should be skipped",
            namespace
        );
    }
}

#[test]
fn test_npm_bump_failure_short_circuits_release() {
    let mut config = hooked(
        Config::default(),
        &[
            "after:git:bump",
            "after:npm:bump",
            "after:git:release",
            "after:github:release",
            "after:gitlab:release",
            "after:npm:release",
        ],
    );
    config.ci = true;

    let (mut runner, log) = runner_with(
        config,
        stub_repository(),
        Box::new(PresetPrompter::new(true)),
    );
    log.fail_on("npm version", 1);

    let result = runner.run();
    assert!(matches!(
        result,
        Err(ReleaseError::Plugin { ref namespace, ref event, .. })
            if namespace == "npm" && event == "bump"
    ));

    assert!(log.ran("echo after:git:bump"));
    assert!(!log.ran("after:npm:bump"));
    assert!(!log.ran("after:git:release"));
    assert!(!log.ran("after:github:release"));
    assert!(!log.ran("after:gitlab:release"));
    assert!(!log.ran("after:npm:release"));
}

#[test]
fn test_full_happy_path_with_all_publish_targets() {
    let mut config = hooked(
        Config::default(),
        &[
            "after:git:bump",
            "after:npm:bump",
            "after:git:release",
            "after:github:release",
            "after:gitlab:release",
            "after:npm:release",
        ],
    );
    config.ci = true;
    config.increment = "minor".to_string();
    config.github.release = true;
    config.gitlab.release = true;

    let (mut runner, log) = runner_with(
        config,
        stub_repository(),
        Box::new(PresetPrompter::new(true)),
    );

    let summary = runner.run().unwrap();
    assert_eq!(summary.version, "1.1.0");

    for key in [
        "after:git:bump",
        "after:npm:bump",
        "after:git:release",
        "after:github:release",
        "after:gitlab:release",
        "after:npm:release",
    ] {
        assert!(log.ran(&format!("echo {}", key)), "missing hook: {}", key);
    }

    // The hosted releases are named after the new version and tagged with it
    assert!(log.ran("gh release create 1.1.0 --title \"Release 1.1.0\""));
    assert!(log.ran("glab release create 1.1.0 --name \"Release 1.1.0\""));
    assert!(log.ran("git tag --annotate 1.1.0"));
    assert!(log.ran("npm publish"));
}

#[test]
fn test_declining_npm_bump_cancels_npm_release_only() {
    let mut config = hooked(
        Config::default(),
        &[
            "after:git:bump",
            "after:npm:bump",
            "after:git:release",
            "after:npm:release",
        ],
    );
    config.github.release = false;
    config.gitlab.release = false;

    // Interactive: bump asks git then npm; release asks git. Decline only
    // the npm bump.
    let prompter = PresetPrompter::with_answers(vec![true, false], true);
    let (mut runner, log) = runner_with(config, stub_repository(), Box::new(prompter));

    runner.run().unwrap();

    assert_eq!(
        runner.outcome(LifecycleEvent::Bump, "npm"),
        Some(PhaseOutcome::Cancelled)
    );
    assert_eq!(
        runner.outcome(LifecycleEvent::Release, "npm"),
        Some(PhaseOutcome::Cancelled)
    );
    assert_eq!(
        runner.outcome(LifecycleEvent::Bump, "git"),
        Some(PhaseOutcome::Executed)
    );
    assert_eq!(
        runner.outcome(LifecycleEvent::Release, "git"),
        Some(PhaseOutcome::Executed)
    );

    assert!(log.ran("echo after:git:bump"));
    assert!(log.ran("echo after:git:release"));
    assert!(!log.ran("after:npm:bump"));
    assert!(!log.ran("after:npm:release"));
}

#[test]
fn test_every_event_runs_its_global_hooks_exactly_once() {
    let keys: Vec<String> = ["init", "beforeBump", "bump", "beforeRelease", "release", "afterRelease"]
        .iter()
        .flat_map(|event| [format!("before:{}", event), format!("after:{}", event)])
        .collect();
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

    let mut config = hooked(Config::default(), &key_refs);
    config.ci = true;

    let (mut runner, log) = runner_with(
        config,
        stub_repository(),
        Box::new(PresetPrompter::new(true)),
    );

    runner.run().unwrap();

    let commands = log.commands();
    for key in &keys {
        let expected = format!("echo {}", key);
        assert_eq!(
            commands.iter().filter(|c| **c == expected).count(),
            1,
            "hook {} should run exactly once",
            key
        );
    }
}

#[test]
fn test_dry_run_executes_nothing() {
    let mut config = hooked(Config::default(), &["before:init", "after:release"]);
    config.ci = true;

    let log = RecordingRunner::new();
    let shell = ShellExecutor::new(Box::new(log.clone()), Console::default(), true);
    let plugins = plugins::default_plugins(&config, Box::new(stub_repository())).unwrap();
    let mut runner = TaskRunner::new(
        config,
        plugins,
        shell,
        Box::new(PresetPrompter::new(true)),
        Console::default(),
    )
    .unwrap();

    let summary = runner.run().unwrap();

    // The run resolves versions and reports success, but no command reaches
    // the shell
    assert_eq!(summary.version, "1.0.1");
    assert!(log.commands().is_empty());
}

#[test]
fn test_hook_command_list_runs_in_order() {
    let mut config = Config::default();
    config.ci = true;
    config.hooks.insert(
        "before:release".to_string(),
        HookCommand::Many(vec![
            "echo first {version}".to_string(),
            "echo second {version}".to_string(),
        ]),
    );

    let (mut runner, log) = runner_with(
        config,
        stub_repository(),
        Box::new(PresetPrompter::new(true)),
    );

    runner.run().unwrap();

    let commands = log.commands();
    let first = commands.iter().position(|c| c == "echo first 1.0.1");
    let second = commands.iter().position(|c| c == "echo second 1.0.1");
    assert!(first.is_some() && second.is_some());
    assert!(first < second);
}
