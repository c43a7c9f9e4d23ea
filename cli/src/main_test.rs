use super::*;

use chrono::{TimeZone, Utc};
use clap::CommandFactory;
use model::{FormMode, Task};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("taskboard").chain(args.iter().copied())).unwrap()
}

fn task(status: TaskStatus, progress: i32) -> Task {
    Task {
        id: 3,
        title: "write report".to_owned(),
        description: Some("draft".to_owned()),
        status,
        owner: "bob".to_owned(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        completed_at: None,
        progress,
    }
}

fn update(args: &[&str]) -> UpdateArgs {
    let mut full = vec!["tasks", "update", "3"];
    full.extend_from_slice(args);
    match parse(&full).command {
        Command::Tasks(TasksCommand { command: TasksSubcommand::Update(args) }) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["tasks", "list", "--user", "bob", "--json", "-vv"]);
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert!(matches!(
        cli.command,
        Command::Tasks(TasksCommand { command: TasksSubcommand::List { user: Some(ref u) } }) if u == "bob"
    ));
}

#[test]
fn service_flags_after_subcommand() {
    let cli = parse(&[
        "tasks",
        "list",
        "--token",
        "abc",
        "--token-file",
        "/tmp/tok",
        "--auth-url",
        "http://auth:9000",
        "--api-url",
        "http://tasks:9001",
    ]);
    assert_eq!(cli.token.as_deref(), Some("abc"));
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/tok")));
    assert_eq!(cli.auth_url, "http://auth:9000");
    assert_eq!(cli.api_url, "http://tasks:9001");
}

#[test]
fn register_role_defaults_to_user() {
    let cli = parse(&["register", "carol", "--password", "pw"]);
    let Command::Register(args) = cli.command else { panic!("expected register") };
    assert_eq!(args.role, Role::User);

    let cli = parse(&["admin-register", "dave", "--password", "pw", "--role", "admin"]);
    let Command::AdminRegister(args) = cli.command else { panic!("expected admin-register") };
    assert_eq!(args.role, Role::Admin);
}

#[test]
fn progress_accepts_negative_text() {
    let cli = parse(&["tasks", "progress", "4", "-20"]);
    let Command::Tasks(TasksCommand { command: TasksSubcommand::Progress { id, percent } }) = cli.command else {
        panic!("expected tasks progress")
    };
    assert_eq!(id, 4);
    assert_eq!(clamp_progress_input(&percent), 0);
}

#[test]
fn dashboard_section_defaults_to_all() {
    let cli = parse(&["dashboard"]);
    let Command::Dashboard(args) = cli.command else { panic!("expected dashboard") };
    assert_eq!(args.section.0, DashboardSection::ALL.to_vec());
    assert_eq!(args.user, None);
}

#[test]
fn dashboard_single_section_with_dashes() {
    let cli = parse(&["dashboard", "user-summary", "--user", "bob"]);
    let Command::Dashboard(args) = cli.command else { panic!("expected dashboard") };
    assert_eq!(args.section.0, vec![DashboardSection::UserSummary]);
    assert_eq!(args.user.as_deref(), Some("bob"));
}

#[test]
fn unknown_dashboard_section_is_rejected() {
    assert!(Cli::try_parse_from(["taskboard", "dashboard", "weather"]).is_err());
}

// =============================================================================
// TASK FORMS
// =============================================================================

#[test]
fn update_without_flags_has_no_changes() {
    assert!(!update(&[]).has_changes());
    assert!(update(&["--title", "x"]).has_changes());
}

#[test]
fn update_progress_moves_task_in_progress() {
    let mut form = TaskForm::edit(&task(TaskStatus::ToDo, 0));
    update(&["--progress", "45"]).apply(&mut form);
    let Ok(Submission::Update { id, update }) = form.submission(false) else { panic!("expected update") };
    assert_eq!(id, 3);
    assert_eq!(update.status, Some(TaskStatus::InProgress));
    assert_eq!(update.progress, Some(45));
}

#[test]
fn update_to_done_drops_progress() {
    let mut form = TaskForm::edit(&task(TaskStatus::InProgress, 60));
    update(&["--status", "done", "--progress", "80"]).apply(&mut form);
    let Ok(Submission::Update { update, .. }) = form.submission(false) else { panic!("expected update") };
    assert_eq!(update.status, Some(TaskStatus::Done));
    assert_eq!(update.progress, None);
    assert_eq!(update.title.as_deref(), Some("write report"));
}

#[test]
fn update_with_blank_title_is_rejected() {
    let mut form = TaskForm::edit(&task(TaskStatus::ToDo, 0));
    update(&["--title", "   "]).apply(&mut form);
    assert_eq!(form.submission(false), Err(model::FormError::MissingTitle));
}

#[test]
fn create_form_owner_only_for_admins() {
    let args = CreateArgs { title: " plan ".into(), description: Some("  ".into()), owner: Some("bob".into()) };
    let form = create_form(args);
    assert_eq!(form.mode(), FormMode::Create);

    let Ok(Submission::Create(as_user)) = form.submission(false) else { panic!("expected create") };
    assert_eq!(as_user.title, "plan");
    assert_eq!(as_user.description, None);
    assert_eq!(as_user.owner, None);

    let Ok(Submission::Create(as_admin)) = form.submission(true) else { panic!("expected create") };
    assert_eq!(as_admin.owner.as_deref(), Some("bob"));
    assert_eq!(as_admin.status, TaskStatus::ToDo);
}

#[test]
fn rejections_carry_a_hint() {
    let rejected = |status| CliError::Api { endpoint: "GET /tasks".into(), status, message: "no".into() };
    assert_eq!(rejection_hint(&rejected(401)), Some("the token was rejected; run `taskboard login` again"));
    assert_eq!(rejection_hint(&rejected(403)), Some("this command needs an admin account"));
    assert_eq!(rejection_hint(&rejected(500)), None);
    assert_eq!(rejection_hint(&CliError::MissingToken), None);
}
