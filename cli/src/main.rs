mod client;
mod error;
mod render;
mod session;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use model::endpoint::{DEFAULT_AUTH_URL, DEFAULT_TASKS_URL};
use model::{
    Credentials, DashboardSection, Registration, Role, ServiceUrls, Session, Submission, TaskForm, TaskStatus,
    TaskUpdate, clamp_progress_input,
};
use tracing_subscriber::EnvFilter;

use crate::client::ApiClient;
use crate::error::CliError;
use crate::session::{TokenStore, default_token_path};

#[derive(Parser, Debug)]
#[command(name = "taskboard", about = "Task tracker command line client", version)]
struct Cli {
    #[arg(long, env = "TASKBOARD_AUTH_URL", default_value = DEFAULT_AUTH_URL, global = true)]
    auth_url: String,

    #[arg(long, env = "TASKBOARD_API_URL", default_value = DEFAULT_TASKS_URL, global = true)]
    api_url: String,

    /// Bearer token; overrides the stored login.
    #[arg(long, env = "TASKBOARD_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Where `login` stores the token (default `~/.taskboard/token`).
    #[arg(long, env = "TASKBOARD_TOKEN_FILE", global = true)]
    token_file: Option<PathBuf>,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register(RegisterArgs),
    /// Create an account on behalf of someone else (admin only).
    AdminRegister(RegisterArgs),
    /// Log in and store the token.
    Login(LoginArgs),
    /// Forget the stored token.
    Logout,
    /// Show who the current token belongs to.
    Whoami,
    Tasks(TasksCommand),
    Users(UsersCommand),
    /// Admin dashboard aggregates.
    Dashboard(DashboardArgs),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    username: String,
    #[arg(long, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long, default_value_t = Role::User)]
    role: Role,
}

#[derive(Args, Debug)]
struct LoginArgs {
    username: String,
    #[arg(long, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct TasksCommand {
    #[command(subcommand)]
    command: TasksSubcommand,
}

#[derive(Subcommand, Debug)]
enum TasksSubcommand {
    List {
        /// Only tasks owned by this user (admin only).
        #[arg(long)]
        user: Option<String>,
    },
    Show {
        id: i64,
    },
    Create(CreateArgs),
    Update(UpdateArgs),
    /// Record progress; moves the task to In Progress.
    Progress {
        id: i64,
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },
    Delete {
        id: i64,
    },
    Comments {
        id: i64,
    },
    Activity {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    title: String,
    #[arg(long)]
    description: Option<String>,
    /// Assign to another user (admin only).
    #[arg(long)]
    owner: Option<String>,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// `todo`, `in-progress` or `done`.
    #[arg(long)]
    status: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    progress: Option<String>,
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    Count,
    /// Delete a user and every task they own (admin only).
    Delete {
        username: String,
    },
}

#[derive(Args, Debug)]
struct DashboardArgs {
    /// Scope every section to one user.
    #[arg(long)]
    user: Option<String>,
    /// `status`, `productivity`, `progress`, `upcoming`, `user-summary` or `all`.
    #[arg(default_value = "all", value_parser = parse_sections)]
    section: SectionSelection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SectionSelection(Vec<DashboardSection>);

fn parse_sections(raw: &str) -> Result<SectionSelection, String> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(SectionSelection(DashboardSection::ALL.to_vec()));
    }
    raw.parse::<DashboardSection>().map(|section| SectionSelection(vec![section]))
}

struct Context {
    urls: ServiceUrls,
    token: Option<String>,
    store: TokenStore,
    json: bool,
}

impl Context {
    fn client(&self) -> Result<ApiClient, CliError> {
        ApiClient::new(self.urls.clone(), self.token.clone())
    }

    fn is_admin(&self) -> bool {
        self.token
            .as_deref()
            .and_then(|token| Session::from_token(token).ok())
            .is_some_and(|session| session.is_admin())
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = TokenStore::new(cli.token_file.unwrap_or_else(default_token_path));
    let token = match cli.token {
        Some(token) => Some(token.trim().to_owned()),
        None => store.load()?,
    };
    let ctx = Context { urls: ServiceUrls::new(&cli.auth_url, &cli.api_url), token, store, json: cli.json };

    let result = match cli.command {
        Command::Register(args) => run_register(&ctx, args, false).await,
        Command::AdminRegister(args) => run_register(&ctx, args, true).await,
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Logout => run_logout(&ctx),
        Command::Whoami => run_whoami(&ctx),
        Command::Tasks(tasks) => run_tasks(&ctx, tasks).await,
        Command::Users(users) => run_users(&ctx, users).await,
        Command::Dashboard(args) => run_dashboard(&ctx, args).await,
    };
    if let Err(e) = &result {
        if let Some(hint) = rejection_hint(e) {
            tracing::warn!("{hint}");
        }
    }
    result
}

/// Follow-up advice for a service rejection, keyed on its HTTP status.
fn rejection_hint(error: &CliError) -> Option<&'static str> {
    match error.status()? {
        401 => Some("the token was rejected; run `taskboard login` again"),
        403 => Some("this command needs an admin account"),
        _ => None,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("cli={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

// =============================================================================
// ACCOUNT
// =============================================================================

async fn run_register(ctx: &Context, args: RegisterArgs, as_admin: bool) -> Result<(), CliError> {
    let credentials = Credentials::normalized(&args.username, &args.password).ok_or(CliError::MissingCredentials)?;
    let registration = Registration { username: credentials.username, password: credentials.password, role: args.role };
    let api = ctx.client()?;
    let user = if as_admin {
        api.admin_register(&registration).await?
    } else {
        api.register(&registration).await?
    };
    if ctx.json {
        return render::print_json(&user);
    }
    println!("Registered {} ({}) with id {}", user.username, user.role, user.id);
    Ok(())
}

async fn run_login(ctx: &Context, args: LoginArgs) -> Result<(), CliError> {
    let credentials = Credentials::normalized(&args.username, &args.password).ok_or(CliError::MissingCredentials)?;
    let api = ctx.client()?;
    let token = api.login(&credentials).await?;
    ctx.store.save(&token.access_token)?;
    tracing::info!(path = %ctx.store.path().display(), "token stored");
    let session = Session::from_token(token.access_token)?;
    if ctx.json {
        return render::print_json(&session.claims);
    }
    println!("Logged in as {} ({})", session.username(), session.role());
    Ok(())
}

fn run_logout(ctx: &Context) -> Result<(), CliError> {
    if ctx.store.clear()? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

fn run_whoami(ctx: &Context) -> Result<(), CliError> {
    let token = ctx.token.as_deref().ok_or(CliError::MissingToken)?;
    let session = Session::from_token(token)?;
    if ctx.json {
        return render::print_json(&session.claims);
    }
    println!("{} ({})", session.username(), session.role());
    Ok(())
}

// =============================================================================
// TASKS
// =============================================================================

async fn run_tasks(ctx: &Context, tasks: TasksCommand) -> Result<(), CliError> {
    let api = ctx.client()?;
    match tasks.command {
        TasksSubcommand::List { user } => {
            let tasks = api.list_tasks(user.as_deref()).await?;
            if ctx.json {
                return render::print_json(&tasks);
            }
            println!("{}", render::task_table(&tasks, ctx.is_admin()));
        }
        TasksSubcommand::Show { id } => {
            let (task, comments, activity) = tokio::try_join!(api.get_task(id), api.comments(id), api.activity(id))?;
            if ctx.json {
                let detail = serde_json::json!({ "task": task, "comments": comments, "activity": activity });
                return render::print_json(&detail);
            }
            println!("{}", render::task_detail(&task, &comments, &activity));
        }
        TasksSubcommand::Create(args) => {
            let is_admin = ctx.is_admin();
            if args.owner.is_some() && !is_admin {
                tracing::warn!("--owner is only honoured for admins; ignoring");
            }
            let task = submit(&api, create_form(args).submission(is_admin)?).await?;
            print_task(ctx, &task)?;
        }
        TasksSubcommand::Update(args) => {
            if !args.has_changes() {
                return Err(CliError::EmptyUpdate);
            }
            let current = api.get_task(args.id).await?;
            let mut form = TaskForm::edit(&current);
            args.apply(&mut form);
            let task = submit(&api, form.submission(ctx.is_admin())?).await?;
            print_task(ctx, &task)?;
        }
        TasksSubcommand::Progress { id, percent } => {
            let update = TaskUpdate::progress(clamp_progress_input(&percent));
            api.update_task(id, &update).await?;
            let task = api.get_task(id).await?;
            print_task(ctx, &task)?;
        }
        TasksSubcommand::Delete { id } => {
            let ack = api.delete_task(id).await?;
            if ctx.json {
                return render::print_json(&serde_json::json!({ "detail": ack.detail }));
            }
            println!("{}", if ack.detail.is_empty() { format!("Task {id} deleted") } else { ack.detail });
        }
        TasksSubcommand::Comments { id } => {
            let comments = api.comments(id).await?;
            if ctx.json {
                return render::print_json(&comments);
            }
            for comment in &comments {
                println!("{}: {}", comment.author, comment.content);
            }
        }
        TasksSubcommand::Activity { id } => {
            let activity = api.activity(id).await?;
            if ctx.json {
                return render::print_json(&activity);
            }
            for entry in &activity {
                println!("{}", entry.summary());
            }
        }
    }
    Ok(())
}

async fn submit(api: &ApiClient, submission: Submission) -> Result<model::Task, CliError> {
    tracing::debug!(endpoint = %submission.endpoint(), "submitting task form");
    match submission {
        Submission::Create(new_task) => api.create_task(&new_task).await,
        Submission::Update { id, update } => api.update_task(id, &update).await,
    }
}

fn print_task(ctx: &Context, task: &model::Task) -> Result<(), CliError> {
    if ctx.json {
        return render::print_json(task);
    }
    println!("{}", render::task_detail(task, &[], &[]));
    Ok(())
}

fn create_form(args: CreateArgs) -> TaskForm {
    let mut form = TaskForm::create();
    form.title = args.title;
    form.description = args.description.unwrap_or_default();
    form.owner = args.owner.unwrap_or_default();
    form
}

impl UpdateArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.status.is_some() || self.progress.is_some()
    }

    /// Apply the flags through the edit-form rules. `--progress` without
    /// `--status` moves the task to In Progress, like the detail view does.
    fn apply(&self, form: &mut TaskForm) {
        if let Some(title) = &self.title {
            form.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            form.description.clone_from(description);
        }
        match (&self.status, &self.progress) {
            (Some(status), _) => form.set_status(TaskStatus::parse_loose(status)),
            (None, Some(_)) => form.set_status(TaskStatus::InProgress),
            (None, None) => {}
        }
        if let Some(progress) = &self.progress {
            form.set_progress_input(progress);
        }
    }
}

// =============================================================================
// USERS
// =============================================================================

async fn run_users(ctx: &Context, users: UsersCommand) -> Result<(), CliError> {
    let api = ctx.client()?;
    match users.command {
        UsersSubcommand::List => {
            let users = api.list_users().await?;
            if ctx.json {
                return render::print_json(&users);
            }
            println!("{}", render::user_table(&users));
        }
        UsersSubcommand::Count => {
            let count = api.count_users().await?;
            if ctx.json {
                return render::print_json(&count);
            }
            println!("{}", count.count);
        }
        UsersSubcommand::Delete { username } => {
            let ack = api.delete_user(&username).await?;
            if ctx.json {
                return render::print_json(&serde_json::json!({ "detail": ack.detail }));
            }
            println!("{}", if ack.detail.is_empty() { format!("User {username} deleted") } else { ack.detail });
        }
    }
    Ok(())
}

// =============================================================================
// DASHBOARD
// =============================================================================

async fn run_dashboard(ctx: &Context, args: DashboardArgs) -> Result<(), CliError> {
    let api = ctx.client()?;
    let dashboard = api.dashboard(args.user.as_deref()).await?;
    if ctx.json {
        return render::print_json(&dashboard);
    }
    println!("{}", render::dashboard_report(&dashboard, &args.section.0));
    Ok(())
}
