//! Command handlers for the `registrar` binary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use registrar_auth::{FileSessionStore, SessionContext};
use registrar_client::{ApiClient, HttpApiClient};
use registrar_core::RecordId;

use crate::cli::{
    CollegeAction, Command, ConfigAction, DeleteArgs, FacultyAction, ProgramAction,
    SectionAction, StudentAction, StudentFields,
};
use crate::config::ConsoleConfig;
use crate::confirm::{AssumeYes, Confirm, StdinConfirm};
use crate::dashboard::{Dashboard, Tab};
use crate::error::{Error, Result};
use crate::render::{self, Tabular};
use crate::resource::Resource;
use crate::resources::Students;
use crate::session::{login, logout};
use crate::view::RegistryView;

/// Shared handles for one command run.
pub struct Context {
    /// Effective configuration
    pub config: ConsoleConfig,
    /// The persisted session
    pub session: Arc<SessionContext>,
    /// Records API client carrying the session's token
    pub api: Arc<dyn ApiClient>,
}

impl Context {
    /// Open the session file and build the HTTP client.
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        let session = Arc::new(SessionContext::new(FileSessionStore::new(
            config.session_path()?,
        )));
        let api = HttpApiClient::new(&config.api)?.with_session(Arc::clone(&session));
        Ok(Self {
            config,
            session,
            api: Arc::new(api),
        })
    }

    /// Open the dashboard, or fail with the gate's redirect.
    fn dashboard(&self) -> Result<Dashboard> {
        Dashboard::open(Arc::clone(&self.api), &self.config.guard(), &self.session)
    }
}

/// Run one command. `config` is the result of loading the configuration;
/// only the `config path` and `config init` commands run without it.
pub async fn run(
    command: Command,
    config_path: Option<&Path>,
    config: Result<ConsoleConfig>,
) -> Result<()> {
    if let Command::Config { action } = &command {
        return handle_config_command(config_path, action, config);
    }
    let ctx = Context::new(config?)?;

    match command {
        Command::Login {
            username,
            password,
            role,
        } => {
            let role = login(ctx.api.as_ref(), &ctx.session, &username, &password, &role)
                .await
                .map_err(|e| Error::Failed(e.to_string()))?;
            println!("Logged in as {role}; continue at {}", role.landing_route());
            Ok(())
        }
        Command::Logout => {
            let route = logout(&ctx.session)?;
            println!("Logged out; continue at {route}");
            Ok(())
        }
        Command::Session => {
            match ctx.session.current() {
                Some(session) => println!("Signed in as {}", session.role),
                None => println!("Not signed in"),
            }
            match ctx.config.guard().check(&ctx.session) {
                registrar_auth::GateDecision::Admit => println!("Dashboard: admitted"),
                registrar_auth::GateDecision::Redirect(route) => {
                    println!("Dashboard: redirected to {route}")
                }
            }
            Ok(())
        }
        Command::Dashboard { tab } => show_dashboard(&ctx, tab).await,
        Command::Colleges { action } => colleges(&ctx, action).await,
        Command::Programs { action } => programs(&ctx, action).await,
        Command::Sections { action } => sections(&ctx, action).await,
        Command::Faculty { action } => faculty(&ctx, action).await,
        Command::Students { action } => students(&ctx, action).await,
        Command::Config { .. } => Ok(()),
    }
}

// ============================================================================
// Config
// ============================================================================

fn handle_config_command(
    config_path: Option<&Path>,
    action: &ConfigAction,
    config: Result<ConsoleConfig>,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { force } => cmd_config_init(config_path, *force).map(|path| {
            println!("Config file created at {}", path.display());
        }),
        ConfigAction::Show => {
            print!("{}", config?.to_toml_string()?);
            Ok(())
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&Path>) -> Result<()> {
    let path = ConsoleConfig::resolve_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `registrar config init` to create it)");
    }
    Ok(())
}

/// Write the default configuration, refusing to overwrite unless `force`.
pub fn cmd_config_init(config_path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = ConsoleConfig::resolve_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let toml_str = ConsoleConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

// ============================================================================
// Shared helpers
// ============================================================================

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

/// Turn a view's outcome into the command's: print the success message,
/// or fail with the error message.
fn finish<R: Resource>(view: &RegistryView<R>, ok: bool) -> Result<()> {
    if let Some(message) = view.success_message() {
        println!("{message}");
    }
    match view.error_message() {
        Some(message) if !ok => Err(Error::Failed(message)),
        Some(message) => {
            eprintln!("warning: {message}");
            Ok(())
        }
        None => {
            if !ok {
                println!("Cancelled");
            }
            Ok(())
        }
    }
}

fn print_rows<R: Resource>(view: &RegistryView<R>) -> Result<()>
where
    R::Entity: Tabular,
{
    if let Some(message) = view.error_message() {
        return Err(Error::Failed(message));
    }
    print!("{}", render::table(&view.rows()));
    Ok(())
}

fn not_found(noun: &str, id: RecordId) -> Error {
    Error::Failed(format!("{noun} {id} not found"))
}

fn edit<R: Resource>(view: &RegistryView<R>, id: RecordId) -> Result<()> {
    let entity = view.find(id).ok_or_else(|| not_found(R::NOUN, id))?;
    if view.begin_edit(&entity) {
        Ok(())
    } else {
        Err(Error::Failed(view.error_message().unwrap_or_default()))
    }
}

async fn choose<R: Resource>(
    view: &RegistryView<R>,
    selections: &[Option<RecordId>],
    what: &str,
    id: RecordId,
) -> Result<()> {
    if view.choose(selections).await {
        Ok(())
    } else {
        Err(not_found(what, id))
    }
}

async fn delete<R: Resource>(view: &RegistryView<R>, args: &DeleteArgs) -> Result<()> {
    let confirm = confirmer(args.yes);
    let ok = view.remove(args.id, confirm.as_ref()).await;
    finish(view, ok)
}

// ============================================================================
// Dashboard
// ============================================================================

async fn show_dashboard(ctx: &Context, tab: Option<Tab>) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;
    dashboard.mount().await;
    let tabs = match tab {
        Some(tab) => {
            dashboard.select_tab(tab);
            vec![tab]
        }
        None => Tab::ALL.to_vec(),
    };
    for tab in tabs {
        println!("== {tab} ==");
        match tab {
            Tab::Faculty => print_tab(&dashboard.faculty),
            Tab::Students => print_tab(&dashboard.students),
            Tab::Colleges => print_tab(&dashboard.colleges),
            Tab::Programs => print_tab(&dashboard.programs),
            Tab::Sections => {
                let snapshot = dashboard.sections.snapshot();
                if let (Some(colleges), Some(programs)) =
                    (snapshot.options.first(), snapshot.options.get(1))
                {
                    let selected =
                        |level: usize| snapshot.selections.get(level).copied().flatten();
                    print!("{}", render::choices("College", colleges, selected(0)));
                    print!("{}", render::choices("Program", programs, selected(1)));
                }
                print_tab(&dashboard.sections);
            }
        }
        println!();
    }
    Ok(())
}

fn print_tab<R: Resource>(view: &RegistryView<R>)
where
    R::Entity: Tabular,
{
    if let Some(message) = view.error_message() {
        println!("error: {message}");
    }
    print!("{}", render::table(&view.rows()));
}

// ============================================================================
// Record commands
// ============================================================================

async fn colleges(ctx: &Context, action: CollegeAction) -> Result<()> {
    let dashboard = ctx.dashboard()?;
    let view = &dashboard.colleges;
    view.mount().await;
    match action {
        CollegeAction::List => print_rows(view),
        CollegeAction::Add { code, name } => {
            view.update_draft(|d| {
                d.code = code;
                d.name = name;
            });
            finish(view, view.submit().await)
        }
        CollegeAction::Update { id, code, name } => {
            edit(view, id)?;
            view.update_draft(|d| {
                if let Some(code) = code {
                    d.code = code;
                }
                if let Some(name) = name {
                    d.name = name;
                }
            });
            finish(view, view.submit().await)
        }
        CollegeAction::Delete(args) => delete(view, &args).await,
    }
}

async fn programs(ctx: &Context, action: ProgramAction) -> Result<()> {
    let dashboard = ctx.dashboard()?;
    let view = &dashboard.programs;
    view.mount().await;
    match action {
        ProgramAction::List => print_rows(view),
        ProgramAction::Add { college, name } => {
            if let Some(college) = college {
                choose(view, &[Some(college)], "College", college).await?;
            }
            view.update_draft(|d| d.name = name);
            finish(view, view.submit().await)
        }
        ProgramAction::Update { id, college, name } => {
            edit(view, id)?;
            if let Some(college) = college {
                choose(view, &[Some(college)], "College", college).await?;
            }
            if let Some(name) = name {
                view.update_draft(|d| d.name = name);
            }
            finish(view, view.submit().await)
        }
        ProgramAction::Delete(args) => delete(view, &args).await,
    }
}

async fn sections(ctx: &Context, action: SectionAction) -> Result<()> {
    let dashboard = ctx.dashboard()?;
    let view = &dashboard.sections;
    view.mount().await;
    match action {
        SectionAction::List { college, program } => {
            if let Some(program) = program {
                choose(view, &[college, Some(program)], "Program", program).await?;
            } else if let Some(college) = college {
                choose(view, &[Some(college)], "College", college).await?;
            }
            print_rows(view)
        }
        SectionAction::Add { program, code } => {
            choose(view, &[None, Some(program)], "Program", program).await?;
            view.update_draft(|d| d.section_code = code);
            finish(view, view.submit().await)
        }
        SectionAction::Update {
            id,
            program,
            code,
            move_to,
        } => {
            choose(view, &[None, Some(program)], "Program", program).await?;
            edit(view, id)?;
            if let Some(target) = move_to {
                choose(view, &[None, Some(target)], "Program", target).await?;
            }
            if let Some(code) = code {
                view.update_draft(|d| d.section_code = code);
            }
            finish(view, view.submit().await)
        }
        SectionAction::Delete { target, program } => {
            if let Some(program) = program {
                choose(view, &[None, Some(program)], "Program", program).await?;
            }
            delete(view, &target).await
        }
    }
}

async fn faculty(ctx: &Context, action: FacultyAction) -> Result<()> {
    let dashboard = ctx.dashboard()?;
    let view = &dashboard.faculty;
    view.mount().await;
    match action {
        FacultyAction::List => print_rows(view),
        FacultyAction::Add {
            username,
            full_name,
            email,
            password,
            employment_type,
        } => {
            view.update_draft(|d| {
                d.username = username;
                d.full_name = full_name;
                d.email = email;
                d.password = password;
                d.employment_type = employment_type;
            });
            finish(view, view.submit().await)
        }
        FacultyAction::Update {
            id,
            username,
            full_name,
            email,
            employment_type,
        } => {
            edit(view, id)?;
            view.update_draft(|d| {
                if let Some(username) = username {
                    d.username = username;
                }
                if let Some(full_name) = full_name {
                    d.full_name = full_name;
                }
                if let Some(email) = email {
                    d.email = email;
                }
                if let Some(employment_type) = employment_type {
                    d.employment_type = employment_type;
                }
            });
            finish(view, view.submit().await)
        }
        FacultyAction::Delete(args) => delete(view, &args).await,
    }
}

async fn students(ctx: &Context, action: StudentAction) -> Result<()> {
    let dashboard = ctx.dashboard()?;
    let view = &dashboard.students;
    view.mount().await;
    match action {
        StudentAction::List { search } => {
            if let Some(query) = search {
                view.search(&query);
            }
            print_rows(view)
        }
        StudentAction::Add(fields) => {
            fill_student(view, fields).await?;
            finish(view, view.submit().await)
        }
        StudentAction::Update { id, fields } => {
            edit(view, id)?;
            fill_student(view, fields).await?;
            finish(view, view.submit().await)
        }
        StudentAction::Delete(args) => delete(view, &args).await,
    }
}

async fn fill_student(view: &RegistryView<Students>, fields: StudentFields) -> Result<()> {
    if let Some(section) = fields.section {
        choose(view, &[Some(section)], "Section", section).await?;
    }
    view.update_draft(|d| {
        if let Some(number) = fields.number {
            d.student_number = number;
        }
        if let Some(first_name) = fields.first_name {
            d.first_name = first_name;
        }
        if let Some(middle_name) = fields.middle_name {
            d.middle_name = middle_name;
        }
        if let Some(last_name) = fields.last_name {
            d.last_name = last_name;
        }
        if let Some(email) = fields.email {
            d.email = email;
        }
    });
    Ok(())
}
