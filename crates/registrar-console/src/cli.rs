//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use registrar_core::{EMPLOYMENT_TYPES, RecordId};

use crate::dashboard::Tab;

/// Registrar console: manage colleges, programs, sections, faculty, and
/// students.
#[derive(Parser, Debug)]
#[command(name = "registrar", author, version, about, long_about = None)]
#[command(
    after_help = "Environment:\n  REGISTRAR_API_URL   Override api.base_url\n  RUST_LOG            Log filter (overrides log.level)"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session
    Login {
        /// Account name
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long, env = "REGISTRAR_PASSWORD", hide_env_values = true)]
        password: String,
        /// faculty, admin, or registrar (any case)
        #[arg(short, long, default_value = "registrar")]
        role: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the stored session and whether it opens the dashboard
    Session,
    /// Show every dashboard tab, or one
    Dashboard {
        /// Only this tab
        #[arg(short, long)]
        tab: Option<Tab>,
    },
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Colleges
    Colleges {
        #[command(subcommand)]
        action: CollegeAction,
    },
    /// Programs
    Programs {
        #[command(subcommand)]
        action: ProgramAction,
    },
    /// Sections
    Sections {
        #[command(subcommand)]
        action: SectionAction,
    },
    /// Faculty accounts
    Faculty {
        #[command(subcommand)]
        action: FacultyAction,
    },
    /// Students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

/// Target of a delete.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: RecordId,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// `colleges` subcommands.
#[derive(Subcommand, Debug)]
pub enum CollegeAction {
    /// List colleges
    List,
    /// Add a college
    Add {
        /// Short code, e.g. CCS
        #[arg(long)]
        code: String,
        /// Display name
        #[arg(long)]
        name: String,
    },
    /// Change a college
    Update {
        /// College id
        id: RecordId,
        /// New code
        #[arg(long)]
        code: Option<String>,
        /// New name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a college
    Delete(DeleteArgs),
}

/// `programs` subcommands.
#[derive(Subcommand, Debug)]
pub enum ProgramAction {
    /// List programs
    List,
    /// Add a program
    Add {
        /// Owning college id (defaults to the first college)
        #[arg(long)]
        college: Option<RecordId>,
        /// Display name
        #[arg(long)]
        name: String,
    },
    /// Change a program
    Update {
        /// Program id
        id: RecordId,
        /// Move to this college
        #[arg(long)]
        college: Option<RecordId>,
        /// New name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a program
    Delete(DeleteArgs),
}

/// `sections` subcommands.
#[derive(Subcommand, Debug)]
pub enum SectionAction {
    /// List the sections of one program
    List {
        /// College whose first program is shown
        #[arg(long)]
        college: Option<RecordId>,
        /// Program to list
        #[arg(long)]
        program: Option<RecordId>,
    },
    /// Add a section
    Add {
        /// Owning program id
        #[arg(long)]
        program: RecordId,
        /// Section code, e.g. 1A
        #[arg(long)]
        code: String,
    },
    /// Change a section
    Update {
        /// Section id
        id: RecordId,
        /// Program the section currently belongs to
        #[arg(long)]
        program: RecordId,
        /// New section code
        #[arg(long)]
        code: Option<String>,
        /// Move to this program
        #[arg(long)]
        move_to: Option<RecordId>,
    },
    /// Delete a section
    Delete {
        #[command(flatten)]
        target: DeleteArgs,
        /// Program whose list is shown afterwards
        #[arg(long)]
        program: Option<RecordId>,
    },
}

/// `faculty` subcommands.
#[derive(Subcommand, Debug)]
pub enum FacultyAction {
    /// List faculty
    List,
    /// Register a faculty account
    Add {
        /// Login name
        #[arg(long)]
        username: String,
        /// Full display name
        #[arg(long)]
        full_name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// Initial password
        #[arg(long, env = "REGISTRAR_FACULTY_PASSWORD", hide_env_values = true)]
        password: String,
        /// Employment type
        #[arg(long, value_parser = EMPLOYMENT_TYPES)]
        employment_type: String,
    },
    /// Change a faculty account (the password cannot be changed here)
    Update {
        /// Faculty id
        id: RecordId,
        /// New login name
        #[arg(long)]
        username: Option<String>,
        /// New display name
        #[arg(long)]
        full_name: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New employment type
        #[arg(long, value_parser = EMPLOYMENT_TYPES)]
        employment_type: Option<String>,
    },
    /// Delete a faculty account
    Delete(DeleteArgs),
}

/// Student form fields; all optional so `update` can change a subset.
#[derive(Args, Debug, Default)]
pub struct StudentFields {
    /// Student number, e.g. 2021-0001
    #[arg(long)]
    pub number: Option<String>,
    /// Given name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Middle name (empty to clear)
    #[arg(long)]
    pub middle_name: Option<String>,
    /// Family name
    #[arg(long)]
    pub last_name: Option<String>,
    /// Email (empty to clear)
    #[arg(long)]
    pub email: Option<String>,
    /// Section id
    #[arg(long)]
    pub section: Option<RecordId>,
}

/// `students` subcommands.
#[derive(Subcommand, Debug)]
pub enum StudentAction {
    /// List students
    List {
        /// Only students whose number, name, or section contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Register a student
    Add(StudentFields),
    /// Change a student
    Update {
        /// Student id
        id: RecordId,
        #[command(flatten)]
        fields: StudentFields,
    },
    /// Delete a student
    Delete(DeleteArgs),
}
