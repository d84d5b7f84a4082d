//! The registrar dashboard: one tab per record kind.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use registrar_auth::{GateDecision, Guard, SessionContext};
use registrar_client::ApiClient;

use crate::error::{Error, Result};
use crate::resources::{Colleges, FacultyMembers, Programs, Sections, Students};
use crate::view::RegistryView;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Faculty accounts (shown first)
    #[default]
    Faculty,
    /// Students
    Students,
    /// Colleges
    Colleges,
    /// Programs
    Programs,
    /// Sections
    Sections,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Faculty,
        Tab::Students,
        Tab::Colleges,
        Tab::Programs,
        Tab::Sections,
    ];

    /// Tab title.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Faculty => "Faculty",
            Tab::Students => "Students",
            Tab::Colleges => "Colleges",
            Tab::Programs => "Programs",
            Tab::Sections => "Sections",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

/// The five registry views behind one gate.
#[derive(Debug)]
pub struct Dashboard {
    /// Faculty tab
    pub faculty: RegistryView<FacultyMembers>,
    /// Students tab
    pub students: RegistryView<Students>,
    /// Colleges tab
    pub colleges: RegistryView<Colleges>,
    /// Programs tab
    pub programs: RegistryView<Programs>,
    /// Sections tab
    pub sections: RegistryView<Sections>,
    active: Tab,
}

impl Dashboard {
    /// Build the dashboard without checking the session.
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self {
            faculty: RegistryView::new(Arc::clone(&api)),
            students: RegistryView::new(Arc::clone(&api)),
            colleges: RegistryView::new(Arc::clone(&api)),
            programs: RegistryView::new(Arc::clone(&api)),
            sections: RegistryView::new(api),
            active: Tab::default(),
        }
    }

    /// Build the dashboard if `guard` admits the current session.
    ///
    /// Fails with [`Error::Redirect`] naming where the visitor should go.
    pub fn open(api: Arc<dyn ApiClient>, guard: &Guard, session: &SessionContext) -> Result<Self> {
        match guard.check(session) {
            GateDecision::Admit => Ok(Self::new(api)),
            GateDecision::Redirect(route) => Err(Error::Redirect { route }),
        }
    }

    /// Mount every view concurrently.
    pub async fn mount(&self) {
        tokio::join!(
            self.faculty.mount(),
            self.students.mount(),
            self.colleges.mount(),
            self.programs.mount(),
            self.sections.mount(),
        );
    }

    /// The tab on display.
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs. Views keep their state.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
    }
}
