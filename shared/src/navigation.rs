/// Page sections, in the order they appear and are linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Services,
    Clients,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Services,
        Section::Clients,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Services => "Services",
            Section::Clients => "Clients",
            Section::Contact => "Contact",
        }
    }

    /// DOM id of the section container
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Clients => "clients",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}
