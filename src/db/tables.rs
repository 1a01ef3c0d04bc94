#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DbTable {
    Qr,
    Asset,
    UserOrganization,
}

impl DbTable {
    pub fn to_str(self) -> &'static str {
        match self {
            DbTable::Qr => "qrs",
            DbTable::Asset => "assets",
            DbTable::UserOrganization => "user_organizations",
        }
    }
}
